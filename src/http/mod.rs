//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the API
//! handlers: JSON bodies, CORS headers and preflight answers.

pub mod response;

// Re-export commonly used types
pub use response::{
    apply_common_headers, build_preflight_response, json_response, strip_body,
};
