//! Request handler module
//!
//! Responsible for request dispatch and the per-request cross-cutting concerns
//! (CORS, HEAD, access logging).

pub mod router;

// Re-export main entry point
pub use router::handle_request;
