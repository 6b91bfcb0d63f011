//! Routing module
//!
//! Maps `(method, path)` pairs onto the fixed set of API routes:
//! - Explicit route table checked in declaration order
//! - `:id` path parameters read with the leading-integer rule
//! - Catch-all for everything undeclared

mod id;
mod table;

pub use table::{match_route, Collection, Route, ENDPOINTS};
