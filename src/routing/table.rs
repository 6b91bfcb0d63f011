//! Route table module
//!
//! Declares every endpoint as a `(method, pattern)` entry. Entries are checked
//! in declaration order and the first match wins; a request matching no entry
//! resolves to [`Route::NotFound`].

use hyper::Method;
use percent_encoding::percent_decode_str;

use super::id::parse_id;

/// The three sample collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Products,
    Posts,
}

/// Resolved route for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Health,
    Stats,
    /// Whole collection
    List(Collection),
    /// Single record; `None` when the id segment is not a number
    Item(Collection, Option<i64>),
    /// Catch-all
    NotFound,
}

/// What an entry dispatches to before path parameters are bound
#[derive(Debug, Clone, Copy)]
enum Target {
    Root,
    Health,
    Stats,
    List(Collection),
    Item(Collection),
}

struct RouteEntry {
    method: Method,
    pattern: &'static str,
    target: Target,
}

const fn get(pattern: &'static str, target: Target) -> RouteEntry {
    RouteEntry {
        method: Method::GET,
        pattern,
        target,
    }
}

static ROUTES: [RouteEntry; 9] = [
    get("/", Target::Root),
    get("/health", Target::Health),
    get("/api/users", Target::List(Collection::Users)),
    get("/api/users/:id", Target::Item(Collection::Users)),
    get("/api/products", Target::List(Collection::Products)),
    get("/api/products/:id", Target::Item(Collection::Products)),
    get("/api/posts", Target::List(Collection::Posts)),
    get("/api/posts/:id", Target::Item(Collection::Posts)),
    get("/api/stats", Target::Stats),
];

/// Paths advertised by the root endpoint, in the order they are listed
pub const ENDPOINTS: [(&str, &str); 5] = [
    ("users", "/api/users"),
    ("products", "/api/products"),
    ("posts", "/api/posts"),
    ("stats", "/api/stats"),
    ("health", "/health"),
];

/// Resolve a request to a route
///
/// `HEAD` is accepted wherever `GET` is declared.
pub fn match_route(method: &Method, path: &str) -> Route {
    let method = if *method == Method::HEAD {
        &Method::GET
    } else {
        method
    };

    let path = normalize(path);
    ROUTES
        .iter()
        .filter(|entry| entry.method == *method)
        .find_map(|entry| {
            let param = match_pattern(entry.pattern, path)?;
            Some(match entry.target {
                Target::Root => Route::Root,
                Target::Health => Route::Health,
                Target::Stats => Route::Stats,
                Target::List(c) => Route::List(c),
                Target::Item(c) => Route::Item(c, param.and_then(decode_id)),
            })
        })
        .unwrap_or(Route::NotFound)
}

/// Percent-decode a captured id segment, then read its leading integer
///
/// A segment that does not decode to UTF-8 is treated as an unknown id.
fn decode_id(segment: &str) -> Option<i64> {
    let decoded = percent_decode_str(segment).decode_utf8().ok()?;
    parse_id(&decoded)
}

/// Drop a single trailing slash, except on the root path
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Match a path against a pattern segment by segment
///
/// Static segments compare ASCII case-insensitively.
/// Returns `None` on mismatch, `Some(None)` for a match without parameters
/// and `Some(Some(value))` with the captured `:param` segment.
fn match_pattern<'p>(pattern: &str, path: &'p str) -> Option<Option<&'p str>> {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    let mut captured = None;

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(captured),
            (Some(p), Some(s)) if p.starts_with(':') => {
                if s.is_empty() {
                    return None;
                }
                captured = Some(s);
            }
            (Some(p), Some(s)) if p.eq_ignore_ascii_case(s) => {}
            _ => return None,
        }
    }
}
