//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: CORS preflight, route matching,
//! HEAD handling, common headers and access logging.

use crate::api;
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{self, HeaderMap};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = dispatch(req.method(), req.uri().path(), req.headers(), &state);

    if state.config.logging.access_log {
        let entry = build_access_entry(&req, &response, peer_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve and answer a request without touching its body
pub fn dispatch(
    method: &Method,
    path: &str,
    headers: &HeaderMap,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let http_config = &state.config.http;

    let mut response = if *method == Method::OPTIONS {
        http::build_preflight_response(
            http_config.enable_cors,
            headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS),
        )
    } else {
        let route = routing::match_route(method, path);
        api::handle_route(route, state)
    };

    http::apply_common_headers(
        response.headers_mut(),
        http_config.enable_cors,
        &http_config.server_name,
    );

    if *method == Method::HEAD {
        response = http::strip_body(response);
    }
    response
}

fn build_access_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header_str = |name: header::HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version());
    entry.status = response.status().as_u16();
    entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
        .unwrap_or(usize::MAX);
    entry.referer = header_str(header::REFERER);
    entry.user_agent = header_str(header::USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

/// "HTTP/1.1" -> "1.1"
fn version_label(version: Version) -> String {
    let full = format!("{version:?}");
    full.strip_prefix("HTTP/").unwrap_or(&full).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::Dataset;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn test_state(enable_cors: bool) -> AppState {
        let mut config = Config::defaults();
        config.http.enable_cors = enable_cors;
        config.logging.access_log = false;
        AppState::new(&config, Dataset::seeded())
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_get_sets_cors_and_server() {
        let state = test_state(true);
        let resp = dispatch(&Method::GET, "/api/users", &HeaderMap::new(), &state);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(resp.headers()[header::SERVER], "dummy-api-server");
        assert!(!body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_keeps_cors() {
        let state = test_state(true);
        let resp = dispatch(&Method::GET, "/nonexistent", &HeaderMap::new(), &state);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_cors_disabled() {
        let state = test_state(false);
        let resp = dispatch(&Method::GET, "/health", &HeaderMap::new(), &state);
        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_head_has_no_body() {
        let state = test_state(true);
        let resp = dispatch(&Method::HEAD, "/api/posts/1", &HeaderMap::new(), &state);
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key(header::CONTENT_LENGTH));
        assert!(body_bytes(resp).await.is_empty());

        let resp = dispatch(&Method::HEAD, "/api/posts/42", &HeaderMap::new(), &state);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let state = test_state(true);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            header::HeaderValue::from_static("authorization"),
        );
        let resp = dispatch(&Method::OPTIONS, "/api/users/1", &headers, &state);
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            resp.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "authorization"
        );
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_write_methods_are_route_not_found() {
        let state = test_state(true);
        for method in [Method::POST, Method::PUT, Method::PATCH, Method::DELETE] {
            let resp = dispatch(&method, "/api/users/1", &HeaderMap::new(), &state);
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{method}");
            let body: serde_json::Value =
                serde_json::from_slice(&body_bytes(resp).await).unwrap();
            assert_eq!(body["message"], "Route not found");
            assert_eq!(body["success"], false);
        }
    }

    #[tokio::test]
    async fn test_handle_request_with_empty_body() {
        let state = Arc::new(test_state(true));
        let req = Request::builder()
            .method(Method::GET)
            .uri("/api/stats?verbose=1")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let peer: SocketAddr = "127.0.0.1:40000".parse().unwrap();
        let resp = handle_request(req, state, peer).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_access_entry() {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/api/users?page=2")
            .header(header::USER_AGENT, "curl/8.0")
            .body(())
            .unwrap();
        let resp = crate::http::json_response(StatusCode::OK, &serde_json::json!({"ok": 1}));
        let peer: SocketAddr = "10.0.0.5:5555".parse().unwrap();
        let entry = build_access_entry(&req, &resp, peer, Instant::now());
        assert_eq!(entry.remote_addr, "10.0.0.5");
        assert_eq!(entry.path, "/api/users");
        assert_eq!(entry.query.as_deref(), Some("page=2"));
        assert_eq!(entry.user_agent.as_deref(), Some("curl/8.0"));
        assert_eq!(entry.body_bytes, 8);
        assert_eq!(entry.status, 200);
        assert_eq!(entry.http_version, "1.1");
    }
}
