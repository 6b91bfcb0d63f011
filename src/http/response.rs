//! HTTP response building module
//!
//! Provides builders for the JSON responses and CORS handling, decoupled from
//! the API handlers.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{self, HeaderMap, HeaderValue};
use hyper::{Response, StatusCode};
use serde::Serialize;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const CORS_ALLOW_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Build a JSON response with the given status
///
/// Serialization failures degrade to a 500 with a fixed JSON body.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_500_response();
        }
    };

    let content_length = json.len();
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, content_length)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    const BODY: &str = r#"{"success":false,"message":"Internal server error"}"#;
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(Full::new(Bytes::from(BODY)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from(BODY)))
        })
}

/// Build CORS preflight response (OPTIONS)
///
/// Requested headers are reflected back so any client header is allowed.
pub fn build_preflight_response(
    enable_cors: bool,
    requested_headers: Option<&HeaderValue>,
) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header(header::CONTENT_LENGTH, 0);

    if enable_cors {
        builder = builder
            .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
            .header(header::ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOW_METHODS)
            .header(header::VARY, "Access-Control-Request-Headers");
        if let Some(requested) = requested_headers {
            builder = builder.header(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
        }
    } else {
        builder = builder.header(header::ALLOW, "GET, HEAD, OPTIONS");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Headers added to every response
pub fn apply_common_headers(headers: &mut HeaderMap, enable_cors: bool, server_name: &str) {
    if enable_cors {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
    }
    match HeaderValue::from_str(server_name) {
        Ok(v) => {
            headers.insert(header::SERVER, v);
        }
        Err(_) => crate::logger::log_warning(&format!("Invalid server name: {server_name}")),
    }
}

/// Drop the body of a response for HEAD requests, keeping status and headers
pub fn strip_body(response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let (parts, _) = response.into_parts();
    Response::from_parts(parts, Full::new(Bytes::new()))
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_json_response() {
        let resp = json_response(StatusCode::OK, &json!({"success": true}));
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(resp.headers()[header::CONTENT_LENGTH], "16");
        assert_eq!(body_string(resp).await, r#"{"success":true}"#);
    }

    #[test]
    fn test_preflight_with_cors() {
        let requested = HeaderValue::from_static("content-type,x-token");
        let resp = build_preflight_response(true, Some(&requested));
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let headers = resp.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], CORS_ALLOW_METHODS);
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "content-type,x-token"
        );
    }

    #[test]
    fn test_preflight_without_cors() {
        let resp = build_preflight_response(false, None);
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[test]
    fn test_common_headers() {
        let mut headers = HeaderMap::new();
        apply_common_headers(&mut headers, true, "dummy-api-server");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::SERVER], "dummy-api-server");

        let mut headers = HeaderMap::new();
        apply_common_headers(&mut headers, false, "dummy-api-server");
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn test_strip_body() {
        let resp = strip_body(json_response(StatusCode::NOT_FOUND, &json!({"a": 1})));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()[header::CONTENT_LENGTH], "7");
        assert_eq!(body_string(resp).await, "");
    }
}
