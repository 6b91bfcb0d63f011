// API handlers module
// One function per route; each reads the immutable dataset and builds a JSON response

use chrono::{SecondsFormat, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::types::{DataEnvelope, Endpoints, ListEnvelope, MessageEnvelope, RootInfo, Stats};
use crate::config::AppState;
use crate::data::{self, Record};
use crate::http::json_response;
use crate::routing::ENDPOINTS;

const WELCOME_MESSAGE: &str = "Welcome to the Dummy API Server! 🚀";
const WELCOME_STATUS: &str = "Server is running successfully";
const HEALTH_MESSAGE: &str = "Server is running";
const ROUTE_NOT_FOUND: &str = "Route not found";

/// ISO 8601 timestamp with millisecond precision and `Z` suffix
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn handle_root() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &RootInfo {
            message: WELCOME_MESSAGE,
            status: WELCOME_STATUS,
            timestamp: timestamp(),
            endpoints: Endpoints(&ENDPOINTS),
        },
    )
}

pub fn handle_health() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &MessageEnvelope {
            success: true,
            message: HEALTH_MESSAGE.to_string(),
            timestamp: Some(timestamp()),
        },
    )
}

/// Full collection in load order
pub fn handle_list<T: Record>(records: &[T]) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &ListEnvelope {
            success: true,
            count: records.len(),
            data: records,
        },
    )
}

/// Single record by id; unparsable and unknown ids both yield 404
pub fn handle_item<T: Record>(records: &[T], id: Option<i64>) -> Response<Full<Bytes>> {
    match data::find_by_id(records, id) {
        Some(record) => json_response(
            StatusCode::OK,
            &DataEnvelope {
                success: true,
                data: record,
            },
        ),
        None => not_found(&format!("{} not found", T::KIND)),
    }
}

pub fn handle_stats(state: &AppState) -> Response<Full<Bytes>> {
    let data = &state.data;
    json_response(
        StatusCode::OK,
        &DataEnvelope {
            success: true,
            data: Stats {
                total_users: data.users.len(),
                total_products: data.products.len(),
                total_posts: data.posts.len(),
                server_uptime: state.uptime_secs(),
                runtime_version: format!(
                    "{}/{}",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION")
                ),
            },
        },
    )
}

/// Catch-all for undeclared method/path combinations
pub fn handle_route_not_found() -> Response<Full<Bytes>> {
    not_found(ROUTE_NOT_FOUND)
}

fn not_found(message: &str) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::NOT_FOUND,
        &MessageEnvelope {
            success: false,
            message: message.to_string(),
            timestamp: None,
        },
    )
}
