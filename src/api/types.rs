// API envelope types
// Every JSON body the API emits is one of these shapes

use serde::{Serialize, Serializer};

/// Whole-collection response
#[derive(Debug, Serialize)]
pub struct ListEnvelope<'a, T> {
    pub success: bool,
    pub count: usize,
    pub data: &'a [T],
}

/// Single-payload response
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub success: bool,
    pub data: T,
}

/// Message-only response, used for health and every not-found case
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Welcome payload served at `/`
#[derive(Debug, Serialize)]
pub struct RootInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub timestamp: String,
    pub endpoints: Endpoints,
}

/// Logical endpoint name to path, serialized as an object in listing order
#[derive(Debug)]
pub struct Endpoints(pub &'static [(&'static str, &'static str)]);

impl Serialize for Endpoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().copied())
    }
}

/// Payload of `/api/stats`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_users: usize,
    pub total_products: usize,
    pub total_posts: usize,
    /// Seconds since process start
    pub server_uptime: f64,
    pub runtime_version: String,
}
