use axum::{
    extract::{ConnectInfo, Json},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::net::SocketAddr;
use tracing::debug;

/// Body returned by the time endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeResponse {
    pub timestamp: String,
    pub ip: String,
}

impl TimeResponse {
    /// Build a response for a request handled at `now` from `peer`.
    ///
    /// # Arguments
    /// * `now` - The time the request is being handled
    /// * `peer` - The socket address of the directly connected client
    pub fn new(now: DateTime<Utc>, peer: SocketAddr) -> Self {
        Self {
            timestamp: format_timestamp(now),
            ip: peer.ip().to_canonical().to_string(),
        }
    }
}

/// Format a UTC time as `YYYY-MM-DDTHH:MM:SS[.ffffff]Z`.
///
/// Sub-second precision is kept down to microseconds (truncated). The
/// fractional part is left out when the microsecond component is zero.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    if now.timestamp_subsec_micros() == 0 {
        format!("{}Z", now.format("%Y-%m-%dT%H:%M:%S"))
    } else {
        format!("{}Z", now.format("%Y-%m-%dT%H:%M:%S%.6f"))
    }
}

/// Respond with the current UTC time and the address of the connected peer
pub async fn time(ConnectInfo(peer): ConnectInfo<SocketAddr>) -> impl IntoResponse {
    let response = TimeResponse::new(Utc::now(), peer);
    debug!(ip = %response.ip, timestamp = %response.timestamp, "Time requested");

    (StatusCode::OK, Json(response))
}
