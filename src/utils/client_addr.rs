//! Caller address extraction for tagging pushed batches.

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::state::AppState;

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// Best-effort address of the client that sent the request.
///
/// Behind a trusted proxy the first `X-Forwarded-For` hop (or `X-Real-IP`)
/// wins; otherwise the socket peer address is used. `None` when neither is
/// available, e.g. in tests without connection info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub Option<String>);

impl FromRequestParts<AppState> for ClientAddr {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.behind_proxy
            && let Some(addr) = forwarded_addr(&parts.headers)
        {
            return Ok(Self(Some(addr)));
        }

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(Self(peer))
    }
}

/// Reads the originating client address from proxy headers.
fn forwarded_addr(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get(FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = || {
        headers
            .get(REAL_IP)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    forwarded.or_else(real_ip).map(str::to_string)
}
