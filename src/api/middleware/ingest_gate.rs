//! Shared-secret middleware for the push endpoint.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::application::services::access_gate::SECRET_HEADER;
use crate::{error::AppError, state::AppState};

/// Admits push requests carrying the configured shared secret.
///
/// # Header Format
///
/// ```text
/// X-Ingest-Secret: <secret>
/// ```
///
/// Runs before the body is read, so a rejected request is never parsed,
/// normalized or stored. When no secret is configured every request passes.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, not valid UTF-8, or
/// does not match the secret.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::ingest_gate;
///
/// let push = Router::new()
///     .route("/ingest", post(ingest_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), ingest_gate::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(SECRET_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = st.access_gate.check(presented) {
        tracing::warn!(path = %req.uri().path(), "Rejected push without valid shared secret");
        metrics::counter!("ingest_rejected_total", "reason" => "unauthorized").increment(1);
        return Err(e);
    }

    Ok(next.run(req).await)
}
