//! Confirmation and error pages for the dashboard forms.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Template for a one-message page with a link back to the dashboard.
#[derive(Template, WebTemplate)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageTemplate {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Saved".to_string(),
            message: message.into(),
            is_error: false,
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            is_error: true,
        }
    }
}

/// [`AppError`] rendered as an HTML page instead of JSON.
///
/// Form handlers return this so a browser user sees a readable page while the
/// status code still matches the failure.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status: StatusCode = self.0.status_code();
        let page = MessageTemplate::failure(
            status.canonical_reason().unwrap_or("Error"),
            self.0.message(),
        );
        (status, page).into_response()
    }
}
