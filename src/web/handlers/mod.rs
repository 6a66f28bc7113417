//! HTML template rendering handlers for the web dashboard.

mod dashboard;
mod message;
mod paste;
mod upload;

pub use dashboard::dashboard_handler;
pub use message::{MessageTemplate, PageError};
pub use paste::paste_handler;
pub use upload::upload_handler;
