//! RSVP collection web application.
//!
//! Serves a small invitation site: a welcome page, an RSVP form with
//! required-field validation, and a listing of everyone who has responded.
//! Accepted responses live in memory for the lifetime of the process;
//! there is no persistence layer.

#![warn(missing_docs)]
#![allow(dead_code)]

pub mod models;
pub mod routes;
pub mod store;
pub mod templates;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

pub use models::{FormViewModel, RsvpRecord};
pub use store::ResponseStore;
pub use templates::TemplateStore;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// A view template failed to compile at startup.
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),
    /// A compiled view failed to render.
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
    /// A required form field was absent from the submission.
    #[error("missing form field: {0}")]
    MissingField(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::Template(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;

/// Shared application state
pub struct AppState {
    /// Compiled view templates
    pub templates: TemplateStore,
    /// Accepted RSVP responses
    pub responses: ResponseStore,
}

impl AppState {
    /// Compile the view templates and create an empty response store.
    ///
    /// A template error here is fatal: the caller must not serve requests
    /// with a partially populated template registry.
    pub fn new() -> Result<Self> {
        Ok(Self {
            templates: TemplateStore::load()?,
            responses: ResponseStore::new(),
        })
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", any(routes::welcome::welcome))
        .route("/list", any(routes::list::list))
        .route("/form", get(routes::form::show_form).post(routes::form::submit))
        .route("/health", get(routes::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
