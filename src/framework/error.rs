//! # Controller Errors
//!
//! Every failure raised by the framework layer is a [`ControllerError`]. The
//! message is already user-facing (localized when a translation exists), so the
//! error can render itself straight into a response.

use http::StatusCode;

use crate::config::ERROR_FLASH_KEY;
use crate::services::validation::MessageBag;
use crate::web::{ControllerResponse, Envelope, RedirectResponse, Request};

/// Errors raised while building a controller or serving an action.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ControllerError {
    /// A required config field is missing.
    #[error("{0}")]
    Configuration(String),
    /// A container binding is missing or has the wrong type.
    #[error("{0}")]
    Binding(String),
    #[error("{0}")]
    ViewNotFound(String),
    #[error("{0}")]
    RouteNotFound(String),
    #[error("{0}")]
    Custom(String),
}

impl ControllerError {
    pub fn message(&self) -> &str {
        match self {
            ControllerError::Configuration(msg)
            | ControllerError::Binding(msg)
            | ControllerError::ViewNotFound(msg)
            | ControllerError::RouteNotFound(msg)
            | ControllerError::Custom(msg) => msg,
        }
    }

    /// Reporting is left to the host's own error handling.
    pub fn report(&self) {}

    /// Renders the error for `request`.
    ///
    /// JSON clients get a 500 envelope; everyone else is sent back to the previous
    /// page with the message flashed under [`ERROR_FLASH_KEY`].
    pub fn render(&self, request: &Request) -> ControllerResponse {
        let previous = request.previous_url();
        if request.wants_json() {
            return Envelope {
                code: "500",
                message: self.message(),
                data: None,
                errors: &MessageBag::new(),
                redirect: &previous,
            }
            .into_response(StatusCode::INTERNAL_SERVER_ERROR)
            .into();
        }

        RedirectResponse::to(previous)
            .with(ERROR_FLASH_KEY, self.message())
            .into()
    }
}
