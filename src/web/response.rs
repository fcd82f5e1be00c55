//! Responses produced by controllers.
//!
//! JSON envelopes share one fixed shape, in this key order:
//!
//! ```text
//! { "code": "200", "message": "...", "data": ..., "errors": [], "redirect": "..." }
//! ```
//!
//! `data` is only present on success envelopes.

use std::collections::BTreeMap;

use http::header::{CONTENT_TYPE, LOCATION};
use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::services::validation::MessageBag;
use crate::web::Input;

pub const SUCCESS_MESSAGE: &str = "Success";
pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const UNPROCESSABLE_ENTITY_MESSAGE: &str = "Unprocessable Entity";

/// The fixed-shape body of every JSON response.
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    pub code: &'a str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a Value>,
    pub errors: &'a MessageBag,
    pub redirect: &'a str,
}

impl Envelope<'_> {
    /// Wraps the envelope in a response whose status matches `code`.
    pub fn into_response(self, status: StatusCode) -> JsonResponse {
        let body = serde_json::to_value(&self).unwrap_or(Value::Null);
        JsonResponse::new(status, body)
    }
}

/// A JSON response: status plus body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    status: StatusCode,
    body: Value,
}

impl JsonResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The body, pretty-printed.
    pub fn pretty_body(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_default()
    }

    pub fn into_http(self) -> http::Response<String> {
        let body = self.pretty_body();
        let mut response = http::Response::new(body);
        *response.status_mut() = self.status;
        response.headers_mut().insert(
            CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        response
    }
}

/// A redirect carrying flash data for the next request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedirectResponse {
    target: String,
    flash: BTreeMap<String, Value>,
    errors: Option<MessageBag>,
    old_input: Option<Input>,
}

impl RedirectResponse {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// Flashes a key/value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.flash.insert(key.into(), value.into());
        self
    }

    pub fn with_errors(mut self, errors: MessageBag) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_input(mut self, input: Input) -> Self {
        self.old_input = Some(input);
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn flash(&self) -> &BTreeMap<String, Value> {
        &self.flash
    }

    pub fn flashed(&self, key: &str) -> Option<&Value> {
        self.flash.get(key)
    }

    pub fn errors(&self) -> Option<&MessageBag> {
        self.errors.as_ref()
    }

    pub fn old_input(&self) -> Option<&Input> {
        self.old_input.as_ref()
    }

    /// A `302 Found` pointing at the target. Flash data stays with the host session.
    pub fn into_http(self) -> http::Response<String> {
        let mut response = http::Response::new(String::new());
        *response.status_mut() = StatusCode::FOUND;
        if let Ok(location) = http::HeaderValue::from_str(&self.target) {
            response.headers_mut().insert(LOCATION, location);
        }
        response
    }
}

/// A view to be rendered by the host's templating engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResponse {
    pub view: String,
    pub data: Value,
}

impl ViewResponse {
    pub fn new(view: impl Into<String>, data: Value) -> Self {
        Self {
            view: view.into(),
            data,
        }
    }
}

/// Anything a controller action can answer with.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerResponse {
    Json(JsonResponse),
    Redirect(RedirectResponse),
    View(ViewResponse),
}

impl ControllerResponse {
    pub fn as_json(&self) -> Option<&JsonResponse> {
        match self {
            ControllerResponse::Json(json) => Some(json),
            _ => None,
        }
    }

    pub fn as_redirect(&self) -> Option<&RedirectResponse> {
        match self {
            ControllerResponse::Redirect(redirect) => Some(redirect),
            _ => None,
        }
    }

    pub fn as_view(&self) -> Option<&ViewResponse> {
        match self {
            ControllerResponse::View(view) => Some(view),
            _ => None,
        }
    }
}

impl From<JsonResponse> for ControllerResponse {
    fn from(json: JsonResponse) -> Self {
        ControllerResponse::Json(json)
    }
}

impl From<RedirectResponse> for ControllerResponse {
    fn from(redirect: RedirectResponse) -> Self {
        ControllerResponse::Redirect(redirect)
    }
}

impl From<ViewResponse> for ControllerResponse {
    fn from(view: ViewResponse) -> Self {
        ControllerResponse::View(view)
    }
}
