//! The current request, as seen by a controller.

use http::header::{ACCEPT, REFERER};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::{Map, Value};

/// Request input: a flat JSON object of form or body fields.
pub type Input = Map<String, Value>;

const X_REQUESTED_WITH: &str = "x-requested-with";

/// A request-scoped view of the incoming HTTP request.
#[derive(Debug, Clone, Default)]
pub struct Request {
    method: Method,
    uri: String,
    headers: HeaderMap,
    input: Input,
}

impl Request {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            headers: HeaderMap::new(),
            input: Input::new(),
        }
    }

    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: impl Into<String>) -> Self {
        Self::new(Method::POST, uri)
    }

    /// Builds a request from `http` parts and already decoded input.
    pub fn from_parts(parts: &http::request::Parts, input: Input) -> Self {
        Self {
            method: parts.method.clone(),
            uri: parts.uri.to_string(),
            headers: parts.headers.clone(),
            input,
        }
    }

    /// Adds a header. Invalid names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    pub fn with_input(mut self, input: Input) -> Self {
        self.input = input;
        self
    }

    /// Marks the request as an XHR request.
    pub fn ajax_request(self) -> Self {
        self.with_header(X_REQUESTED_WITH, "XMLHttpRequest")
    }

    /// Asks for a JSON response.
    pub fn accept_json(self) -> Self {
        self.with_header(ACCEPT.as_str(), "application/json")
    }

    /// Sets the page the request came from.
    pub fn from_page(self, url: &str) -> Self {
        self.with_header(REFERER.as_str(), url)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// All input fields.
    pub fn all(&self) -> &Input {
        &self.input
    }

    pub fn input(&self, key: &str) -> Option<&Value> {
        self.input.get(key)
    }

    /// `true` when the request was sent with `X-Requested-With: XMLHttpRequest`.
    pub fn ajax(&self) -> bool {
        self.headers
            .get(X_REQUESTED_WITH)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "XMLHttpRequest")
    }

    /// `true` when the most preferred `Accept` media type is JSON.
    ///
    /// Entries are ranked by their `q` parameter (default `1`); ties keep header order.
    pub fn wants_json(&self) -> bool {
        let Some(accept) = self.headers.get(ACCEPT).and_then(|v| v.to_str().ok()) else {
            return false;
        };
        let Some(preferred) = preferred_media_type(accept) else {
            return false;
        };
        preferred.contains("/json") || preferred.contains("+json")
    }

    /// The referring page, or `/` when unknown.
    pub fn previous_url(&self) -> String {
        self.headers
            .get(REFERER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or("/")
            .to_string()
    }
}

/// The highest-quality media type in an `Accept` header, lowercased.
fn preferred_media_type(accept: &str) -> Option<String> {
    let mut best: Option<(&str, f32)> = None;
    for entry in accept.split(',') {
        let mut parts = entry.split(';');
        let media = parts.next().unwrap_or_default().trim();
        if media.is_empty() {
            continue;
        }
        let quality = parts
            .filter_map(|param| param.split_once('='))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
            .and_then(|(_, value)| value.trim().parse::<f32>().ok())
            .unwrap_or(1.0);
        if best.map_or(true, |(_, q)| quality > q) {
            best = Some((media, quality));
        }
    }
    best.map(|(media, _)| media.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ajax_detection() {
        assert!(!Request::get("/users").ajax());
        assert!(Request::get("/users").ajax_request().ajax());
        assert!(!Request::get("/users")
            .with_header("X-Requested-With", "fetch")
            .ajax());
    }

    #[test]
    fn test_wants_json_uses_first_media_type() {
        assert!(Request::get("/").accept_json().wants_json());
        assert!(Request::get("/")
            .with_header("Accept", "application/vnd.api+json; charset=utf-8")
            .wants_json());
        assert!(!Request::get("/")
            .with_header("Accept", "text/html, application/json")
            .wants_json());
        assert!(!Request::get("/").wants_json());
    }

    #[test]
    fn test_wants_json_ranks_by_quality() {
        assert!(Request::get("/")
            .with_header("Accept", "text/html;q=0.5, application/json")
            .wants_json());
        assert!(!Request::get("/")
            .with_header("Accept", "application/json;q=0.2, text/html;q=0.9")
            .wants_json());
        // Equal quality: the first entry wins.
        assert!(!Request::get("/")
            .with_header("Accept", "text/html;q=0.8, application/json;q=0.8")
            .wants_json());
    }

    #[test]
    fn test_wants_json_ignores_case() {
        assert!(Request::get("/")
            .with_header("Accept", "Application/JSON")
            .wants_json());
        assert!(Request::get("/")
            .with_header("Accept", "application/LD+JSON; Q=1")
            .wants_json());
    }

    #[test]
    fn test_previous_url_falls_back_to_root() {
        assert_eq!(Request::get("/").previous_url(), "/");
        assert_eq!(
            Request::get("/").from_page("/users/create").previous_url(),
            "/users/create"
        );
    }

    #[test]
    fn test_from_parts_keeps_headers_and_input() {
        let (parts, _) = http::Request::builder()
            .method(Method::PUT)
            .uri("/users/1")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(())
            .unwrap()
            .into_parts();

        let mut input = Input::new();
        input.insert("name".into(), json!("Alice"));
        let request = Request::from_parts(&parts, input);

        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.uri(), "/users/1");
        assert!(request.ajax());
        assert_eq!(request.input("name"), Some(&json!("Alice")));
    }
}
