//! # Mock Framework
//!
//! Utilities for testing controllers without a real host framework.
//!
//! Use [`MockHost`] to assemble [`HostServices`] from in-memory pieces, then
//! inspect what the controller asked the validator with [`MockValidator`].
//!
//! # Example
//! ```ignore
//! let host = MockHost::new()
//!     .instance("repositories.users", Arc::new(UserRepository::new()))
//!     .resource_routes("users", "/users")
//!     .view("users.index");
//! let validator = host.validator();
//!
//! let controller = UserController::new(host.build())?;
//! // Exercise the controller...
//! assert!(validator.last_call().is_some());
//! ```

use std::sync::{Arc, Mutex};

use crate::framework::HostServices;
use crate::services::validation::{MessageBag, Messages, Rules, Validator, ValidatorFactory};
use crate::services::{Container, RouteTable, Translations, ViewRegistry};
use crate::web::Input;

// =============================================================================
// VALIDATOR
// =============================================================================

/// One recorded call to [`MockValidator::make`].
#[derive(Debug, Clone)]
pub struct ValidationCall {
    pub input: Input,
    pub rules: Rules,
    pub messages: Messages,
}

/// A validator that understands only the `required` rule and records every call.
///
/// A field fails `required` when it is missing, `null`, or a blank string. The
/// message is taken from `messages["field.required"]` when present.
#[derive(Debug, Default)]
pub struct MockValidator {
    calls: Mutex<Vec<ValidationCall>>,
}

impl MockValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ValidationCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn last_call(&self) -> Option<ValidationCall> {
        self.calls().pop()
    }
}

impl ValidatorFactory for MockValidator {
    fn make(&self, input: &Input, rules: &Rules, messages: &Messages) -> Validator {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ValidationCall {
                input: input.clone(),
                rules: rules.clone(),
                messages: messages.clone(),
            });
        }

        let mut errors = MessageBag::new();
        for (field, rule) in rules {
            if !rule.split('|').any(|r| r.trim() == "required") {
                continue;
            }
            let blank = match input.get(field) {
                None | Some(serde_json::Value::Null) => true,
                Some(serde_json::Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            };
            if blank {
                let message = messages
                    .get(&format!("{field}.required"))
                    .cloned()
                    .unwrap_or_else(|| format!("The {field} field is required."));
                errors.add(field.clone(), message);
            }
        }

        Validator::new(input.clone(), rules.clone(), errors)
    }
}

// =============================================================================
// HOST BUILDER
// =============================================================================

/// Builder for in-memory [`HostServices`].
#[derive(Debug, Default)]
pub struct MockHost {
    container: Container,
    views: ViewRegistry,
    translations: Translations,
    routes: RouteTable,
    validator: Arc<MockValidator>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a shared value in the container.
    pub fn instance<T>(mut self, name: &str, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.container.instance(name, value);
        self
    }

    pub fn view(mut self, view: &str) -> Self {
        self.views = self.views.register(view);
        self
    }

    pub fn translation(mut self, key: &str, line: &str) -> Self {
        self.translations = self.translations.line(key, line);
        self
    }

    pub fn route(mut self, name: &str, path: &str) -> Self {
        self.routes.add(name, path);
        self
    }

    /// Registers the seven resource routes for `name` at `path`.
    pub fn resource_routes(mut self, name: &str, path: &str) -> Self {
        self.routes.resource(name, path);
        self
    }

    /// Handle to the validator, for inspecting calls after the host is built.
    pub fn validator(&self) -> Arc<MockValidator> {
        Arc::clone(&self.validator)
    }

    pub fn build(self) -> HostServices {
        HostServices {
            container: Arc::new(self.container),
            views: Arc::new(self.views),
            translator: Arc::new(self.translations),
            urls: Arc::new(self.routes),
            validator: self.validator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: serde_json::Value) -> Input {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_required_rule() {
        let validator = MockValidator::new();
        let rules = Rules::from([
            ("name".to_string(), "required|max:255".to_string()),
            ("email".to_string(), "required".to_string()),
            ("bio".to_string(), "nullable".to_string()),
        ]);

        let result = validator.make(&input(json!({ "name": "  ", "bio": null })), &rules, &Messages::new());

        assert!(result.fails());
        assert_eq!(result.errors().first("name"), Some("The name field is required."));
        assert!(result.errors().has("email"));
        assert!(!result.errors().has("bio"));
    }

    #[test]
    fn test_records_calls() {
        let validator = MockValidator::new();
        validator.make(&input(json!({ "a": 1 })), &Rules::new(), &Messages::new());

        assert_eq!(validator.calls().len(), 1);
        assert_eq!(validator.last_call().unwrap().input["a"], 1);
    }

    #[test]
    fn test_build_wires_services() {
        let host = MockHost::new()
            .instance("answer", 42u32)
            .view("users.index")
            .translation("greeting", "Hello :name")
            .route("home", "/");
        let services = host.build();

        assert_eq!(services.container.make::<u32>("answer").unwrap(), 42);
        assert!(services.views.exists("users.index"));
        assert_eq!(services.translator.get("greeting", &[("name", "Ada")]), "Hello Ada");
        assert_eq!(services.urls.route("home").unwrap(), "/");
    }
}
