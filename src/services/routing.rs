//! Named route lookup.

use std::collections::HashMap;

use crate::framework::{Action, ControllerError};

/// Host-provided URL generator for named routes.
pub trait UrlGenerator: Send + Sync {
    fn route(&self, name: &str) -> Result<String, ControllerError>;
}

/// A name -> path table, optionally anchored at a base URL.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    base_url: String,
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `base_url` to every generated URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn add(&mut self, name: impl Into<String>, path: impl Into<String>) -> &mut Self {
        self.routes.insert(name.into(), path.into());
        self
    }

    /// Registers the seven resource routes under `name` (e.g. `admin.users`) at `path`.
    ///
    /// Member routes keep a `{key}` parameter in their path.
    pub fn resource(&mut self, name: &str, path: &str) -> &mut Self {
        let name = name.trim_end_matches('.');
        let path = format!("/{}", path.trim_matches('/'));
        for action in Action::ALL {
            let action_path = match action {
                Action::Index | Action::Store => path.clone(),
                Action::Create => format!("{path}/create"),
                Action::Show | Action::Update | Action::Destroy => format!("{path}/{{key}}"),
                Action::Edit => format!("{path}/{{key}}/edit"),
            };
            self.add(format!("{name}.{}", action.as_str()), action_path);
        }
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }
}

impl UrlGenerator for RouteTable {
    fn route(&self, name: &str) -> Result<String, ControllerError> {
        self.routes
            .get(name)
            .map(|path| format!("{}{}", self.base_url, path))
            .ok_or_else(|| ControllerError::RouteNotFound(format!("Route [{name}] not defined.")))
    }
}
