//! # Controller Configuration
//!
//! Every concrete controller is described by a [`ControllerConfig`]: the resource
//! it serves, the container bindings for its repository and form request, and the
//! modifiers (alias, theme, module, prefix) that shape route names and view paths.
//!
//! Configs are built fluently in code, or deserialized with `serde` when a host
//! keeps them in a config file:
//!
//! ```rust
//! use resource_controller::config::ControllerConfig;
//!
//! let config = ControllerConfig::new("users")
//!     .alias("admin")
//!     .theme("bootstrap")
//!     .repository("repositories.users");
//!
//! let normalized = config.normalized();
//! assert_eq!(normalized.alias_segment(), "admin.");
//! assert_eq!(normalized.resource_segment(), "users.");
//! ```

use serde::Deserialize;

/// Flash message keys used when redirecting with a status message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlashKeys {
    pub info: String,
    pub error: String,
    pub success: String,
    pub warning: String,
}

/// Flash key under which [`ControllerError`](crate::framework::ControllerError) stores its message.
pub const ERROR_FLASH_KEY: &str = "resource-controller.status.error";

impl Default for FlashKeys {
    fn default() -> Self {
        Self {
            info: "resource-controller.status.info".to_string(),
            error: ERROR_FLASH_KEY.to_string(),
            success: "resource-controller.status.success".to_string(),
            warning: "resource-controller.status.warning".to_string(),
        }
    }
}

/// Per-controller configuration, set once and read for the life of the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Alias for named routes (e.g. `admin` -> `admin.users.index`).
    pub alias: Option<String>,
    /// Location for themed views.
    pub theme: Option<String>,
    /// Vendor views prefix (e.g. `shop` -> `shop::users.index`).
    pub module: Option<String>,
    /// Prefix for named routes.
    pub prefix: Option<String>,
    /// Name of the resource.
    pub resource_name: Option<String>,
    /// Container binding that resolves to the repository.
    pub repository: Option<String>,
    /// Container binding that resolves to the form request.
    pub form_request: Option<String>,
    /// Whether the model uses soft deletes.
    pub use_soft_deletes: bool,
    pub flash_keys: FlashKeys,
}

impl ControllerConfig {
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: Some(resource_name.into()),
            ..Self::default()
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn repository(mut self, binding: impl Into<String>) -> Self {
        self.repository = Some(binding.into());
        self
    }

    pub fn form_request(mut self, binding: impl Into<String>) -> Self {
        self.form_request = Some(binding.into());
        self
    }

    pub fn soft_deletes(mut self, enabled: bool) -> Self {
        self.use_soft_deletes = enabled;
        self
    }

    pub fn flash_keys(mut self, keys: FlashKeys) -> Self {
        self.flash_keys = keys;
        self
    }

    /// Repository binding, if set to a non-empty value.
    pub fn repository_binding(&self) -> Option<&str> {
        non_empty(&self.repository)
    }

    /// Form request binding, if set to a non-empty value.
    pub fn form_request_binding(&self) -> Option<&str> {
        non_empty(&self.form_request)
    }

    /// Resource name, if set to a non-empty value.
    pub fn resource(&self) -> Option<&str> {
        non_empty(&self.resource_name)
    }

    /// Returns a copy with route name and view path modifiers normalized.
    ///
    /// `alias`, `theme`, `prefix` and `resource_name` end with exactly one `.`,
    /// `module` ends with `::`. Empty values are dropped.
    pub fn normalized(&self) -> Self {
        Self {
            alias: non_empty(&self.alias).map(|s| finish(s, ".")),
            theme: non_empty(&self.theme).map(|s| finish(s, ".")),
            module: non_empty(&self.module).map(|s| {
                if s.ends_with("::") {
                    s.to_string()
                } else {
                    format!("{s}::")
                }
            }),
            prefix: non_empty(&self.prefix).map(|s| finish(s, ".")),
            resource_name: non_empty(&self.resource_name).map(|s| finish(s, ".")),
            repository: self.repository.clone(),
            form_request: self.form_request.clone(),
            use_soft_deletes: self.use_soft_deletes,
            flash_keys: self.flash_keys.clone(),
        }
    }

    pub fn alias_segment(&self) -> &str {
        self.alias.as_deref().unwrap_or_default()
    }

    pub fn theme_segment(&self) -> &str {
        self.theme.as_deref().unwrap_or_default()
    }

    pub fn module_segment(&self) -> &str {
        self.module.as_deref().unwrap_or_default()
    }

    pub fn prefix_segment(&self) -> &str {
        self.prefix.as_deref().unwrap_or_default()
    }

    pub fn resource_segment(&self) -> &str {
        self.resource_name.as_deref().unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Cap `value` with a single instance of `cap`, collapsing any repeats already there.
pub(crate) fn finish(value: &str, cap: &str) -> String {
    let mut trimmed = value;
    while let Some(rest) = trimmed.strip_suffix(cap) {
        trimmed = rest;
    }
    format!("{trimmed}{cap}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_appends_or_collapses() {
        assert_eq!(finish("users", "."), "users.");
        assert_eq!(finish("users.", "."), "users.");
        assert_eq!(finish("users...", "."), "users.");
    }

    #[test]
    fn test_normalized_modifiers() {
        let config = ControllerConfig::new("users")
            .alias("admin")
            .theme("dark.")
            .module("shop")
            .prefix("api..")
            .normalized();

        assert_eq!(config.alias_segment(), "admin.");
        assert_eq!(config.theme_segment(), "dark.");
        assert_eq!(config.module_segment(), "shop::");
        assert_eq!(config.prefix_segment(), "api.");
        assert_eq!(config.resource_segment(), "users.");
    }

    #[test]
    fn test_module_keeps_existing_separator() {
        let config = ControllerConfig::new("users").module("shop::").normalized();
        assert_eq!(config.module_segment(), "shop::");
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = ControllerConfig::new("").alias("").repository("");
        assert!(config.resource().is_none());
        assert!(config.repository_binding().is_none());
        assert_eq!(config.normalized().alias_segment(), "");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ControllerConfig = serde_json::from_str(
            r#"{ "resource_name": "posts", "repository": "repositories.posts", "use_soft_deletes": true }"#,
        )
        .unwrap();

        assert_eq!(config.resource(), Some("posts"));
        assert!(config.use_soft_deletes);
        assert_eq!(config.flash_keys, FlashKeys::default());
    }
}
