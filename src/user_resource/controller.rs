//! The concrete controller for users.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use super::{UserRepository, FORM_REQUEST_BINDING, REPOSITORY_BINDING};
use crate::config::ControllerConfig;
use crate::framework::{ActionResult, ControllerBase, ControllerError, HostServices, ResourceController};
use crate::model::UserInput;
use crate::web::{Request, ViewResponse};

/// Serves `users.*` routes and views on top of [`UserRepository`].
///
/// JSON clients get envelopes; browsers get views, or redirects with flash messages.
#[derive(Debug)]
pub struct UserController {
    base: ControllerBase<UserRepository>,
}

impl UserController {
    /// Controller with the default config: resource `users`, soft deletes on.
    pub fn new(host: HostServices) -> Result<Self, ControllerError> {
        Self::with_config(Self::default_config(), host)
    }

    pub fn with_config(config: ControllerConfig, host: HostServices) -> Result<Self, ControllerError> {
        Ok(Self {
            base: ControllerBase::new(config, host)?,
        })
    }

    pub fn default_config() -> ControllerConfig {
        ControllerConfig::new("users")
            .repository(REPOSITORY_BINDING)
            .form_request(FORM_REQUEST_BINDING)
            .soft_deletes(true)
    }

    fn render(&self, request: &Request, action: &str, data: Value) -> ActionResult {
        let view = self.view_location(request, action);
        self.check_view_exists(&view)?;
        Ok(ViewResponse::new(view, data).into())
    }

    fn missing(&self, request: &Request) -> ActionResult {
        if request.wants_json() {
            return Ok(self.valid_not_found_json_response(None)?.into());
        }
        Ok(self
            .redirect_with_flash(&self.flash_keys().warning, "User not found.")?
            .into())
    }

    fn done(&self, request: &Request, message: &str, data: Option<Value>) -> ActionResult {
        if request.wants_json() {
            return Ok(self.valid_success_json_response(Some(message), data)?.into());
        }
        Ok(self
            .redirect_with_flash(&self.flash_keys().success, message)?
            .into())
    }
}

#[async_trait]
impl ResourceController for UserController {
    type Repository = UserRepository;

    fn base(&self) -> &ControllerBase<UserRepository> {
        &self.base
    }

    async fn index(&self, request: &Request) -> ActionResult {
        let users = self.repository().all(false).await;
        if request.wants_json() {
            return Ok(self
                .valid_success_json_response(None, Some(json!(users)))?
                .into());
        }
        self.render(request, "index", json!({ "users": users }))
    }

    async fn create(&self, request: &Request) -> ActionResult {
        self.render(request, "create", json!({ "user": null }))
    }

    async fn store(&self, request: &Request) -> ActionResult {
        let validator = self.validate_rules(request)?;
        if validator.fails() {
            return self.redirect_back_with_errors(request, &validator);
        }

        let user = self
            .repository()
            .create(UserInput::from_input(request.all()))
            .await?;
        info!(id = user.id, "User stored");
        self.done(request, "User created.", Some(json!(user)))
    }

    async fn show(&self, request: &Request, key: &str) -> ActionResult {
        let Some(user) = self.repository().find(key).await else {
            return self.missing(request);
        };
        if request.wants_json() {
            return Ok(self
                .valid_success_json_response(None, Some(json!(user)))?
                .into());
        }
        self.render(request, "show", json!({ "user": user }))
    }

    async fn edit(&self, request: &Request, key: &str) -> ActionResult {
        match self.repository().find(key).await {
            Some(user) => self.render(request, "edit", json!({ "user": user })),
            None => self.missing(request),
        }
    }

    async fn update(&self, request: &Request, key: &str) -> ActionResult {
        if self.repository().find(key).await.is_none() {
            return self.missing(request);
        }

        let validator = self.validate_rules(request)?;
        if validator.fails() {
            return self.redirect_back_with_errors(request, &validator);
        }

        let user = self
            .repository()
            .update(key, UserInput::from_input(request.all()))
            .await?;
        self.done(request, "User updated.", Some(json!(user)))
    }

    async fn destroy(&self, request: &Request, key: &str) -> ActionResult {
        if self.repository().find(key).await.is_none() {
            return self.missing(request);
        }

        if self.uses_soft_deletes() {
            self.repository().soft_delete(key).await?;
        } else {
            self.repository().delete(key).await?;
        }
        self.done(request, "User deleted.", None)
    }
}
