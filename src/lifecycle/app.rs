//! Application wiring: host services plus the sample controllers.

use std::sync::Arc;

use tracing::info;

use crate::framework::{dispatch, Action, ControllerError, HostServices};
use crate::services::{
    Container, FormRequest, RouteTable, Translations, ValidatorFactory, ViewFinder, ViewRegistry,
};
use crate::user_resource::{
    UserController, UserRepository, UserRequest, FORM_REQUEST_BINDING, REPOSITORY_BINDING,
};
use crate::web::{ControllerResponse, Request};

/// Views shipped with the sample user resource.
pub const USER_VIEWS: [&str; 6] = [
    "users.index",
    "users.create",
    "users.show",
    "users.edit",
    "users.ajax.index",
    "users.ajax.show",
];

/// The sample application: host services plus the controllers wired on top of them.
///
/// `Application` is responsible for:
/// - **Dependency Wiring**: Registering repositories and form requests in the container
/// - **Routing**: Naming the resource routes the JSON envelopes redirect to
/// - **Dispatch**: Routing an action to the right controller
///
/// # Example
///
/// ```ignore
/// let app = Application::new(MyValidator::default())?;
/// let response = app.handle(Action::Index, &Request::get("/users").accept_json(), None).await;
/// ```
#[derive(Debug)]
pub struct Application {
    /// Controller for the `users` resource
    pub users: UserController,

    host: HostServices,
}

impl Application {
    /// Wires the application with the bundled view names.
    pub fn new(validator: impl ValidatorFactory + 'static) -> Result<Self, ControllerError> {
        let views: ViewRegistry = USER_VIEWS.into_iter().collect();
        Self::with_views(validator, views)
    }

    /// Wires the application with a custom view finder (e.g. a `FileViewFinder`).
    pub fn with_views(
        validator: impl ValidatorFactory + 'static,
        views: impl ViewFinder + 'static,
    ) -> Result<Self, ControllerError> {
        let mut container = Container::new();
        container
            .instance(REPOSITORY_BINDING, Arc::new(UserRepository::new()))
            .instance(
                FORM_REQUEST_BINDING,
                Arc::new(UserRequest) as Arc<dyn FormRequest>,
            );

        let mut routes = RouteTable::new();
        routes.resource("users", "/users");

        let translations = Translations::new()
            .line(
                "resource-controller.propertynotset",
                ":property property must be set.",
            )
            .line(
                "resource-controller.viewnotfound",
                "Requested page couldn't be loaded because the view file is missing: :view",
            );

        let host = HostServices::new(validator)
            .with_container(container)
            .with_views(views)
            .with_translator(translations)
            .with_urls(routes);

        let users = UserController::new(host.clone())?;
        info!("Application ready");

        Ok(Self { users, host })
    }

    pub fn host(&self) -> &HostServices {
        &self.host
    }

    /// Runs `action` on the users controller.
    pub async fn handle(
        &self,
        action: Action,
        request: &Request,
        key: Option<&str>,
    ) -> ControllerResponse {
        dispatch(&self.users, action, request, key).await
    }
}
