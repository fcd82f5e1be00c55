//! # Core Controller Framework
//!
//! This module defines the generic building blocks for resource controllers.
//!
//! ## Key Types
//!
//! - [`ResourceController`]: The trait every concrete controller implements.
//! - [`ControllerBase`]: Validated, normalized config plus the resolved repository.
//! - [`Action`]: The seven resource actions.
//! - [`dispatch`]: Runs one action and turns any error into a response.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use tracing::{debug, debug_span, info, warn, Instrument};

use crate::config::{ControllerConfig, FlashKeys};
use crate::framework::{ControllerError, HostServices};
use crate::services::validation::{EmptyFormRequest, FormRequest, MessageBag, Validator};
use crate::web::{
    ControllerResponse, Envelope, JsonResponse, RedirectResponse, Request, NOT_FOUND_MESSAGE,
    SUCCESS_MESSAGE, UNPROCESSABLE_ENTITY_MESSAGE,
};

/// What every action returns.
pub type ActionResult = Result<ControllerResponse, ControllerError>;

// =============================================================================
// 1. THE ACTIONS
// =============================================================================

/// The standard resource actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Index,
    Create,
    Store,
    Show,
    Edit,
    Update,
    Destroy,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Index,
        Action::Create,
        Action::Store,
        Action::Show,
        Action::Edit,
        Action::Update,
        Action::Destroy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::Create => "create",
            Action::Store => "store",
            Action::Show => "show",
            Action::Edit => "edit",
            Action::Update => "update",
            Action::Destroy => "destroy",
        }
    }

    /// `true` for actions that address a single resource by key.
    pub fn needs_key(&self) -> bool {
        matches!(
            self,
            Action::Show | Action::Edit | Action::Update | Action::Destroy
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// 2. THE BASE (Config + Repository + Services)
// =============================================================================

/// State shared by every controller: normalized config, the repository and host services.
///
/// # Construction
/// [`ControllerBase::new`] fails fast when `repository` or `resource_name` is not
/// configured, then resolves the repository binding through the container.
/// Nothing changes after construction.
pub struct ControllerBase<R: ?Sized> {
    config: ControllerConfig,
    repository: Arc<R>,
    host: HostServices,
}

impl<R: ?Sized + Send + Sync + 'static> ControllerBase<R> {
    pub fn new(config: ControllerConfig, host: HostServices) -> Result<Self, ControllerError> {
        let binding = required(&host, config.repository_binding(), "repository")?.to_string();
        required(&host, config.resource(), "resource_name")?;

        let config = config.normalized();
        let repository = host.container.make::<Arc<R>>(&binding)?;
        info!(
            resource = config.resource_segment(),
            repository = %binding,
            "Controller ready"
        );

        Ok(Self {
            config,
            repository,
            host,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn host(&self) -> &HostServices {
        &self.host
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// A shared handle to the repository.
    pub fn repository_handle(&self) -> Arc<R> {
        Arc::clone(&self.repository)
    }

    /// Resource name without its trailing separator.
    pub fn resource_name(&self) -> &str {
        self.config.resource_segment().trim_end_matches('.')
    }
}

impl<R: ?Sized> fmt::Debug for ControllerBase<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerBase")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn required<'a>(
    host: &HostServices,
    value: Option<&'a str>,
    property: &str,
) -> Result<&'a str, ControllerError> {
    value.ok_or_else(|| {
        let message = host.trans_or(
            "resource-controller.propertynotset",
            &[("property", property)],
            format!("{property} property must be set."),
        );
        warn!(property, "Controller misconfigured");
        ControllerError::Configuration(message)
    })
}

// =============================================================================
// 3. THE CONTROLLER TRAIT (Required actions + Provided conventions)
// =============================================================================

/// Trait that every resource controller implements.
///
/// # Required Methods
/// [`base`](ResourceController::base) plus the seven actions. Each action receives
/// the current request; member actions also get the resource key.
///
/// # Provided Methods
/// Route naming, view lookup, validation and JSON envelopes all have default
/// implementations driven by the [`ControllerConfig`]. Override them only to
/// change the convention.
#[async_trait]
pub trait ResourceController: Send + Sync {
    /// The data-access object for this resource.
    type Repository: ?Sized + Send + Sync + 'static;

    fn base(&self) -> &ControllerBase<Self::Repository>;

    /// Display a listing of the resource.
    async fn index(&self, request: &Request) -> ActionResult;

    /// Show the form for creating a new resource.
    async fn create(&self, request: &Request) -> ActionResult;

    /// Store a newly created resource.
    async fn store(&self, request: &Request) -> ActionResult;

    /// Display the specified resource.
    async fn show(&self, request: &Request, key: &str) -> ActionResult;

    /// Show the form for editing the specified resource.
    async fn edit(&self, request: &Request, key: &str) -> ActionResult;

    /// Update the specified resource.
    async fn update(&self, request: &Request, key: &str) -> ActionResult;

    /// Remove the specified resource.
    async fn destroy(&self, request: &Request, key: &str) -> ActionResult;

    // --- Provided ---

    fn repository(&self) -> &Self::Repository {
        self.base().repository()
    }

    fn config(&self) -> &ControllerConfig {
        self.base().config()
    }

    fn flash_keys(&self) -> &FlashKeys {
        &self.config().flash_keys
    }

    fn uses_soft_deletes(&self) -> bool {
        self.config().use_soft_deletes
    }

    /// Normalized route prefix (empty when unset).
    fn prefix(&self) -> &str {
        self.config().prefix_segment()
    }

    /// Named route for `action`: alias + resource name + action.
    fn route_name(&self, action: &str) -> String {
        let config = self.config();
        format!(
            "{}{}{}",
            config.alias_segment(),
            config.resource_segment(),
            action
        )
    }

    /// Route the controller sends clients to after an action.
    fn redirection_route(&self) -> String {
        self.route_name(Action::Index.as_str())
    }

    /// View for `action`; AJAX requests get the `ajax.` variant.
    fn view_location(&self, request: &Request, action: &str) -> String {
        let config = self.config();
        let ajax = if request.ajax() { "ajax." } else { "" };
        format!(
            "{}{}{}{}{}",
            config.module_segment(),
            config.theme_segment(),
            config.resource_segment(),
            ajax,
            action
        )
    }

    /// Fails with [`ControllerError::ViewNotFound`] when `view` is unknown to the host.
    fn check_view_exists(&self, view: &str) -> Result<(), ControllerError> {
        let host = self.base().host();
        if host.views.exists(view) {
            return Ok(());
        }

        warn!(view, "View not found");
        Err(ControllerError::ViewNotFound(host.trans_or(
            "resource-controller.viewnotfound",
            &[("view", view)],
            format!("Requested page couldn't be loaded because the view file is missing: {view}"),
        )))
    }

    /// The configured form request, or [`EmptyFormRequest`] when none is set.
    fn form_request_instance(&self) -> Result<Arc<dyn FormRequest>, ControllerError> {
        match self.config().form_request_binding() {
            Some(binding) => self
                .base()
                .host()
                .container
                .make::<Arc<dyn FormRequest>>(binding),
            None => Ok(Arc::new(EmptyFormRequest)),
        }
    }

    /// Validates the request input against the form request's rules.
    ///
    /// Without a configured form request the rule set is empty and validation passes.
    fn validate_rules(&self, request: &Request) -> Result<Validator, ControllerError> {
        let form = self.form_request_instance()?;
        let rules = form.rules();
        let messages = form.messages();
        debug!(rules = rules.len(), "Validating input");

        let validator = self
            .base()
            .host()
            .validator
            .make(request.all(), &rules, &messages);
        if validator.fails() {
            debug!(errors = validator.errors().len(), "Validation failed");
        }
        Ok(validator)
    }

    /// Answers a failed validation: 422 JSON for JSON clients, otherwise back with errors and input.
    fn redirect_back_with_errors(
        &self,
        request: &Request,
        validator: &Validator,
    ) -> ActionResult {
        if request.wants_json() {
            return Ok(self
                .valid_unprocessable_entity_json_response(validator.errors(), None)?
                .into());
        }

        Ok(RedirectResponse::to(request.previous_url())
            .with_errors(validator.errors().clone())
            .with_input(request.all().clone())
            .into())
    }

    /// Redirects to the redirection route, flashing `message` under `flash_key`.
    fn redirect_with_flash(
        &self,
        flash_key: &str,
        message: &str,
    ) -> Result<RedirectResponse, ControllerError> {
        let target = self.base().host().urls.route(&self.redirection_route())?;
        Ok(RedirectResponse::to(target).with(flash_key, message))
    }

    /// 200 envelope. Defaults: message `Success`, data `[]`.
    fn valid_success_json_response(
        &self,
        message: Option<&str>,
        data: Option<Value>,
    ) -> Result<JsonResponse, ControllerError> {
        let redirect = self.base().host().urls.route(&self.redirection_route())?;
        let data = data.unwrap_or_else(|| Value::Array(Vec::new()));
        Ok(Envelope {
            code: "200",
            message: message.unwrap_or(SUCCESS_MESSAGE),
            data: Some(&data),
            errors: &MessageBag::new(),
            redirect: &redirect,
        }
        .into_response(StatusCode::OK))
    }

    /// 404 envelope. Default message: `Not found`.
    fn valid_not_found_json_response(
        &self,
        message: Option<&str>,
    ) -> Result<JsonResponse, ControllerError> {
        let redirect = self.base().host().urls.route(&self.redirection_route())?;
        Ok(Envelope {
            code: "404",
            message: message.unwrap_or(NOT_FOUND_MESSAGE),
            data: None,
            errors: &MessageBag::new(),
            redirect: &redirect,
        }
        .into_response(StatusCode::NOT_FOUND))
    }

    /// 422 envelope carrying `errors`. Default message: `Unprocessable Entity`.
    fn valid_unprocessable_entity_json_response(
        &self,
        errors: &MessageBag,
        message: Option<&str>,
    ) -> Result<JsonResponse, ControllerError> {
        let redirect = self.base().host().urls.route(&self.redirection_route())?;
        Ok(Envelope {
            code: "422",
            message: message.unwrap_or(UNPROCESSABLE_ENTITY_MESSAGE),
            data: None,
            errors,
            redirect: &redirect,
        }
        .into_response(StatusCode::UNPROCESSABLE_ENTITY))
    }
}

// =============================================================================
// 4. DISPATCH
// =============================================================================

/// Runs `action` on `controller` and always yields a response.
///
/// Member actions need `key`. Errors are reported (a no-op) and rendered with
/// [`ControllerError::render`].
pub async fn dispatch<C>(
    controller: &C,
    action: Action,
    request: &Request,
    key: Option<&str>,
) -> ControllerResponse
where
    C: ResourceController + ?Sized,
{
    let span = debug_span!(
        "dispatch",
        resource = controller.base().resource_name(),
        action = action.as_str()
    );

    async move {
        debug!(method = %request.method(), uri = request.uri(), "Handling");
        let result = match (action.needs_key(), key) {
            (true, None) => Err(ControllerError::Custom(format!(
                "Action [{action}] requires a resource key."
            ))),
            (_, key) => {
                let key = key.unwrap_or_default();
                match action {
                    Action::Index => controller.index(request).await,
                    Action::Create => controller.create(request).await,
                    Action::Store => controller.store(request).await,
                    Action::Show => controller.show(request, key).await,
                    Action::Edit => controller.edit(request, key).await,
                    Action::Update => controller.update(request, key).await,
                    Action::Destroy => controller.destroy(request, key).await,
                }
            }
        };

        match result {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Action failed");
                e.report();
                e.render(request)
            }
        }
    }
    .instrument(span)
    .await
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockHost;
    use crate::services::validation::{Messages, Rules};
    use crate::web::{Input, ViewResponse};
    use serde_json::json;

    // --- Domain Definition ---

    #[derive(Debug, Default)]
    struct NoteRepository {
        notes: Vec<String>,
    }

    struct NoteRequest;

    impl FormRequest for NoteRequest {
        fn rules(&self) -> Rules {
            Rules::from([("body".to_string(), "required".to_string())])
        }

        fn messages(&self) -> Messages {
            Messages::from([("body.required".to_string(), "Write something.".to_string())])
        }
    }

    struct NotesController {
        base: ControllerBase<NoteRepository>,
    }

    #[async_trait]
    impl ResourceController for NotesController {
        type Repository = NoteRepository;

        fn base(&self) -> &ControllerBase<NoteRepository> {
            &self.base
        }

        async fn index(&self, request: &Request) -> ActionResult {
            let view = self.view_location(request, "index");
            self.check_view_exists(&view)?;
            Ok(ViewResponse::new(view, json!(self.repository().notes)).into())
        }

        async fn create(&self, request: &Request) -> ActionResult {
            let view = self.view_location(request, "create");
            self.check_view_exists(&view)?;
            Ok(ViewResponse::new(view, Value::Null).into())
        }

        async fn store(&self, request: &Request) -> ActionResult {
            let validator = self.validate_rules(request)?;
            if validator.fails() {
                return self.redirect_back_with_errors(request, &validator);
            }
            Ok(self.valid_success_json_response(Some("Stored"), None)?.into())
        }

        async fn show(&self, _request: &Request, key: &str) -> ActionResult {
            match key.parse::<usize>().ok().and_then(|i| self.repository().notes.get(i)) {
                Some(note) => Ok(self.valid_success_json_response(None, Some(json!(note)))?.into()),
                None => Ok(self.valid_not_found_json_response(None)?.into()),
            }
        }

        async fn edit(&self, _request: &Request, _key: &str) -> ActionResult {
            Err(ControllerError::Custom("Notes are read-only.".into()))
        }

        async fn update(&self, _request: &Request, _key: &str) -> ActionResult {
            Err(ControllerError::Custom("Notes are read-only.".into()))
        }

        async fn destroy(&self, _request: &Request, _key: &str) -> ActionResult {
            Err(ControllerError::Custom("Notes are read-only.".into()))
        }
    }

    fn mock_host() -> MockHost {
        MockHost::new()
            .instance(
                "notes.repository",
                Arc::new(NoteRepository {
                    notes: vec!["first".into(), "second".into()],
                }),
            )
            .resource_routes("admin.notes", "/admin/notes")
    }

    fn controller(config: ControllerConfig, host: MockHost) -> NotesController {
        NotesController {
            base: ControllerBase::new(config, host.build()).unwrap(),
        }
    }

    fn notes_config() -> ControllerConfig {
        ControllerConfig::new("notes")
            .alias("admin")
            .repository("notes.repository")
    }

    // --- Construction ---

    #[test]
    fn test_missing_repository_fails_with_fallback_message() {
        let err = ControllerBase::<NoteRepository>::new(
            ControllerConfig::new("notes"),
            mock_host().build(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ControllerError::Configuration("repository property must be set.".into())
        );
    }

    #[test]
    fn test_missing_resource_name_uses_translation() {
        let host = mock_host().translation(
            "resource-controller.propertynotset",
            "The :property property is mandatory.",
        );
        let config = ControllerConfig::default().repository("notes.repository");
        let err = ControllerBase::<NoteRepository>::new(config, host.build()).unwrap_err();

        assert_eq!(
            err,
            ControllerError::Configuration("The resource_name property is mandatory.".into())
        );
    }

    #[test]
    fn test_unbound_repository_fails() {
        let config = ControllerConfig::new("notes").repository("missing.repository");
        let err = ControllerBase::<NoteRepository>::new(config, mock_host().build()).unwrap_err();

        assert!(matches!(err, ControllerError::Binding(_)));
    }

    // --- Naming ---

    #[test]
    fn test_route_names() {
        let notes = controller(notes_config(), mock_host());

        assert_eq!(notes.route_name("show"), "admin.notes.show");
        assert_eq!(notes.redirection_route(), "admin.notes.index");
    }

    #[test]
    fn test_route_name_without_alias() {
        let notes = controller(
            ControllerConfig::new("notes.").repository("notes.repository"),
            mock_host(),
        );
        assert_eq!(notes.route_name("edit"), "notes.edit");
    }

    #[test]
    fn test_view_location_ajax_infix() {
        let notes = controller(
            notes_config().module("blog").theme("dark"),
            mock_host(),
        );

        assert_eq!(
            notes.view_location(&Request::get("/admin/notes"), "index"),
            "blog::dark.notes.index"
        );
        assert_eq!(
            notes.view_location(&Request::get("/admin/notes").ajax_request(), "index"),
            "blog::dark.notes.ajax.index"
        );
    }

    // --- Views ---

    #[test]
    fn test_check_view_exists() {
        let notes = controller(notes_config(), mock_host().view("notes.index"));

        assert!(notes.check_view_exists("notes.index").is_ok());
        assert_eq!(
            notes.check_view_exists("notes.edit").unwrap_err(),
            ControllerError::ViewNotFound(
                "Requested page couldn't be loaded because the view file is missing: notes.edit"
                    .into()
            )
        );
    }

    #[test]
    fn test_check_view_exists_translated() {
        let host = mock_host().translation("resource-controller.viewnotfound", "Missing :view");
        let notes = controller(notes_config(), host);

        assert_eq!(
            notes.check_view_exists("notes.edit").unwrap_err().message(),
            "Missing notes.edit"
        );
    }

    // --- Validation ---

    #[test]
    fn test_validation_without_form_request_passes() {
        let host = mock_host();
        let validator_calls = host.validator();
        let notes = controller(notes_config(), host);

        let validator = notes.validate_rules(&Request::post("/admin/notes")).unwrap();
        assert!(validator.passes());

        let call = validator_calls.last_call().unwrap();
        assert!(call.rules.is_empty());
        assert!(call.messages.is_empty());
    }

    #[test]
    fn test_validation_uses_form_request() {
        let host = mock_host().instance(
            "notes.request",
            Arc::new(NoteRequest) as Arc<dyn FormRequest>,
        );
        let notes = controller(notes_config().form_request("notes.request"), host);

        let validator = notes.validate_rules(&Request::post("/admin/notes")).unwrap();
        assert!(validator.fails());
        assert_eq!(validator.errors().first("body"), Some("Write something."));
    }

    #[test]
    fn test_form_request_instance_defaults_to_empty() {
        let notes = controller(notes_config(), mock_host());
        assert!(notes.form_request_instance().unwrap().rules().is_empty());
    }

    #[test]
    fn test_unbound_form_request_is_an_error() {
        let notes = controller(notes_config().form_request("nope"), mock_host());
        assert!(matches!(
            notes.validate_rules(&Request::post("/")),
            Err(ControllerError::Binding(_))
        ));
    }

    // --- Envelopes ---

    #[test]
    fn test_success_envelope_defaults() {
        let notes = controller(notes_config(), mock_host());
        let response = notes.valid_success_json_response(None, None).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.body(),
            &json!({
                "code": "200",
                "message": "Success",
                "data": [],
                "errors": [],
                "redirect": "/admin/notes"
            })
        );
    }

    #[test]
    fn test_not_found_envelope() {
        let notes = controller(notes_config(), mock_host());
        let response = notes.valid_not_found_json_response(None).unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body()["code"], "404");
        assert_eq!(response.body()["message"], "Not found");
    }

    #[test]
    fn test_unprocessable_envelope_echoes_errors() {
        let notes = controller(notes_config(), mock_host());
        let errors: MessageBag = [("body", "Write something.")].into_iter().collect();
        let response = notes
            .valid_unprocessable_entity_json_response(&errors, None)
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.body()["code"], "422");
        assert_eq!(response.body()["errors"], serde_json::to_value(&errors).unwrap());
    }

    #[test]
    fn test_envelope_requires_known_route() {
        let notes = controller(notes_config(), MockHost::new().instance(
            "notes.repository",
            Arc::new(NoteRepository::default()),
        ));

        assert!(matches!(
            notes.valid_not_found_json_response(None),
            Err(ControllerError::RouteNotFound(_))
        ));
    }

    #[test]
    fn test_redirect_back_with_errors() {
        let notes = controller(notes_config(), mock_host());
        let errors: MessageBag = [("body", "Write something.")].into_iter().collect();
        let validator = Validator::new(Input::new(), Rules::new(), errors.clone());

        let json_request = Request::post("/admin/notes").accept_json();
        assert_eq!(
            notes.redirect_back_with_errors(&json_request, &validator).unwrap(),
            ControllerResponse::Json(
                notes
                    .valid_unprocessable_entity_json_response(&errors, None)
                    .unwrap()
            )
        );

        let mut input = Input::new();
        input.insert("title".into(), json!("Draft"));
        let form_request = Request::post("/admin/notes")
            .from_page("/admin/notes/create")
            .with_input(input.clone());
        let response = notes
            .redirect_back_with_errors(&form_request, &validator)
            .unwrap();
        let redirect = response.as_redirect().unwrap();

        assert_eq!(redirect.target(), "/admin/notes/create");
        assert_eq!(redirect.errors(), Some(&errors));
        assert_eq!(redirect.old_input(), Some(&input));
    }

    // --- Dispatch ---

    #[tokio::test]
    async fn test_dispatch_runs_actions() {
        let notes = controller(notes_config(), mock_host().view("notes.index"));

        let response = dispatch(&notes, Action::Index, &Request::get("/admin/notes"), None).await;
        assert_eq!(
            response.as_view().unwrap(),
            &ViewResponse::new("notes.index", json!(["first", "second"]))
        );

        let response = dispatch(&notes, Action::Show, &Request::get("/"), Some("1")).await;
        assert_eq!(response.as_json().unwrap().body()["data"], "second");

        let response = dispatch(&notes, Action::Show, &Request::get("/"), Some("7")).await;
        assert_eq!(response.as_json().unwrap().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dispatch_renders_errors() {
        let notes = controller(notes_config(), mock_host());

        let request = Request::get("/admin/notes/create").accept_json();
        let response = dispatch(&notes, Action::Create, &request, None).await;
        let json = response.as_json().unwrap();
        assert_eq!(json.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.body()["code"], "500");

        let request = Request::get("/admin/notes/0/edit").from_page("/admin/notes");
        let response = dispatch(&notes, Action::Edit, &request, None).await;
        let redirect = response.as_redirect().unwrap();
        assert_eq!(redirect.target(), "/admin/notes");
        assert_eq!(
            redirect.flashed(crate::config::ERROR_FLASH_KEY),
            Some(&json!("Action [edit] requires a resource key."))
        );
    }

    #[tokio::test]
    async fn test_dispatch_requires_keys_for_member_actions() {
        let notes = controller(notes_config(), mock_host().view("notes.index"));
        let request = Request::get("/admin/notes").accept_json();

        for action in Action::ALL {
            let expected = json!(format!("Action [{action}] requires a resource key."));
            let response = dispatch(&notes, action, &request, None).await;
            let missing_key = response
                .as_json()
                .is_some_and(|json| json.body()["message"] == expected);
            assert_eq!(missing_key, action.needs_key(), "{action}");
        }
    }

    #[test]
    fn test_action_keys() {
        assert!(!Action::Index.needs_key());
        assert!(Action::Destroy.needs_key());
        assert_eq!(Action::Update.to_string(), "update");
    }

    #[test]
    fn test_repository_handle_shares_the_bound_instance() {
        let repository = Arc::new(NoteRepository::default());
        let host = MockHost::new().instance("notes.repository", repository.clone());
        let notes = controller(notes_config(), host);

        let handle = notes.base().repository_handle();
        assert!(Arc::ptr_eq(&handle, &repository));
        assert!(handle.notes.is_empty());
    }
}
