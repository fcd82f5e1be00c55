//! User resource: repository, validation rules and the concrete controller.

pub mod controller;
pub mod error;
pub mod repository;
pub mod request;

pub use controller::UserController;
pub use error::*;
pub use repository::UserRepository;
pub use request::UserRequest;

/// Container binding of the user repository.
pub const REPOSITORY_BINDING: &str = "repositories.users";

/// Container binding of the user form request.
pub const FORM_REQUEST_BINDING: &str = "requests.users";
