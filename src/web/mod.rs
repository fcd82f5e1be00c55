//! Request and response types exchanged between the host and controllers.

pub mod request;
pub mod response;

pub use request::{Input, Request};
pub use response::{
    ControllerResponse, Envelope, JsonResponse, RedirectResponse, ViewResponse,
    NOT_FOUND_MESSAGE, SUCCESS_MESSAGE, UNPROCESSABLE_ENTITY_MESSAGE,
};
