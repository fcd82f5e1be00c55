//! Validation rules for user input.

use crate::services::validation::{FormRequest, Messages, Rules};

/// Rules applied when storing or updating a user.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserRequest;

impl FormRequest for UserRequest {
    fn rules(&self) -> Rules {
        Rules::from([
            ("name".to_string(), "required|max:255".to_string()),
            ("email".to_string(), "required|email".to_string()),
        ])
    }

    fn messages(&self) -> Messages {
        Messages::from([("email.required".to_string(), "We need an email address.".to_string())])
    }
}
