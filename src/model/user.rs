use serde::{Deserialize, Serialize};

use crate::web::Input;

/// Represents a registered user in the system.
///
/// A user with `deleted_at` set has been soft deleted: it is kept in storage
/// but hidden from listings and lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<u64>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            deleted_at: None,
        }
    }

    pub fn trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Payload for creating or updating a user. Absent fields are left unchanged on update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserInput {
    /// Reads the `name` and `email` string fields from request input.
    pub fn from_input(input: &Input) -> Self {
        let text = |key: &str| input.get(key).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            name: text("name"),
            email: text("email"),
        }
    }
}
