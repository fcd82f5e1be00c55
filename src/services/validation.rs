//! # Validation Seam
//!
//! The controller never evaluates rules itself. It collects the request input,
//! asks a [`FormRequest`] for rules and custom messages, and hands all three to the
//! host's [`ValidatorFactory`]. The resulting [`Validator`] carries the outcome as
//! a [`MessageBag`].

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::web::Input;

/// Validation rules keyed by field, in the host's rule syntax (e.g. `required|email`).
pub type Rules = BTreeMap<String, String>;

/// Custom messages keyed by `field.rule`.
pub type Messages = BTreeMap<String, String>;

/// Error messages grouped by field.
///
/// Serializes as `{ "field": ["message", ...] }`, or `[]` when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBag {
    messages: BTreeMap<String, Vec<String>>,
}

impl MessageBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.messages
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    pub fn has(&self, field: &str) -> bool {
        self.messages.contains_key(field)
    }

    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages
            .get(field)
            .and_then(|msgs| msgs.first())
            .map(String::as_str)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.messages.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Total number of messages across all fields.
    pub fn len(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.messages
            .iter()
            .map(|(field, msgs)| (field.as_str(), msgs.as_slice()))
    }
}

impl<F: Into<String>, M: Into<String>> FromIterator<(F, M)> for MessageBag {
    fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
        let mut bag = MessageBag::new();
        for (field, message) in iter {
            bag.add(field, message);
        }
        bag
    }
}

impl Serialize for MessageBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.messages.is_empty() {
            return serializer.serialize_seq(Some(0))?.end();
        }
        self.messages.serialize(serializer)
    }
}

/// The outcome of validating one request's input.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    input: Input,
    rules: Rules,
    errors: MessageBag,
}

impl Validator {
    pub fn new(input: Input, rules: Rules, errors: MessageBag) -> Self {
        Self {
            input,
            rules,
            errors,
        }
    }

    pub fn passes(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fails(&self) -> bool {
        !self.passes()
    }

    pub fn errors(&self) -> &MessageBag {
        &self.errors
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

/// Host-provided validation engine.
pub trait ValidatorFactory: Send + Sync {
    fn make(&self, input: &Input, rules: &Rules, messages: &Messages) -> Validator;
}

/// Validation rules and messages for one action.
pub trait FormRequest: Send + Sync {
    fn rules(&self) -> Rules {
        Rules::new()
    }

    fn messages(&self) -> Messages {
        Messages::new()
    }
}

/// Form request with no rules. Input validated against it always passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyFormRequest;

impl FormRequest for EmptyFormRequest {}
