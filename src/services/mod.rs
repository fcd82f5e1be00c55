//! Host collaborators consumed by controllers.
//!
//! Each concern sits behind a trait so a host can plug in its own engine.
//! The concrete types here cover the common in-process cases.

pub mod container;
pub mod lang;
pub mod routing;
pub mod validation;
pub mod views;

pub use container::Container;
pub use lang::{Translations, Translator};
pub use routing::{RouteTable, UrlGenerator};
pub use validation::{
    EmptyFormRequest, FormRequest, MessageBag, Messages, Rules, Validator, ValidatorFactory,
};
pub use views::{FileViewFinder, ViewFinder, ViewRegistry};
