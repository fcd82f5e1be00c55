//! Application wiring and lifecycle.
//!
//! # Main Components
//!
//! - [`Application`] - Builds host services and the sample controllers
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod app;
pub mod tracing;

pub use app::*;
pub use self::tracing::*;
