//! Generic resource controller framework.
//!
//! This module provides the building blocks for writing CRUD controllers that
//! share one set of conventions for route names, view paths, validation and
//! JSON envelopes.
//!
//! # Main Components
//!
//! - [`ResourceController`] - Trait that concrete controllers implement
//! - [`ControllerBase`] - Validated config and resolved repository
//! - [`HostServices`] - Injected host collaborators
//! - [`ControllerError`] - Self-rendering error type
//! - [`dispatch`] - Runs an action and renders failures
//!
//! # Testing
//!
//! See [`mock`] module for in-memory host services.

pub mod core;
pub mod error;
pub mod host;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use error::ControllerError;
pub use host::HostServices;
