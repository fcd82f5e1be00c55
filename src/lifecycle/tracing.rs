//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); the
//! structured fields (`resource`, `action`, `view`, `binding`) carry the context instead.
//!
//! ## What Gets Traced
//!
//! - **Controller construction**: `Controller ready` with the resource and repository binding
//! - **Dispatch**: a `dispatch` span per action with `resource` and `action` fields
//! - **Failures**: missing views, misconfiguration and failed actions at `warn`
//! - **Validation**: rule counts and error counts at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test -- --nocapture
//!
//! # Show validation and container lookups
//! RUST_LOG=resource_controller=debug cargo test -- --nocapture
//!
//! # Also show view file probing
//! RUST_LOG=trace cargo test -- --nocapture
//! ```
//!
//! With `RUST_LOG=debug`, storing an invalid user looks like:
//!
//! ```text
//! DEBUG dispatch: Handling method=POST uri="/users" resource="users" action="store"
//! DEBUG dispatch: Resolving binding="requests.users" resource="users" action="store"
//! DEBUG dispatch: Validating input rules=2 resource="users" action="store"
//! DEBUG dispatch: Validation failed errors=1 resource="users" action="store"
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Calling it twice is harmless; the second call leaves the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
