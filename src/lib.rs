#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Resource Controller
//!
//! > **Conventions for CRUD controllers, written once.**
//!
//! This crate provides a base for resource controllers: the seven standard actions
//! (`index`, `create`, `store`, `show`, `edit`, `update`, `destroy`) plus the
//! plumbing every one of them needs. That covers route names, view paths,
//! validation, flash keys and JSON envelopes.
//!
//! ## 🏗️ Design Philosophy
//!
//! A controller declares *what* it serves in a [`ControllerConfig`](config::ControllerConfig)
//! and implements the actions against its own repository. Everything else comes
//! from provided methods on [`ResourceController`](framework::ResourceController):
//!
//! - `route_name("show")` -> `admin.users.show`
//! - `view_location(request, "index")` -> `shop::dark.users.index` (or `...users.ajax.index` for XHR)
//! - `validate_rules(request)` -> a validator built from the configured form request
//! - `valid_success_json_response(..)` -> `{ code, message, data, errors, redirect }`
//!
//! ## 🚀 Core Concepts
//!
//! ### Injected Host Services
//! The controller never reaches for globals. The request is passed to every action,
//! and the host's container, view finder, translator, URL generator and validator
//! arrive bundled in [`HostServices`](framework::HostServices). Swap any of them
//! for your own implementation, or use the [`framework::mock`] doubles in tests.
//!
//! ### Fail Fast, Render Late
//! Missing configuration is caught when the controller is built. Anything that
//! goes wrong while serving a request becomes a
//! [`ControllerError`](framework::ControllerError), which renders itself as a 500
//! JSON envelope or a redirect back with a flash message.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The controller trait, its base state, dispatch and errors.
//! - **Key items**: [`ResourceController`](framework::ResourceController), [`ControllerBase`](framework::ControllerBase), [`dispatch`](framework::dispatch).
//!
//! ### 2. The Seams ([`services`], [`web`], [`config`])
//! - **Role**: Host collaborators, request/response types and per-controller configuration.
//!
//! ### 3. The Implementation ([`user_resource`], [`model`])
//! - **Role**: A complete `users` controller over an in-memory repository.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Wires host services and controllers together; sets up tracing.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the tests with logs
//! RUST_LOG=debug cargo test -- --nocapture
//! ```

pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod services;
pub mod user_resource;
pub mod web;
