//! A small named dependency container.
//!
//! Controllers refer to their repository and form request by binding name; the
//! container turns those names into typed values at construction time.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::framework::ControllerError;

type Factory = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

#[derive(Default)]
pub struct Container {
    bindings: HashMap<String, Factory>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory invoked on every `make`.
    pub fn bind<T, F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        T: Send + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.bindings
            .insert(name.into(), Box::new(move || Box::new(factory()) as Box<dyn Any + Send>));
        self
    }

    /// Registers a shared value; `make` hands out clones (use `Arc` for singletons).
    pub fn instance<T>(&mut self, name: impl Into<String>, value: T) -> &mut Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.bind(name, move || value.clone())
    }

    pub fn has(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Resolves `name` to a `T`.
    pub fn make<T: 'static>(&self, name: &str) -> Result<T, ControllerError> {
        let factory = self
            .bindings
            .get(name)
            .ok_or_else(|| ControllerError::Binding(format!("Target [{name}] is not bound.")))?;

        debug!(binding = name, target = type_name::<T>(), "Resolving");
        factory()
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| {
                ControllerError::Binding(format!(
                    "Target [{name}] does not resolve to {}.",
                    type_name::<T>()
                ))
            })
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.bindings.keys().collect();
        names.sort();
        f.debug_struct("Container").field("bindings", &names).finish()
    }
}
