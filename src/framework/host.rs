//! The collaborator bundle injected into every controller.

use std::fmt;
use std::sync::Arc;

use crate::services::{
    Container, RouteTable, Translations, Translator, UrlGenerator, ValidatorFactory, ViewFinder,
    ViewRegistry,
};

/// Host framework services a controller depends on.
///
/// Cloning is cheap; every service is shared behind an `Arc`.
#[derive(Clone)]
pub struct HostServices {
    pub container: Arc<Container>,
    pub views: Arc<dyn ViewFinder>,
    pub translator: Arc<dyn Translator>,
    pub urls: Arc<dyn UrlGenerator>,
    pub validator: Arc<dyn ValidatorFactory>,
}

impl HostServices {
    /// Services with an empty container, no views, no translations and no routes.
    pub fn new(validator: impl ValidatorFactory + 'static) -> Self {
        Self {
            container: Arc::new(Container::new()),
            views: Arc::new(ViewRegistry::new()),
            translator: Arc::new(Translations::new()),
            urls: Arc::new(RouteTable::new()),
            validator: Arc::new(validator),
        }
    }

    pub fn with_container(mut self, container: Container) -> Self {
        self.container = Arc::new(container);
        self
    }

    pub fn with_views(mut self, views: impl ViewFinder + 'static) -> Self {
        self.views = Arc::new(views);
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    pub fn with_urls(mut self, urls: impl UrlGenerator + 'static) -> Self {
        self.urls = Arc::new(urls);
        self
    }

    /// Translated `key` with `replace` applied, or `fallback` when the key is unknown.
    pub fn trans_or(&self, key: &str, replace: &[(&str, &str)], fallback: String) -> String {
        if self.translator.has(key) {
            self.translator.get(key, replace)
        } else {
            fallback
        }
    }
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices")
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}
