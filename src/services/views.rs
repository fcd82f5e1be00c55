//! View existence checks.
//!
//! View names use dot notation (`admin.users.index`), optionally with a vendor
//! namespace (`shop::users.index`). Rendering is left to the host.

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};

use tracing::trace;

/// Host-provided view resolution.
pub trait ViewFinder: Send + Sync {
    fn exists(&self, view: &str) -> bool;
}

/// A fixed set of known view names.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: HashSet<String>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, view: impl Into<String>) -> Self {
        self.views.insert(view.into());
        self
    }
}

impl<S: Into<String>> FromIterator<S> for ViewRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            views: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ViewFinder for ViewRegistry {
    fn exists(&self, view: &str) -> bool {
        self.views.contains(view)
    }
}

const DEFAULT_EXTENSIONS: [&str; 3] = ["html", "tera", "hbs"];

/// Resolves views to template files on disk.
///
/// `users.index` is looked up as `<root>/users/index.<ext>` in each root path;
/// `shop::users.index` is looked up under the paths hinted for `shop`.
#[derive(Debug, Clone)]
pub struct FileViewFinder {
    paths: Vec<PathBuf>,
    hints: HashMap<String, Vec<PathBuf>>,
    extensions: Vec<String>,
}

impl FileViewFinder {
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            hints: HashMap::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Adds a directory for the `namespace::` prefix.
    pub fn add_namespace(mut self, namespace: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.hints.entry(namespace.into()).or_default().push(path.into());
        self
    }

    pub fn extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|e| e.to_string()).collect();
        self
    }

    /// Candidate files for `view`, in lookup order.
    pub fn candidates(&self, view: &str) -> Vec<PathBuf> {
        let (roots, name) = match view.split_once("::") {
            Some((namespace, name)) => match self.hints.get(namespace) {
                Some(paths) => (paths.as_slice(), name),
                None => return Vec::new(),
            },
            None => (self.paths.as_slice(), view),
        };

        let pieces: Vec<&str> = name.split('.').filter(|s| !s.is_empty()).collect();
        if pieces.is_empty() || !pieces.iter().all(|piece| is_plain_segment(piece)) {
            return Vec::new();
        }
        let relative: PathBuf = pieces.into_iter().collect();
        let relative = &relative;

        roots
            .iter()
            .flat_map(|root| {
                self.extensions
                    .iter()
                    .map(move |ext| root.join(relative).with_extension(ext))
            })
            .collect()
    }
}

/// A view name segment must stay a single directory entry below its root.
fn is_plain_segment(piece: &str) -> bool {
    if piece.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(piece).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

impl ViewFinder for FileViewFinder {
    fn exists(&self, view: &str) -> bool {
        self.candidates(view).iter().any(|path| {
            trace!(view, path = %path.display(), "Probing view");
            path.is_file()
        })
    }
}
