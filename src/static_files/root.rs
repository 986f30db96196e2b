use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

/// Index document served for directory requests.
pub const INDEX_FILE: &str = "index.html";

/// Outcome of resolving a request target against the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The canonical path escapes the root
    Outside(PathBuf),
    /// Nothing exists at the path, or it could not be canonicalized
    Missing,
    Directory(PathBuf),
    File(PathBuf),
}

/// The directory every served file must resolve below.
///
/// The root is canonicalized once, at construction. Every request path is
/// canonicalized as well, and the canonical path returned in
/// [`Resolved`] is the one callers open, so the traversal check and the
/// file access always look at the same location.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    path: PathBuf,
}

impl DocumentRoot {
    pub fn new(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let canonical = std::fs::canonicalize(path)
            .with_context(|| format!("Document root {} is not accessible", path.display()))?;

        if !canonical.is_dir() {
            anyhow::bail!("Document root {} is not a directory", canonical.display());
        }

        Ok(Self { path: canonical })
    }

    /// Canonical path of the root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves a raw request target (e.g. "/docs/") below the root.
    pub async fn resolve(&self, target: &str) -> Resolved {
        // A leading '/' would make `join` discard the root.
        let relative = target.trim_start_matches('/');
        self.classify(&self.path.join(relative)).await
    }

    /// Resolves the index document of a directory returned by [`resolve`](Self::resolve).
    pub async fn resolve_index(&self, dir: &Path) -> Resolved {
        self.classify(&dir.join(INDEX_FILE)).await
    }

    async fn classify(&self, candidate: &Path) -> Resolved {
        let canonical = match tokio::fs::canonicalize(candidate).await {
            Ok(p) => p,
            Err(e) => {
                debug!(path = %candidate.display(), error = %e, "Path does not resolve");
                return Resolved::Missing;
            }
        };

        if !canonical.starts_with(&self.path) {
            return Resolved::Outside(canonical);
        }

        match tokio::fs::metadata(&canonical).await {
            Ok(meta) if meta.is_dir() => Resolved::Directory(canonical),
            Ok(meta) if meta.is_file() => Resolved::File(canonical),
            Ok(_) => Resolved::Missing,
            Err(e) => {
                debug!(path = %canonical.display(), error = %e, "Failed to stat path");
                Resolved::Missing
            }
        }
    }
}
