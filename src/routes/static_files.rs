//! Static file access under the document root.
//!
//! Resolves URL paths to files, enforces that every resolved path stays
//! inside the configured root, and reads file contents for responses.

use std::path::{Path, PathBuf};

use crate::http::mime;

/// Well-known name of the optional custom not-found page.
const NOT_FOUND_PAGE: &str = "/404.html";

/// Why a static file could not be served.
#[derive(Debug)]
pub enum FileError {
    /// The file is absent, a directory, or outside the document root.
    NotFound,
    /// The file resolved but reading it failed.
    Io(std::io::Error),
    /// A text file did not decode as UTF-8.
    InvalidUtf8,
}

/// A file resolved under the document root, ready to become a response.
#[derive(Debug)]
pub struct StaticFile {
    /// File contents.
    pub bytes: Vec<u8>,
    /// Content-Type inferred from the (remapped) URL path.
    pub content_type: &'static str,
}

/// Read-only view over the document root.
///
/// The root is injected at construction; nothing in here is mutated at
/// runtime, so the store can be shared freely across connections.
#[derive(Debug, Clone)]
pub struct StaticFileStore {
    root: PathBuf,
}

impl StaticFileStore {
    /// Creates a store over the given document root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reads a text file (HTML, CSS, JS) and validates it as UTF-8.
    pub async fn read_text(&self, url_path: &str) -> Result<StaticFile, FileError> {
        let file = self.read_binary(url_path).await?;
        if std::str::from_utf8(&file.bytes).is_err() {
            return Err(FileError::InvalidUtf8);
        }
        Ok(file)
    }

    /// Reads a file as raw bytes (images and generic static serves).
    pub async fn read_binary(&self, url_path: &str) -> Result<StaticFile, FileError> {
        // "/" is the index page.
        let logical_path = if url_path == "/" { "/index.html" } else { url_path };

        let resolved = self.resolve(logical_path).await?;
        let bytes = tokio::fs::read(&resolved).await.map_err(|e| {
            tracing::error!(path = %resolved.display(), error = %e, "Failed to read file");
            FileError::Io(e)
        })?;

        Ok(StaticFile {
            bytes,
            content_type: mime::content_type_for(logical_path),
        })
    }

    /// Contents of the custom `404.html`, if the root has a usable one.
    pub async fn not_found_page(&self) -> Option<Vec<u8>> {
        match self.read_binary(NOT_FOUND_PAGE).await {
            Ok(file) => Some(file.bytes),
            Err(_) => None,
        }
    }

    /// Resolves a URL path to an on-disk path inside the root.
    ///
    /// Both the root and the candidate are canonicalized and the
    /// candidate must stay under the root; `..` segments and symlink
    /// escapes therefore surface as `NotFound`. Directories are not
    /// served.
    async fn resolve(&self, logical_path: &str) -> Result<PathBuf, FileError> {
        let relative = logical_path.trim_start_matches('/');
        let candidate = self.root.join(relative);

        let root = match tokio::fs::canonicalize(&self.root).await {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!(root = %self.root.display(), error = %e, "Document root inaccessible");
                return Err(FileError::NotFound);
            }
        };

        // Nonexistent paths fail to canonicalize, which covers the plain
        // missing-file case as well.
        let resolved = tokio::fs::canonicalize(&candidate)
            .await
            .map_err(|_| FileError::NotFound)?;

        if !resolved.starts_with(&root) {
            tracing::warn!(
                requested = %logical_path,
                resolved = %resolved.display(),
                "Path escapes document root, refusing"
            );
            return Err(FileError::NotFound);
        }

        let metadata = tokio::fs::metadata(&resolved)
            .await
            .map_err(FileError::Io)?;
        if metadata.is_dir() {
            return Err(FileError::NotFound);
        }

        Ok(resolved)
    }

    /// The configured document root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
