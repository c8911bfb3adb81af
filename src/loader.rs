//! Resource Loader
//!
//! Resolves a page name to `<prefix><name>.json` and loads it asynchronously.
//! Only a successful (status 200) load yields the response text; every other
//! outcome is a `LoadError`, which callers log and drop.

use std::future::Future;
use std::path::PathBuf;

/// Directory prefix the page requests resources from
pub const RESOURCE_PREFIX: &str = "./json/";
pub const RESOURCE_SUFFIX: &str = ".json";

/// Relative resource path for a page name, e.g. `./json/1r.json`
pub fn resource_path(name: &str) -> String {
    format!("{}{}{}", RESOURCE_PREFIX, name, RESOURCE_SUFFIX)
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("resource {0} not found")]
    NotFound(String),
    #[error("resource {path} returned status {status}")]
    Status { path: String, status: u16 },
    #[error("invalid resource name '{0}'")]
    InvalidName(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// HTTP-style status of the failed load
    pub fn status(&self) -> u16 {
        match self {
            LoadError::NotFound(_) => 404,
            LoadError::Status { status, .. } => *status,
            LoadError::InvalidName(_) => 400,
            LoadError::Io { .. } => 500,
        }
    }
}

/// Rejects names that could escape the resource directory
pub fn validate_name(name: &str) -> Result<(), LoadError> {
    let bad = name.is_empty()
        || name.starts_with('.')
        || name.contains("..")
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(LoadError::InvalidName(name.to_string()));
    }
    Ok(())
}

pub trait ResourceLoader: Send + Sync {
    /// Load the raw text of the named resource
    fn load(&self, name: &str) -> impl Future<Output = Result<String, LoadError>> + Send;
}

// ============================================================================
// Filesystem loader
// ============================================================================

/// Loads `<dir>/<name>.json` from disk
#[derive(Debug, Clone)]
pub struct FsLoader {
    dir: PathBuf,
}

impl FsLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}{}", name, RESOURCE_SUFFIX))
    }
}

impl ResourceLoader for FsLoader {
    async fn load(&self, name: &str) -> Result<String, LoadError> {
        validate_name(name)?;
        let path = self.path_for(name);
        tracing::debug!("Loading resource {}", path.display());

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(LoadError::NotFound(resource_path(name)))
            }
            Err(source) => Err(LoadError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}
