//! Transport reading resources from a local asset directory

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::{HttpError, Transport};

/// Serves resources from files under `root`, e.g. a built site's output
/// directory.
#[derive(Debug, Clone)]
pub struct DirTransport {
    root: PathBuf,
}

impl DirTransport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a resource path, refusing anything that escapes `root`.
    fn resolve(&self, path: &str) -> Result<PathBuf, HttpError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(HttpError::InvalidUrl {
                url: path.to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

impl Transport for DirTransport {
    async fn get(&self, path: &str) -> Result<String, HttpError> {
        let file = self.resolve(path)?;
        tokio::fs::read_to_string(&file).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => HttpError::NotFound {
                path: path.to_string(),
            },
            _ => HttpError::Io {
                message: format!("{}: {}", file.display(), e),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_files_under_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets/data")).unwrap();
        std::fs::write(dir.path().join("assets/data/technologies.json"), "[]").unwrap();

        let t = DirTransport::new(dir.path());
        assert_eq!(t.get("assets/data/technologies.json").await.unwrap(), "[]");
        assert!(matches!(
            t.get("assets/data/missing.json").await,
            Err(HttpError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn refuses_parent_components() {
        let dir = tempfile::tempdir().unwrap();
        let t = DirTransport::new(dir.path());
        assert!(matches!(
            t.get("../etc/passwd").await,
            Err(HttpError::InvalidUrl { .. })
        ));
    }
}
