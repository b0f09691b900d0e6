//! Filesystem existence checks for candidate executables.

use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Answers whether a path is present on the host.
pub trait PathProbe: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

/// Checks paths against the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl PathProbe for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        match std::fs::metadata(path) {
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                debug!("Cannot stat {}: {}", path.display(), e);
                false
            }
        }
    }
}
