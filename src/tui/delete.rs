//! Filesystem removal for confirmed deletions.

use std::fs;
use std::io;
use std::path::Path;

use super::app::View;

/// Removes one item from the filesystem.
///
/// The session calls this once per selected item and stops at the first error.
pub trait Remover {
    fn remove(&self, path: &Path, view: View) -> io::Result<()>;
}

/// Remover backed by `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct FsRemover {
    recursive_folders: bool,
}

impl FsRemover {
    /// With `recursive_folders` false, only empty folders can be removed.
    pub fn new(recursive_folders: bool) -> Self {
        Self { recursive_folders }
    }
}

impl Default for FsRemover {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Remover for FsRemover {
    fn remove(&self, path: &Path, view: View) -> io::Result<()> {
        let result = match view {
            View::Files => fs::remove_file(path),
            View::Folders if self.recursive_folders => fs::remove_dir_all(path),
            View::Folders => fs::remove_dir(path),
        };

        match &result {
            Ok(()) => tracing::info!(path = %path.display(), "Removed"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Removal failed"),
        }

        result
    }
}
