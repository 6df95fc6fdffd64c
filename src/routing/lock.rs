//! Node-wide lock around alias creation.
//!
//! Alias uniqueness is checked by scanning every gear directory and then
//! writing a marker file. Holding this lock across both steps keeps two
//! concurrent `add_alias` calls from claiming the same name.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Exclusive advisory lock, released when dropped or when the process exits.
#[derive(Debug)]
pub struct FleetLock {
    path: PathBuf,
    _file: File,
}

impl FleetLock {
    /// Block until the lock at `path` is held.
    pub fn acquire(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;
        fs2::FileExt::lock_exclusive(&file)?;

        tracing::debug!(path = %path.display(), "Fleet alias lock acquired");
        Ok(Self {
            path: path.to_path_buf(),
            _file: file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_is_exclusive_until_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(".alias.lock");

        let held = FleetLock::acquire(&path).unwrap();
        assert!(path.exists());

        let probe = OpenOptions::new().write(true).open(&path).unwrap();
        assert!(fs2::FileExt::try_lock_exclusive(&probe).is_err());

        drop(held);
        assert!(fs2::FileExt::try_lock_exclusive(&probe).is_ok());
    }
}
