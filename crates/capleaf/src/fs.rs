//! Atomic file replacement.
//!
//! Output files are written to a temporary file in the destination's own
//! directory and then renamed over the destination. A reader of the
//! destination sees either the previous complete file or the new complete
//! file, never a partial write.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, trace, warn};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised while writing an output file.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create temporary file in {}: {source}", path.display())]
    TempFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to replace {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// The path the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            Self::CreateDir { path, .. }
            | Self::TempFile { path, .. }
            | Self::Write { path, .. }
            | Self::Persist { path, .. } => path,
        }
    }
}

/// Atomically replace `path` with `contents`.
///
/// Missing parent directories are created. The temporary file lives beside
/// the destination so the final rename never crosses filesystems, and it is
/// removed again if any step fails.
///
/// # Errors
///
/// Returns [`WriteError`] if the directory, the temporary file, the write or
/// the final rename fails. The destination is untouched in every error case.
pub fn atomic_write(path: &Path, contents: &[u8]) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| WriteError::TempFile {
        path: dir.to_path_buf(),
        source,
    })?;
    let tmp_path = tmp.path().to_path_buf();
    trace!(temp_path = tmp_path.display().to_string(); "Created temporary file");

    let write_err = |source| WriteError::Write {
        path: tmp_path.clone(),
        source,
    };
    tmp.write_all(contents).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    tmp.persist(path).map_err(|err| WriteError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;

    #[cfg(unix)]
    if let Err(err) = fs::File::open(dir).and_then(|d| d.sync_all()) {
        warn!(dir = dir.display().to_string(), err:% = err; "Failed to sync directory after rename");
    }

    debug!(path = path.display().to_string(), bytes = contents.len(); "File written atomically");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("readable dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_writes_new_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("out.ts");

        atomic_write(&path, b"hello").expect("write succeeds");

        assert_eq!(fs::read_to_string(&path).expect("readable"), "hello");
        assert_eq!(entries(dir.path()), vec!["out.ts"]);
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("out.ts");
        fs::write(&path, "old contents that are longer").expect("seed file");

        atomic_write(&path, b"new").expect("write succeeds");

        assert_eq!(fs::read_to_string(&path).expect("readable"), "new");
        assert_eq!(entries(dir.path()), vec!["out.ts"]);
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("a").join("b").join("out.ts");

        atomic_write(&path, b"nested").expect("write succeeds");

        assert_eq!(fs::read_to_string(&path).expect("readable"), "nested");
    }

    #[test]
    fn test_parent_is_a_file_fails_with_create_dir() {
        let dir = tempdir().expect("Failed to create temp directory");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("seed file");

        let err = atomic_write(&blocker.join("out.ts"), b"x").expect_err("cannot write");

        assert!(matches!(err, WriteError::CreateDir { .. }), "got {err:?}");
        assert_eq!(err.path(), blocker.as_path());
        assert_eq!(fs::read_to_string(&blocker).expect("readable"), "not a directory");
    }

    #[test]
    fn test_destination_is_directory_keeps_it_and_cleans_up() {
        let dir = tempdir().expect("Failed to create temp directory");
        let target = dir.path().join("target");
        fs::create_dir(&target).expect("create dir");
        fs::write(target.join("keep.txt"), "keep").expect("seed file");

        let err = atomic_write(&target, b"x").expect_err("cannot replace a directory");

        assert!(matches!(err, WriteError::Persist { .. }), "got {err:?}");
        assert!(target.join("keep.txt").exists());
        assert_eq!(entries(dir.path()), vec!["target"]);
    }
}
