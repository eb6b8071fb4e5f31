//! Directory-backed key-value store.
//!
//! Each key is stored as `<key>.json` inside a single directory. Access goes
//! through a capability handle, so the store can never touch files outside
//! the directory it was opened with.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::storage::ports::{KeyValueError, KeyValueResult, KeyValueStore};

const FILE_EXTENSION: &str = "json";

/// Key-value store persisting each entry as a file in one directory.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
    root: Utf8PathBuf,
}

impl DirectoryKeyValueStore {
    /// Opens the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Backend`] when the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> KeyValueResult<Self> {
        let root = path.as_ref().to_owned();
        Dir::create_ambient_dir_all(&root, ambient_authority()).map_err(KeyValueError::backend)?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority()).map_err(KeyValueError::backend)?;
        tracing::debug!(root = %root, "opened directory key-value store");
        Ok(Self { dir, root })
    }

    /// Returns the directory this store writes to.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

fn file_name(key: &str) -> KeyValueResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !is_valid {
        return Err(KeyValueError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{FILE_EXTENSION}"))
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let name = file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let name = file_name(key)?;
        let staging = format!("{name}.tmp");
        self.dir
            .write(&staging, value)
            .map_err(KeyValueError::backend)?;
        self.dir
            .rename(&staging, &self.dir, &name)
            .map_err(KeyValueError::backend)
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        let name = file_name(key)?;
        match self.dir.remove_file(&name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueError::backend(err)),
        }
    }
}
