//! File-backed key-value substrate.
//!
//! Each key maps to `<root>/<key>.json`. Writes go through a temp file and
//! an atomic rename so a crash never leaves a half-written collection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::SubstrateError;
use crate::fs::write_atomic;
use crate::storage::traits::{Substrate, SubstrateResult, PROBE_KEY};

/// Directory-backed substrate.
#[derive(Debug, Clone)]
pub struct FileSubstrate {
    root: PathBuf,
}

impl FileSubstrate {
    /// Use `root` as the storage directory. Nothing is created until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the value for `key`.
    pub fn path_for(&self, key: &str) -> SubstrateResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
        if !valid {
            return Err(SubstrateError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl Substrate for FileSubstrate {
    fn probe(&self) -> SubstrateResult<()> {
        fs::create_dir_all(&self.root)?;
        self.set(PROBE_KEY, PROBE_KEY)?;
        self.remove(PROBE_KEY)
    }

    fn get(&self, key: &str) -> SubstrateResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> SubstrateResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;
        write_atomic(&path, value.as_bytes())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> SubstrateResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
