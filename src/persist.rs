//! JSON snapshots of a whole [`Store`]
//!
//! The snapshot is a pretty-printed JSON object keyed by cache key, each
//! value holding the payload and its RFC 3339 expiration:
//!
//! ```json
//! {
//!   "user:1": {
//!     "value": "alice",
//!     "expiration": "2026-10-15T12:00:00.123456789Z"
//!   }
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::error::PersistError;
use crate::store::{EntryMap, Store};

/// Writes and reads a store's entries to and from a JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPersister {
    path: PathBuf,
}

impl JsonPersister {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshots every entry of `store`, expired ones included
    ///
    /// The entries are encoded under the store's read lock, then written to a
    /// uniquely named temporary file in the target's directory that is synced
    /// and renamed over the target. Concurrent writers to the same path each
    /// get their own temporary file, so readers only ever see a complete
    /// snapshot. On any error the previous snapshot is left as it was and the
    /// temporary file is removed.
    pub fn write<V: Serialize>(&self, store: &Store<V>) -> Result<(), PersistError> {
        let (mut payload, count) = {
            let entries = store.read_entries();
            let payload = serde_json::to_vec_pretty(&*entries).map_err(PersistError::Encode)?;
            (payload, entries.len())
        };
        payload.push(b'\n');

        let dir = self.parent_dir();
        let mut tmp = NamedTempFile::new_in(dir).map_err(|err| PersistError::io(dir, err))?;
        tmp.write_all(&payload)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|err| PersistError::io(tmp.path(), err))?;
        tmp.persist(&self.path)
            .map_err(|err| PersistError::io(&self.path, err.error))?;

        tracing::info!(path = %self.path.display(), entries = count, "wrote store snapshot");
        Ok(())
    }

    /// Replaces the contents of `store` with the snapshot on disk
    ///
    /// Entries in `store` that are not in the snapshot are lost. The file is
    /// fully decoded before the store is touched, so a failed read leaves it
    /// unchanged.
    pub fn read<V: DeserializeOwned>(&self, store: &Store<V>) -> Result<(), PersistError> {
        let file = File::open(&self.path).map_err(|err| PersistError::io(&self.path, err))?;
        let decoded: EntryMap<V> =
            serde_json::from_reader(BufReader::new(file)).map_err(|err| {
                if err.is_io() {
                    PersistError::io(&self.path, err.into())
                } else {
                    PersistError::Decode {
                        path: self.path.clone(),
                        source: err,
                    }
                }
            })?;

        let count = decoded.len();
        *store.write_entries() = decoded;

        tracing::info!(path = %self.path.display(), entries = count, "restored store snapshot");
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
