use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::AddressBookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct SnapshotIn {
    version: u32,
    #[serde(default)]
    records: Vec<Record>,
}

/// Address book repository backed by a pretty-printed JSON file.
///
/// The file is only touched for the duration of a `load` or `save` call.
/// Saves go through a sibling `.tmp` file that is renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let snapshot: SnapshotIn = serde_json::from_str(&contents)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(snapshot.version));
        }

        let book: AddressBook = snapshot.records.into_iter().collect();
        debug!(
            "Loaded {} records from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let snapshot = SnapshotOut {
            version: SNAPSHOT_VERSION,
            records: book.records().collect(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let temp = self.temp_path();
        if let Err(e) = fs::write(&temp, json).and_then(|()| fs::rename(&temp, &self.path)) {
            warn!("Save to {} failed: {}", self.path.display(), e);
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(e));
        }

        debug!("Saved {} records to {}", book.len(), self.path.display());
        Ok(())
    }
}
