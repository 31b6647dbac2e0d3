use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::KeyValueStore;

/// Flat JSON object on disk, rewritten on every `set`.
///
/// Used by the native binary in place of the browser's local storage.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file starts empty; an unreadable
    /// or corrupt one is logged and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::load_from_path(&path) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("⚠️  Starting with an empty store: {:#}", e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_path(path: &Path) -> Result<BTreeMap<String, String>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).context(format!("Failed to open store file: {}", path.display()));
            }
        };
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse store file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context(format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        let file = File::create(&self.path)
            .context(format!("Failed to create file: {}", self.path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.values)
            .context(format!("Failed to write store to: {}", self.path.display()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        if let Err(e) = self.save() {
            log::error!("Failed to persist '{key}': {:#}", e);
        }
    }
}
