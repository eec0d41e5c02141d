//! Persisted menu configuration
//!
//! The config file is a YAML document with three sections:
//! - `global`: option name to value (see [`Globals`])
//! - `classes`: extension settings, carried through untouched
//! - `items`: the menu tree as nested records
//!
//! A missing file is created with defaults on the first [`ConfigStore::load`].
//! Later loads are skipped while the file modification time is unchanged, so
//! callers can reload before every menu display.

use super::{ConfigError, Globals};
use crate::menu::{HostItem, Item, UnknownItemType, find_item, tree_from_records_with_warnings, tree_to_records};
use crate::{log_debug, log_info, log_warn};
use serde::Serialize;
use serde_yml::{Mapping, Value};
use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

const CONFIG_FILE_NAME: &str = ".sshmenu";
const BACKUP_SUFFIX: &str = ".bak";

#[derive(Serialize)]
struct StoredConfig<'a> {
    global: &'a Mapping,
    classes: &'a Mapping,
    items: Vec<Value>,
}

pub struct ConfigStore {
    path: PathBuf,
    globals: Globals,
    classes: Mapping,
    items: Vec<Item>,
    modified: Option<SystemTime>,
    warnings: Vec<UnknownItemType>,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            globals: Globals::default(),
            classes: Mapping::new(),
            items: Vec::new(),
            modified: None,
            warnings: Vec::new(),
        }
    }

    /// `~/.sshmenu`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirectoryNotFound)?;
        Ok(home_dir.join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Points the store at another file. The next load always re-reads.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
        self.modified = None;
    }

    /// True until the config file has been written for the first time.
    pub fn not_configured(&self) -> bool {
        !self.path.exists()
    }

    /// Seeds the menu from `importer` (typically the known_hosts import).
    /// Returns false, leaving the menu untouched, when the importer has nothing.
    pub fn autoconfigure<F>(&mut self, importer: F) -> bool
    where
        F: FnOnce() -> Option<Vec<Value>>,
    {
        match importer() {
            Some(records) => {
                log_info!("Seeding menu with {} imported records", records.len());
                self.set_items_from_records(&records);
                true
            }
            None => false,
        }
    }

    /// Reads the config file, replacing the in-memory state.
    ///
    /// Returns whether the file was actually parsed. On error the previously
    /// loaded state is kept.
    pub fn load(&mut self) -> Result<bool, ConfigError> {
        if self.not_configured() {
            log_info!("No config file at {:?}, writing defaults", self.path);
            self.save()?;
            return Ok(false);
        }

        let modified = fs::metadata(&self.path).and_then(|meta| meta.modified()).ok();
        if self.modified.is_some() && modified == self.modified {
            log_debug!("Config file unchanged since last load: {:?}", self.path);
            return Ok(false);
        }

        log_info!("Loading configuration from: {:?}", self.path);
        let content = fs::read_to_string(&self.path).map_err(|err| self.read_error(err.to_string()))?;
        let document: Value = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_yml::from_str(&content).map_err(|err| self.read_error(err.to_string()))?
        };

        let root = match document {
            Value::Null => Mapping::new(),
            Value::Mapping(root) => root,
            _ => return Err(self.read_error("expected a mapping at the top level".to_string())),
        };

        self.globals = Globals::from_mapping(section(&root, "global"));
        self.classes = section(&root, "classes");
        let records = ["items", "item"]
            .iter()
            .find_map(|name| root.get(*name).and_then(Value::as_sequence))
            .cloned()
            .unwrap_or_default();
        self.set_items_from_records(&records);
        self.modified = modified;

        log_debug!("Loaded {} top-level items", self.items.len());
        Ok(true)
    }

    /// Writes globals, classes and the menu tree back to the config file.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if self.globals.back_up_config() {
            self.make_backup_copy();
        }

        let document = StoredConfig {
            global: self.globals.as_mapping(),
            classes: &self.classes,
            items: tree_to_records(&self.items),
        };
        let content = serde_yml::to_string(&document).map_err(|err| ConfigError::Write {
            path: self.path.clone(),
            source: std::io::Error::other(err.to_string()),
        })?;
        fs::write(&self.path, content).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;

        self.modified = fs::metadata(&self.path).and_then(|meta| meta.modified()).ok();
        log_info!("Configuration saved to: {:?}", self.path);
        Ok(())
    }

    fn make_backup_copy(&self) {
        if !self.path.exists() {
            return;
        }
        let mut backup = self.path.clone().into_os_string();
        backup.push(BACKUP_SUFFIX);
        if let Err(err) = fs::copy(&self.path, &backup) {
            log_warn!("Failed to back up config to {:?}: {}", backup, err);
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn globals(&self) -> &Globals {
        &self.globals
    }

    pub fn globals_mut(&mut self) -> &mut Globals {
        &mut self.globals
    }

    pub fn classes(&self) -> &Mapping {
        &self.classes
    }

    /// Records dropped during the last load because of an unknown type.
    pub fn warnings(&self) -> &[UnknownItemType] {
        &self.warnings
    }

    /// Adds a host at the end of the top-level menu and saves.
    pub fn append_host(&mut self, host: HostItem) -> Result<(), ConfigError> {
        self.items.push(Item::Host(host));
        self.save()
    }

    pub fn host_from_text(text: &str) -> HostItem {
        HostItem::from_text(text)
    }

    /// First host titled `name`, searching depth-first, or a transient host
    /// that uses `name` as the hostname.
    pub fn host_by_name(&self, name: &str) -> HostItem {
        let found = find_item(&self.items, |_, item| item.as_host().is_some_and(|host| host.title == name));
        match found.and_then(Item::as_host) {
            Some(host) => host.clone(),
            None => Self::host_from_text(name),
        }
    }

    fn set_items_from_records(&mut self, records: &[Value]) {
        let (items, warnings) = tree_from_records_with_warnings(records);
        self.items = items;
        self.warnings = warnings;
    }

    fn read_error(&self, detail: String) -> ConfigError {
        ConfigError::Read {
            path: self.path.clone(),
            detail,
        }
    }
}

fn section(root: &Mapping, name: &str) -> Mapping {
    match root.get(name) {
        Some(Value::Mapping(mapping)) => mapping.clone(),
        _ => Mapping::new(),
    }
}

#[cfg(test)]
#[path = "../test/config/store.rs"]
mod tests;
