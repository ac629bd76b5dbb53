pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    BlockSizeConfigItem, ConfigItem, FileLoggingConfigItem, StartDateConfigItem,
};
use crate::errors::{Error, Result};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    BlockSize,
    WindowStartDate,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub block_size: BlockSizeConfigItem,
    #[serde(default)]
    pub window_start_date: StartDateConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<(String, String, String)>,
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    pub fn block_size(&self) -> u32 {
        *self.data.block_size.get_value()
    }
    pub fn window_start_date(&self) -> Option<NaiveDate> {
        *self.data.window_start_date.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn rows(&self) -> Vec<(String, String, String)> {
        let mut rows = Vec::new();
        for key in ConfigKey::iter() {
            match key {
                ConfigKey::BlockSize => rows.push((
                    key.to_string(),
                    self.data.block_size.description().to_string(),
                    self.data.block_size.get_value().to_string(),
                )),
                ConfigKey::WindowStartDate => rows.push((
                    key.to_string(),
                    self.data.window_start_date.description().to_string(),
                    self.data
                        .window_start_date
                        .get_value()
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                )),
                ConfigKey::FileLoggingEnabled => rows.push((
                    key.to_string(),
                    self.data.file_logging_enabled.description().to_string(),
                    self.data.file_logging_enabled.get_value().to_string(),
                )),
            }
        }
        rows
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.display_value(key);
        let res = match key {
            ConfigKey::BlockSize => self.edit(|cfg| cfg.block_size.set_value(new_value)),
            ConfigKey::WindowStartDate => {
                self.edit(|cfg| cfg.window_start_date.set_value(new_value))
            }
            ConfigKey::FileLoggingEnabled => {
                self.edit(|cfg| cfg.file_logging_enabled.set_value(new_value))
            }
        };
        if res.is_ok() {
            // Stash for the caller to log.
            let new_val = self.display_value(key);
            self.last_change = Some((key.to_string(), old, new_val));
        }
        res
    }

    fn display_value(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::BlockSize => self.data.block_size.get_value().to_string(),
            ConfigKey::WindowStartDate => self
                .data
                .window_start_date
                .get_value()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.get_value().to_string(),
        }
    }

    fn edit<F>(&mut self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        apply(&mut self.data)?;
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
