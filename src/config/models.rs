use crate::core::types::{Bool, Date};
use crate::errors::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

/// UI-facing bounds on the block size chooser. The window and grouping
/// algorithms accept any positive value; the config boundary is where the
/// product's 3..=7 range is enforced.
pub const BLOCK_SIZE_MIN: u32 = 3;
pub const BLOCK_SIZE_MAX: u32 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockSizeConfigItem {
    pub value: u32,
    pub description: String,
}

impl Default for BlockSizeConfigItem {
    fn default() -> Self {
        Self {
            value: 4,
            description: "Number of dates shown per day-block.".into(),
        }
    }
}

impl ConfigItem<u32> for BlockSizeConfigItem {
    fn get_value(&self) -> &u32 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let parsed: u32 = new_value
            .trim()
            .parse()
            .map_err(|_| Error::Parse(format!("Invalid block size: '{}'.", new_value.trim())))?;
        if !(BLOCK_SIZE_MIN..=BLOCK_SIZE_MAX).contains(&parsed) {
            return Err(Error::Parse(format!(
                "Block size {parsed} is out of range. Valid sizes: {BLOCK_SIZE_MIN}-{BLOCK_SIZE_MAX}"
            )));
        }
        self.value = parsed;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StartDateConfigItem {
    pub value: Option<NaiveDate>,
    pub description: String,
}

impl ConfigItem<Option<NaiveDate>> for StartDateConfigItem {
    fn get_value(&self) -> &Option<NaiveDate> {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        if new_value.trim().is_empty() {
            self.value = None;
            return Ok(());
        }
        let parsed = Date::try_from_str(new_value)?;
        self.value = Some(parsed.0);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
