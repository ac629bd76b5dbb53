use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Top-level commands accepted by the picker flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum PickerCommand {
    #[strum(serialize = "block", to_string = "block")]
    Block,
    #[strum(serialize = "special", to_string = "special")]
    Special,
    #[strum(serialize = "pick", to_string = "pick")]
    Pick,
    #[strum(serialize = "picks", to_string = "picks")]
    Picks,
    #[strum(serialize = "man", to_string = "man")]
    Man,
}

impl PickerCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::UnknownCommand(format!(
                "'{}'. Valid commands: {}, exit",
                s.trim(),
                valid_csv::<PickerCommand>()
            ))
        })
    }
}

/// The three delivery slots offered per date. A fixed closed set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
)]
#[strum(ascii_case_insensitive)]
pub enum Slot {
    #[strum(serialize = "morning", serialize = "am", to_string = "morning")]
    Morning,
    #[strum(serialize = "afternoon", serialize = "pm", to_string = "afternoon")]
    Afternoon,
    #[strum(serialize = "evening", serialize = "eve", to_string = "evening")]
    Evening,
}

impl Slot {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid slot: '{}'. Valid slots: {}",
                s.trim(),
                valid_csv::<Slot>()
            ))
        })
    }

    /// Column header used by the grid renderer.
    pub fn header(&self) -> &'static str {
        match self {
            Slot::Morning => "MORNING",
            Slot::Afternoon => "AFTERNOON",
            Slot::Evening => "EVENING",
        }
    }
}

/// Tri-state outcome of the availability rules for one (date, slot) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIterDerive)]
#[strum(serialize_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
    Full,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// On/off argument for the `special` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Toggle {
    #[strum(serialize = "on", to_string = "on")]
    On,
    #[strum(serialize = "off", to_string = "off")]
    Off,
}

impl Toggle {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid toggle: '{}'. Valid values: {}",
                s.trim(),
                valid_csv::<Toggle>()
            ))
        })
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, Toggle::On)
    }
}

/// Wrapper around `NaiveDate` carrying the parse/usage conventions for dates
/// typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(pub NaiveDate);

impl Date {
    pub fn try_from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| {
                Error::Parse(format!(
                    "Invalid date: '{}'. Expected format: YYYY-MM-DD",
                    s.trim()
                ))
            })
    }

    pub fn usage() -> String {
        "Dates are written as YYYY-MM-DD, e.g. 2026-09-11.".to_string()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Boolean wrapper that parses the usual textual spellings and serializes
/// transparently in config JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(Bool(true)),
            "false" | "off" | "no" | "0" => Ok(Bool(false)),
            other => Err(Error::Parse(format!(
                "Invalid boolean: '{other}'. Valid values: true, false, on, off, yes, no"
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
