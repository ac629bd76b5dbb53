use crate::config::Config;
use crate::core::selection::SelectionState;
use crate::errors::Result;
use crate::logging::Logger;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Everything the picker flow needs: config, logger, and the two pieces of
/// UI-owned state (selection flags and the special-item toggle). The core
/// functions never touch this; they receive plain values and return values.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub selection: SelectionState,
    pub special_item_active: bool,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            selection: SelectionState::new(),
            special_item_active: false,
            logger,
            startup_displayed: false,
            config_path,
            logs_dir,
        })
    }

    /// First day of the window: the configured fixed start date if set
    /// (deterministic runs), otherwise the wall clock.
    pub fn window_start(&self) -> NaiveDate {
        self.config
            .window_start_date()
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
