
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;

#[derive(Debug, Copy, Clone)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

/// Session log file, opened lazily on first file-targeted message so a
/// missing logs directory never blocks startup.
struct SessionFile {
    dir: PathBuf,
    handle: Option<Mutex<File>>,
    path: Option<PathBuf>,
    attempted: bool,
}

impl SessionFile {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            handle: None,
            path: None,
            attempted: false,
        }
    }

    fn open(&mut self) -> bool {
        if self.attempted {
            return self.handle.is_some();
        }
        self.attempted = true;
        match Self::create_in(&self.dir) {
            Ok((file, path)) => {
                self.handle = Some(Mutex::new(file));
                self.path = Some(path);
                true
            }
            Err(err) => {
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                false
            }
        }
    }

    fn create_in(dir: &Path) -> std::io::Result<(File, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("session-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((file, path))
    }

    fn write_line(&mut self, line: &str) {
        if !self.open() {
            return;
        }
        if let Some(handle) = &self.handle {
            if let Ok(mut file) = handle.lock() {
                let _ = writeln!(file, "{line}");
            }
        }
    }
}

/// Console + session-file logger. Info goes to stdout, warnings and errors
/// to stderr; file lines carry a timestamp and level prefix.
#[derive(Clone)]
pub struct Logger {
    session: Arc<Mutex<SessionFile>>,
    file_enabled: Arc<AtomicBool>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionFile::new(PathBuf::from("logs")))),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if matches!(target, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile) {
            match level {
                LogLevel::Info => println!("{message}"),
                LogLevel::Warn | LogLevel::Error => eprintln!("{message}"),
            }
        }

        if matches!(target, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
            && self.file_enabled.load(Ordering::SeqCst)
        {
            if let Ok(mut session) = self.session.lock() {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
                session.write_line(&format!("[{timestamp}] {level:<5} {message}"));
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Only takes effect before the session file has been opened.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut session) = self.session.lock() {
            if !session.attempted {
                session.dir = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.session.lock().ok().and_then(|s| s.path.clone())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .finish()
    }
}
