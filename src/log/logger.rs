use std::{fs::OpenOptions, io::Write, path::Path, sync::Mutex};

// ============================================================================
// Leveled logger — colored console output with optional file mirror
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    /// Level from the `LOG_LEVEL` environment variable, defaulting to Info.
    pub fn from_env() -> Self {
        match std::env::var("LOG_LEVEL")
            .unwrap_or_default()
            .to_uppercase()
            .as_str()
        {
            "ERROR" => LogLevel::Error,
            "WARN" => LogLevel::Warn,
            "DEBUG" => LogLevel::Debug,
            _ => LogLevel::Info,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn color(self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[41m\x1b[1m",
            LogLevel::Warn => "\x1b[33m\x1b[1m",
            LogLevel::Info => "\x1b[32m",
            LogLevel::Debug => "\x1b[36m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Logger for pipeline progress and warnings. Colored output goes to
/// stderr; an optional file mirror receives the same lines without color
/// codes. File trouble downgrades to console-only, it never fails a run.
pub struct Logger {
    level: LogLevel,
    file: Option<Mutex<std::fs::File>>,
}

impl Logger {
    /// Console-only logger.
    pub fn new(level: LogLevel) -> Self {
        Self { level, file: None }
    }

    /// Logger that also appends plain-text lines to `path`, creating parent
    /// directories as needed.
    pub fn with_file(level: LogLevel, path: &Path) -> Self {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!(
                    "Warning: could not create log directory '{}': {}",
                    parent.display(),
                    e
                );
                return Self::new(level);
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path);
        match file {
            Ok(f) => Self {
                level,
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                eprintln!("Warning: could not open log file '{}': {}", path.display(), e);
                Self::new(level)
            }
        }
    }

    pub fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.write(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.write(LogLevel::Debug, message);
    }

    fn write(&self, level: LogLevel, message: &str) {
        if level > self.level {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S");
        eprintln!(
            "{}[{}] [{}]{} {}",
            level.color(),
            timestamp,
            level.label(),
            RESET,
            message
        );

        let file_mutex = match &self.file {
            Some(f) => f,
            None => return,
        };
        let mut file = match file_mutex.lock() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Warning: log file lock poisoned: {}", e);
                return;
            }
        };
        if let Err(e) = writeln!(file, "[{}] [{}] {}", timestamp, level.label(), message) {
            eprintln!("Warning: failed to write log line: {}", e);
        }
    }
}
