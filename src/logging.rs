/// Structured logging for pollution index evaluation
///
/// Provides context-rich logging with sample identifiers, timestamps,
/// and severity levels. Supports both console output and file-based
/// logging for scheduled monitoring runs.
///
/// Logging is a no-op until `init_logger` is called, so library users who
/// never initialize it keep the engine completely silent.

use crate::model::EngineError;
use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - field campaigns routinely have gaps, a sample
    /// with a missing measurement is normal operational noise
    Expected,
    /// Unexpected failure - indicates a configuration problem or an
    /// internal defect, not bad field data
    Unexpected,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
        }
    }
}

/// Classify an evaluation failure by whether operators should be paged.
pub fn classify_failure(error: &EngineError) -> FailureType {
    match error {
        // Data gaps are routine; the partitioned result already names them.
        EngineError::IncompleteSample { .. } => FailureType::Expected,
        // Bad limit tables are deployment configuration errors.
        EngineError::InvalidLimit { .. } | EngineError::EmptyLimitTable => FailureType::Unexpected,
        // Should be unreachable; if it fires, the engine itself is wrong.
        EngineError::InvalidIndex(_) => FailureType::Unexpected,
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        *LOGGER.lock().unwrap() = Some(logger);
    }

    /// Log a message with the global logger
    fn log(&self, level: LogLevel, sample_id: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

        let sample_part = sample_id.map(|s| format!(" [{}]", s)).unwrap_or_default();
        let log_entry = format!("{} {} HPI{}: {}", timestamp, level, sample_part, message);

        // Console output
        if self.console_timestamps {
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", log_entry),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => println!("   [DEBUG] {}", message),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗{}: {}", sample_part, message),
                LogLevel::Warning => eprintln!("   ⚠{}: {}", sample_part, message),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => {} // Skip debug in non-timestamp mode
            }
        }

        // File output
        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

/// Log a general informational message
pub fn info(sample_id: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, sample_id, message);
    }
}

/// Log a warning message
pub fn warn(sample_id: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, sample_id, message);
    }
}

/// Log an error message
pub fn error(sample_id: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, sample_id, message);
    }
}

/// Log a debug message
pub fn debug(sample_id: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, sample_id, message);
    }
}

// ---------------------------------------------------------------------------
// Structured Failure Logging
// ---------------------------------------------------------------------------

/// Log an evaluation failure with automatic classification
pub fn log_sample_failure(sample_id: &str, error: &EngineError) {
    let failure_type = classify_failure(error);
    let message = format!("evaluation failed [{}]: {}", failure_type, error);

    match failure_type {
        FailureType::Expected => debug(Some(sample_id), &message),
        FailureType::Unexpected => self::error(Some(sample_id), &message),
    }
}

/// Log a summary of a dataset evaluation run
pub fn log_evaluation_summary(total: usize, evaluated: usize, failed: usize) {
    let message = format!(
        "Evaluation complete: {}/{} successful, {} failed",
        evaluated, total, failed
    );

    if failed == 0 {
        info(None, &message);
    } else if evaluated == 0 {
        error(None, &message);
    } else {
        warn(None, &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_logging_is_silent_before_initialization() {
        // Library users who never call init_logger keep the engine quiet;
        // none of these may panic or write anywhere.
        info(Some("Pra River"), "dropped");
        log_sample_failure("Pra River", &EngineError::InvalidIndex(-1.0));
        log_evaluation_summary(3, 2, 1);
    }

    #[test]
    fn test_failure_classification() {
        let gap = EngineError::IncompleteSample {
            sample: "Pra River".to_string(),
            substance: "cadmium".to_string(),
        };
        assert_eq!(classify_failure(&gap), FailureType::Expected);

        let config = EngineError::InvalidLimit {
            substance: "arsenic".to_string(),
            limit: -0.01,
        };
        assert_eq!(classify_failure(&config), FailureType::Unexpected);

        assert_eq!(
            classify_failure(&EngineError::InvalidIndex(-3.0)),
            FailureType::Unexpected
        );
    }
}
