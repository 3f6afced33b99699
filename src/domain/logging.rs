use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::Display;

/// Severity of a developer log line. `Debug` is dropped by the production console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Layer a line was written from, with the emitting type or component name.
#[derive(Debug, Clone, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    /// Request context such as the token and symbol.
    pub metadata: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(self, metadata: impl Into<String>) -> Self {
        Self { metadata: Some(metadata.into()), ..self }
    }

    /// `[ts] LEVEL COMPONENT | message | metadata`
    pub fn format(&self) -> String {
        let mut line = format!(
            "[{}] {} {} | {}",
            get_time_provider().format_timestamp(self.timestamp),
            self.level,
            self.component,
            self.message
        );
        if let Some(metadata) = &self.metadata {
            line.push_str(" | ");
            line.push_str(metadata);
        }
        line
    }
}

/// Clock used to stamp entries; the browser build installs `Date.now()`.
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Developer-facing log channel. Nothing written here reaches the page.
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn emit(&self, level: LogLevel, component: LogComponent, message: &str) {
        self.log(LogEntry::new(level, component, message));
    }

    fn emit_with_metadata(
        &self,
        level: LogLevel,
        component: LogComponent,
        message: &str,
        metadata: &str,
    ) {
        self.log(LogEntry::new(level, component, message).with_metadata(metadata));
    }
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// First installation wins; later calls are ignored.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = TIME_PROVIDER.set(time_provider);
}

/// Installed logger, or a silent one before `init_logger` (native tests).
pub fn get_logger() -> &'static dyn Logger {
    LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&Silent)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    TIME_PROVIDER
        .get()
        .map(|provider| provider.as_ref())
        .unwrap_or(&Sequence)
}

struct Silent;

impl Logger for Silent {
    fn log(&self, _entry: LogEntry) {}
}

/// Stand-in clock: a counter, so entries still order.
struct Sequence;

impl TimeProvider for Sequence {
    fn current_timestamp(&self) -> u64 {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        NEXT.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{timestamp:06}")
    }
}

/// Debug lines are compiled in but skipped outside debug builds.
#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::domain::logging::Logger::emit(
                $crate::domain::logging::get_logger(),
                $crate::domain::logging::LogLevel::Debug,
                $component,
                &format!($($arg)*),
            )
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::Logger::emit(
            $crate::domain::logging::get_logger(),
            $crate::domain::logging::LogLevel::Info,
            $component,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::Logger::emit(
            $crate::domain::logging::get_logger(),
            $crate::domain::logging::LogLevel::Warn,
            $component,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::Logger::emit(
            $crate::domain::logging::get_logger(),
            $crate::domain::logging::LogLevel::Error,
            $component,
            &format!($($arg)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Capture(Mutex<Vec<LogEntry>>);

    impl Logger for Capture {
        fn log(&self, entry: LogEntry) {
            if let Ok(mut entries) = self.0.lock() {
                entries.push(entry);
            }
        }
    }

    #[test]
    fn entry_format_includes_metadata() {
        let entry = LogEntry::new(LogLevel::Error, LogComponent::Application("ChartView"), "fetch failed")
            .with_metadata("token=3");
        assert!(entry.format().ends_with("ERROR APP:ChartView | fetch failed | token=3"));
    }

    #[test]
    fn entry_without_metadata_has_no_trailing_separator() {
        let entry = LogEntry::new(LogLevel::Info, LogComponent::Domain("ChartView"), "ready");
        assert!(entry.format().ends_with(" INFO DOM:ChartView | ready"));
    }

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn emit_builds_entry_for_level() {
        let capture = Capture::default();
        capture.emit(LogLevel::Warn, LogComponent::Infrastructure("Config"), "bad block");
        capture.emit_with_metadata(LogLevel::Error, LogComponent::Application("Svc"), "failed", "symbol=AAPL");

        let entries = capture.0.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, LogLevel::Warn);
        assert_eq!(entries[0].message, "bad block");
        assert_eq!(entries[1].metadata.as_deref(), Some("symbol=AAPL"));
    }

    #[test]
    fn macros_format_their_arguments() {
        // without an installed logger these must still expand and run
        let token = 7;
        crate::log_debug!(LogComponent::Domain("ChartView"), "token {token}");
        crate::log_info!(LogComponent::Domain("ChartView"), "{} ready", "AAPL");
        crate::log_warn!(LogComponent::Domain("ChartView"), "slow");
        crate::log_error!(LogComponent::Domain("ChartView"), "failed: {}", token);
    }
}
