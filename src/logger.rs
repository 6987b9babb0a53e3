use std::fmt;
use std::path::Path;

use crate::config::{Category, DebugConfig};
use crate::platform;
use crate::sink::LogSink;
use crate::timestamp::timestamp_millis;
use crate::wide::{narrow_from_wide, render_template};

/// Environment variable naming the directory for log files.
pub const LOG_DIR_ENV: &str = "BRIDGE_DEBUG_LOGDIR";

/// Diagnostic logger with a single log-file sink and optional mirrors.
///
/// The logger is constructed closed; until a successful
/// [`initialize`](Self::initialize) every print operation is a silent no-op.
/// A record always reaches the file while the sink is open; the switches in
/// [`DebugConfig`] only gate the mirror channels.
///
/// Writes are not internally synchronized. Operations take `&mut self`, so a
/// logger shared across threads must be wrapped in a lock by the caller; the
/// intended use is a single owning component, initialized near process start
/// and finalized near process end.
#[derive(Debug)]
pub struct DebugLogger {
    sink: LogSink,
    config: DebugConfig,
}

impl DebugLogger {
    /// Creates a closed logger with the given switches.
    #[must_use]
    pub fn new(config: DebugConfig) -> Self {
        Self {
            sink: LogSink::closed(),
            config,
        }
    }

    /// Creates a closed logger with switches read from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(DebugConfig::from_env())
    }

    /// Opens the log file `<dir>/<name>.log`, with `dir` taken from
    /// [`LOG_DIR_ENV`].
    ///
    /// If the variable is unset or empty, or `name` is empty, nothing
    /// happens: an already-open sink stays open and a closed one stays
    /// closed, with all prints remaining silent.
    pub fn initialize(&mut self, name: &str) {
        match std::env::var(LOG_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => self.initialize_in_dir(dir, name),
            _ => {}
        }
    }

    /// Opens the log file `<dir>/<name>.log`.
    ///
    /// An already-open file is closed first. If the new file cannot be
    /// created, a one-line notice naming the attempted path goes to standard
    /// error and the logger stays inactive until the next initialize call.
    pub fn initialize_in_dir<D: AsRef<Path>>(&mut self, dir: D, name: &str) {
        if name.is_empty() {
            return;
        }
        let path = dir.as_ref().join(format!("{name}.log"));
        if let Err(err) = self.sink.open(&path) {
            eprintln!("could not open log file {}: {err}", path.display());
        }
    }

    /// Closes the log file. Finalizing an inactive logger is a no-op.
    pub fn finalize(&mut self) {
        self.sink.close();
    }

    /// Whether a log file is currently open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.sink.is_open()
    }

    /// Logs a native-side message; see [`log_native!`](crate::log_native).
    pub fn log_native(&mut self, args: fmt::Arguments<'_>) {
        self.print(Category::Native, args);
    }

    /// Logs a Java-side message; see [`log_java!`](crate::log_java).
    pub fn log_java(&mut self, args: fmt::Arguments<'_>) {
        self.print(Category::Java, args);
    }

    /// Logs a native-side message from a UTF-16 template.
    ///
    /// Only the template is transcoded (lossily, cut at the first NUL unit);
    /// `args` are rendered separately into its `{}` placeholders and never
    /// pass through UTF-16 conversion themselves.
    pub fn wlog_native(&mut self, wide_format: &[u16], args: &[String]) {
        self.wprint(Category::Native, wide_format, args);
    }

    /// Logs a Java-side message from a UTF-16 template. Transcoding follows
    /// [`wlog_native`](Self::wlog_native).
    pub fn wlog_java(&mut self, wide_format: &[u16], args: &[String]) {
        self.wprint(Category::Java, wide_format, args);
    }

    fn print(&mut self, category: Category, args: fmt::Arguments<'_>) {
        if !self.should_render(category) {
            return;
        }
        let message = fmt::format(args);
        self.emit(category, &message);
    }

    fn wprint(&mut self, category: Category, wide_format: &[u16], args: &[String]) {
        if !self.should_render(category) {
            return;
        }
        let template = narrow_from_wide(wide_format);
        let message = render_template(&template, args);
        self.emit(category, &message);
    }

    /// Rendering is skipped when nothing would consume the message.
    fn should_render(&self, category: Category) -> bool {
        self.sink.is_open() || category.enabled(&self.config)
    }

    fn emit(&mut self, category: Category, message: &str) {
        if category.enabled(&self.config) {
            if self.config.send_to_debug_output {
                platform::debug_output(message);
            }
            if self.config.send_to_console {
                print!("{message}\r\n");
            }
        }
        self.sink.write_line(timestamp_millis(), message);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::fs;

    #[test]
    fn prints_before_initialize_do_not_fault() {
        let mut logger = DebugLogger::new(DebugConfig::default());
        crate::log_native!(logger, "early {}", 1);
        crate::log_java!(logger, "early too");
        assert!(!logger.is_active());
    }

    #[test]
    fn initialize_in_dir_creates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = DebugLogger::new(DebugConfig::default());

        logger.initialize_in_dir(dir.path(), "bridge");
        assert!(logger.is_active());
        assert!(dir.path().join("bridge.log").exists());

        logger.finalize();
        assert!(!logger.is_active());
    }

    #[test]
    fn empty_name_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = DebugLogger::new(DebugConfig::default());

        logger.initialize_in_dir(dir.path(), "");
        assert!(!logger.is_active());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn open_failure_disables_logging() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-subdir");
        let mut logger = DebugLogger::new(DebugConfig::default());

        logger.initialize_in_dir(&missing, "bridge");
        assert!(!logger.is_active());
        crate::log_native!(logger, "dropped");
    }

    #[test]
    fn finalize_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = DebugLogger::new(DebugConfig::default());

        logger.initialize_in_dir(dir.path(), "bridge");
        logger.finalize();
        logger.finalize();
        assert!(!logger.is_active());
    }

    #[test]
    fn records_reach_file_with_all_switches_off() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = DebugLogger::new(DebugConfig::default());

        logger.initialize_in_dir(dir.path(), "bridge");
        crate::log_native!(logger, "window handle {}", 0x42);
        logger.finalize();

        let content = fs::read_to_string(dir.path().join("bridge.log")).unwrap();
        assert!(content.ends_with("window handle 66\r\n"));
        assert!(content.starts_with('['));
    }

    #[test]
    fn reinitialize_switches_to_the_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = DebugLogger::new(DebugConfig::default());

        logger.initialize_in_dir(dir.path(), "first");
        crate::log_native!(logger, "to first");
        logger.initialize_in_dir(dir.path(), "second");
        crate::log_native!(logger, "to second");
        logger.finalize();

        let first = fs::read_to_string(dir.path().join("first.log")).unwrap();
        let second = fs::read_to_string(dir.path().join("second.log")).unwrap();
        assert!(first.contains("to first"));
        assert!(!first.contains("to second"));
        assert!(second.contains("to second"));
    }
}
