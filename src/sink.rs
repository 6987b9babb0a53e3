use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Destination log file and its open/closed state.
///
/// A closed sink swallows every write. Writes are best-effort: I/O failures
/// are dropped rather than surfaced, so callers on the logging path never
/// see an error.
#[derive(Debug, Default)]
pub struct LogSink {
    file: Option<File>,
}

impl LogSink {
    /// A sink with no open file.
    #[must_use]
    pub const fn closed() -> Self {
        Self { file: None }
    }

    /// Whether a log file is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Truncate-creates `path` as the log file.
    ///
    /// A previously open file is closed before the new one is created, so at
    /// most one handle exists at any time.
    ///
    /// # Errors
    ///
    /// Returns the creation failure; the sink is left closed in that case.
    pub fn open(&mut self, path: &Path) -> std::io::Result<()> {
        self.close();
        self.file = Some(File::create(path)?);
        Ok(())
    }

    /// Closes the log file if one is open. Closing a closed sink is a no-op.
    pub fn close(&mut self) {
        self.file = None;
    }

    /// Appends one `[millis] message` record, CRLF-terminated.
    pub fn write_line(&mut self, timestamp: u64, message: &str) {
        if let Some(file) = self.file.as_mut() {
            let _ = write!(file, "[{timestamp}] {message}\r\n");
        }
    }
}
