//! Best-effort diagnostic logging for an accessibility-bridge component.
//!
//! The crate manages a single log file whose location is derived from an
//! environment-provided directory and a caller-supplied name, appends
//! timestamped records to it, and can mirror messages to the platform
//! debug-output channel or the console.
//!
//! Logging never gets in the host's way: every operation on a logger whose
//! file could not be opened, or that was never initialized, is a silent
//! no-op, and write failures are swallowed.

/// Runtime debug switches and their INI/environment loading.
pub mod config;
/// Lifecycle and print operations of the debug logger.
pub mod logger;
/// Formatting macros for the native and Java-side categories.
pub mod macros;
/// Mirror channel to the platform debugger output.
pub mod platform;
/// Open/closed state of the log file handle.
pub mod sink;
/// Monotonic millisecond counter for log records.
pub mod timestamp;
/// Wide-character transcoding and template rendering.
pub mod wide;

pub use config::{Category, DebugConfig};
pub use logger::{DebugLogger, LOG_DIR_ENV};
