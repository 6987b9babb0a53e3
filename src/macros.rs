//! Formatting macros for the two message categories.
//!
//! The narrow macros forward to `format_args!`, so placeholders and
//! arguments are checked at compile time. The wide macros take a UTF-16
//! template expression and render each extra argument with `ToString` at
//! the call site; the template's `{}` placeholders are filled at runtime.

/// Logs a native-side message.
///
/// ```ignore
/// log_native!(logger, "focus gained, vmID = {}", vm_id);
/// ```
#[macro_export]
macro_rules! log_native {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_native(::std::format_args!($($arg)*))
    };
}

/// Logs a Java-side message.
///
/// ```ignore
/// log_java!(logger, "event relayed: {}", event);
/// ```
#[macro_export]
macro_rules! log_java {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_java(::std::format_args!($($arg)*))
    };
}

/// Logs a native-side message from a UTF-16 template.
///
/// ```ignore
/// wlog_native!(logger, &title_utf16);
/// wlog_native!(logger, &template_utf16, vm_id, role);
/// ```
#[macro_export]
macro_rules! wlog_native {
    ($logger:expr, $wide:expr $(,)?) => {
        $logger.wlog_native($wide, &[])
    };
    ($logger:expr, $wide:expr, $($arg:expr),+ $(,)?) => {
        $logger.wlog_native($wide, &[$(::std::string::ToString::to_string(&$arg)),+])
    };
}

/// Logs a Java-side message from a UTF-16 template.
#[macro_export]
macro_rules! wlog_java {
    ($logger:expr, $wide:expr $(,)?) => {
        $logger.wlog_java($wide, &[])
    };
    ($logger:expr, $wide:expr, $($arg:expr),+ $(,)?) => {
        $logger.wlog_java($wide, &[$(::std::string::ToString::to_string(&$arg)),+])
    };
}
