//! Wide-character support for the log entry points.
//!
//! Platform and Java-side callers hand over UTF-16 buffers. These helpers
//! convert such a buffer to UTF-8 and render the runtime `{}` placeholders
//! that the wide entry points accept.

/// Converts a UTF-16 buffer to a `String`, stopping at the first NUL unit.
///
/// The conversion is lossy: unpaired surrogates come out as U+FFFD. Buffers
/// without a NUL are converted in full.
#[must_use]
pub fn narrow_from_wide(wide: &[u16]) -> String {
    let end = wide.iter().position(|&unit| unit == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..end])
}

/// Replaces each literal `{}` in `template` with the next argument.
///
/// Only the empty `{}` placeholder is recognized. Placeholders without a
/// matching argument are kept verbatim; surplus arguments are ignored.
#[must_use]
pub fn render_template(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next = args.iter();

    while let Some(pos) = rest.find("{}") {
        match next.next() {
            Some(arg) => {
                out.push_str(&rest[..pos]);
                out.push_str(arg);
            }
            None => out.push_str(&rest[..pos + 2]),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
