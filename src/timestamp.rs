//! Monotonic millisecond counter for log records.
//!
//! Values are relative to an arbitrary per-run origin, not wall-clock time;
//! they are only meaningful for ordering records within a single run.

/// Milliseconds elapsed on the platform's high-resolution counter.
///
/// The tick count is split into whole seconds and a remainder before the
/// conversion to milliseconds, so a large count is never multiplied by 1000
/// before the division by the frequency.
#[must_use]
pub fn timestamp_millis() -> u64 {
    let (ticks, freq) = counter();
    if freq == 0 {
        return 0;
    }
    let whole = (ticks / freq) * 1000;
    let part = (ticks % freq) * 1000 / freq;
    whole + part
}

#[cfg(windows)]
fn counter() -> (u64, u64) {
    use windows::Win32::System::Performance::{
        QueryPerformanceCounter, QueryPerformanceFrequency,
    };

    let mut freq = 0i64;
    let mut ticks = 0i64;
    // SAFETY: both pointers are valid out-params for the duration of the call.
    let ok = unsafe {
        QueryPerformanceFrequency(&mut freq).is_ok() && QueryPerformanceCounter(&mut ticks).is_ok()
    };
    if !ok || freq <= 0 || ticks < 0 {
        return (0, 0);
    }
    (ticks as u64, freq as u64)
}

#[cfg(not(windows))]
fn counter() -> (u64, u64) {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    let origin = ORIGIN.get_or_init(Instant::now);

    // `Instant` exposes no tick/frequency pair; nanosecond ticks with a
    // fixed 1 GHz frequency keep the arithmetic identical to the
    // performance-counter path.
    let ticks = u64::try_from(origin.elapsed().as_nanos()).unwrap_or(u64::MAX);
    (ticks, 1_000_000_000)
}
