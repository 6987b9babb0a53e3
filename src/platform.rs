/// Sends `message` to the platform debug-output channel.
///
/// Only Windows has such a channel; on other platforms this is a no-op and
/// the console mirror is the remaining side channel.
#[cfg(windows)]
pub fn debug_output(message: &str) {
    use windows::Win32::System::Diagnostics::Debug::OutputDebugStringW;
    use windows::core::PCWSTR;

    let wide: Vec<u16> = message.encode_utf16().chain(std::iter::once(0)).collect();
    // SAFETY: `wide` is NUL-terminated and outlives the call.
    unsafe { OutputDebugStringW(PCWSTR(wide.as_ptr())) };
}

#[cfg(not(windows))]
pub fn debug_output(_message: &str) {}
