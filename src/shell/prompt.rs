use std::ffi::CStr;

use libc::c_char;

const HOSTNAME_BUF_LEN: usize = 256;

/// Current host name, or `None` when it cannot be determined.
pub fn hostname() -> Option<String> {
    let mut buf: [c_char; HOSTNAME_BUF_LEN] = [0; HOSTNAME_BUF_LEN];
    // SAFETY: one byte is held back so the result is always NUL-terminated,
    // even when the name is truncated.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr(), buf.len() - 1) };
    if rc != 0 {
        return None;
    }

    // SAFETY: the buffer was zeroed and its last byte is never written.
    let name = unsafe { CStr::from_ptr(buf.as_ptr()) };
    let name = name.to_string_lossy();
    if name.is_empty() {
        None
    } else {
        Some(name.into_owned())
    }
}

pub fn render(hostname: Option<String>, fallback: &str, suffix: &str) -> String {
    let host = hostname.unwrap_or_else(|| fallback.to_string());
    format!("{}{}", host, suffix)
}
