//! The child side of a spawn. Everything the child needs is prepared by the
//! parent beforehand, so after the split the child only makes raw syscalls.

use std::ffi::{CStr, CString};
use std::io;
use std::ptr;

use libc::c_char;

use super::{Command, ProcessError, EXEC_FAILURE_STATUS};

pub struct ExecImage {
    path: CString,
    args: Vec<CString>,
    failure_prefix: Vec<u8>,
}

impl ExecImage {
    pub fn new(command: &Command) -> Result<Self, ProcessError> {
        let path = CString::new(command.path())
            .map_err(|_| ProcessError::InvalidArgument(command.path().to_string()))?;
        let args = command
            .argv()
            .iter()
            .map(|arg| {
                CString::new(arg).map_err(|_| ProcessError::InvalidArgument(arg.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            path,
            args,
            failure_prefix: format!("{}: cannot execute: ", command.path()).into_bytes(),
        })
    }

    /// NULL-terminated pointer array borrowed from `self`.
    pub fn argv(&self) -> Vec<*const c_char> {
        self.args
            .iter()
            .map(|arg| arg.as_ptr())
            .chain(std::iter::once(ptr::null()))
            .collect()
    }
}

/// Replaces the current process image. Only returns control to the OS: on
/// failure the reason goes to stderr and the process exits with
/// [`EXEC_FAILURE_STATUS`].
pub fn exec_image(image: &ExecImage, argv: &[*const c_char]) -> ! {
    // SAFETY: `path` and every `argv` pointer stay alive in `image`, and
    // `argv` ends with a null pointer.
    unsafe {
        libc::execv(image.path.as_ptr(), argv.as_ptr());
    }

    let errno = io::Error::last_os_error().raw_os_error().unwrap_or(0);
    let mut reason: [c_char; 128] = [0; 128];
    // SAFETY: the buffer length passed matches the buffer.
    let rc = unsafe { libc::strerror_r(errno, reason.as_mut_ptr(), reason.len()) };

    write_stderr(&image.failure_prefix);
    if rc == 0 {
        // SAFETY: strerror_r NUL-terminates on success.
        let text = unsafe { CStr::from_ptr(reason.as_ptr()) };
        write_stderr(text.to_bytes());
    } else {
        write_stderr(b"unknown error");
    }
    write_stderr(b"\n");

    // SAFETY: `_exit` skips atexit handlers and stdio flushing, which belong
    // to the parent.
    unsafe { libc::_exit(EXEC_FAILURE_STATUS) }
}

fn write_stderr(bytes: &[u8]) {
    // SAFETY: writes `bytes.len()` bytes from a live slice.
    unsafe {
        libc::write(libc::STDERR_FILENO, bytes.as_ptr().cast(), bytes.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ArgumentVector;

    #[test]
    fn test_argv_is_null_terminated() -> Result<(), ProcessError> {
        let argv: ArgumentVector = ["ls", "-l"].into_iter().collect();
        let image = ExecImage::new(&Command::new("/bin/ls".to_string(), argv))?;
        let ptrs = image.argv();
        assert_eq!(ptrs.len(), 3);
        assert!(ptrs[2].is_null());
        // SAFETY: pointers borrow from `image`, which is still alive.
        let first = unsafe { CStr::from_ptr(ptrs[0]) };
        assert_eq!(first.to_str().ok(), Some("ls"));
        Ok(())
    }

    #[test]
    fn test_nul_byte_rejected() {
        let argv: ArgumentVector = ["echo", "a\0b"].into_iter().collect();
        let result = ExecImage::new(&Command::new("/bin/echo".to_string(), argv));
        assert!(matches!(result, Err(ProcessError::InvalidArgument(arg)) if arg == "a\0b"));
    }
}
