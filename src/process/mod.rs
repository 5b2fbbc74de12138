use std::fmt;
use std::io;

pub mod child;
pub mod executor;

pub use executor::{ChildHandle, ProcessExecutor};

use crate::input::ArgumentVector;

/// Exit status of a child whose image could not be replaced.
pub const EXEC_FAILURE_STATUS: i32 = 127;

/// A resolved program plus the arguments it is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    path: String,
    argv: ArgumentVector,
}

impl Command {
    pub fn new(path: String, argv: ArgumentVector) -> Self {
        Self { path, argv }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn argv(&self) -> &ArgumentVector {
        &self.argv
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Exited(i32),
    Signaled(i32),
    Other(i32),
}

impl ExitStatus {
    /// Decodes a status word as filled in by `waitpid(2)`.
    pub fn from_raw(status: libc::c_int) -> Self {
        if libc::WIFEXITED(status) {
            ExitStatus::Exited(libc::WEXITSTATUS(status))
        } else if libc::WIFSIGNALED(status) {
            ExitStatus::Signaled(libc::WTERMSIG(status))
        } else {
            ExitStatus::Other(status)
        }
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            ExitStatus::Exited(code) => Some(*code),
            _ => None,
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, ExitStatus::Exited(0))
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Exited(code) => write!(f, "exit code {}", code),
            ExitStatus::Signaled(signal) => write!(f, "killed by signal {}", signal),
            ExitStatus::Other(raw) => write!(f, "raw status {:#x}", raw),
        }
    }
}

/// Runs a command to completion. The shell loop only talks to this seam.
pub trait Executor {
    fn execute(&self, command: Command) -> Result<ExitStatus, ProcessError>;
}

#[derive(Debug)]
pub enum ProcessError {
    InvalidArgument(String),
    Flush(io::Error),
    Fork(io::Error),
    Wait(io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidArgument(arg) => {
                write!(f, "argument contains a NUL byte: {:?}", arg)
            }
            ProcessError::Flush(e) => write!(f, "failed to flush output: {}", e),
            ProcessError::Fork(e) => write!(f, "failed to create child process: {}", e),
            ProcessError::Wait(e) => write!(f, "failed to wait for child process: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_raw() {
        assert_eq!(ExitStatus::from_raw(0), ExitStatus::Exited(0));
        assert_eq!(ExitStatus::from_raw(3 << 8), ExitStatus::Exited(3));
        assert_eq!(ExitStatus::from_raw(libc::SIGKILL), ExitStatus::Signaled(9));
    }

    #[test]
    fn test_status_helpers() {
        assert!(ExitStatus::Exited(0).success());
        assert!(!ExitStatus::Exited(1).success());
        assert!(!ExitStatus::Signaled(15).success());
        assert_eq!(ExitStatus::Exited(2).code(), Some(2));
        assert_eq!(ExitStatus::Signaled(2).code(), None);
    }

    #[test]
    fn test_command_accessors() {
        let argv: ArgumentVector = ["echo", "hi"].into_iter().collect();
        let command = Command::new("/bin/echo".to_string(), argv.clone());
        assert_eq!(command.path(), "/bin/echo");
        assert_eq!(command.argv(), &argv);
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            ProcessError::InvalidArgument("a\0b".to_string()),
            ProcessError::Fork(io::Error::from_raw_os_error(libc::EAGAIN)),
            ProcessError::Wait(io::Error::from_raw_os_error(libc::ECHILD)),
        ];
        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
