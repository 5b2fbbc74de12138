use std::io::{self, Write};

use log::debug;

use super::child::{self, ExecImage};
use super::{Command, ExitStatus, Executor, ProcessError};

/// Handle to a running child created by [`ProcessExecutor::spawn_child`].
#[derive(Debug)]
pub struct ChildHandle {
    pid: libc::pid_t,
}

impl ChildHandle {
    pub fn pid(&self) -> libc::pid_t {
        self.pid
    }
}

/// Starts one child per command and blocks until it is reaped. Standard
/// streams are inherited.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn spawn_child(&self, command: &Command) -> Result<ChildHandle, ProcessError> {
        let image = ExecImage::new(command)?;
        let argv = image.argv();

        // Buffered prompt text would otherwise be copied into the child.
        io::stdout().flush().map_err(ProcessError::Flush)?;

        // SAFETY: the child branch only calls `exec_image`, which performs
        // raw syscalls on memory prepared above.
        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
            0 => child::exec_image(&image, &argv),
            pid => {
                debug!("started {} as pid {}", command.path(), pid);
                Ok(ChildHandle { pid })
            }
        }
    }

    pub fn wait_for(&self, child: ChildHandle) -> Result<ExitStatus, ProcessError> {
        let mut raw: libc::c_int = 0;
        loop {
            // SAFETY: `raw` is a valid out-pointer for the duration of the call.
            let rc = unsafe { libc::waitpid(child.pid, &mut raw, 0) };
            if rc == child.pid {
                break;
            }
            let err = io::Error::last_os_error();
            if err.kind() != io::ErrorKind::Interrupted {
                return Err(ProcessError::Wait(err));
            }
        }

        let status = ExitStatus::from_raw(raw);
        debug!("pid {} finished with {}", child.pid, status);
        Ok(status)
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, command: Command) -> Result<ExitStatus, ProcessError> {
        let child = self.spawn_child(&command)?;
        self.wait_for(child)
    }
}
