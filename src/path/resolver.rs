use std::ffi::CString;
use std::fmt;

use log::debug;

use crate::core::commands::Builtin;
use crate::core::env::PathTable;
use crate::input::ArgumentVector;

const SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    NotFound(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound(name) => write!(f, "{}: command not found", name),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Turns the program name of `argv` into the path to execute.
///
/// Absolute names and the `exit` built-in are returned as given, without
/// touching the filesystem. Anything else is searched for in `table` order
/// and the first entry that exists and is executable wins.
pub fn resolve(argv: &ArgumentVector, table: &PathTable) -> Result<String, ResolveError> {
    let name = argv
        .program()
        .ok_or_else(|| ResolveError::NotFound(String::new()))?;

    if name.starts_with(SEPARATOR) {
        return Ok(name.to_string());
    }

    if Builtin::lookup(name).is_some() {
        return Ok(name.to_string());
    }

    for dir in table.iter() {
        let candidate = format!("{}{}{}", dir, SEPARATOR, name);
        if is_executable(&candidate) {
            debug!("resolved {} to {}", name, candidate);
            return Ok(candidate);
        }
    }

    Err(ResolveError::NotFound(name.to_string()))
}

fn is_executable(path: &str) -> bool {
    let Ok(c_path) = CString::new(path) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string for the whole call.
    unsafe { libc::access(c_path.as_ptr(), libc::F_OK | libc::X_OK) == 0 }
}
