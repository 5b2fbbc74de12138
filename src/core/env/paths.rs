use std::os::unix::ffi::OsStrExt;

use log::warn;

use super::PathError;

const DELIMITER: char = ':';

/// Ordered search directories, built once at startup. The first directory
/// holding a match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTable {
    dirs: Vec<String>,
}

impl PathTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Splits `raw` on `:`. Empty segments are skipped. More than `limit`
    /// entries fails the whole table rather than truncating it.
    pub fn build(raw: &str, limit: usize) -> Result<Self, PathError> {
        Self::from_segments(raw.split(DELIMITER), limit)
    }

    /// Reads `var` from the environment. Entries that are not valid UTF-8
    /// are dropped on their own; the rest of the table is kept.
    pub fn from_env(var: &str, limit: usize) -> Result<Self, PathError> {
        let raw = std::env::var_os(var).ok_or_else(|| PathError::ConfigError(var.to_string()))?;
        let segments = raw
            .as_bytes()
            .split(|&b| b == DELIMITER as u8)
            .filter_map(|segment| match std::str::from_utf8(segment) {
                Ok(dir) => Some(dir),
                Err(_) => {
                    warn!(
                        "skipping non-UTF-8 {} entry {}",
                        var,
                        String::from_utf8_lossy(segment)
                    );
                    None
                }
            });
        Self::from_segments(segments, limit)
    }

    fn from_segments<'a, I>(segments: I, limit: usize) -> Result<Self, PathError>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut dirs = Vec::new();
        for segment in segments.filter(|s| !s.is_empty()) {
            if dirs.len() == limit {
                return Err(PathError::TooManyEntries { limit });
            }
            dirs.push(segment.to_string());
        }
        Ok(Self { dirs })
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}
