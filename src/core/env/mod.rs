mod paths;

pub use paths::PathTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The search variable is unset or not valid unicode.
    ConfigError(String),
    TooManyEntries { limit: usize },
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigError(var) => write!(f, "{} is not set or unreadable", var),
            PathError::TooManyEntries { limit } => {
                write!(f, "too many search directories (limit {})", limit)
            }
        }
    }
}

impl std::error::Error for PathError {}
