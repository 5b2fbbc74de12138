use crate::core::config::ConfigError;
use crate::input::TokenizeError;
use crate::path::ResolveError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    Config(ConfigError),
    Tokenize(TokenizeError),
    Resolve(ResolveError),
    Process(ProcessError),
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::Config(err)
    }
}

impl From<TokenizeError> for ShellError {
    fn from(err: TokenizeError) -> Self {
        ShellError::Tokenize(err)
    }
}

impl From<ResolveError> for ShellError {
    fn from(err: ResolveError) -> Self {
        ShellError::Resolve(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::Process(err)
    }
}

impl ShellError {
    /// Errors that end the current line only. Anything else stops the shell.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShellError::Io(_) | ShellError::Config(_))
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Config(e) => write!(f, "Config error: {}", e),
            ShellError::Tokenize(e) => write!(f, "{}", e),
            ShellError::Resolve(e) => write!(f, "{}", e),
            ShellError::Process(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ShellError {}
