use std::fmt;

const DEFAULT_PATH_VAR: &str = "PATH";
const DEFAULT_MAX_PATH_ENTRIES: usize = 64;
const DEFAULT_MAX_TOKENS: usize = 64;
const DEFAULT_MAX_LINE_LEN: usize = 1024;
const DEFAULT_PROMPT_SUFFIX: &str = " >";
const DEFAULT_FALLBACK_HOSTNAME: &str = "localhost";
const DEFAULT_FAREWELL: &str = "Terminating. . .";

/// Fixed knobs of the shell. There are no config files or flags; everything
/// here has a built-in default and only tests or embedders change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub path_var: String,
    pub max_path_entries: usize,
    pub max_tokens: usize,
    pub max_line_len: usize,
    pub prompt_suffix: String,
    pub fallback_hostname: String,
    pub farewell: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        ShellConfig {
            path_var: DEFAULT_PATH_VAR.to_string(),
            max_path_entries: DEFAULT_MAX_PATH_ENTRIES,
            max_tokens: DEFAULT_MAX_TOKENS,
            max_line_len: DEFAULT_MAX_LINE_LEN,
            prompt_suffix: DEFAULT_PROMPT_SUFFIX.to_string(),
            fallback_hostname: DEFAULT_FALLBACK_HOSTNAME.to_string(),
            farewell: DEFAULT_FAREWELL.to_string(),
        }
    }

    pub fn with_path_var(mut self, name: &str) -> Self {
        self.path_var = name.to_string();
        self
    }

    pub fn with_max_path_entries(mut self, limit: usize) -> Self {
        self.max_path_entries = limit;
        self
    }

    pub fn with_max_tokens(mut self, limit: usize) -> Self {
        self.max_tokens = limit;
        self
    }

    pub fn with_max_line_len(mut self, limit: usize) -> Self {
        self.max_line_len = limit;
        self
    }

    pub fn with_fallback_hostname(mut self, name: &str) -> Self {
        self.fallback_hostname = name.to_string();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path_var.is_empty() {
            return Err(ConfigError::EmptyValue("path_var"));
        }
        if self.fallback_hostname.is_empty() {
            return Err(ConfigError::EmptyValue("fallback_hostname"));
        }
        for (name, value) in [
            ("max_path_entries", self.max_path_entries),
            ("max_tokens", self.max_tokens),
            ("max_line_len", self.max_line_len),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroLimit(name));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroLimit(&'static str),
    EmptyValue(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroLimit(name) => write!(f, "{} must be greater than zero", name),
            ConfigError::EmptyValue(name) => write!(f, "{} must not be empty", name),
        }
    }
}

impl std::error::Error for ConfigError {}
