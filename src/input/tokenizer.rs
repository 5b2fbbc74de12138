use std::fmt;

const WHITESPACE: [char; 3] = [' ', '\t', '\n'];

/// Arguments of a single invocation, program name first. Never holds an
/// empty token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector {
    tokens: Vec<String>,
}

impl ArgumentVector {
    pub fn program(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ArgumentVector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(Into::<String>::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    TooManyTokens { limit: usize },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::TooManyTokens { limit } => {
                write!(f, "too many arguments (limit {})", limit)
            }
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Splits `line` on runs of spaces, tabs and newlines.
pub fn tokenize(line: &str, limit: usize) -> Result<ArgumentVector, TokenizeError> {
    let mut tokens = Vec::new();
    for token in line.split(WHITESPACE).filter(|t| !t.is_empty()) {
        if tokens.len() == limit {
            return Err(TokenizeError::TooManyTokens { limit });
        }
        tokens.push(token.to_string());
    }
    Ok(ArgumentVector { tokens })
}
