//! Error types for the styling system.

use std::path::PathBuf;

use trellis_core::ConfigurationError;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Theme file parsing error.
    #[error("theme parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// File I/O error.
    #[error("failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme serialization error.
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A theme extends a built-in that does not exist.
    #[error("unknown built-in theme '{0}'")]
    UnknownTheme(String),

    /// Invalid property value.
    #[error("invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a parse error from a TOML error, resolving its span in `source`.
    pub fn from_toml(err: &toml::de::Error, source: &str) -> Self {
        let (line, column) = match err.span() {
            Some(span) => line_column(source, span.start),
            None => (0, 0),
        };
        Self::parse(err.message(), line, column)
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}

impl From<Error> for ConfigurationError {
    fn from(err: Error) -> Self {
        ConfigurationError::invalid_option("theme", err.to_string())
    }
}

/// 1-based line and column of a byte offset.
fn line_column(source: &str, offset: usize) -> (u32, u32) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line as u32, column as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column() {
        let src = "a = 1\nb = \nc = 3";
        assert_eq!(line_column(src, 0), (1, 1));
        assert_eq!(line_column(src, 10), (2, 5));
    }
}
