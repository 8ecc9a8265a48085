use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while generating outputs
#[derive(Debug)]
pub enum ScriptHelperError {
    Advisory(Advisory),
    Export(ExportError),
    Config(ConfigError),
    Other(io::Error),
}

/// Non-fatal conditions reported back to the caller instead of producing
/// empty artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// No `##` marker lines were found when building the title list
    NoTitlesFound,
    /// No `##` marker lines were found when building topics
    NoTopicsFound,
    /// A save was requested before any subtitle track was generated
    NoSubtitlesToSave,
}

impl Advisory {
    /// User-facing message for this advisory.
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::NoTitlesFound => "No titles found. Use ## to mark titles.",
            Advisory::NoTopicsFound => "No topics found. Use ## to mark titles.",
            Advisory::NoSubtitlesToSave => "No SRT to download.",
        }
    }
}

/// Tabular export specific errors
#[derive(Debug)]
pub struct ExportError {
    pub message: String,
}

impl ExportError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ScriptHelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptHelperError::Advisory(advisory) => write!(f, "{}", advisory),
            ScriptHelperError::Export(err) => write!(f, "Export error: {}", err),
            ScriptHelperError::Config(err) => write!(f, "Config error: {}", err),
            ScriptHelperError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ScriptHelperError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScriptHelperError::Other(err) => Some(err),
            _ => None,
        }
    }
}
impl Error for Advisory {}
impl Error for ExportError {}
impl Error for ConfigError {}

// Conversion implementations
impl From<io::Error> for ScriptHelperError {
    fn from(err: io::Error) -> Self {
        ScriptHelperError::Other(err)
    }
}

impl From<Advisory> for ScriptHelperError {
    fn from(advisory: Advisory) -> Self {
        ScriptHelperError::Advisory(advisory)
    }
}

impl From<ExportError> for ScriptHelperError {
    fn from(err: ExportError) -> Self {
        ScriptHelperError::Export(err)
    }
}

impl From<ConfigError> for ScriptHelperError {
    fn from(err: ConfigError) -> Self {
        ScriptHelperError::Config(err)
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        ExportError::new(err.to_string())
    }
}

// Conversion to io::Error for callers that only deal in I/O errors
impl From<ScriptHelperError> for io::Error {
    fn from(err: ScriptHelperError) -> Self {
        match err {
            ScriptHelperError::Other(inner) => inner,
            other => io::Error::other(other),
        }
    }
}

impl From<ExportError> for io::Error {
    fn from(err: ExportError) -> Self {
        io::Error::other(err)
    }
}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

// Type alias for Result with ScriptHelperError
pub type ScriptHelperResult<T> = Result<T, ScriptHelperError>;
