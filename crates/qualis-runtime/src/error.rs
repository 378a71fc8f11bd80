use std::fmt;
use std::path::PathBuf;

/// Result type for qualis-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer (configuration)
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Config file could not be parsed
    ConfigParse(toml::de::Error),

    /// Config could not be serialized
    ConfigSerialize(toml::ser::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::ConfigParse(err) => write!(f, "Invalid config file: {}", err),
            Error::ConfigSerialize(err) => write!(f, "Could not serialize config: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::ConfigParse(err) => Some(err),
            Error::ConfigSerialize(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::ConfigSerialize(err)
    }
}

/// Why a report (or dashboard document) could not be loaded.
///
/// Consumers show every variant the same way; the variants exist for
/// diagnostics.
#[derive(Debug)]
pub enum FetchError {
    /// The endpoint answered with a non-success status
    Transport { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, ...)
    Network(reqwest::Error),

    /// A file-backed source could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The body is not a document of the expected shape
    Parse(serde_json::Error),

    /// The configured source string is not usable
    InvalidSource(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport { status, body } => {
                write!(f, "endpoint returned HTTP {}: {}", status, body)
            }
            FetchError::Network(err) => write!(f, "request failed: {}", err),
            FetchError::Io { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            FetchError::Parse(err) => write!(f, "malformed report document: {}", err),
            FetchError::InvalidSource(msg) => write!(f, "invalid report source: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(err) => Some(err),
            FetchError::Io { source, .. } => Some(source),
            FetchError::Parse(err) => Some(err),
            FetchError::Transport { .. } | FetchError::InvalidSource(_) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err)
    }
}
