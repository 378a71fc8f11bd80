use std::fmt;

/// Result type for qualis-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A check definition is missing a parameter its type tag requires
    MissingCheckParameter {
        check_type: String,
        parameter: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingCheckParameter {
                check_type,
                parameter,
            } => write!(
                f,
                "check of type '{}' is missing required parameter '{}'",
                check_type, parameter
            ),
        }
    }
}

impl std::error::Error for Error {}
