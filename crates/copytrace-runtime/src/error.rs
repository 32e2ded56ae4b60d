use std::fmt;

/// Result type for copytrace-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Validation, score or threshold error from the types layer
    Types(copytrace_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Backend unreachable, non-success HTTP status, or a non-success payload
    Fetch {
        status: Option<u16>,
        message: String,
    },

    /// Backend or stored payload could not be decoded
    Decode(String),

    /// No analysis has been stored yet
    NoResult,
}

impl Error {
    pub fn fetch(message: impl Into<String>) -> Self {
        Error::Fetch {
            status: None,
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Types(copytrace_types::Error::Validation(_)))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Fetch {
                status: Some(status),
                message,
            } => write!(f, "Fetch error (HTTP {}): {}", status, message),
            Error::Fetch {
                status: None,
                message,
            } => write!(f, "Fetch error: {}", message),
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
            Error::NoResult => write!(f, "No analysis result stored yet"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Fetch { .. } | Error::Decode(_) | Error::NoResult => None,
        }
    }
}

impl From<copytrace_types::Error> for Error {
    fn from(err: copytrace_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
