use std::fmt;

/// Result type for studykit-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A personality code that is not one of the 16 known types
    UnknownType(String),

    /// The static catalog is out of order, duplicated or incomplete
    InvalidCatalog(String),

    /// A granularity name other than `aggregated` or `raw`
    UnknownGranularity(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownType(code) => write!(f, "Unknown personality type: {}", code),
            Error::InvalidCatalog(msg) => write!(f, "Invalid catalog: {}", msg),
            Error::UnknownGranularity(name) => {
                write!(f, "Unknown granularity: {} (expected 'aggregated' or 'raw')", name)
            }
        }
    }
}

impl std::error::Error for Error {}
