use std::fmt;

/// Result type for studykit-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Schedule parameters that cannot form a cycle
    InvalidParameters(String),

    /// The designated row-key column is not in the table
    MissingKeyColumn(String),

    /// The table has no numeric columns besides the key
    NoNumericColumns,

    /// A row key matched zero rows or more than one
    RowNotFound { key: String, matches: usize },

    /// A requested count outside `1..=available`
    InvalidRange { requested: usize, available: usize },

    /// Input that parsed as CSV but has the wrong shape
    InvalidData(String),

    /// CSV reading or writing failed
    Csv(csv::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameters(msg) => write!(f, "Invalid parameters: {}", msg),
            Error::MissingKeyColumn(name) => write!(f, "Missing key column: {}", name),
            Error::NoNumericColumns => write!(f, "Table has no numeric columns"),
            Error::RowNotFound { key, matches: 0 } => write!(f, "Row not found: {}", key),
            Error::RowNotFound { key, matches } => {
                write!(f, "Row not found: {} is ambiguous ({} matching rows)", key, matches)
            }
            Error::InvalidRange {
                requested,
                available,
            } => write!(
                f,
                "Invalid range: {} is outside 1..={}",
                requested, available
            ),
            Error::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Csv(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
