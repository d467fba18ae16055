// src/error.rs
//
// Typed errors for the load pipeline. The core components are total
// functions except for two failure points: the network fetch and the
// header/data-row check in the parser. Everything above maps both into
// LoadError and presents a single uniform failure message.

use std::{error::Error, fmt, io};

/// The catalog resource could not be retrieved.
#[derive(Debug)]
pub enum FetchError {
    /// TCP connect / socket I/O failed.
    Connect(io::Error),
    /// Server answered with a non-success status line.
    Status(String),
    /// Response had no header/body separator.
    Malformed,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Connect(e) => write!(f, "connection failed: {e}"),
            FetchError::Status(line) => write!(f, "HTTP error: {line}"),
            FetchError::Malformed => write!(f, "malformed HTTP response"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Connect(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FetchError {
    fn from(e: io::Error) -> Self {
        FetchError::Connect(e)
    }
}

/// Raised by the parser when the input has no header or no data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedInputError {
    /// Non-blank lines found (0 or 1).
    pub usable_lines: usize,
}

impl fmt::Display for MalformedInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "catalog file is empty or has no data rows ({} usable line(s))",
            self.usable_lines
        )
    }
}

impl Error for MalformedInputError {}

/// Umbrella error for the whole load operation.
#[derive(Debug)]
pub enum LoadError {
    Fetch(FetchError),
    Malformed(MalformedInputError),
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch(e) => write!(f, "failed to fetch catalog: {e}"),
            LoadError::Malformed(e) => write!(f, "failed to parse catalog: {e}"),
            LoadError::Io(e) => write!(f, "failed to read catalog: {e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Fetch(e) => Some(e),
            LoadError::Malformed(e) => Some(e),
            LoadError::Io(e) => Some(e),
        }
    }
}

impl From<FetchError> for LoadError {
    fn from(e: FetchError) -> Self {
        LoadError::Fetch(e)
    }
}

impl From<MalformedInputError> for LoadError {
    fn from(e: MalformedInputError) -> Self {
        LoadError::Malformed(e)
    }
}
