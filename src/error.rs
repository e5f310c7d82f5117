// SPDX-License-Identifier: MPL-2.0
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchError),
}

/// Errors raised while obtaining an image's raw bytes.
///
/// These never reach the host's UI glue; the panel controller converts
/// every one of them into a cleared panel and a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Local mode was requested but no document is open.
    /// Terminal for the call; there is nothing to retry against.
    NoActiveFile,

    /// The host could not produce a byte buffer for the active document
    /// (e.g. it only has a text representation).
    UnreadableFile(String),

    /// The remote read failed.
    Network(NetworkError),
}

/// Failure modes of a remote byte fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    Transport(String),

    /// The server answered with a non-success status code.
    Status(u16),
}

impl FetchError {
    /// Short machine-readable label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NoActiveFile => "no-active-file",
            FetchError::UnreadableFile(_) => "unreadable-file",
            FetchError::Network(NetworkError::Transport(_)) => "network-transport",
            FetchError::Network(NetworkError::Status(_)) => "network-status",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Transport(msg) => write!(f, "transport failure: {msg}"),
            NetworkError::Status(code) => write!(f, "unexpected HTTP status {code}"),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NoActiveFile => write!(f, "no active document to read from"),
            FetchError::UnreadableFile(msg) => {
                write!(f, "active document is not readable as bytes: {msg}")
            }
            FetchError::Network(err) => write!(f, "network error: {err}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O Error: {msg}"),
            Error::Config(msg) => write!(f, "Config Error: {msg}"),
            Error::Fetch(err) => write!(f, "Fetch Error: {err}"),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for FetchError {}
impl std::error::Error for NetworkError {}

impl From<NetworkError> for FetchError {
    fn from(err: NetworkError) -> Self {
        FetchError::Network(err)
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
