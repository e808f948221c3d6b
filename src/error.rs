use thiserror::Error as ThisError;

/// Failure surfaced by a transport. Ends a send in the `Failed` state.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum TransportError {
    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request failed: {0}")]
    Protocol(String),

    #[error("Error reading body: {0}")]
    Body(String),

    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}
