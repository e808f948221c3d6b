//! Network messages - communication between App and Network layers

use crate::error::TransportError;
use crate::models::{DraftSnapshot, TransportPayload};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Run a request through the transport
    Execute {
        id: u64,
        request: DraftSnapshot,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    Success {
        id: u64,
        payload: TransportPayload,
        time_ms: u64,
    },
    Failure {
        id: u64,
        error: TransportError,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Success { id, .. } => *id,
            NetworkResponse::Failure { id, .. } => *id,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::Success { time_ms, .. } => *time_ms,
            NetworkResponse::Failure { time_ms, .. } => *time_ms,
        }
    }
}
