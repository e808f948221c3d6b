//! Network layer - runs requests through a pluggable transport
//!
//! The Network actor receives execute commands and sends back results
//! tagged with the id it was given.

pub mod actor;
pub mod client;
pub mod simulated;

pub use actor::NetworkActor;
pub use client::HttpTransport;
pub use simulated::SimulatedTransport;

use futures_util::future::BoxFuture;

use crate::error::TransportError;
use crate::models::{DraftSnapshot, TransportPayload};

/// Anything that can carry a request and report back later.
///
/// The returned future owns everything it needs so it can be spawned onto
/// its own task.
pub trait Transport: Send + Sync {
    fn name(&self) -> &'static str;

    fn execute(&self, request: DraftSnapshot) -> BoxFuture<'static, Result<TransportPayload, TransportError>>;
}
