//! Simulated transport - fixed delay, always succeeds

use std::time::Duration;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::constants::SIMULATED_LATENCY_MS;
use crate::error::TransportError;
use crate::models::{DraftSnapshot, TransportPayload};
use crate::network::Transport;

pub struct SimulatedTransport {
    latency: Duration,
    payload: TransportPayload,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(SIMULATED_LATENCY_MS))
    }
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        SimulatedTransport {
            latency,
            payload: default_payload(),
        }
    }

    /// Replace the canned payload
    pub fn with_payload(mut self, payload: TransportPayload) -> Self {
        self.payload = payload;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

fn default_payload() -> TransportPayload {
    let user = serde_json::json!({
        "id": 1,
        "name": "John",
        "email": "john@example.com"
    });
    TransportPayload {
        status: 200,
        status_text: String::from("OK"),
        body: serde_json::to_string_pretty(&user).unwrap_or_else(|_| user.to_string()),
        size_label: String::from("1.2 KB"),
    }
}

impl Transport for SimulatedTransport {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn execute(&self, request: DraftSnapshot) -> BoxFuture<'static, Result<TransportPayload, TransportError>> {
        let latency = self.latency;
        let payload = self.payload.clone();
        async move {
            tracing::debug!(url = %request.url, method = %request.method, ?latency, "Simulating request");
            tokio::time::sleep(latency).await;
            Ok(payload)
        }
        .boxed()
    }
}
