//! Network actor - runs transport calls in the Tokio async runtime

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::Transport;

/// Network actor that processes execute commands
pub struct NetworkActor {
    transport: Arc<dyn Transport>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(transport: Arc<dyn Transport>, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            transport,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        tracing::info!(transport = self.transport.name(), "Network actor started");

        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Execute { id, request }) => {
                            let response_tx = self.response_tx.clone();
                            tracing::info!(id, url = %request.url, method = %request.method, "Executing request");
                            let call = self.transport.execute(request);

                            // Superseded calls run to completion; the app drops their results
                            self.active_requests.spawn(async move {
                                let start = Instant::now();
                                let result = call.await;
                                let time_ms = start.elapsed().as_millis() as u64;
                                let response = match result {
                                    Ok(payload) => NetworkResponse::Success { id, payload, time_ms },
                                    Err(error) => NetworkResponse::Failure { id, error, time_ms },
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Reap finished tasks
                Some(result) = self.active_requests.join_next() => {
                    if let Err(e) = result {
                        if !e.is_cancelled() {
                            tracing::error!(error = %e, "Request task panicked");
                        }
                    }
                }
            }
        }

        tracing::info!("Network actor stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftSnapshot, HttpMethod};
    use crate::network::SimulatedTransport;
    use std::time::Duration;

    fn request(url: &str) -> DraftSnapshot {
        DraftSnapshot {
            method: HttpMethod::GET,
            url: url.to_string(),
            body: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_echoes_id_and_measures_time() {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let actor = NetworkActor::new(Arc::new(SimulatedTransport::new(Duration::from_millis(500))), resp_tx);
        let handle = tokio::spawn(actor.run(cmd_rx));

        cmd_tx.send(NetworkCommand::Execute { id: 7, request: request("https://a.example") }).unwrap();

        match resp_rx.recv().await.unwrap() {
            NetworkResponse::Success { id, payload, time_ms } => {
                assert_eq!(id, 7);
                assert_eq!(payload.status, 200);
                assert!((500..510).contains(&time_ms));
            }
            other => panic!("unexpected response: {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_aborts_in_flight() {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let actor = NetworkActor::new(Arc::new(SimulatedTransport::new(Duration::from_secs(60))), resp_tx);
        let handle = tokio::spawn(actor.run(cmd_rx));

        cmd_tx.send(NetworkCommand::Execute { id: 1, request: request("https://slow.example") }).unwrap();
        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();

        assert!(resp_rx.recv().await.is_none());
    }
}
