//! Request executor - the send lifecycle state machine
//!
//! `Idle -> Sending -> Completed | Failed`, and back to `Sending` on the next
//! send. Every send gets a fresh id; transport results are applied only if
//! their id is still the outstanding one, so a late result from a superseded
//! send can never overwrite a newer one.
//!
//! The response slot is cleared when a send starts. While `Sending` the view
//! shows an in-flight placeholder rather than the previous body, and a failed
//! send leaves no record behind.

use std::time::Duration;
use tokio::time::Instant;

use crate::error::TransportError;
use crate::models::{DraftSnapshot, ResponseRecord, TransportPayload};

/// Current lifecycle state, with the data each state owns
#[derive(Clone, Debug, Default)]
pub enum ExecutorState {
    #[default]
    Idle,
    Sending {
        id: u64,
        request: DraftSnapshot,
        started_at: Instant,
    },
    Completed {
        id: u64,
        request: DraftSnapshot,
        response: ResponseRecord,
    },
    Failed {
        id: u64,
        request: DraftSnapshot,
        error: TransportError,
        elapsed_ms: u64,
    },
}

/// Data-less tag of [`ExecutorState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExecutorStatus {
    #[default]
    Idle,
    Sending,
    Completed,
    Failed,
}

/// Work handed to the transport for one send
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    pub id: u64,
    pub request: DraftSnapshot,
}

/// Whether a transport result changed the executor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Applied,
    /// Result for a send that is no longer outstanding; dropped
    Stale,
}

#[derive(Debug)]
pub struct RequestExecutor {
    state: ExecutorState,
    next_id: u64,
}

impl Default for RequestExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestExecutor {
    pub fn new() -> Self {
        RequestExecutor {
            state: ExecutorState::Idle,
            next_id: 1,
        }
    }

    /// Start a send from any state. A send already in flight is superseded.
    pub fn send(&mut self, request: DraftSnapshot) -> Dispatch {
        let id = self.next_id;
        self.next_id += 1;

        if let Some(previous) = self.pending_id() {
            tracing::info!(previous, id, "Superseding in-flight request");
        }

        self.state = ExecutorState::Sending {
            id,
            request: request.clone(),
            started_at: Instant::now(),
        };

        Dispatch { id, request }
    }

    /// Transport succeeded for send `id`
    pub fn complete(&mut self, id: u64, payload: TransportPayload, elapsed_ms: u64) -> Disposition {
        match self.outstanding_request(id) {
            Some(request) => {
                tracing::info!(id, status = payload.status, elapsed_ms, "Request completed");
                self.state = ExecutorState::Completed {
                    id,
                    request,
                    response: ResponseRecord::from_payload(payload, elapsed_ms),
                };
                Disposition::Applied
            }
            None => self.discard(id),
        }
    }

    /// Transport failed for send `id`
    pub fn fail(&mut self, id: u64, error: TransportError, elapsed_ms: u64) -> Disposition {
        match self.outstanding_request(id) {
            Some(request) => {
                tracing::warn!(id, %error, elapsed_ms, "Request failed");
                self.state = ExecutorState::Failed {
                    id,
                    request,
                    error,
                    elapsed_ms,
                };
                Disposition::Applied
            }
            None => self.discard(id),
        }
    }

    fn outstanding_request(&self, id: u64) -> Option<DraftSnapshot> {
        match &self.state {
            ExecutorState::Sending { id: pending, request, .. } if *pending == id => Some(request.clone()),
            _ => None,
        }
    }

    fn discard(&self, id: u64) -> Disposition {
        tracing::debug!(id, pending = ?self.pending_id(), "Discarding stale result");
        Disposition::Stale
    }

    pub fn state(&self) -> &ExecutorState {
        &self.state
    }

    pub fn status(&self) -> ExecutorStatus {
        match self.state {
            ExecutorState::Idle => ExecutorStatus::Idle,
            ExecutorState::Sending { .. } => ExecutorStatus::Sending,
            ExecutorState::Completed { .. } => ExecutorStatus::Completed,
            ExecutorState::Failed { .. } => ExecutorStatus::Failed,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, ExecutorState::Sending { .. })
    }

    pub fn pending_id(&self) -> Option<u64> {
        match self.state {
            ExecutorState::Sending { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Snapshot that produced the current state, if any
    pub fn current_request(&self) -> Option<&DraftSnapshot> {
        match &self.state {
            ExecutorState::Idle => None,
            ExecutorState::Sending { request, .. }
            | ExecutorState::Completed { request, .. }
            | ExecutorState::Failed { request, .. } => Some(request),
        }
    }

    /// Only `Some` in `Completed`
    pub fn latest_response(&self) -> Option<&ResponseRecord> {
        match &self.state {
            ExecutorState::Completed { response, .. } => Some(response),
            _ => None,
        }
    }

    pub fn latest_error(&self) -> Option<&TransportError> {
        match &self.state {
            ExecutorState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Live timer while a send is outstanding
    pub fn elapsed_so_far(&self) -> Option<Duration> {
        match self.state {
            ExecutorState::Sending { started_at, .. } => Some(started_at.elapsed()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpMethod;

    fn snapshot(url: &str) -> DraftSnapshot {
        DraftSnapshot {
            method: HttpMethod::GET,
            url: url.to_string(),
            body: String::new(),
        }
    }

    fn payload(body: &str) -> TransportPayload {
        TransportPayload {
            status: 200,
            status_text: "OK".to_string(),
            body: body.to_string(),
            size_label: "1.2 KB".to_string(),
        }
    }

    #[test]
    fn test_starts_idle() {
        let exec = RequestExecutor::new();
        assert_eq!(exec.status(), ExecutorStatus::Idle);
        assert!(exec.latest_response().is_none());
        assert!(exec.current_request().is_none());
    }

    #[test]
    fn test_send_enters_sending_synchronously() {
        let mut exec = RequestExecutor::new();
        let dispatch = exec.send(snapshot("https://a.example"));
        assert_eq!(exec.status(), ExecutorStatus::Sending);
        assert_eq!(exec.pending_id(), Some(dispatch.id));
        assert_eq!(dispatch.request.url, "https://a.example");
        assert!(exec.elapsed_so_far().is_some());
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut exec = RequestExecutor::new();
        let a = exec.send(snapshot("a")).id;
        let b = exec.send(snapshot("b")).id;
        let c = exec.send(snapshot("c")).id;
        assert!(a < b && b < c);
    }

    #[test]
    fn test_success_stores_payload() {
        let mut exec = RequestExecutor::new();
        let id = exec.send(snapshot("https://a.example")).id;

        let result = exec.complete(id, payload("{}"), 42);
        assert_eq!(result, Disposition::Applied);
        assert_eq!(exec.status(), ExecutorStatus::Completed);

        let record = exec.latest_response().unwrap();
        assert_eq!(record.status, 200);
        assert_eq!(record.status_text, "OK");
        assert_eq!(record.body, "{}");
        assert_eq!(record.size_label, "1.2 KB");
        assert_eq!(record.elapsed_ms, 42);
        assert!(exec.latest_error().is_none());
    }

    #[test]
    fn test_failure_stores_error_and_no_record() {
        let mut exec = RequestExecutor::new();
        let id = exec.send(snapshot("https://a.example")).id;

        let err = TransportError::Connect("refused".to_string());
        assert_eq!(exec.fail(id, err.clone(), 3), Disposition::Applied);
        assert_eq!(exec.status(), ExecutorStatus::Failed);
        assert_eq!(exec.latest_error(), Some(&err));
        assert!(exec.latest_response().is_none());
    }

    #[test]
    fn test_superseded_result_is_discarded() {
        let mut exec = RequestExecutor::new();
        let first = exec.send(snapshot("https://first.example")).id;
        let second = exec.send(snapshot("https://second.example")).id;

        assert_eq!(exec.complete(first, payload("first"), 500), Disposition::Stale);
        assert_eq!(exec.status(), ExecutorStatus::Sending);
        assert_eq!(exec.pending_id(), Some(second));

        assert_eq!(exec.complete(second, payload("second"), 10), Disposition::Applied);
        assert_eq!(exec.latest_response().unwrap().body, "second");
        assert_eq!(exec.current_request().unwrap().url, "https://second.example");
    }

    #[test]
    fn test_late_result_after_completion_is_discarded() {
        let mut exec = RequestExecutor::new();
        let first = exec.send(snapshot("first")).id;
        let second = exec.send(snapshot("second")).id;
        exec.complete(second, payload("second"), 10);

        assert_eq!(exec.complete(first, payload("first"), 900), Disposition::Stale);
        assert_eq!(exec.fail(first, TransportError::Timeout { secs: 30 }, 900), Disposition::Stale);
        assert_eq!(exec.latest_response().unwrap().body, "second");
    }

    #[test]
    fn test_duplicate_result_is_discarded() {
        let mut exec = RequestExecutor::new();
        let id = exec.send(snapshot("a")).id;
        exec.complete(id, payload("once"), 1);
        assert_eq!(exec.complete(id, payload("twice"), 2), Disposition::Stale);
        assert_eq!(exec.latest_response().unwrap().body, "once");
    }

    #[test]
    fn test_result_while_idle_is_discarded() {
        let mut exec = RequestExecutor::new();
        assert_eq!(exec.complete(1, payload("x"), 1), Disposition::Stale);
        assert_eq!(exec.status(), ExecutorStatus::Idle);
    }

    #[test]
    fn test_send_clears_previous_record() {
        let mut exec = RequestExecutor::new();
        let id = exec.send(snapshot("a")).id;
        exec.complete(id, payload("old"), 1);
        assert!(exec.latest_response().is_some());

        exec.send(snapshot("b"));
        assert_eq!(exec.status(), ExecutorStatus::Sending);
        assert!(exec.latest_response().is_none());
    }

    #[test]
    fn test_resend_after_failure() {
        let mut exec = RequestExecutor::new();
        let id = exec.send(snapshot("a")).id;
        exec.fail(id, TransportError::Timeout { secs: 30 }, 30_000);

        let retry = exec.send(snapshot("a")).id;
        assert_eq!(exec.status(), ExecutorStatus::Sending);
        assert!(exec.latest_error().is_none());
        exec.complete(retry, payload("ok"), 5);
        assert_eq!(exec.status(), ExecutorStatus::Completed);
    }
}
