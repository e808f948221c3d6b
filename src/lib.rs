//! # sendpad
//!
//! A terminal request panel: compose a request, send it, watch the response.
//!
//! ## Features
//! - HTTP methods: GET, POST, PUT, PATCH, DELETE
//! - Request body editor
//! - Simulated or real (reqwest) transport
//! - Newer sends supersede older ones; late results are dropped
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (draft + request executor state machine)
//! - Network Layer (Tokio runtime, pluggable transport)

pub mod models;
pub mod error;
pub mod config;
pub mod constants;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{DraftSnapshot, HttpMethod, InspectorTab, ResponseRecord, TransportPayload};
pub use error::TransportError;
pub use config::{Config, TransportKind};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor, Disposition, ExecutorState, ExecutorStatus, RequestDraft, RequestExecutor};
pub use network::{HttpTransport, NetworkActor, SimulatedTransport, Transport};
