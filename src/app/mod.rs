//! App layer - central state management and command processing
//!
//! The App actor receives UI events and network responses,
//! updates state, and emits network commands and render state.

pub mod draft;
pub mod executor;
pub mod state;
pub mod actor;
pub mod commands;

pub use draft::RequestDraft;
pub use executor::{Disposition, Dispatch, ExecutorState, ExecutorStatus, RequestExecutor};
pub use state::AppState;
pub use actor::AppActor;
