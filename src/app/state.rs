//! App state - pure data structure with no I/O logic

use crate::app::draft::RequestDraft;
use crate::app::executor::{ExecutorState, RequestExecutor};
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::InspectorTab;

/// Main application state - pure data, no I/O
#[derive(Debug, Default)]
pub struct AppState {
    // Request composition and lifecycle
    pub draft: RequestDraft,
    pub executor: RequestExecutor,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub response_scroll: u16,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_draft(RequestDraft::new())
    }

    pub fn with_draft(draft: RequestDraft) -> Self {
        let cursor_position = draft.url().len();
        AppState {
            draft,
            cursor_position,
            ..Default::default()
        }
    }

    /// Content of the field under the cursor, if the focused panel is editable
    pub fn current_input(&self) -> Option<&str> {
        match self.active_panel {
            Panel::Url => Some(self.draft.url()),
            Panel::Inspector if self.draft.active_tab() == InspectorTab::Body => Some(self.draft.body()),
            _ => None,
        }
    }

    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.active_panel {
            Panel::Url => Some(self.draft.url_mut()),
            Panel::Inspector if self.draft.active_tab() == InspectorTab::Body => Some(self.draft.body_mut()),
            _ => None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let elapsed_ms = match self.executor.state() {
            ExecutorState::Idle => None,
            ExecutorState::Sending { .. } => self.executor.elapsed_so_far().map(|d| d.as_millis() as u64),
            ExecutorState::Completed { response, .. } => Some(response.elapsed_ms),
            ExecutorState::Failed { elapsed_ms, .. } => Some(*elapsed_ms),
        };

        RenderState {
            method: self.draft.method(),
            url: self.draft.url().to_string(),
            body: self.draft.body().to_string(),
            active_tab: self.draft.active_tab(),
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            status: self.executor.status(),
            response: self.executor.latest_response().cloned(),
            error: self.executor.latest_error().map(|e| e.to_string()),
            elapsed_ms,
            response_scroll: self.response_scroll,
            show_help: self.show_help,
        }
    }
}
