//! Render state - data structure sent from App layer to UI for rendering

use crate::app::executor::ExecutorStatus;
use crate::messages::ui_events::{InputMode, Panel};
use crate::models::{HttpMethod, InspectorTab, ResponseRecord};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Draft
    pub method: HttpMethod,
    pub url: String,
    pub body: String,
    pub active_tab: InspectorTab,

    // Focus and editing
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Lifecycle
    pub status: ExecutorStatus,
    pub response: Option<ResponseRecord>,
    pub error: Option<String>,
    /// Elapsed of the finished send, or time spent so far while sending
    pub elapsed_ms: Option<u64>,
    pub response_scroll: u16,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    pub fn is_sending(&self) -> bool {
        self.status == ExecutorStatus::Sending
    }
}
