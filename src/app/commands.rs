//! Command handlers - business logic for processing UI events

use crate::app::executor::Disposition;
use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{HttpMethod, InspectorTab};

impl AppState {
    // ========================
    // Draft fields
    // ========================

    pub fn set_method(&mut self, method: HttpMethod) {
        self.draft.set_method(method);
    }

    pub fn cycle_method(&mut self) {
        self.draft.cycle_method();
    }

    pub fn set_url(&mut self, url: String) {
        self.draft.set_url(url);
        self.clamp_cursor();
    }

    pub fn set_body(&mut self, body: String) {
        self.draft.set_body(body);
        self.clamp_cursor();
    }

    pub fn set_active_tab(&mut self, tab: InspectorTab) {
        self.draft.set_active_tab(tab);
        self.input_mode = InputMode::Normal;
    }

    pub fn next_tab(&mut self) {
        self.set_active_tab(self.draft.active_tab().next());
    }

    pub fn prev_tab(&mut self) {
        self.set_active_tab(self.draft.active_tab().prev());
    }

    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
        self.input_mode = InputMode::Normal;
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
        self.input_mode = InputMode::Normal;
    }

    pub fn scroll_up(&mut self) {
        self.response_scroll = self.response_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.response_scroll = self.response_scroll.saturating_add(1);
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if let Some(len) = self.current_input().map(str::len) {
            self.input_mode = InputMode::Editing;
            self.cursor_position = len;
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        let Some(input) = self.current_input() else { return };
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        let Some(input) = self.current_input() else { return };
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        self.clamp_cursor();
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            if cursor_pos <= input.len() {
                input.insert(cursor_pos, c);
                self.cursor_position = cursor_pos + c.len_utf8();
            }
        }
    }

    pub fn delete_char(&mut self) {
        self.clamp_cursor();
        let cursor_pos = self.cursor_position;
        if cursor_pos == 0 {
            return;
        }
        if let Some(input) = self.current_input_mut() {
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    /// Keep the cursor inside the focused field and on a char boundary
    fn clamp_cursor(&mut self) {
        self.cursor_position = match self.current_input() {
            Some(input) => {
                let mut pos = self.cursor_position.min(input.len());
                while !input.is_char_boundary(pos) {
                    pos -= 1;
                }
                pos
            }
            None => 0,
        };
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Request sending
    // ========================

    /// Snapshot the draft and start a send. Always yields a command; an
    /// outstanding send is superseded rather than blocking this one.
    pub fn send_request(&mut self) -> NetworkCommand {
        if self.input_mode == InputMode::Editing {
            self.stop_editing();
        }

        let dispatch = self.executor.send(self.draft.snapshot());
        self.response_scroll = 0;

        NetworkCommand::Execute {
            id: dispatch.id,
            request: dispatch.request,
        }
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) -> Disposition {
        match response {
            NetworkResponse::Success { id, payload, time_ms } => self.executor.complete(id, payload, time_ms),
            NetworkResponse::Failure { id, error, time_ms } => self.executor.fail(id, error, time_ms),
        }
    }

    /// Whether the focused panel accepts text
    pub fn is_editable(&self) -> bool {
        match self.active_panel {
            Panel::Url => true,
            Panel::Inspector => self.draft.active_tab() == InspectorTab::Body,
            Panel::Response => false,
        }
    }
}
