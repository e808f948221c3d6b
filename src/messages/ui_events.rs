//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::{HttpMethod, InspectorTab};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Draft fields
    SetMethod(HttpMethod),
    CycleMethod,
    SetUrl(String),
    SetBody(String),
    SetActiveTab(InspectorTab),
    NextTab,
    PrevTab,

    // Focus navigation
    NextPanel,
    PrevPanel,
    ScrollUp,
    ScrollDown,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Newline,
    Backspace,
    CursorLeft,
    CursorRight,

    // Lifecycle
    Send,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused panel (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Panel {
    #[default]
    Url,
    Inspector,
    Response,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Url => Panel::Inspector,
            Panel::Inspector => Panel::Response,
            Panel::Response => Panel::Url,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Url => Panel::Response,
            Panel::Inspector => Panel::Url,
            Panel::Response => Panel::Inspector,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            // Send from anywhere, even mid-edit
            KeyCode::Char('s') => return Some(UiEvent::Send),
            _ => {}
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('m') => Some(UiEvent::CycleMethod),
            KeyCode::Char('s') => Some(UiEvent::Send),
            KeyCode::Char('e') | KeyCode::Enter => match active_panel {
                Panel::Url | Panel::Inspector => Some(UiEvent::StartEditing),
                Panel::Response => None,
            },
            KeyCode::Char('1') => Some(UiEvent::SetActiveTab(InspectorTab::Params)),
            KeyCode::Char('2') => Some(UiEvent::SetActiveTab(InspectorTab::Body)),
            KeyCode::Char('3') => Some(UiEvent::SetActiveTab(InspectorTab::Headers)),
            KeyCode::Left if active_panel == Panel::Inspector => Some(UiEvent::PrevTab),
            KeyCode::Right if active_panel == Panel::Inspector => Some(UiEvent::NextTab),
            KeyCode::Up if active_panel == Panel::Response => Some(UiEvent::ScrollUp),
            KeyCode::Down if active_panel == Panel::Response => Some(UiEvent::ScrollDown),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            KeyCode::Enter => match active_panel {
                Panel::Url => Some(UiEvent::Send),
                _ => Some(UiEvent::Newline),
            },
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_in_url_sends() {
        let event = key_to_ui_event(press(KeyCode::Enter), Panel::Url, InputMode::Editing, false);
        assert!(matches!(event, Some(UiEvent::Send)));
    }

    #[test]
    fn test_enter_in_body_is_newline() {
        let event = key_to_ui_event(press(KeyCode::Enter), Panel::Inspector, InputMode::Editing, false);
        assert!(matches!(event, Some(UiEvent::Newline)));
    }

    #[test]
    fn test_help_swallows_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('s')), Panel::Url, InputMode::Normal, true);
        assert!(matches!(event, Some(UiEvent::CloseHelp)));
    }

    #[test]
    fn test_ctrl_s_sends_while_editing() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let event = key_to_ui_event(key, Panel::Inspector, InputMode::Editing, false);
        assert!(matches!(event, Some(UiEvent::Send)));
    }
}
