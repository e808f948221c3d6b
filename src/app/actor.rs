//! App actor - message loop processing UI events and network responses

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::app::executor::Disposition;
use crate::app::state::AppState;
use crate::constants::SENDING_TICK_MS;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        Self::with_state(AppState::new(), network_tx, render_tx)
    }

    pub fn with_state(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        // Refreshes the elapsed timer while a send is outstanding
        let mut tick = tokio::time::interval(Duration::from_millis(SENDING_TICK_MS));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    // Quit signal received, or the view is gone
                    let quit = event.map_or(true, |event| self.handle_ui_event(event));
                    if quit {
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    // Stale results leave the view untouched
                    if self.state.handle_response(response) == Disposition::Applied {
                        let _ = self.render_tx.send(self.state.to_render_state());
                    }
                }
                _ = tick.tick(), if self.state.executor.is_sending() => {
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Draft fields
            UiEvent::SetMethod(method) => self.state.set_method(method),
            UiEvent::CycleMethod => self.state.cycle_method(),
            UiEvent::SetUrl(url) => self.state.set_url(url),
            UiEvent::SetBody(body) => self.state.set_body(body),
            UiEvent::SetActiveTab(tab) => self.state.set_active_tab(tab),
            UiEvent::NextTab => self.state.next_tab(),
            UiEvent::PrevTab => self.state.prev_tab(),

            // Navigation
            UiEvent::NextPanel => self.state.next_panel(),
            UiEvent::PrevPanel => self.state.prev_panel(),
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Newline => self.state.enter_char('\n'),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Lifecycle
            UiEvent::Send => {
                let cmd = self.state.send_request();
                let _ = self.network_tx.send(cmd);
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
