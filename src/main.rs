//! sendpad - actor-based request panel
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - draft + executor state machine processing events
//! - Network Layer (Tokio) - async transport execution

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use sendpad::app::{AppActor, AppState, ExecutorStatus, RequestDraft};
use sendpad::config::{Config, TransportKind};
use sendpad::constants::{APP_NAME, APP_VERSION, NO_RESPONSE_PLACEHOLDER};
use sendpad::messages::ui_events::{key_to_ui_event, InputMode, Panel};
use sendpad::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use sendpad::models::InspectorTab;
use sendpad::network::NetworkActor;
use sendpad::ui::{cursor_row_col, highlight_json, method_color, panel_border, render_inspector_tabs, status_color};

#[derive(Parser)]
#[command(name = "sendpad")]
#[command(about = "Compose a request, send it, watch the response", long_about = None)]
struct Cli {
    /// Send over real HTTP instead of the simulated transport
    #[arg(long)]
    http: bool,

    /// Config file (defaults to ~/.sendpad/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.http {
        config.transport = TransportKind::Http;
    }

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    tracing::info!(version = APP_VERSION, transport = ?config.transport, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(config.build_transport(), net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let state = AppState::with_draft(RequestDraft::with_url(config.default_url.clone()));
    let app_actor = AppActor::with_state(state, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(3),  // Method + URL
            Constraint::Min(6),     // Inspector + Response
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let title = Paragraph::new(format!(" {} v{}", APP_NAME, APP_VERSION))
        .style(Style::default().fg(Color::Black).bg(Color::Cyan).bold());
    f.render_widget(title, chunks[0]);

    draw_url_bar(f, state, chunks[1]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    draw_inspector(f, state, panes[0]);
    draw_response(f, state, panes[1]);
    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_url_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Url;
    let is_editing = state.input_mode == InputMode::Editing;

    let send_label = if state.is_sending() { " [Sending...] " } else { " [Send] " };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border(is_focused, is_editing))
        .title(format!(" {} ", state.method.as_str()))
        .title_style(Style::default().fg(method_color(state.method)).bold())
        .title_bottom(Line::from(send_label).right_aligned());

    let url = if state.url.is_empty() { "Enter request URL" } else { state.url.as_str() };
    f.render_widget(Paragraph::new(url).block(block), area);

    if is_focused && is_editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let (_, col) = cursor_row_col(&state.url, state.cursor_position);
        let cursor_x = (area.x + col + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_inspector(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Inspector;
    let is_editing = is_focused && state.input_mode == InputMode::Editing;

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    f.render_widget(render_inspector_tabs(state.active_tab), parts[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border(is_focused, is_editing));

    let content = match state.active_tab {
        InspectorTab::Body if state.body.is_empty() => {
            Paragraph::new(Span::styled("Request body (JSON)", Style::default().fg(Color::DarkGray)))
        }
        InspectorTab::Body => Paragraph::new(state.body.as_str()),
        InspectorTab::Params | InspectorTab::Headers => Paragraph::new(Span::styled(
            format!("No {} yet", state.active_tab.title().to_lowercase()),
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(content.block(block).wrap(Wrap { trim: false }), parts[1]);

    if is_editing && state.active_tab == InspectorTab::Body {
        let (row, col) = cursor_row_col(&state.body, state.cursor_position);
        let inner = parts[1];
        let x = (inner.x + 1 + col).min(inner.x + inner.width.saturating_sub(2));
        let y = (inner.y + 1 + row).min(inner.y + inner.height.saturating_sub(2));
        f.set_cursor_position(Position::new(x, y));
    }
}

fn draw_response(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Response;

    let mut title = vec![Span::raw(" Response ")];
    if let Some(response) = &state.response {
        title.push(Span::styled(
            format!("{} {} ", response.status, response.status_text),
            Style::default().fg(status_color(response.status)).bold(),
        ));
        title.push(Span::styled(
            format!("{} ", response.size_label),
            Style::default().fg(Color::Gray),
        ));
    }

    let time_text = state
        .elapsed_ms
        .map(|ms| format!(" {}ms ", ms))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border(is_focused, false))
        .title(Line::from(title))
        .title_bottom(Line::from(time_text).right_aligned());

    let lines = match state.status {
        ExecutorStatus::Idle => vec![Line::from(Span::styled(
            NO_RESPONSE_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))],
        ExecutorStatus::Sending => vec![Line::from(Span::styled(
            "Sending...",
            Style::default().fg(Color::Yellow),
        ))],
        ExecutorStatus::Completed => state
            .response
            .as_ref()
            .map(|r| highlight_json(&r.body))
            .unwrap_or_default(),
        ExecutorStatus::Failed => vec![Line::from(Span::styled(
            state.error.clone().unwrap_or_default(),
            Style::default().fg(Color::Red),
        ))],
    };

    let response = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.response_scroll, 0));
    f.render_widget(response, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_sending() {
        " Sending... (s again to resend) "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move | Ctrl+S:send "
    } else {
        " Tab:panel | e:edit | m:method | 1-3:tab | s:send | ?:help | q:quit "
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 60, area);
    let help = [
        ("s / Ctrl+S", "Send (supersedes one in flight)"),
        ("m", "Cycle method"),
        ("Tab / S-Tab", "Next / previous panel"),
        ("e / Enter", "Edit URL or body"),
        ("1 2 3", "Params / Body / Headers"),
        ("Left/Right", "Switch tab (inspector)"),
        ("Up/Down", "Scroll response"),
        ("q / Ctrl+C", "Quit"),
    ];

    let lines: Vec<Line> = help
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", key), Style::default().fg(Color::Yellow).bold()),
                Span::raw(*desc),
            ])
        })
        .collect();

    f.render_widget(Clear, popup);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (any key to close) "),
    );
    f.render_widget(paragraph, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
