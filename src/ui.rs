use ratatui::{prelude::*, widgets::*};

use crate::models::{HttpMethod, InspectorTab};

/// Border style for a panel given focus and edit state
pub fn panel_border(is_focused: bool, is_editing: bool) -> Style {
    if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Params / Body / Headers strip
pub fn render_inspector_tabs(selected: InspectorTab) -> Tabs<'static> {
    let titles: Vec<Line> = InspectorTab::ALL.iter().map(|t| Line::from(t.title())).collect();

    Tabs::new(titles)
        .select(selected.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Blue).bold())
        .divider("|")
}

/// Simple JSON syntax highlighting. Keys cyan, strings green, numbers
/// yellow, literals magenta. Lines that aren't JSON pass through uncoloured.
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines().map(highlight_line).collect()
}

fn highlight_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        let (token, style) = match c {
            '"' => {
                let end = string_end(rest);
                let token = &rest[..end];
                let is_key = rest[end..].trim_start().starts_with(':');
                let color = if is_key { Color::Cyan } else { Color::Green };
                (token, Style::default().fg(color))
            }
            '{' | '}' | '[' | ']' => (&rest[..1], Style::default().fg(Color::Yellow)),
            '-' | '0'..='9' => {
                let end = rest
                    .find(|ch: char| !(ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E')))
                    .unwrap_or(rest.len());
                (&rest[..end], Style::default().fg(Color::Yellow))
            }
            _ => {
                if let Some(lit) = ["true", "false", "null"].into_iter().find(|l| rest.starts_with(l)) {
                    (&rest[..lit.len()], Style::default().fg(Color::Magenta))
                } else {
                    let first = c.len_utf8();
                    let end = rest[first..]
                        .find(|ch: char| matches!(ch, '"' | '{' | '}' | '[' | ']' | '-' | '0'..='9' | 't' | 'f' | 'n'))
                        .map(|i| i + first)
                        .unwrap_or(rest.len());
                    (&rest[..end], Style::default())
                }
            }
        };
        spans.push(Span::styled(token.to_string(), style));
        rest = &rest[token.len()..];
    }

    Line::from(spans)
}

/// Byte offset just past the closing quote of the string starting at `s[0]`
fn string_end(s: &str) -> usize {
    let mut escaped = false;
    for (i, ch) in s.char_indices().skip(1) {
        match ch {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return i + 1,
            _ => escaped = false,
        }
    }
    s.len()
}

/// Row and column (in chars) of a byte cursor within `text`
pub fn cursor_row_col(text: &str, cursor: usize) -> (u16, u16) {
    let before = text.get(..cursor).unwrap_or(text);
    let row = before.matches('\n').count();
    let col = before.rsplit('\n').next().map(|l| l.chars().count()).unwrap_or(0);
    (row as u16, col as u16)
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Method color
pub fn method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::GET => Color::Green,
        HttpMethod::POST => Color::Yellow,
        HttpMethod::PUT => Color::Blue,
        HttpMethod::PATCH => Color::Cyan,
        HttpMethod::DELETE => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let body = "{\n  \"id\": 1,\n  \"name\": \"Jo\\\"hn\",\n  \"ok\": true\n}";
        let lines = highlight_json(body);
        let joined: Vec<String> = lines.iter().map(text_of).collect();
        assert_eq!(joined.join("\n"), body);
    }

    #[test]
    fn test_highlight_key_and_value_colors() {
        let line = highlight_line("  \"name\": \"John\",");
        let key = line.spans.iter().find(|s| s.content == "\"name\"").unwrap();
        let value = line.spans.iter().find(|s| s.content == "\"John\"").unwrap();
        assert_eq!(key.style.fg, Some(Color::Cyan));
        assert_eq!(value.style.fg, Some(Color::Green));
    }

    #[test]
    fn test_plain_text_passes_through() {
        let line = highlight_line("Request timed out after 30s");
        assert_eq!(text_of(&line), "Request timed out after 30s");
    }

    #[test]
    fn test_cursor_column_counts_chars() {
        // 'é' is two bytes but one column
        assert_eq!(cursor_row_col("héllo", 3), (0, 2));
        assert_eq!(cursor_row_col("{\n  \"ü\": 1", 8), (1, 5));
        assert_eq!(cursor_row_col("abc", 99), (0, 3));
    }

    #[test]
    fn test_colors() {
        assert_eq!(status_color(204), Color::Green);
        assert_eq!(status_color(404), Color::Red);
        assert_eq!(method_color(HttpMethod::DELETE), Color::Red);
    }
}
