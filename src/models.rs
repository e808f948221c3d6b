use std::fmt;
use std::str::FromStr;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::PATCH,
        HttpMethod::DELETE,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn next(&self) -> HttpMethod {
        match self {
            HttpMethod::GET => HttpMethod::POST,
            HttpMethod::POST => HttpMethod::PUT,
            HttpMethod::PUT => HttpMethod::PATCH,
            HttpMethod::PATCH => HttpMethod::DELETE,
            HttpMethod::DELETE => HttpMethod::GET,
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT | HttpMethod::PATCH)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown HTTP method: {}", s))
    }
}

/// Inspector tab under the URL bar. Navigation only, never part of a send.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InspectorTab {
    Params,
    #[default]
    Body,
    Headers,
}

impl InspectorTab {
    pub const ALL: [InspectorTab; 3] = [InspectorTab::Params, InspectorTab::Body, InspectorTab::Headers];

    pub fn title(&self) -> &'static str {
        match self {
            InspectorTab::Params => "Params",
            InspectorTab::Body => "Body",
            InspectorTab::Headers => "Headers",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            InspectorTab::Params => 0,
            InspectorTab::Body => 1,
            InspectorTab::Headers => 2,
        }
    }

    pub fn next(&self) -> InspectorTab {
        match self {
            InspectorTab::Params => InspectorTab::Body,
            InspectorTab::Body => InspectorTab::Headers,
            InspectorTab::Headers => InspectorTab::Params,
        }
    }

    pub fn prev(&self) -> InspectorTab {
        match self {
            InspectorTab::Params => InspectorTab::Headers,
            InspectorTab::Body => InspectorTab::Params,
            InspectorTab::Headers => InspectorTab::Body,
        }
    }
}

/// Immutable point-in-time copy of a draft, handed to the transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftSnapshot {
    pub method: HttpMethod,
    pub url: String,
    pub body: String,
}

/// What a transport hands back on success
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportPayload {
    pub status: u16,
    pub status_text: String,
    pub body: String,
    pub size_label: String,
}

/// Response from a completed send
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseRecord {
    pub status: u16,
    pub status_text: String,
    pub elapsed_ms: u64,
    /// Opaque, already formatted (e.g. "1.2 KB")
    pub size_label: String,
    pub body: String,
    pub received_at: chrono::DateTime<chrono::Utc>,
}

impl ResponseRecord {
    pub fn from_payload(payload: TransportPayload, elapsed_ms: u64) -> Self {
        ResponseRecord {
            status: payload.status,
            status_text: payload.status_text,
            elapsed_ms,
            size_label: payload.size_label,
            body: payload.body,
            received_at: chrono::Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// Human-readable byte count: "512 B", "1.2 KB", "3.4 MB"
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}
