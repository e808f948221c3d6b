//! Request draft - the editable description of the next request

use crate::constants::{DEFAULT_BODY, DEFAULT_URL};
use crate::models::{DraftSnapshot, HttpMethod, InspectorTab};

/// User-editable request, lives for the whole session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDraft {
    method: HttpMethod,
    url: String,
    body: String,
    active_tab: InspectorTab,
}

impl Default for RequestDraft {
    fn default() -> Self {
        RequestDraft {
            method: HttpMethod::GET,
            url: String::from(DEFAULT_URL),
            body: String::from(DEFAULT_BODY),
            active_tab: InspectorTab::Body,
        }
    }
}

impl RequestDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft with a different starting URL (from config)
    pub fn with_url(url: impl Into<String>) -> Self {
        RequestDraft {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn active_tab(&self) -> InspectorTab {
        self.active_tab
    }

    pub fn set_method(&mut self, method: HttpMethod) {
        self.method = method;
    }

    pub fn cycle_method(&mut self) {
        self.method = self.method.next();
    }

    /// Stored verbatim, no trimming or validation
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Stored verbatim, never parsed
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn set_active_tab(&mut self, tab: InspectorTab) {
        self.active_tab = tab;
    }

    pub fn url_mut(&mut self) -> &mut String {
        &mut self.url
    }

    pub fn body_mut(&mut self) -> &mut String {
        &mut self.body
    }

    /// Owned copy; later edits to the draft don't reach it
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            method: self.method,
            url: self.url.clone(),
            body: self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let draft = RequestDraft::new();
        assert_eq!(draft.method(), HttpMethod::GET);
        assert_eq!(draft.url(), "https://api.example.com/users");
        assert_eq!(draft.active_tab(), InspectorTab::Body);
        assert!(draft.body().contains("john@example.com"));
    }

    #[test]
    fn test_snapshot_reflects_last_write_per_field() {
        let mut draft = RequestDraft::new();
        draft.set_method(HttpMethod::POST);
        draft.set_url("https://a.example");
        draft.set_body("first");
        draft.set_method(HttpMethod::DELETE);
        draft.set_url("https://b.example");
        draft.set_body("second");
        draft.set_active_tab(InspectorTab::Headers);

        let snap = draft.snapshot();
        assert_eq!(snap.method, HttpMethod::DELETE);
        assert_eq!(snap.url, "https://b.example");
        assert_eq!(snap.body, "second");
        assert_eq!(draft.active_tab(), InspectorTab::Headers);
    }

    #[test]
    fn test_setters_store_verbatim() {
        let mut draft = RequestDraft::new();
        draft.set_url("  not a url  ");
        draft.set_body("");
        assert_eq!(draft.url(), "  not a url  ");
        assert_eq!(draft.body(), "");
    }

    #[test]
    fn test_snapshot_isolated_from_later_edits() {
        let mut draft = RequestDraft::new();
        let snap = draft.snapshot();
        draft.set_url("https://changed.example");
        draft.body_mut().push('!');
        draft.cycle_method();
        assert_eq!(snap.url, "https://api.example.com/users");
        assert_eq!(snap.method, HttpMethod::GET);
        assert!(!snap.body.ends_with('!'));
    }

    #[test]
    fn test_active_tab_does_not_change_snapshot() {
        let mut draft = RequestDraft::new();
        let before = draft.snapshot();
        draft.set_active_tab(InspectorTab::Params);
        assert_eq!(draft.snapshot(), before);
    }
}
