//! Reload target tracking.

/// Remembers the last URL that loaded successfully so a reload returns the
/// user to where they were, falling back to the start URL otherwise.
#[derive(Debug, Clone)]
pub struct ReloadTarget {
    fallback: String,
    last_known: Option<String>,
}

impl ReloadTarget {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            last_known: None,
        }
    }

    /// Record a successfully finished navigation. Only web URLs are kept;
    /// `about:blank` and browser-internal pages are ignored.
    pub fn record_success(&mut self, url: &str) {
        if is_web_url(url) {
            self.last_known = Some(url.to_string());
        }
    }

    pub fn last_known(&self) -> Option<&str> {
        self.last_known.as_deref()
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Where a reload should navigate.
    pub fn target(&self) -> &str {
        self.last_known.as_deref().unwrap_or(&self.fallback)
    }
}

fn is_web_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}
