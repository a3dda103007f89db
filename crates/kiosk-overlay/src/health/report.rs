//! The inspection script and the report it produces.

use serde::Deserialize;

/// Evaluated in the main surface. Returns a JSON report describing how much
/// visible content the document holds. Wrapped in try/catch so a document
/// torn down mid-navigation yields `null` rather than a script error.
pub const INSPECT_SCRIPT: &str = r#"
(function() {
    try {
        var body = document.body;
        var text = body ? (body.innerText || '').trim() : '';
        var markup = body ? body.innerHTML.length : 0;
        var bg = body ? getComputedStyle(body).backgroundColor : '';
        if (!bg || bg === 'rgba(0, 0, 0, 0)' || bg === 'transparent') {
            bg = getComputedStyle(document.documentElement).backgroundColor || bg;
        }
        return JSON.stringify({
            textLength: text.length,
            markupLength: markup,
            background: bg,
            href: String(location.href)
        });
    } catch (e) {
        return null;
    }
})()
"#;

/// What the inspection script saw in the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub text_length: usize,
    pub markup_length: usize,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl PageReport {
    /// Parse the value handed back by the webview.
    ///
    /// Webviews return the script's result JSON-encoded, so a report arrives
    /// as a JSON string containing JSON. Both that and a bare object are
    /// accepted. `null`, empty output, or anything malformed gives `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str::<serde_json::Value>(raw).ok()? {
            serde_json::Value::String(inner) => serde_json::from_str(&inner).ok(),
            value @ serde_json::Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }
}
