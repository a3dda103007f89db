//! Blank-page heuristic.

use kiosk_common::Color;
use kiosk_config::schema::HealthConfig;

use super::report::PageReport;

/// URL prefixes browsers use for their own load-error pages.
const ERROR_DOCUMENT_PREFIXES: &[&str] = &[
    "chrome-error://",
    "edge-error://",
    "about:neterror",
    "about:certerror",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankThresholds {
    pub min_text_len: usize,
    pub min_markup_len: usize,
}

impl Default for BlankThresholds {
    fn default() -> Self {
        Self {
            min_text_len: 5,
            min_markup_len: 80,
        }
    }
}

impl From<&HealthConfig> for BlankThresholds {
    fn from(config: &HealthConfig) -> Self {
        Self {
            min_text_len: config.min_text_len as usize,
            min_markup_len: config.min_markup_len as usize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Page rendered something; hide the overlay.
    Content,
    /// Page is effectively empty; show the overlay.
    Blank,
    /// The browser replaced the page with its own error document.
    ErrorDocument,
    /// Inspection could not run. Treated like `Content`.
    Inconclusive,
}

impl Verdict {
    pub fn wants_overlay(self) -> bool {
        matches!(self, Verdict::Blank | Verdict::ErrorDocument)
    }
}

/// Classify an inspection result.
///
/// Blank means all three hold: visible text shorter than `min_text_len`,
/// markup shorter than `min_markup_len`, and a white or transparent
/// background. A background that cannot be parsed counts as not white.
pub fn classify(report: Option<&PageReport>, thresholds: BlankThresholds) -> Verdict {
    let Some(report) = report else {
        return Verdict::Inconclusive;
    };

    if report.href.as_deref().is_some_and(is_error_document) {
        return Verdict::ErrorDocument;
    }

    let little_text = report.text_length < thresholds.min_text_len;
    let little_markup = report.markup_length < thresholds.min_markup_len;
    let plain_background = Color::from_css(&report.background)
        .is_some_and(|c| c.is_transparent() || c.is_white());

    if little_text && little_markup && plain_background {
        Verdict::Blank
    } else {
        Verdict::Content
    }
}

pub fn is_error_document(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    ERROR_DOCUMENT_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}
