/// Configuration for creating one of the kiosk's webviews.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Initial URL for the main surface (`about:blank` if unset). The
    /// overlay always renders its bundled page.
    pub url: Option<String>,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Hand new-window requests to the OS browser (main surface only).
    pub open_external_links: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            url: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            open_external_links: true,
        }
    }
}
