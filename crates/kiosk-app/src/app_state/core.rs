//! KioskApp struct definition and constructor.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use kiosk_config::KioskConfig;
use kiosk_overlay::health::CheckTicket;
use kiosk_overlay::{AnchorEngine, HealthMonitor, ReloadTarget};
use kiosk_webview::{WebViewHandle, WebViewManager};

/// Top-level application state.
pub struct KioskApp {
    pub(super) config: KioskConfig,

    // Windowing
    pub(super) main_window: Option<Arc<Window>>,
    pub(super) overlay_window: Option<Arc<Window>>,

    // WebViews
    pub(super) webviews: WebViewManager,
    pub(super) main_view: Option<WebViewHandle>,
    pub(super) overlay_view: Option<WebViewHandle>,

    // Page health
    pub(super) health: HealthMonitor,
    /// Tracked script evaluations awaiting their result.
    pub(super) inspections: HashMap<u64, CheckTicket>,
    /// Whether the overlay window is currently shown.
    pub(super) overlay_shown: bool,

    // Overlay placement
    pub(super) anchor: AnchorEngine,

    pub(super) reload_target: ReloadTarget,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl KioskApp {
    pub fn new(config: KioskConfig) -> Self {
        let health = HealthMonitor::from_config(&config.health);
        let anchor = AnchorEngine::from_config(&config.overlay);
        let reload_target = ReloadTarget::new(config.target.url.clone());
        Self {
            config,
            main_window: None,
            overlay_window: None,
            webviews: WebViewManager::new(),
            main_view: None,
            overlay_view: None,
            health,
            inspections: HashMap::new(),
            overlay_shown: false,
            anchor,
            reload_target,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
