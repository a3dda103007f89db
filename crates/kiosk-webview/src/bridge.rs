//! The overlay bridge: the only path from the overlay page to the host.
//!
//! The overlay page gets a frozen `window.kioskOverlay` object with two
//! functions. Each posts a JSON message through `window.ipc.postMessage`,
//! which the host parses into a [`BridgeRequest`]. Nothing else the page
//! posts is acted on.

use kiosk_common::BridgeError;
use serde::Deserialize;

pub const RELOAD_CHANNEL: &str = "overlay:reload";
pub const MOVE_BY_CHANNEL: &str = "overlay:move-by";

/// Message kinds the host accepts from the overlay.
pub const ALLOWED_BRIDGE_KINDS: &[&str] = &[RELOAD_CHANNEL, MOVE_BY_CHANNEL];

/// Injected into the overlay webview only. The main surface never gets it.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    var post = function(msg) {
        window.ipc.postMessage(JSON.stringify(msg));
    };
    var bridge = Object.freeze({
        requestReload: function() {
            post({ kind: 'overlay:reload' });
        },
        moveBy: function(dx, dy) {
            post({ kind: 'overlay:move-by', payload: { dx: Number(dx), dy: Number(dy) } });
        }
    });
    Object.defineProperty(window, 'kioskOverlay', {
        value: bridge,
        writable: false,
        configurable: false
    });
})();
"#;

/// Raw wire shape.
#[derive(Debug, Deserialize)]
struct WireMessage {
    kind: String,
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

/// A validated request from the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BridgeRequest {
    Reload,
    MoveBy { dx: f64, dy: f64 },
}

pub fn is_bridge_kind_allowed(kind: &str) -> bool {
    ALLOWED_BRIDGE_KINDS.contains(&kind)
}

impl BridgeRequest {
    /// Parse and validate a message body posted by the overlay page.
    pub fn parse(body: &str) -> Result<Self, BridgeError> {
        let msg: WireMessage =
            serde_json::from_str(body).map_err(|e| BridgeError::Malformed(e.to_string()))?;

        if !is_bridge_kind_allowed(&msg.kind) {
            return Err(BridgeError::UnknownKind(msg.kind));
        }

        match msg.kind.as_str() {
            RELOAD_CHANNEL => Ok(Self::Reload),
            MOVE_BY_CHANNEL => {
                let payload = msg.payload.unwrap_or(serde_json::Value::Null);
                let dx = finite_number(&payload, "dx")?;
                let dy = finite_number(&payload, "dy")?;
                Ok(Self::MoveBy { dx, dy })
            }
            other => Err(BridgeError::UnknownKind(other.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Reload => RELOAD_CHANNEL,
            Self::MoveBy { .. } => MOVE_BY_CHANNEL,
        }
    }
}

fn finite_number(payload: &serde_json::Value, field: &str) -> Result<f64, BridgeError> {
    let invalid = |reason: String| BridgeError::InvalidPayload {
        kind: MOVE_BY_CHANNEL.to_string(),
        reason,
    };
    let value = payload
        .get(field)
        .ok_or_else(|| invalid(format!("missing {field}")))?;
    let number = value
        .as_f64()
        .ok_or_else(|| invalid(format!("{field} is not a number")))?;
    if !number.is_finite() {
        return Err(invalid(format!("{field} is not finite")));
    }
    Ok(number)
}
