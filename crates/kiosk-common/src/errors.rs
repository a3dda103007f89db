use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Rejection reasons for messages arriving from the overlay page.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("malformed bridge message: {0}")]
    Malformed(String),

    #[error("unknown bridge kind: {0}")]
    UnknownKind(String),

    #[error("invalid payload for {kind}: {reason}")]
    InvalidPayload { kind: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum KioskError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Window(String),

    #[error("webview error: {0}")]
    WebView(String),
}
