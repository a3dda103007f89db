//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates the two windows, their webviews, the health
//! monitor and the overlay anchor.

mod anchor;
mod bridge;
mod core;
mod event_handler;
mod health;
mod init;
mod keys;
mod polling;
mod reload;
mod shutdown;
mod types;

pub use core::KioskApp;
