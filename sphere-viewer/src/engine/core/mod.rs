//! Core application state and platform configuration.

/// Application state machine, viewer toggles and UI marker components.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
