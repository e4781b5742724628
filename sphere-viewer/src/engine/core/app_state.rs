use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the material manifest before the sphere can exist.
    #[default]
    Loading,
    Running,
}

/// Optional helper toggles. All off by default, matching the bare scene.
#[derive(Resource, Clone, Copy, Default)]
pub struct ViewerSettings {
    /// Orbit camera controls (drag to rotate, wheel to dolly).
    pub orbit_controls: bool,
    /// Translucent ground grid for judging light placement.
    pub debug_grid: bool,
    /// Echo normalised pointer coordinates to the log.
    pub log_input: bool,
}

#[derive(Component)]
pub struct FpsText;
