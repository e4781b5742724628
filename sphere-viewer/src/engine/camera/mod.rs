//! Scene camera setup and optional orbit navigation.

/// Camera spawn plus the orbit controller toggle.
pub mod orbit_camera;
