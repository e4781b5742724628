//! Per-frame systems: sphere rotation, viewport sync, FPS overlay and
//! material switching.

pub mod fps_tracking;
pub mod material_swap;
pub mod rotation;
pub mod viewport;
