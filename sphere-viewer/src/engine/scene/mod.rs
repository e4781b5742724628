//! Scene construction: lights, the sphere itself and debug helpers.

/// Ambient light plus the three spotlights, one of them input-driven.
pub mod lighting;

/// The textured sphere mesh, material assembly and spawn-on-ready system.
pub mod sphere;

/// Translucent ground grid for debugging light placement.
pub mod grid;
