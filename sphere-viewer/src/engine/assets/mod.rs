//! Asset definitions for the sphere's material sets.

/// JSON material manifest listing the available texture sets.
pub mod material_manifest;

/// Resource holding the texture handles of the active material set.
pub mod sphere_assets;
