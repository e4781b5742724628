//! Deferred loading of the material manifest and its textures.

pub mod manifest_loader;
pub mod texture_loader;
