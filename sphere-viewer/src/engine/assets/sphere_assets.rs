use bevy::prelude::*;

use crate::engine::assets::material_manifest::MaterialManifest;

/// Texture handles for the sphere's active material set plus loading state.
/// Handles are defaults until the manifest arrives; a default handle simply
/// renders as an untextured map until the real image is in.
#[derive(Resource, Default)]
pub struct SphereAssets {
    pub manifest: Option<Handle<MaterialManifest>>,
    /// Index into the manifest's set list currently bound to the sphere.
    pub active_set: usize,
    pub base_color: Handle<Image>,
    pub normal: Handle<Image>,
    pub metallic_roughness: Handle<Image>,
    pub occlusion: Handle<Image>,
    pub depth: Option<Handle<Image>>,
    pub is_loaded: bool,
}
