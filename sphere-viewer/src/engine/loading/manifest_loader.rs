use bevy::prelude::*;

use crate::engine::assets::material_manifest::MaterialManifest;
use crate::engine::assets::sphere_assets::SphereAssets;
use crate::engine::loading::texture_loader::load_material_textures;

const MANIFEST_PATH: &str = "materials/manifest.json";

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<MaterialManifest>>,
    loaded: bool,
}

/// Start the loading process.
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    println!("Loading material manifest from: {}", MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

/// Poll the manifest asset and kick off texture loading for the first set
/// once it arrives.
pub fn poll_manifest(
    mut manifest_loader: ResMut<ManifestLoader>,
    mut assets: ResMut<SphereAssets>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<MaterialManifest>>,
) {
    if manifest_loader.loaded {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        println!("✓ Material manifest loaded ({} sets)", manifest.sets.len());
        assets.manifest = Some(handle.clone());
        manifest_loader.loaded = true;

        match manifest.set(0) {
            Some(set) => load_material_textures(&asset_server, set, &mut assets),
            None => warn!("Material manifest contains no sets; sphere stays untextured"),
        }
    }
}
