use bevy::prelude::*;

use crate::engine::assets::material_manifest::MaterialSet;
use crate::engine::assets::sphere_assets::SphereAssets;

/// Queue every map of the given set with the asset server. First draw is not
/// gated on completion: a frame may render with a still-decoding texture and
/// self-heals once the image lands on the GPU.
pub fn load_material_textures(
    asset_server: &AssetServer,
    set: &MaterialSet,
    assets: &mut SphereAssets,
) {
    println!("Loading material set '{}':", set.name);
    println!("  Base colour: {}", set.base_color);
    println!("  Normal: {}", set.normal);
    println!("  Metallic/roughness: {}", set.metallic_roughness);
    println!("  Occlusion: {}", set.occlusion);

    assets.base_color = asset_server.load(&set.base_color);
    assets.normal = asset_server.load(&set.normal);
    assets.metallic_roughness = asset_server.load(&set.metallic_roughness);
    assets.occlusion = asset_server.load(&set.occlusion);
    assets.depth = set.depth.as_ref().map(|path| {
        println!("  Depth: {}", path);
        asset_server.load(path)
    });
    assets.is_loaded = false;
}

/// Check whether all maps of the active set have finished loading.
pub fn check_texture_loading(mut assets: ResMut<SphereAssets>, asset_server: Res<AssetServer>) {
    if assets.is_loaded || assets.manifest.is_none() {
        return;
    }

    let loaded = |handle: &Handle<Image>| {
        matches!(
            asset_server.get_load_state(handle),
            Some(bevy::asset::LoadState::Loaded)
        )
    };

    let maps_loaded = loaded(&assets.base_color)
        && loaded(&assets.normal)
        && loaded(&assets.metallic_roughness)
        && loaded(&assets.occlusion)
        && assets.depth.as_ref().map_or(true, |handle| loaded(handle));

    if maps_loaded {
        println!("✓ All material maps loaded");
        assets.is_loaded = true;
    }
}
