use bevy::prelude::*;

use crate::engine::assets::material_manifest::MaterialManifest;
use crate::engine::assets::sphere_assets::SphereAssets;
use crate::engine::loading::texture_loader::load_material_textures;
use crate::engine::scene::sphere::{SpinningSphere, build_sphere_material};

/// Number keys 1..9 switch the sphere to the corresponding manifest set.
pub fn material_swap_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    manifests: Res<Assets<MaterialManifest>>,
    asset_server: Res<AssetServer>,
    mut assets: ResMut<SphereAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut spheres: Query<&mut MeshMaterial3d<StandardMaterial>, With<SpinningSphere>>,
) {
    let Some(index) = pressed_set_index(&keyboard) else {
        return;
    };

    let Some(manifest) = assets
        .manifest
        .as_ref()
        .and_then(|handle| manifests.get(handle))
        .cloned()
    else {
        return;
    };

    if index == assets.active_set {
        return;
    }

    let Some(set) = manifest.set(index) else {
        warn!("No material set at index {}", index);
        return;
    };

    load_material_textures(&asset_server, set, &mut assets);
    assets.active_set = index;

    let material = materials.add(build_sphere_material(&assets));
    for mut sphere_material in &mut spheres {
        sphere_material.0 = material.clone();
    }
}

/// Map Digit1..Digit9 onto manifest set indices.
fn pressed_set_index(keyboard: &ButtonInput<KeyCode>) -> Option<usize> {
    const DIGITS: [KeyCode; 9] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];

    DIGITS
        .iter()
        .position(|key| keyboard.just_pressed(*key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_map_to_set_indices() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        assert_eq!(pressed_set_index(&keyboard), None);

        keyboard.press(KeyCode::Digit2);
        assert_eq!(pressed_set_index(&keyboard), Some(1));

        keyboard.clear_just_pressed(KeyCode::Digit2);
        assert_eq!(pressed_set_index(&keyboard), None);
    }
}
