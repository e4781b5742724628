use bevy::prelude::*;

use crate::engine::assets::sphere_assets::SphereAssets;
use crate::engine::core::app_state::AppState;
use crate::engine::systems::rotation::Spin;
use constants::render_settings::{
    MATERIAL_METALLIC, MATERIAL_ROUGHNESS, PARALLAX_DEPTH_SCALE, ROTATION_STEP, SPHERE_RADIUS,
    SPHERE_SECTORS, SPHERE_STACKS,
};

/// Marks the sphere entity. The handle is captured at spawn time so no
/// per-frame lookup by name is ever needed.
#[derive(Component)]
pub struct SpinningSphere;

#[derive(Resource, Default)]
pub struct SphereSpawned {
    pub spawned: bool,
}

/// Spawn the sphere once its material manifest has resolved, then move the
/// app into the running state. Textures may still be decoding at this point;
/// the material picks them up when they finish.
pub fn spawn_sphere_when_ready(
    mut commands: Commands,
    mut spawned: ResMut<SphereSpawned>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    assets: Res<SphereAssets>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if spawned.spawned || assets.manifest.is_none() {
        return;
    }

    let mesh = create_sphere_mesh();
    let material = build_sphere_material(&assets);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(material)),
        Transform::IDENTITY,
        SpinningSphere,
        Spin::new(ROTATION_STEP),
    ));

    spawned.spawned = true;
    println!("→ Sphere spawned, transitioning to Running state");
    next_state.set(AppState::Running);
}

/// UV sphere with tangents so the normal map can be applied.
pub fn create_sphere_mesh() -> Mesh {
    let mut mesh = Sphere::new(SPHERE_RADIUS)
        .mesh()
        .uv(SPHERE_SECTORS, SPHERE_STACKS);
    if let Err(err) = mesh.generate_tangents() {
        warn!("Tangent generation failed, normal map will be flat: {err:?}");
    }
    mesh
}

/// Bind every map of the active set onto one standard PBR material. The
/// emissive slot reuses the base colour map with the default (black)
/// emissive factor, so it contributes nothing until that factor is raised.
pub fn build_sphere_material(assets: &SphereAssets) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(assets.base_color.clone()),
        normal_map_texture: Some(assets.normal.clone()),
        metallic_roughness_texture: Some(assets.metallic_roughness.clone()),
        occlusion_texture: Some(assets.occlusion.clone()),
        emissive_texture: Some(assets.base_color.clone()),
        depth_map: assets.depth.clone(),
        parallax_depth_scale: PARALLAX_DEPTH_SCALE,
        perceptual_roughness: MATERIAL_ROUGHNESS,
        metallic: MATERIAL_METALLIC,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_mesh_has_positions_and_tangents() {
        let mesh = create_sphere_mesh();
        assert!(mesh.attribute(Mesh::ATTRIBUTE_POSITION).is_some());
        assert!(mesh.attribute(Mesh::ATTRIBUTE_TANGENT).is_some());
    }

    #[test]
    fn material_binds_all_maps_of_the_active_set() {
        let assets = SphereAssets {
            depth: Some(Handle::default()),
            ..Default::default()
        };
        let material = build_sphere_material(&assets);

        assert!(material.base_color_texture.is_some());
        assert!(material.normal_map_texture.is_some());
        assert!(material.metallic_roughness_texture.is_some());
        assert!(material.occlusion_texture.is_some());
        assert!(material.emissive_texture.is_some());
        assert!(material.depth_map.is_some());
        assert_eq!(material.metallic, MATERIAL_METALLIC);
        assert_eq!(material.perceptual_roughness, MATERIAL_ROUGHNESS);
    }
}
