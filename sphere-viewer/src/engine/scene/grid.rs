/// Flat ground grid rendering for light-placement debugging.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;

use constants::render_settings::{GRID_CELL_SIZE, GRID_SIZE, SPHERE_RADIUS};

#[derive(Component)]
pub struct GroundGrid;

/// Spawn a translucent line grid on the plane just below the sphere.
pub fn spawn_ground_grid(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let grid_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.5),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let mesh = create_grid_mesh(GRID_SIZE, GRID_CELL_SIZE, -SPHERE_RADIUS);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(grid_material),
        Visibility::Visible,
        NoFrustumCulling,
        Transform::IDENTITY,
        GroundGrid,
    ));
}

/// Build a line-list mesh covering `size`×`size` metres with lines every
/// `cell_size` metres, at the given height.
fn create_grid_mesh(size: f32, cell_size: f32, height: f32) -> Mesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let line_count = (size / cell_size).round().max(1.0) as u32;
    let half = size * 0.5;
    let spacing = size / line_count as f32;

    for i in 0..=line_count {
        let offset = -half + i as f32 * spacing;

        // Line running along Z at fixed X.
        vertices.push([offset, height, -half]);
        vertices.push([offset, height, half]);
        // Line running along X at fixed Z.
        vertices.push([-half, height, offset]);
        vertices.push([half, height, offset]);
    }

    for i in 0..vertices.len() as u32 / 2 {
        indices.extend_from_slice(&[i * 2, i * 2 + 1]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(bevy::render::mesh::Indices::U32(indices));

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_mesh_vertex_and_index_counts_match() {
        let mesh = create_grid_mesh(100.0, 5.0, -8.0);

        // 21 lines per axis, two vertices each.
        let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap();
        assert_eq!(positions.len(), 21 * 2 * 2);

        let index_count = mesh.indices().map(|i| i.len()).unwrap_or(0);
        assert_eq!(index_count, positions.len());
    }
}
