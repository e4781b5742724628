use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

mod engine;

use crate::engine::assets::material_manifest::MaterialManifest;
use crate::engine::assets::sphere_assets::SphereAssets;
use crate::engine::camera::orbit_camera::{OrbitCamera, orbit_camera_controller, spawn_camera};
use crate::engine::core::app_state::{AppState, ViewerSettings};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::orientation::{
    DeviceOrientation, drain_orientation_queue, orientation_light_system,
};
use crate::engine::input::pointer::pointer_light_system;
use crate::engine::loading::manifest_loader::{ManifestLoader, poll_manifest, start_loading};
use crate::engine::loading::texture_loader::check_texture_loading;
use crate::engine::scene::grid::spawn_ground_grid;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::sphere::{SphereSpawned, spawn_sphere_when_ready};
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_ui};
use crate::engine::systems::material_swap::material_swap_system;
use crate::engine::systems::rotation::spin_sphere;
use crate::engine::systems::viewport::sync_projection_aspect;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

/// Create the application: one textured sphere, four lights, one camera.
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<MaterialManifest>::new(&["json"]));

    app.init_state::<AppState>()
        .init_resource::<ViewerSettings>()
        .init_resource::<ManifestLoader>()
        .init_resource::<SphereAssets>()
        .init_resource::<SphereSpawned>()
        .init_resource::<OrbitCamera>()
        .add_event::<DeviceOrientation>()
        .add_systems(Startup, (setup, start_loading))
        .add_systems(
            Update,
            (
                poll_manifest,
                spawn_sphere_when_ready,
                check_texture_loading,
                sync_projection_aspect,
                drain_orientation_queue,
                fps_text_update_system,
            ),
        )
        .add_systems(
            Update,
            (
                spin_sphere,
                pointer_light_system,
                orientation_light_system,
                material_swap_system,
            )
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(
            Update,
            orbit_camera_controller.run_if(|settings: Res<ViewerSettings>| settings.orbit_controls),
        );

    #[cfg(target_arch = "wasm32")]
    app.add_systems(
        Startup,
        crate::engine::input::orientation::setup_orientation_listener,
    );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

/// Construct the fixed scene topology: lights, camera, UI overlay and the
/// optional debug grid. The sphere itself is spawned once its material
/// manifest has loaded.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewerSettings>,
) {
    println!("=== TEXTURED SPHERE VIEWER ===");

    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);
    spawn_ui(&mut commands);

    if settings.debug_grid {
        spawn_ground_grid(&mut commands, &mut meshes, &mut materials);
    }
}
