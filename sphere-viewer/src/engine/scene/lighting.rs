use bevy::prelude::*;

use constants::render_settings::{
    AMBIENT_BRIGHTNESS, POINTER_LIGHT_POSITION, POINTER_SPOT_INTENSITY_LM, SPOT_INNER_ANGLE,
    SPOT_LEFT_POSITION, SPOT_OUTER_ANGLE, SPOT_RANGE, SPOT_RIGHT_POSITION,
    STATIC_SPOT_INTENSITY_LM,
};

/// Marks the single spotlight that follows pointer and orientation input.
#[derive(Component)]
pub struct PointerLight;

/// Spawn the fixed light rig: a dim ambient term, one fill spotlight per
/// side, and the pointer-driven spotlight pulled towards the viewer.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    spawn_spot_light(commands, SPOT_RIGHT_POSITION, STATIC_SPOT_INTENSITY_LM);
    spawn_spot_light(commands, SPOT_LEFT_POSITION, STATIC_SPOT_INTENSITY_LM);

    let pointer_light =
        spawn_spot_light(commands, POINTER_LIGHT_POSITION, POINTER_SPOT_INTENSITY_LM);
    commands.entity(pointer_light).insert(PointerLight);
}

/// Spot light helper: shared cone softness, falloff range and shadow
/// settings, varying only position and intensity.
pub fn spawn_spot_light(commands: &mut Commands, position: Vec3, intensity: f32) -> Entity {
    commands
        .spawn((
            SpotLight {
                color: Color::WHITE,
                intensity,
                range: SPOT_RANGE,
                inner_angle: SPOT_INNER_ANGLE,
                outer_angle: SPOT_OUTER_ANGLE,
                shadows_enabled: true,
                ..default()
            },
            Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighting_rig_has_one_ambient_three_spots_one_pointer_follower() {
        let mut app = App::new();

        let mut commands_queue = bevy::ecs::world::CommandQueue::default();
        {
            let world = app.world();
            let mut commands = Commands::new(&mut commands_queue, world);
            spawn_lighting(&mut commands);
        }
        commands_queue.apply(app.world_mut());

        let mut spot_query = app.world_mut().query::<&SpotLight>();
        assert_eq!(spot_query.iter(app.world()).count(), 3);

        let mut pointer_query = app
            .world_mut()
            .query_filtered::<&Transform, With<PointerLight>>();
        let pointer_positions: Vec<Vec3> = pointer_query
            .iter(app.world())
            .map(|t| t.translation)
            .collect();
        assert_eq!(
            pointer_positions,
            vec![constants::render_settings::POINTER_LIGHT_POSITION]
        );

        assert!(app.world().contains_resource::<AmbientLight>());
    }
}
