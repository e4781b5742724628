use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use constants::render_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_POSITION};

/// Orbit state around the scene origin. Only read when the orbit-controls
/// toggle is enabled; otherwise the camera stays where `spawn_camera` put it.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Start from the fixed camera pose so enabling the controls does not
        // jump the view.
        let offset = CAMERA_POSITION;
        Self {
            focus_point: Vec3::ZERO,
            distance: offset.length(),
            pitch: -(offset.y / offset.length()).asin(),
            yaw: 0.0,
        }
    }
}

/// Spawn the perspective camera framing the sphere from above and behind.
pub fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Orbit controller: left-drag rotates around the focus point, the wheel
/// dollies in and out. Smoothed with a per-frame lerp towards the target
/// pose.
pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        orbit.yaw += -mouse_delta.x * yaw_sens;
        orbit.pitch += -mouse_delta.y * pitch_sens;
        orbit.pitch = orbit.pitch.clamp(-1.55, 1.55);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    if scroll_accum.abs() > f32::EPSILON {
        let dolly_speed = (orbit.distance * 0.2).clamp(0.5, 50.0);
        orbit.distance = (orbit.distance - scroll_accum * dolly_speed).clamp(1.0, 400.0);
    }

    let target_rot = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
    let target_pos = orbit.focus_point + target_rot * (Vec3::Z * orbit.distance);

    let lerp_speed = 12.0 * time.delta_secs();
    camera_transform.translation = camera_transform
        .translation
        .lerp(target_pos, lerp_speed.min(1.0));
    camera_transform.rotation = camera_transform
        .rotation
        .slerp(target_rot, lerp_speed.min(1.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orbit_pose_matches_fixed_camera_distance() {
        let orbit = OrbitCamera::default();
        assert!((orbit.distance - CAMERA_POSITION.length()).abs() < 1e-5);
        assert!(orbit.pitch < 0.0, "camera looks down at the origin");
    }
}
