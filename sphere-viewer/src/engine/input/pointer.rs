use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::core::app_state::ViewerSettings;
use crate::engine::scene::lighting::PointerLight;
use constants::input_mapping::POINTER_LIGHT_SCALE;

/// Map a cursor position in window pixels onto normalised device
/// coordinates: both axes in [-1, 1], y inverted so screen-down is
/// world-down. No validation; a degenerate viewport propagates as NaN.
pub fn normalize_cursor(position: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (position.x / viewport.x) * 2.0 - 1.0,
        -(position.y / viewport.y) * 2.0 + 1.0,
    )
}

/// World-space x/y target for the pointer light.
pub fn pointer_light_target(ndc: Vec2) -> Vec2 {
    ndc * POINTER_LIGHT_SCALE
}

/// Re-aim the pointer spotlight on every cursor move. Last write wins when
/// several events arrive in one frame; z is left at its spawn value.
pub fn pointer_light_system(
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut lights: Query<&mut Transform, With<PointerLight>>,
    settings: Res<ViewerSettings>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(mut light_transform) = lights.single_mut() else {
        return;
    };

    let viewport = Vec2::new(window.width(), window.height());

    for cursor in cursor_moved.read() {
        let ndc = normalize_cursor(cursor.position, viewport);
        let target = pointer_light_target(ndc);

        light_transform.translation.x = target.x;
        light_transform.translation.y = target.y;

        if settings.log_input {
            info!("pointer ndc: ({:.3}, {:.3})", ndc.x, ndc.y);
        }
    }
}
