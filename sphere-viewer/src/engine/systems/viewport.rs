use bevy::prelude::*;
use bevy::window::WindowResized;

pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    width / height
}

/// Keep the perspective projection's aspect in step with the window.
/// Re-applying the same dimensions is a no-op by construction.
pub fn sync_projection_aspect(
    mut resize_events: EventReader<WindowResized>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    for resize in resize_events.read() {
        for mut projection in &mut projections {
            if let Projection::Perspective(ref mut perspective) = *projection {
                perspective.aspect_ratio = aspect_ratio(resize.width, resize.height);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_resize_is_idempotent() {
        let mut app = App::new();
        app.add_event::<WindowResized>();
        app.add_systems(Update, sync_projection_aspect);

        let window = app.world_mut().spawn(Window::default()).id();
        let camera = app
            .world_mut()
            .spawn((
                Camera3d::default(),
                Projection::from(PerspectiveProjection::default()),
            ))
            .id();

        for _ in 0..2 {
            app.world_mut().send_event(WindowResized {
                window,
                width: 1920.0,
                height: 1080.0,
            });
            app.update();
        }

        let projection = app.world().get::<Projection>(camera).unwrap();
        let Projection::Perspective(perspective) = projection else {
            panic!("camera projection must stay perspective");
        };
        assert_eq!(perspective.aspect_ratio, aspect_ratio(1920.0, 1080.0));
    }
}
