use bevy::prelude::*;

use crate::engine::scene::lighting::PointerLight;
use constants::input_mapping::{
    ORIENTATION_ALPHA_SCALE, ORIENTATION_BETA_DIVISOR, ORIENTATION_BETA_OFFSET,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use web_sys::{DeviceOrientationEvent, window};

/// One device-orientation reading. Raw sensor angles in degrees, consumed
/// without smoothing or clamping. Known to be unreliable on some platforms;
/// on those the event simply never fires.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeviceOrientation {
    pub alpha: f32,
    pub beta: f32,
}

/// World-space x/y target for the pointer light from raw orientation angles.
/// Linear, unclamped: out-of-range sensor values pass straight through.
pub fn orientation_light_target(alpha: f32, beta: f32) -> Vec2 {
    Vec2::new(
        alpha * ORIENTATION_ALPHA_SCALE,
        (beta - ORIENTATION_BETA_OFFSET) / ORIENTATION_BETA_DIVISOR,
    )
}

/// Re-aim the pointer spotlight from orientation readings, same contract as
/// the pointer system: overwrite x/y, leave z alone, last write wins.
pub fn orientation_light_system(
    mut orientation_events: EventReader<DeviceOrientation>,
    mut lights: Query<&mut Transform, With<PointerLight>>,
) {
    let Ok(mut light_transform) = lights.single_mut() else {
        return;
    };

    for reading in orientation_events.read() {
        let target = orientation_light_target(reading.alpha, reading.beta);
        light_transform.translation.x = target.x;
        light_transform.translation.y = target.y;
    }
}

/// Resource wrapping the thread-safe queue filled by the DOM listener.
#[derive(Resource)]
pub struct OrientationQueue(std::sync::Arc<std::sync::Mutex<Vec<DeviceOrientation>>>);

/// Register a `deviceorientation` DOM listener on WASM targets and hand its
/// readings to the app through a shared queue.
#[cfg(target_arch = "wasm32")]
pub fn setup_orientation_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let reading_queue: Arc<Mutex<Vec<DeviceOrientation>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = reading_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: DeviceOrientationEvent| {
        // Absent sensor axes surface as NaN, matching the unvalidated
        // passthrough contract.
        let reading = DeviceOrientation {
            alpha: event.alpha().unwrap_or(f64::NAN) as f32,
            beta: event.beta().unwrap_or(f64::NAN) as f32,
        };

        if let Ok(mut queue) = queue_clone.lock() {
            queue.push(reading);
        }
    }) as Box<dyn FnMut(DeviceOrientationEvent)>);

    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref())
            .expect("Failed to register deviceorientation listener");
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(OrientationQueue(reading_queue));
}

/// Drain queued readings into Bevy events, preserving arrival order. On
/// native targets the queue resource never exists and this is a no-op.
pub fn drain_orientation_queue(
    orientation_queue: Option<Res<OrientationQueue>>,
    mut orientation_events: EventWriter<DeviceOrientation>,
) {
    let Some(queue_res) = orientation_queue else {
        return;
    };

    let readings = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for reading in readings {
        orientation_events.write(reading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_orientation_centres_the_light() {
        // alpha=90, beta=60 is the neutral hold position.
        assert_eq!(orientation_light_target(90.0, 60.0), Vec2::new(36.0, 0.0));
    }

    #[test]
    fn orientation_target_is_unclamped() {
        let target = orientation_light_target(720.0, -500.0);
        assert_eq!(target.x, 720.0 * ORIENTATION_ALPHA_SCALE);
        assert_eq!(
            target.y,
            (-500.0 - ORIENTATION_BETA_OFFSET) / ORIENTATION_BETA_DIVISOR
        );
    }

    #[test]
    fn orientation_event_moves_the_pointer_light() {
        let mut app = App::new();
        app.add_event::<DeviceOrientation>();
        app.add_systems(Update, orientation_light_system);

        let light_entity = app
            .world_mut()
            .spawn((PointerLight, Transform::from_xyz(0.0, 0.0, 15.0)))
            .id();

        app.world_mut().send_event(DeviceOrientation {
            alpha: 90.0,
            beta: 60.0,
        });
        app.update();

        let translation = app
            .world()
            .get::<Transform>(light_entity)
            .unwrap()
            .translation;
        assert_eq!(translation, Vec3::new(36.0, 0.0, 15.0));
    }

    #[test]
    fn queue_drains_in_arrival_order() {
        let mut app = App::new();
        app.add_event::<DeviceOrientation>();
        app.add_systems(Update, (drain_orientation_queue, orientation_light_system).chain());

        let light_entity = app
            .world_mut()
            .spawn((PointerLight, Transform::default()))
            .id();

        let queue = std::sync::Arc::new(std::sync::Mutex::new(vec![
            DeviceOrientation {
                alpha: 0.0,
                beta: 60.0,
            },
            DeviceOrientation {
                alpha: 90.0,
                beta: 60.0,
            },
        ]));
        app.insert_resource(OrientationQueue(queue.clone()));
        app.update();

        // Last queued reading wins; the queue is left empty.
        let translation = app
            .world()
            .get::<Transform>(light_entity)
            .unwrap()
            .translation;
        assert_eq!(translation.x, 36.0);
        assert!(queue.lock().unwrap().is_empty());
    }
}
