use bevy::prelude::*;

/// Frame-coupled spin state. The accumulator grows unbounded and is fed
/// straight into quaternion construction, which is periodic in the angle.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spin {
    pub angle: f32,
    pub step: f32,
}

impl Spin {
    pub fn new(step: f32) -> Self {
        Self { angle: 0.0, step }
    }

    /// Advance by exactly one step and return the new accumulator value.
    pub fn tick(&mut self) -> f32 {
        self.angle += self.step;
        self.angle
    }
}

/// One rotation increment per rendered frame. Not time-scaled: spin speed
/// is coupled to frame rate.
pub fn spin_sphere(mut spheres: Query<(&mut Spin, &mut Transform)>) {
    for (mut spin, mut transform) in &mut spheres {
        let angle = spin.tick();
        transform.rotation = Quat::from_rotation_y(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_is_exact_for_representable_steps() {
        // 0.25 sums without rounding, so N ticks must equal N * step exactly.
        let mut spin = Spin::new(0.25);
        for _ in 0..100 {
            spin.tick();
        }
        assert_eq!(spin.angle, 25.0);
    }

    #[test]
    fn accumulator_tracks_n_times_step() {
        let mut spin = Spin::new(constants::render_settings::ROTATION_STEP);
        let ticks = 1000;
        for _ in 0..ticks {
            spin.tick();
        }
        let expected = ticks as f32 * constants::render_settings::ROTATION_STEP;
        assert!((spin.angle - expected).abs() < 1e-3);
    }

    #[test]
    fn spin_system_rotates_about_y_only() {
        let mut app = App::new();
        app.add_systems(Update, spin_sphere);

        let sphere = app
            .world_mut()
            .spawn((Spin::new(0.25), Transform::IDENTITY))
            .id();

        app.update();
        app.update();
        app.update();

        let spin = app.world().get::<Spin>(sphere).unwrap();
        assert_eq!(spin.angle, 0.75);

        let rotation = app.world().get::<Transform>(sphere).unwrap().rotation;
        assert!((rotation - Quat::from_rotation_y(0.75)).length() < 1e-6);
    }
}
