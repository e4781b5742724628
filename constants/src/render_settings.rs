use bevy::prelude::*;

/// Vertical field of view for the scene camera (degrees).
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 500.0;

/// Camera sits above and behind the sphere, looking at the scene origin.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 5.0, 20.0);

/// Low ambient level so the spotlight contribution dominates.
pub const AMBIENT_BRIGHTNESS: f32 = 40.0;

/// Static fill spotlights, one per side of the sphere.
pub const SPOT_RIGHT_POSITION: Vec3 = Vec3::new(15.0, 3.0, 5.0);
pub const SPOT_LEFT_POSITION: Vec3 = Vec3::new(-15.0, 5.0, 7.0);

/// Pointer-driven spotlight rest position, pulled towards the viewer on z.
pub const POINTER_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 15.0);

pub const STATIC_SPOT_INTENSITY_LM: f32 = 900_000.0;
pub const POINTER_SPOT_INTENSITY_LM: f32 = 1_000_000.0;

/// Distance-based falloff limit for all spotlights.
pub const SPOT_RANGE: f32 = 60.0;

/// Wide cone with a soft edge: the inner (full intensity) angle is a small
/// fraction of the outer angle.
pub const SPOT_OUTER_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
pub const SPOT_INNER_ANGLE: f32 = SPOT_OUTER_ANGLE * 0.2;

pub const SPHERE_RADIUS: f32 = 8.0;
pub const SPHERE_SECTORS: u32 = 28;
pub const SPHERE_STACKS: u32 = 28;

pub const MATERIAL_ROUGHNESS: f32 = 1.0;
pub const MATERIAL_METALLIC: f32 = 0.6;

/// Strength of the parallax relief effect when a set ships a depth map.
pub const PARALLAX_DEPTH_SCALE: f32 = 0.09;

/// Y-axis rotation applied to the sphere every rendered frame (radians).
pub const ROTATION_STEP: f32 = 0.005;

/// Debug ground grid extent and cell size (metres).
pub const GRID_SIZE: f32 = 100.0;
pub const GRID_CELL_SIZE: f32 = 5.0;
