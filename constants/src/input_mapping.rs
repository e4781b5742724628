/// Normalised cursor coordinates are scaled into a symmetric world-space
/// window so the pointer light can sweep the whole sphere.
pub const POINTER_LIGHT_SCALE: f32 = 12.0;

/// Raw device-orientation angles map linearly onto the light position.
/// Kept unclamped: out-of-range sensor values pass straight through.
pub const ORIENTATION_ALPHA_SCALE: f32 = 0.4;
pub const ORIENTATION_BETA_OFFSET: f32 = 60.0;
pub const ORIENTATION_BETA_DIVISOR: f32 = 1.66;
