/// Scene framing, geometry and light tuning values.
pub mod render_settings;

/// Scale factors mapping raw input coordinates onto light positions.
pub mod input_mapping;
