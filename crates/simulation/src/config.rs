pub const MAP_WIDTH: i32 = 64;
pub const MAP_HEIGHT: i32 = 64;
/// World-space edge length of one tile.
pub const TILE_SIZE: f32 = 32.0;

/// Embedded building and resource definition table.
pub const DEFINITIONS_JSON: &str = include_str!("../assets/definitions.json");
