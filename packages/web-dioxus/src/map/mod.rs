//! Web Mercator math and tile helpers for the map pane

pub const TILE_SIZE: u32 = 256;

/// Zoom range kept small so the tile grid stays a reasonable size.
pub const MIN_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 4;
pub const DEFAULT_ZOOM: u8 = 3;

/// Default view center (latitude, longitude).
pub const DEFAULT_CENTER: (f64, f64) = (37.7749, -122.4194);

/// Number of tiles along one axis at a zoom level.
pub fn tile_count(zoom: u8) -> u32 {
    1 << zoom
}

/// World size in pixels at a zoom level.
pub fn world_size(zoom: u8) -> u32 {
    TILE_SIZE * tile_count(zoom)
}

/// Project a geographic position to world pixel coordinates at a zoom level
/// (spherical Web Mercator, 256px tiles, origin at the north-west corner).
pub fn project(latitude: f64, longitude: f64, zoom: u8) -> (f64, f64) {
    let scale = f64::from(world_size(zoom));
    let x = (longitude + 180.0) / 360.0 * scale;
    let lat_rad = latitude.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * scale;
    (x, y)
}

/// OpenStreetMap raster tile URL, with the subdomain spread across the
/// a/b/c mirrors.
pub fn tile_url(x: u32, y: u32, zoom: u8) -> String {
    let subdomain = ["a", "b", "c"][((x + y) % 3) as usize];
    format!("https://{subdomain}.tile.openstreetmap.org/{zoom}/{x}/{y}.png")
}
