//! Droplet silhouette in fractional (0..1) image coordinates.
//!
//! Narrow at the top, widest just below the middle, tapering to a point at the
//! bottom. Scaling by the image size gives absolute pixel coordinates.

/// Vertices in drawing order: top centre, upper-left, lower-left, bottom point,
/// lower-right, upper-right.
pub const DROPLET: [(f32, f32); 6] = [
    (0.50, 0.05),
    (0.30, 0.50),
    (0.22, 0.75),
    (0.50, 0.95),
    (0.78, 0.75),
    (0.70, 0.50),
];

/// Droplet vertices in pixel space for a `size × size` canvas.
pub fn scaled(size: u32) -> [(f32, f32); 6] {
    let s = size as f32;
    DROPLET.map(|(x, y)| (x * s, y * s))
}

/// Even-odd point-in-polygon test.
pub fn contains(poly: &[(f32, f32)], px: f32, py: f32) -> bool {
    let mut parity = false;
    let n = poly.len();
    for i in 0..n {
        let (ax, ay) = poly[i];
        let (bx, by) = poly[(i + 1) % n];
        if (ay > py) != (by > py) && px < (bx - ax) * (py - ay) / (by - ay) + ax {
            parity = !parity;
        }
    }
    parity
}
