use image::{ImageBuffer, RgbaImage};
use log::debug;

use crate::{
    color::Color,
    error::{IconError, Result},
    shape,
};

/// Largest edge length accepted; keeps the RGBA buffer at 1 GiB or less.
pub const MAX_SIZE: u32 = 16_384;

/// Render one icon: `background` square with the droplet filled in `foreground`.
///
/// Pixels are covered when their center falls inside the polygon; no
/// antialiasing, so the output is a pure function of the inputs.
pub fn render(size: u32, background: Color, foreground: Color) -> Result<RgbaImage> {
    if size == 0 || size > MAX_SIZE { return Err(IconError::InvalidSize(size)); }
    let poly = shape::scaled(size);
    let (bg, fg) = (background.to_rgba(), foreground.to_rgba());
    let img = ImageBuffer::from_fn(size, size, |x, y| {
        if shape::contains(&poly, x as f32 + 0.5, y as f32 + 0.5) { fg } else { bg }
    });
    debug!("rendered {size}x{size} droplet bg={background} fg={foreground}");
    Ok(img)
}

/// Like [`render`] but takes color specifications as strings.
pub fn render_spec(size: u32, background: &str, foreground: &str) -> Result<RgbaImage> {
    render(size, background.parse()?, foreground.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

    #[test]
    fn dimensions_match_size() {
        for size in [1u32, 2, 16, 48, 128, 200] {
            let img = render(size, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND).unwrap();
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn zero_size_rejected() {
        let err = render(0, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND).unwrap_err();
        assert!(matches!(err, IconError::InvalidSize(0)));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn oversized_rejected() {
        for size in [MAX_SIZE + 1, u32::MAX] {
            let err = render(size, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND).unwrap_err();
            assert!(matches!(err, IconError::InvalidSize(s) if s == size));
        }
    }

    #[test]
    fn deterministic() {
        let a = render(48, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND).unwrap();
        let b = render(48, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn corners_background_center_foreground() {
        for size in [16u32, 48, 128] {
            let img = render(size, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND).unwrap();
            let m = size - 1;
            for (x, y) in [(0, 0), (m, 0), (0, m), (m, m)] {
                assert_eq!(*img.get_pixel(x, y), DEFAULT_BACKGROUND.to_rgba(), "corner ({x},{y}) @ {size}");
            }
            assert_eq!(*img.get_pixel(size / 2, size / 2), DEFAULT_FOREGROUND.to_rgba(), "center @ {size}");
        }
    }

    #[test]
    fn only_two_colors_used() {
        let img = render(128, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND).unwrap();
        let (bg, fg) = (DEFAULT_BACKGROUND.to_rgba(), DEFAULT_FOREGROUND.to_rgba());
        let fg_count = img.pixels().filter(|p| **p == fg).count();
        assert!(img.pixels().all(|p| *p == bg || *p == fg));
        // droplet covers a sizeable but partial share of the canvas
        assert!(fg_count > 128 * 128 / 5 && fg_count < 128 * 128 / 2, "fg pixels {fg_count}");
    }

    #[test]
    fn spec_strings_parse() {
        let img = render_spec(16, "black", "#F00").unwrap();
        assert_eq!(*img.get_pixel(0, 0), Color::rgb(0, 0, 0).to_rgba());
        assert_eq!(*img.get_pixel(8, 8), Color::rgb(255, 0, 0).to_rgba());
        assert!(matches!(render_spec(16, "nope", "white"), Err(IconError::InvalidColor(_))));
    }
}
