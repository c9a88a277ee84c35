use image::{ImageBuffer, Rgba, RgbaImage};
use log::debug;

/// Side length of the reference design every other size is scaled from.
const REFERENCE_SIZE: f32 = 48.0;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const BACKGROUND: Rgba<u8> = Rgba([102, 126, 234, 255]); // Blue-purple #667eea
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Pixel dimensions of every icon feature, derived from the requested size.
///
/// All values come from the 48-px reference design via a linear scale
/// factor, rounded to the nearest pixel. Recomputed per render; the icon is
/// a pure function of `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub corner_radius: i32,
    pub body_width: i32,
    pub body_height: i32,
    pub body_radius: i32,
    pub stroke_width: i32,
    pub lens_radius: i32,
    pub flash_width: i32,
    pub flash_height: i32,
    pub flash_offset_x: i32,
    pub flash_offset_y: i32,
}

impl Geometry {
    pub fn for_size(size: u32) -> Self {
        let scale = size as f32 / REFERENCE_SIZE;
        let scaled = |v: f32| (v * scale).round() as i32;
        Self {
            corner_radius: (size as f32 * 0.2).round() as i32,
            body_width: scaled(24.0),
            body_height: scaled(16.0),
            body_radius: scaled(2.0),
            stroke_width: scaled(2.0).max(2),
            lens_radius: scaled(6.0),
            flash_width: scaled(4.0),
            flash_height: scaled(2.0),
            flash_offset_x: scaled(8.0),
            flash_offset_y: scaled(10.0),
        }
    }
}

/// True if (x, y) lies inside the rounded rectangle with inclusive bounds
/// (x0, y0)..(x1, y1) and the given corner radius.
fn in_rounded_rect(x: i32, y: i32, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) -> bool {
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }
    // Nearest corner-arc center; pixels in a corner square must fall within
    // the arc, everything else inside the bounds is in.
    let cx = if x < x0 + radius {
        x0 + radius
    } else if x > x1 - radius {
        x1 - radius
    } else {
        return true;
    };
    let cy = if y < y0 + radius {
        y0 + radius
    } else if y > y1 - radius {
        y1 - radius
    } else {
        return true;
    };
    let (dx, dy) = (x - cx, y - cy);
    dx * dx + dy * dy <= radius * radius
}

fn in_circle(x: i32, y: i32, cx: i32, cy: i32, radius: i32) -> bool {
    let (dx, dy) = (x - cx, y - cy);
    dx * dx + dy * dy <= radius * radius
}

/// Renders the camera icon at `size`×`size` pixels, RGBA.
///
/// Layers, back to front: transparent canvas, rounded-square background,
/// camera body outline, lens circle, flash rectangle.
pub fn render(size: u32) -> RgbaImage {
    let geom = Geometry::for_size(size);
    debug!("rendering {size}x{size} icon: {geom:?}");

    let last = size as i32 - 1;
    let center_x = (size / 2) as i32;
    let center_y = (size / 2) as i32;

    // Camera body, stroke drawn inward from the outline.
    let body_x0 = center_x - geom.body_width / 2;
    let body_x1 = center_x + geom.body_width / 2;
    let body_y0 = center_y - geom.body_height / 2;
    let body_y1 = center_y + geom.body_height / 2;
    let inner_radius = (geom.body_radius - geom.stroke_width).max(0);

    let flash_x0 = center_x - geom.flash_offset_x;
    let flash_y0 = center_y - geom.flash_offset_y;

    let mut image = ImageBuffer::new(size, size);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let (x, y) = (x as i32, y as i32);

        if !in_rounded_rect(x, y, 0, 0, last, last, geom.corner_radius) {
            *pixel = TRANSPARENT;
            continue;
        }

        let in_body_stroke = in_rounded_rect(x, y, body_x0, body_y0, body_x1, body_y1, geom.body_radius)
            && !in_rounded_rect(
                x,
                y,
                body_x0 + geom.stroke_width,
                body_y0 + geom.stroke_width,
                body_x1 - geom.stroke_width,
                body_y1 - geom.stroke_width,
                inner_radius,
            );
        let in_lens = in_circle(x, y, center_x, center_y, geom.lens_radius);
        let in_flash = x >= flash_x0
            && x < flash_x0 + geom.flash_width
            && y >= flash_y0
            && y < flash_y0 + geom.flash_height;

        *pixel = if in_body_stroke || in_lens || in_flash {
            WHITE
        } else {
            BACKGROUND
        };
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [u32; 4] = [16, 32, 48, 128];

    #[test]
    fn renders_requested_dimensions() {
        for size in SIZES {
            let icon = render(size);
            assert_eq!(icon.dimensions(), (size, size));
        }
    }

    #[test]
    fn render_is_deterministic() {
        for size in SIZES {
            assert_eq!(render(size).into_raw(), render(size).into_raw());
        }
    }

    #[test]
    fn features_scale_linearly() {
        for window in SIZES.windows(2) {
            let (s1, s2) = (window[0], window[1]);
            let (g1, g2) = (Geometry::for_size(s1), Geometry::for_size(s2));
            let ratio = s2 as f32 / s1 as f32;
            for (small, big) in [
                (g1.lens_radius, g2.lens_radius),
                (g1.body_width, g2.body_width),
                (g1.corner_radius, g2.corner_radius),
            ] {
                let expected = small as f32 * ratio;
                assert!(
                    (big as f32 - expected).abs() <= 1.0,
                    "{small} at {s1}px scaled to {big} at {s2}px, expected ~{expected}"
                );
            }
        }
    }

    #[test]
    fn corners_are_transparent() {
        for size in SIZES {
            let icon = render(size);
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(icon.get_pixel(x, y)[3], 0, "corner ({x}, {y}) at {size}px");
            }
        }
        // Well inside the 128-px corner cutout (radius 26) but off the exact corner.
        assert_eq!(render(128).get_pixel(2, 2)[3], 0);
    }

    #[test]
    fn background_and_lens_colors() {
        for size in SIZES {
            let icon = render(size);
            // Bottom center sits below the camera glyph, on plain background.
            assert_eq!(
                *icon.get_pixel(size / 2, size - 2),
                Rgba([102, 126, 234, 255]),
                "background at {size}px"
            );
            // The exact center is inside the lens.
            assert_eq!(
                *icon.get_pixel(size / 2, size / 2),
                Rgba([255, 255, 255, 255]),
                "lens at {size}px"
            );
        }
    }

    #[test]
    fn reference_design_glyph_placement() {
        // At 48 px the scale factor is 1, so the reference coordinates apply
        // directly: body outline 12..36 x 16..32 with a 2-px stroke, lens
        // radius 6, flash 4x2 at (16, 14).
        let icon = render(48);
        let white = Rgba([255, 255, 255, 255]);
        let background = Rgba([102, 126, 234, 255]);

        assert_eq!(*icon.get_pixel(24, 16), white, "top of body stroke");
        assert_eq!(*icon.get_pixel(30, 24), white, "right edge of lens");
        assert_eq!(*icon.get_pixel(32, 24), background, "gap between lens and stroke");
        assert_eq!(*icon.get_pixel(16, 14), white, "flash");
        assert_eq!(*icon.get_pixel(16, 12), background, "above flash");
    }

    #[test]
    fn stroke_width_never_below_two_pixels() {
        assert_eq!(Geometry::for_size(16).stroke_width, 2);
        assert_eq!(Geometry::for_size(128).stroke_width, 5);
    }
}
