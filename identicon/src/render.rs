use crate::types::{Rect, Rgb};

/// A rasterized identicon as a square RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Edge length in pixels.
    pub size: u32,
    /// Pixel values in row-major order, 3 bytes per pixel.
    pub pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a blank (all-white) canvas.
    pub fn blank(size: u32) -> Canvas {
        Canvas {
            size,
            pixels: vec![255u8; size as usize * size as usize * 3],
        }
    }

    /// Get the pixel at position (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let offset = (y as usize * self.size as usize + x as usize) * 3;
        Rgb {
            r: self.pixels[offset],
            g: self.pixels[offset + 1],
            b: self.pixels[offset + 2],
        }
    }

    /// Fill a rectangle with an opaque color.
    ///
    /// `top_left` is inclusive, `bottom_right` exclusive.
    fn fill_rect(&mut self, rect: &Rect, color: Rgb) {
        for y in rect.top_left.y..rect.bottom_right.y {
            for x in rect.top_left.x..rect.bottom_right.x {
                let offset = (y as usize * self.size as usize + x as usize) * 3;
                self.pixels[offset] = color.r;
                self.pixels[offset + 1] = color.g;
                self.pixels[offset + 2] = color.b;
            }
        }
    }
}

/// Draw the pixel map onto a blank canvas.
///
/// Rectangles are filled in pixel-map order; they never overlap, so the
/// order does not affect the result. An empty pixel map yields a valid
/// all-white canvas.
pub fn rasterize(pixel_map: &[Rect], color: Rgb, canvas_size: u32) -> Canvas {
    let mut canvas = Canvas::blank(canvas_size);
    for rect in pixel_map {
        canvas.fill_rect(rect, color);
    }
    canvas
}
