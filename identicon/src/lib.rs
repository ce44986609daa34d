pub mod error;
pub mod grid;
pub mod hash;
pub mod options;
pub mod pixels;
pub mod render;
pub mod types;

use crate::error::OptionsError;
use crate::options::Options;
use crate::render::Canvas;
use crate::types::{Cell, Rect, Rgb};

/// A fully derived identicon, holding every intermediate the pipeline
/// produces so each stage's output stays inspectable.
#[derive(Debug, Clone)]
pub struct Identicon {
    /// 16-byte digest of the input string.
    pub hex: [u8; hash::DIGEST_LEN],
    /// Fill color, taken from the first three digest bytes.
    pub color: Rgb,
    /// Surviving (odd-valued) grid cells with their original indices.
    pub grid: Vec<Cell>,
    /// One canvas rectangle per surviving cell, in grid order.
    pub pixel_map: Vec<Rect>,
    /// Canvas edge length the pixel map was computed for.
    pub canvas_size: u32,
}

impl Identicon {
    /// Run the derivation pipeline for an input string.
    ///
    /// Deterministic: the same input and options always produce the same
    /// identicon. Fails only on invalid options.
    pub fn generate(input: &str, options: &Options) -> Result<Identicon, OptionsError> {
        let geometry = options.geometry()?;

        let hex = hash::digest(input);
        let color = Rgb {
            r: hex[0],
            g: hex[1],
            b: hex[2],
        };
        let grid = grid::filter_odd(grid::build_grid(&hex, &geometry));
        let pixel_map = pixels::map_pixels(&grid, &geometry);

        Ok(Identicon {
            hex,
            color,
            grid,
            pixel_map,
            canvas_size: options.canvas_size,
        })
    }

    /// Rasterize the identicon onto a blank canvas.
    pub fn rasterize(&self) -> Canvas {
        render::rasterize(&self.pixel_map, self.color, self.canvas_size)
    }
}
