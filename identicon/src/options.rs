use crate::error::OptionsError;
use crate::hash::DIGEST_LEN;

/// Sizing options for identicon generation.
///
/// The defaults reproduce the canonical layout: a 250x250 canvas divided
/// into a 5x5 grid of 50x50 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Canvas edge length in pixels.
    pub canvas_size: u32,
    /// Grid dimension (the grid is grid_dimension x grid_dimension cells).
    pub grid_dimension: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            canvas_size: 250,
            grid_dimension: 5,
        }
    }
}

/// Derived sizes, produced only from validated [`Options`].
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    /// Grid dimension in cells.
    pub grid_dimension: usize,
    /// Digest bytes consumed per row before mirroring.
    pub chunk_len: usize,
    /// Cell edge length in pixels.
    pub cell_size: u32,
}

impl Options {
    /// Validate the options and derive the grid geometry.
    ///
    /// The grid dimension must be odd (palindrome mirroring needs a center
    /// column), the 16-byte digest must supply one chunk per row, and the
    /// canvas must divide evenly into cells.
    pub fn geometry(&self) -> Result<Geometry, OptionsError> {
        if self.grid_dimension == 0 || self.grid_dimension % 2 == 0 {
            return Err(OptionsError::GridDimensionNotOdd(self.grid_dimension));
        }

        let chunk_len = self.grid_dimension.div_ceil(2);
        let needed = self.grid_dimension * chunk_len;
        if needed > DIGEST_LEN {
            return Err(OptionsError::DigestTooShort {
                dimension: self.grid_dimension,
                needed,
                available: DIGEST_LEN,
            });
        }

        if self.canvas_size == 0 || self.canvas_size as usize % self.grid_dimension != 0 {
            return Err(OptionsError::CanvasNotDivisible {
                canvas: self.canvas_size,
                grid: self.grid_dimension,
            });
        }

        Ok(Geometry {
            grid_dimension: self.grid_dimension,
            chunk_len,
            cell_size: self.canvas_size / self.grid_dimension as u32,
        })
    }
}
