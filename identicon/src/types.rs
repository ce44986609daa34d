/// An opaque RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One cell of the identicon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The digest-derived byte value for this cell.
    pub value: u8,
    /// 0-based position in the flat row-major grid, assigned before any
    /// filtering and never re-assigned.
    pub index: usize,
}

/// A pixel position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// An axis-aligned rectangle on the canvas.
///
/// `top_left` is inclusive and `bottom_right` exclusive when filling
/// pixels, so adjacent cells tile the canvas without overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    /// Rectangle width in pixels.
    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y
    }
}
