use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("grid dimension {0} is not an odd nonzero number")]
    GridDimensionNotOdd(usize),

    #[error(
        "grid of {dimension}x{dimension} needs {needed} digest bytes, only {available} available"
    )]
    DigestTooShort {
        dimension: usize,
        needed: usize,
        available: usize,
    },

    #[error("canvas size {canvas} is not a positive multiple of grid dimension {grid}")]
    CanvasNotDivisible { canvas: u32, grid: usize },
}
