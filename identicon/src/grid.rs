use crate::options::Geometry;
use crate::types::Cell;

/// Mirror a row chunk into a palindrome of `row_len` values.
///
/// `[a, b, c]` with a row length of 5 becomes `[a, b, c, b, a]`, which is
/// what gives each row of the final image its left-right symmetry.
pub fn mirror_row(chunk: &[u8], row_len: usize) -> Vec<u8> {
    debug_assert_eq!(chunk.len(), row_len.div_ceil(2));

    let mut row = Vec::with_capacity(row_len);
    row.extend_from_slice(chunk);
    row.extend(chunk[..row_len - chunk.len()].iter().rev());
    row
}

/// Expand a digest into the flat mirrored grid.
///
/// The digest is split into consecutive chunks of `chunk_len` bytes (any
/// shorter trailing remainder is discarded), each chunk is mirrored into a
/// full row, and the rows are concatenated in order. Every value is paired
/// with its 0-based position in the flat sequence.
pub fn build_grid(digest: &[u8], geom: &Geometry) -> Vec<Cell> {
    digest
        .chunks_exact(geom.chunk_len)
        .take(geom.grid_dimension)
        .flat_map(|chunk| mirror_row(chunk, geom.grid_dimension))
        .enumerate()
        .map(|(index, value)| Cell { value, index })
        .collect()
}

/// Drop every even-valued cell.
///
/// Relative order and original indices are preserved; an empty result is
/// valid and renders as a blank canvas.
pub fn filter_odd(grid: Vec<Cell>) -> Vec<Cell> {
    grid.into_iter().filter(|cell| cell.value % 2 == 1).collect()
}
