use crate::options::Geometry;
use crate::types::{Cell, Point, Rect};

/// Map surviving grid cells to pixel rectangles on the canvas.
///
/// Each cell index locates a column (`index % grid_dimension`) and row
/// (`index / grid_dimension`); the cell covers one `cell_size`-square
/// block at that position. Output order matches input order.
pub fn map_pixels(cells: &[Cell], geom: &Geometry) -> Vec<Rect> {
    cells
        .iter()
        .map(|cell| {
            let col = (cell.index % geom.grid_dimension) as u32;
            let row = (cell.index / geom.grid_dimension) as u32;
            let top_left = Point {
                x: col * geom.cell_size,
                y: row * geom.cell_size,
            };
            Rect {
                top_left,
                bottom_right: Point {
                    x: top_left.x + geom.cell_size,
                    y: top_left.y + geom.cell_size,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn canonical() -> Geometry {
        Options::default().geometry().unwrap()
    }

    #[test]
    fn index_maps_to_column_and_row() {
        let cells = [
            Cell { value: 1, index: 0 },
            Cell { value: 1, index: 7 },
            Cell { value: 1, index: 24 },
        ];
        let rects = map_pixels(&cells, &canonical());

        assert_eq!(rects[0].top_left, Point { x: 0, y: 0 });
        assert_eq!(rects[0].bottom_right, Point { x: 50, y: 50 });

        // index 7 → column 2, row 1
        assert_eq!(rects[1].top_left, Point { x: 100, y: 50 });
        assert_eq!(rects[1].bottom_right, Point { x: 150, y: 100 });

        assert_eq!(rects[2].top_left, Point { x: 200, y: 200 });
        assert_eq!(rects[2].bottom_right, Point { x: 250, y: 250 });
    }

    #[test]
    fn all_rects_are_cell_sized_and_in_bounds() {
        let cells: Vec<Cell> = (0..25).map(|index| Cell { value: 1, index }).collect();
        let rects = map_pixels(&cells, &canonical());

        assert_eq!(rects.len(), 25);
        for rect in &rects {
            assert_eq!(rect.width(), 50);
            assert_eq!(rect.height(), 50);
            assert!(rect.bottom_right.x <= 250);
            assert!(rect.bottom_right.y <= 250);
        }
    }

    #[test]
    fn empty_input_maps_to_empty_output() {
        assert!(map_pixels(&[], &canonical()).is_empty());
    }
}
