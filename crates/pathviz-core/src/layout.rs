//! Pixel geometry of the grid as drawn by a renderer.

use crate::geom::{Point, Range};

/// Where the grid sits on screen: the pixel position of cell (0, 0) and the
/// side length of one square cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub origin: Point,
    pub cell_size: i32,
}

impl Default for GridLayout {
    /// 30 px margin, 20 px cells: a 33×33 grid fills 660×660 px.
    fn default() -> Self {
        Self {
            origin: Point::new(30, 30),
            cell_size: 20,
        }
    }
}

impl GridLayout {
    /// Map a pixel to the cell under it, or `None` when the pixel falls
    /// outside `bounds` or too far from the origin to measure.
    pub fn cell_at(&self, pixel: Point, bounds: Range) -> Option<Point> {
        if self.cell_size <= 0 {
            return None;
        }
        let dx = pixel.x.checked_sub(self.origin.x)?;
        let dy = pixel.y.checked_sub(self.origin.y)?;
        let p = Point::new(
            dx.div_euclid(self.cell_size),
            dy.div_euclid(self.cell_size),
        );
        bounds.contains(p).then_some(p)
    }

    /// Top-left pixel of cell `p`.
    #[inline]
    pub fn cell_origin(&self, p: Point) -> Point {
        self.origin + p * self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_map_by_integer_division() {
        let l = GridLayout::default();
        let b = Range::new(0, 0, 33, 33);
        assert_eq!(l.cell_at(Point::new(30, 30), b), Some(Point::new(0, 0)));
        assert_eq!(l.cell_at(Point::new(49, 49), b), Some(Point::new(0, 0)));
        assert_eq!(l.cell_at(Point::new(50, 71), b), Some(Point::new(1, 2)));
        assert_eq!(l.cell_at(Point::new(689, 689), b), Some(Point::new(32, 32)));
    }

    #[test]
    fn pixels_outside_grid_map_to_none() {
        let l = GridLayout::default();
        let b = Range::new(0, 0, 33, 33);
        // Inside the margin, which plain truncation would fold into column 0.
        assert_eq!(l.cell_at(Point::new(15, 40), b), None);
        assert_eq!(l.cell_at(Point::new(690, 40), b), None);
        assert_eq!(l.cell_at(Point::new(40, 1000), b), None);
    }

    #[test]
    fn extreme_pixels_map_to_none() {
        let l = GridLayout::default();
        let b = Range::new(0, 0, 33, 33);
        assert_eq!(l.cell_at(Point::new(i32::MIN, 40), b), None);
        assert_eq!(l.cell_at(Point::new(40, i32::MIN), b), None);
        assert_eq!(l.cell_at(Point::new(i32::MAX, i32::MAX), b), None);
        let far = GridLayout {
            origin: Point::new(-100, -100),
            cell_size: 20,
        };
        assert_eq!(far.cell_at(Point::new(i32::MAX, 0), b), None);
    }

    #[test]
    fn cell_origin_inverts_cell_at() {
        let l = GridLayout::default();
        let b = Range::new(0, 0, 33, 33);
        let p = Point::new(7, 12);
        assert_eq!(l.cell_at(l.cell_origin(p), b), Some(p));
    }

    #[test]
    fn degenerate_cell_size() {
        let l = GridLayout {
            origin: Point::ZERO,
            cell_size: 0,
        };
        assert_eq!(l.cell_at(Point::new(3, 3), Range::new(0, 0, 5, 5)), None);
    }
}
