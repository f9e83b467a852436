//! Monochrome grid: one boolean ink flag per printer dot.

use crate::error::{ProcessError, Result};

/// Row-major grid of ink flags (`true` = print black).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonochromeGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl MonochromeGrid {
    /// Create an all-paper grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Wrap a row-major cell vector. Fails if the length does not match.
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>) -> Result<Self> {
        if cells.len() != width as usize * height as usize {
            return Err(ProcessError::InvalidImageDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Ink flag at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.cells[self.index(x, y)]
    }

    /// Set the ink flag at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, ink: bool) {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        let i = self.index(x, y);
        self.cells[i] = ink;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics; an empty grid has no rows anyway.
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Number of ink cells.
    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&ink| ink).count()
    }

    /// Fraction of ink cells (0.0 for an empty grid).
    pub fn ink_ratio(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.ink_count() as f64 / self.cells.len() as f64
    }

    /// One byte per dot (0 = paper, 1 = ink), row-major.
    ///
    /// This is the layout printer row encoders consume; packing into bits is
    /// left to the protocol implementation.
    pub fn to_row_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|&ink| u8::from(ink)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = MonochromeGrid::new(5, 3);
        assert_eq!(grid.dimensions(), (5, 3));
        assert_eq!(grid.cells().len(), 15);
        assert_eq!(grid.ink_count(), 0);
        assert_eq!(grid.ink_ratio(), 0.0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = MonochromeGrid::new(3, 2);
        grid.set(2, 1, true);
        assert!(grid.get(2, 1));
        assert!(!grid.get(1, 1));
        assert!(grid.cells()[5]);
    }

    #[test]
    #[should_panic(expected = "outside 3x2 grid")]
    fn test_get_out_of_bounds_panics() {
        let grid = MonochromeGrid::new(3, 2);
        grid.get(3, 0);
    }

    #[test]
    fn test_from_cells_checks_length() {
        assert!(MonochromeGrid::from_cells(2, 2, vec![true; 4]).is_ok());
        assert_eq!(
            MonochromeGrid::from_cells(2, 2, vec![true; 3]),
            Err(ProcessError::InvalidImageDimensions {
                width: 2,
                height: 2
            })
        );
    }

    #[test]
    fn test_rows_and_row_bytes() {
        let grid =
            MonochromeGrid::from_cells(3, 2, vec![true, false, true, false, false, true]).unwrap();
        let rows: Vec<&[bool]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[false, false, true]);
        assert_eq!(grid.to_row_bytes(), vec![1, 0, 1, 0, 0, 1]);
        assert_eq!(grid.ink_count(), 3);
        assert!((grid.ink_ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_grid_has_no_rows() {
        let grid = MonochromeGrid::new(0, 0);
        assert_eq!(grid.rows().count(), 0);
    }
}
