use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum GridError {
    #[error("position ({x}, {y}) is outside the grid")]
    OutOfBounds { x: isize, y: isize },

    #[error("cell buffer length {actual} does not match a {width}x{height} grid")]
    ShapeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("a path must descend at least one row per step")]
    ZeroVerticalStep,
}

/// A read-only view over a row-major byte buffer that wraps horizontally.
///
/// The x coordinate wraps modulo `width`, so the grid repeats forever to
/// the right; the y coordinate is strictly bounded. The buffer is borrowed,
/// never copied.
#[derive(Debug, Clone, Copy)]
pub struct WrappingGrid<'a> {
    cells: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> WrappingGrid<'a> {
    pub fn new(cells: &'a [u8], width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || cells.len() != width * height {
            return Err(GridError::ShapeMismatch {
                width,
                height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the byte at row `y`, column `x mod width`.
    pub fn get(&self, x: isize, y: isize) -> Result<u8, GridError> {
        if x < 0 || y < 0 || y as usize >= self.height {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(self.cells[y as usize * self.width + x as usize % self.width])
    }

    /// Walks from (0, 0) in steps of (dx, dy) until the walk leaves the
    /// bottom of the grid, counting cells equal to `needle`. Horizontal
    /// wraparound means `dx` may exceed the width.
    pub fn count_in_path(&self, needle: u8, dx: usize, dy: usize) -> Result<usize, GridError> {
        if dy == 0 {
            return Err(GridError::ZeroVerticalStep);
        }

        let (mut x, mut y) = (0, 0);
        let mut count = 0;
        while y < self.height {
            if self.get(x as isize, y as isize)? == needle {
                count += 1;
            }
            x += dx;
            y += dy;
        }
        Ok(count)
    }
}
