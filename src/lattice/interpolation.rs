use super::Lattice;
use crate::prelude::*;

impl Lattice {
    /// The point at virtual index (`i`, `j`), i.e. row `i` and column `j` of a
    /// `virtual_size` by `virtual_size` cell partitioning of the lattice.
    /// Indices run over `0..=virtual_size`, and larger indices are clamped.
    ///
    /// The result is a bilinear interpolation in latitude and longitude,
    /// treated as independent planar quantities, between the four real
    /// points surrounding the virtual one. This is a local approximation:
    /// accurate when the real spacing is small, never metrically exact.
    ///
    /// Virtual index 0 and `virtual_size` map exactly onto the real lattice
    /// borders. When `virtual_size` equals the number of real cells, every
    /// virtual point coincides with a real point.
    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> GeodeticPoint {
        let n = self.virtual_size;
        let cells = self.size - 1;
        let (row, dy) = cell(i.min(n), n, cells);
        let (col, dx) = cell(j.min(n), n, cells);

        let a = self.grid[row * self.size + col];
        let b = self.grid[row * self.size + col + 1];
        let c = self.grid[(row + 1) * self.size + col];
        let d = self.grid[(row + 1) * self.size + col + 1];
        interpolate(&a, &b, &c, &d, dx, dy)
    }

    /// [`at`](Lattice::at), for each (`i`, `j`) of `indices`
    #[must_use]
    pub fn positions(&self, indices: &[(usize, usize)]) -> Vec<GeodeticPoint> {
        indices.iter().map(|&(i, j)| self.at(i, j)).collect()
    }
}

// Map a virtual index onto the real cell containing it, and the fractional
// offset within that cell. The last virtual index lands on the far border
// of the last cell, with offset 1. The product is formed in u128, so
// any usize index and virtual size are accepted.
fn cell(index: usize, n: usize, cells: usize) -> (usize, f64) {
    let (index, n, cells) = (index as u128, n as u128, cells as u128);
    let scaled = index * cells;
    let cell = (scaled / n).min(cells - 1);
    let offset = (scaled - cell * n) as f64 / n as f64;
    (cell as usize, offset)
}

/// Bilinear interpolation between the corners of a cell:
/// `a` upper left, `b` upper right, `c` lower left, `d` lower right.
/// `dx` is the offset from the left, `dy` from the top, both in cell units.
#[rustfmt::skip]
fn interpolate(
    a: &GeodeticPoint,
    b: &GeodeticPoint,
    c: &GeodeticPoint,
    d: &GeodeticPoint,
    dx: f64,
    dy: f64,
) -> GeodeticPoint {
    let mut result = GeodeticPoint::origin();
    for i in 0..2 {
        result[i] = a[i] * (1. - dx) * (1. - dy)
                  + b[i] *       dx  * (1. - dy)
                  + c[i] * (1. - dx) *       dy
                  + d[i] *       dx  *       dy;
    }
    result
}

// ----- Tests ---------------------------------------------------------------------
