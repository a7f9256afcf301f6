//! Adaptive coordinate lattices.
//!
//! A [`Lattice`] is a square grid of `2ᵏ + 1` by `2ᵏ + 1` geodetic points,
//! `k ≥ 1`. Row 0 is the northernmost row, column 0 the westernmost column.
//! The grid is stored in a single vector, in row major order.
//!
//! Besides the *real* lattice, built from geodesic computations, a lattice
//! carries a *virtual* size, i.e. the resolution at which consumers sample
//! it through [`at`](Lattice::at). The two resolutions are independent:
//! the virtual size is unaffected by [`split`](Lattice::split) and
//! [`join`](Lattice::join).

mod interpolation;
mod refine;

use crate::prelude::*;
use log::warn;
use std::f64::consts::SQRT_2;
use std::fmt;

/// The virtual size given to lattices constructed from corners
pub const DEFAULT_VIRTUAL_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    grid: Vec<GeodeticPoint>,
    size: usize,
    real_spacing: f64,
    virtual_size: usize,
    radius: Option<f64>,
}

// Indices of the 3x3 lattice built by the constructors
const NW: usize = 0;
const N: usize = 1;
const NE: usize = 2;
const W: usize = 3;
const C: usize = 4;
const E: usize = 5;
const SW: usize = 6;
const S: usize = 7;
const SE: usize = 8;

// ----- C O N S T R U C T O R S ---------------------------------------------

impl Lattice {
    /// A 3x3 lattice from two opposite corners.
    ///
    /// The center is the midpoint of the geodesic from `southwest` to
    /// `northeast`. The two remaining corners are found by walking half the
    /// corner-to-corner distance from the center, towards northwest and
    /// southeast. The real spacing, `d / 2√2`, is exact only for a square
    /// region.
    #[must_use]
    pub fn from_corners(southwest: GeodeticPoint, northeast: GeodeticPoint) -> Lattice {
        let diagonal = inverse(&southwest, &northeast);
        let half = diagonal.distance / 2.;
        let center = direct(&southwest, diagonal.bearing1, half);

        let mut grid = [GeodeticPoint::origin(); 9];
        grid[SW] = southwest;
        grid[NE] = northeast;
        grid[C] = center;
        grid[NW] = direct(&center, direction::NORTHWEST, half);
        grid[SE] = direct(&center, direction::SOUTHEAST, half);

        let spacing = diagonal.distance / (2. * SQRT_2);
        Lattice::from_center_and_corners(grid, spacing, DEFAULT_VIRTUAL_SIZE, None)
    }

    /// A 3x3 lattice from four arbitrary corners.
    ///
    /// No check is made that the corners form anything like a square. The
    /// center is the arithmetic mean of the corner latitudes and longitudes,
    /// and the real spacing is the mean of the four center-to-corner
    /// distances, divided by √2.
    #[must_use]
    pub fn from_quadrilateral(
        southwest: GeodeticPoint,
        northwest: GeodeticPoint,
        northeast: GeodeticPoint,
        southeast: GeodeticPoint,
    ) -> Lattice {
        let corners = [southwest, northwest, northeast, southeast];
        let latitude = corners.iter().map(|c| c.latitude()).sum::<f64>() / 4.;
        let longitude = corners.iter().map(|c| c.longitude()).sum::<f64>() / 4.;
        let center = GeodeticPoint::new(latitude, longitude);

        let total: f64 = corners.iter().map(|c| distance_between(&center, c)).sum();
        let spacing = total / (4. * SQRT_2);

        let mut grid = [GeodeticPoint::origin(); 9];
        grid[SW] = southwest;
        grid[NW] = northwest;
        grid[NE] = northeast;
        grid[SE] = southeast;
        grid[C] = center;
        Lattice::from_center_and_corners(grid, spacing, DEFAULT_VIRTUAL_SIZE, None)
    }

    /// A 3x3 lattice around `center`, with real spacing `radius`: The
    /// corners are `√2·radius` from the center, along the diagonals.
    ///
    /// A zero radius is accepted, and gives a lattice of 9 identical points.
    ///
    /// # Errors
    ///
    /// [`Error::BadParam`] for a negative or non-finite `radius`, or a zero
    /// `virtual_size`. [`Error::General`] for a non-finite `center`.
    pub fn from_center(
        center: GeodeticPoint,
        radius: f64,
        virtual_size: usize,
    ) -> Result<Lattice, Error> {
        if !(radius.is_finite() && radius >= 0.) {
            return Err(Error::BadParam("radius".to_string(), radius.to_string()));
        }
        if virtual_size == 0 {
            return Err(Error::BadParam("virtual_size".to_string(), "0".to_string()));
        }
        if !center.is_finite() {
            return Err(Error::General("Lattice: non-finite center"));
        }

        let diagonal = SQRT_2 * radius;
        let mut grid = [GeodeticPoint::origin(); 9];
        grid[C] = center;
        grid[NE] = direct(&center, direction::NORTHEAST, diagonal);
        grid[SE] = direct(&center, direction::SOUTHEAST, diagonal);
        grid[SW] = direct(&center, direction::SOUTHWEST, diagonal);
        grid[NW] = direct(&center, direction::NORTHWEST, diagonal);
        Ok(Lattice::from_center_and_corners(
            grid,
            radius,
            virtual_size,
            Some(radius),
        ))
    }

    // Fill in the 4 edge midpoints, walking `spacing` from the center
    fn from_center_and_corners(
        mut grid: [GeodeticPoint; 9],
        spacing: f64,
        virtual_size: usize,
        radius: Option<f64>,
    ) -> Lattice {
        if !spacing.is_finite() {
            warn!("Lattice: non-finite spacing ({spacing})");
        }
        let center = grid[C];
        grid[N] = direct(&center, direction::NORTH, spacing);
        grid[E] = direct(&center, direction::EAST, spacing);
        grid[S] = direct(&center, direction::SOUTH, spacing);
        grid[W] = direct(&center, direction::WEST, spacing);
        Lattice {
            grid: grid.to_vec(),
            size: 3,
            real_spacing: spacing,
            virtual_size,
            radius,
        }
    }
}

// ----- A C C E S S O R S ---------------------------------------------

impl Lattice {
    /// Number of rows (and columns) of the real lattice
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The (assumed uniform) distance between neighbouring real points, in meters
    #[must_use]
    pub fn real_spacing(&self) -> f64 {
        self.real_spacing
    }

    #[must_use]
    pub fn virtual_size(&self) -> usize {
        self.virtual_size
    }

    /// `2·radius / virtual_size`. Only lattices constructed by
    /// [`from_center`](Lattice::from_center) have a radius.
    #[must_use]
    pub fn virtual_spacing(&self) -> Option<f64> {
        self.radius.map(|r| 2. * r / self.virtual_size as f64)
    }

    /// Set the resolution used by [`at`](Lattice::at)
    ///
    /// # Errors
    ///
    /// [`Error::BadParam`] if `virtual_size` is zero
    pub fn set_virtual_size(&mut self, virtual_size: usize) -> Result<&mut Self, Error> {
        if virtual_size == 0 {
            return Err(Error::BadParam("virtual_size".to_string(), "0".to_string()));
        }
        self.virtual_size = virtual_size;
        Ok(self)
    }

    /// The real point at (`row`, `col`). Indices beyond the lattice are
    /// clamped to the last row/column.
    #[must_use]
    pub fn real_at(&self, row: usize, col: usize) -> GeodeticPoint {
        let last = self.size - 1;
        self.grid[row.min(last) * self.size + col.min(last)]
    }

    /// A copy of row `row`, counting from the north. Clamped to the last row.
    #[must_use]
    pub fn copy_row(&self, row: usize) -> Vec<GeodeticPoint> {
        let start = row.min(self.size - 1) * self.size;
        self.grid[start..start + self.size].to_vec()
    }

    /// A copy of column `col`, counting from the west. Clamped to the last column.
    #[must_use]
    pub fn copy_col(&self, col: usize) -> Vec<GeodeticPoint> {
        let col = col.min(self.size - 1);
        self.grid.iter().skip(col).step_by(self.size).copied().collect()
    }

    /// Iterate over the rows of the real lattice, north to south
    pub fn rows(&self) -> impl Iterator<Item = &[GeodeticPoint]> {
        self.grid.chunks(self.size)
    }

    #[must_use]
    pub fn center(&self) -> GeodeticPoint {
        self.real_at(self.size / 2, self.size / 2)
    }

    #[must_use]
    pub fn northwest(&self) -> GeodeticPoint {
        self.real_at(0, 0)
    }

    #[must_use]
    pub fn northeast(&self) -> GeodeticPoint {
        self.real_at(0, self.size - 1)
    }

    #[must_use]
    pub fn southwest(&self) -> GeodeticPoint {
        self.real_at(self.size - 1, 0)
    }

    #[must_use]
    pub fn southeast(&self) -> GeodeticPoint {
        self.real_at(self.size - 1, self.size - 1)
    }

    /// Midpoint of the northern edge
    #[must_use]
    pub fn north(&self) -> GeodeticPoint {
        self.real_at(0, self.size / 2)
    }

    /// Midpoint of the eastern edge
    #[must_use]
    pub fn east(&self) -> GeodeticPoint {
        self.real_at(self.size / 2, self.size - 1)
    }

    /// Midpoint of the southern edge
    #[must_use]
    pub fn south(&self) -> GeodeticPoint {
        self.real_at(self.size - 1, self.size / 2)
    }

    /// Midpoint of the western edge
    #[must_use]
    pub fn west(&self) -> GeodeticPoint {
        self.real_at(self.size / 2, 0)
    }

    /// Alias for [`northwest`](Lattice::northwest)
    #[must_use]
    pub fn upper_left(&self) -> GeodeticPoint {
        self.northwest()
    }

    /// Alias for [`northeast`](Lattice::northeast)
    #[must_use]
    pub fn upper_right(&self) -> GeodeticPoint {
        self.northeast()
    }

    /// Alias for [`southwest`](Lattice::southwest)
    #[must_use]
    pub fn lower_left(&self) -> GeodeticPoint {
        self.southwest()
    }

    /// Alias for [`southeast`](Lattice::southeast)
    #[must_use]
    pub fn lower_right(&self) -> GeodeticPoint {
        self.southeast()
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut style = Style::default();
        if let Some(precision) = f.precision() {
            style.precision = precision;
        }
        f.write_str(&crate::format::render_lattice(self, &style))
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn two_corners() {
        let sw = GeodeticPoint::geo(55., 16.);
        let ne = GeodeticPoint::geo(59.5, 16.5);
        let lattice = Lattice::from_corners(sw, ne);

        assert_eq!(lattice.size(), 3);
        assert_eq!(lattice.virtual_size(), DEFAULT_VIRTUAL_SIZE);
        assert_eq!(lattice.virtual_spacing(), None);

        // The given corners are stored as is
        assert_eq!(lattice.southwest(), sw);
        assert_eq!(lattice.northeast(), ne);
        assert_eq!(lattice.lower_left(), sw);
        assert_eq!(lattice.upper_right(), ne);

        let v = inverse(&sw, &ne);
        assert_eq!(lattice.center(), direct(&sw, v.bearing1, v.distance / 2.));
        assert_eq!(lattice.real_spacing(), v.distance / (2. * SQRT_2));

        // The derived corners are half a diagonal from the center
        let c = lattice.center();
        assert_float_eq!(distance_between(&c, &lattice.northwest()), v.distance / 2., abs <= 1e-3);
        assert_float_eq!(distance_between(&c, &lattice.southeast()), v.distance / 2., abs <= 1e-3);
        assert!(lattice.northwest().latitude() > c.latitude());
        assert!(lattice.southeast().longitude() > c.longitude());

        // ...and the edge midpoints are one spacing from the center
        for edge in [lattice.north(), lattice.east(), lattice.south(), lattice.west()] {
            assert_float_eq!(distance_between(&c, &edge), lattice.real_spacing(), abs <= 1e-3);
        }
    }

    #[test]
    fn four_corners() {
        let sw = GeodeticPoint::geo(0., 0.);
        let nw = GeodeticPoint::geo(0.30, 0.10);
        let ne = GeodeticPoint::geo(0.30, 0.35);
        let se = GeodeticPoint::geo(-0.01, 0.30);
        let lattice = Lattice::from_quadrilateral(sw, nw, ne, se);

        assert_eq!(lattice.southwest(), sw);
        assert_eq!(lattice.northwest(), nw);
        assert_eq!(lattice.northeast(), ne);
        assert_eq!(lattice.southeast(), se);

        let c = lattice.center();
        assert_float_eq!(c.latitude(), 0.1475_f64.to_radians(), abs <= 1e-12);
        assert_float_eq!(c.longitude(), 0.1875_f64.to_radians(), abs <= 1e-12);
        assert!(lattice.real_spacing() > 0.);

        let mean = [sw, nw, ne, se]
            .iter()
            .map(|p| distance_between(&c, p))
            .sum::<f64>()
            / 4.;
        assert_float_eq!(lattice.real_spacing(), mean / SQRT_2, rmax <= 1e-12);
    }

    #[test]
    fn center_and_radius() -> Result<(), Error> {
        let center = GeodeticPoint::geo(57., 11.);
        let lattice = Lattice::from_center(center, 5000., 10)?;
        assert_eq!(lattice.center(), center);
        assert_eq!(lattice.real_spacing(), 5000.);
        assert_eq!(lattice.virtual_size(), 10);
        assert_eq!(lattice.virtual_spacing(), Some(1000.));

        for corner in [
            lattice.northwest(),
            lattice.northeast(),
            lattice.southwest(),
            lattice.southeast(),
        ] {
            assert_float_eq!(distance_between(&center, &corner), SQRT_2 * 5000., abs <= 1e-3);
        }
        assert_float_eq!(distance_between(&lattice.west(), &lattice.east()), 10_000., abs <= 1e-3);
        assert_float_eq!(lattice.north().longitude(), center.longitude(), abs <= 1e-15);

        // Degenerate, but legal
        let point = Lattice::from_center(center, 0., 1)?;
        assert!(point.rows().flatten().all(|p| *p == center));

        assert!(matches!(
            Lattice::from_center(center, -1., 10),
            Err(Error::BadParam(_, _))
        ));
        assert!(matches!(
            Lattice::from_center(center, f64::NAN, 10),
            Err(Error::BadParam(_, _))
        ));
        assert!(matches!(
            Lattice::from_center(center, 1000., 0),
            Err(Error::BadParam(_, _))
        ));
        assert!(matches!(
            Lattice::from_center(GeodeticPoint::nan(), 1000., 10),
            Err(Error::General(_))
        ));
        Ok(())
    }

    #[test]
    fn rows_and_columns() -> Result<(), Error> {
        let mut lattice = Lattice::from_center(GeodeticPoint::geo(45., 45.), 1000., 4)?;
        assert_eq!(lattice.copy_row(0), vec![lattice.northwest(), lattice.north(), lattice.northeast()]);
        assert_eq!(lattice.copy_col(2), vec![lattice.northeast(), lattice.east(), lattice.southeast()]);

        // Out of range indices are clamped
        assert_eq!(lattice.copy_row(17), lattice.copy_row(2));
        assert_eq!(lattice.copy_col(3), lattice.copy_col(2));
        assert_eq!(lattice.real_at(99, 99), lattice.southeast());

        let rows: Vec<_> = lattice.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][1], lattice.center());

        lattice.set_virtual_size(8)?;
        assert_eq!(lattice.virtual_size(), 8);
        assert_eq!(lattice.virtual_spacing(), Some(250.));
        assert!(lattice.set_virtual_size(0).is_err());
        assert_eq!(lattice.virtual_size(), 8);
        Ok(())
    }

    #[test]
    fn value_semantics() -> Result<(), Error> {
        let original = Lattice::from_center(GeodeticPoint::geo(10., 10.), 100., 2)?;
        let mut copy = original.clone();
        copy.split();
        assert_eq!(original.size(), 3);
        assert_eq!(copy.size(), 5);
        assert_ne!(original, copy);
        Ok(())
    }

    #[test]
    fn display() -> Result<(), Error> {
        let lattice = Lattice::from_center(GeodeticPoint::new(0.5, 0.5), 0., 1)?;
        let text = format!("{lattice:.1}");
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.lines().next(), Some("[0.5,0.5] [0.5,0.5] [0.5,0.5]"));
        Ok(())
    }
}
