//! Changing the real resolution of a lattice: `split` doubles it, `join`
//! halves it. Both build the new grid completely before swapping it in.

use super::Lattice;
use log::{debug, warn};

impl Lattice {
    /// Double the resolution: An `N×N` lattice becomes `(2N-1)×(2N-1)`.
    ///
    /// The old points are kept. Each new point on an old cell edge is the
    /// geodesic midpoint of the edge. Each new point inside an old cell is
    /// the geodesic midpoint of the cell diagonal running from its upper left
    /// (northwest) corner to its lower right (southeast). The real spacing is
    /// halved, not recomputed.
    pub fn split(&mut self) -> &mut Self {
        let old = self.size;
        let size = 2 * old - 1;
        let mut grid = Vec::with_capacity(size * size);

        for i in 0..size {
            let (m, n) = (i / 2, (i + 1) / 2);
            for j in 0..size {
                let (u, v) = (j / 2, (j + 1) / 2);
                let from = self.grid[m * old + u];
                let point = if i % 2 == 0 && j % 2 == 0 {
                    from
                } else {
                    // (m, u) and (n, v) differ along the row, the column,
                    // or both (the diagonal of an old cell)
                    from.midpoint(&self.grid[n * old + v])
                };
                grid.push(point);
            }
        }

        self.grid = grid;
        self.size = size;
        self.real_spacing /= 2.;
        debug!(
            "split: {old}x{old} -> {size}x{size}, spacing {}",
            self.real_spacing
        );
        self
    }

    /// Split `times` times
    pub fn split_times(&mut self, times: usize) -> &mut Self {
        for _ in 0..times {
            self.split();
        }
        self
    }

    /// Split until the real spacing is no larger than `max_spacing` meters.
    /// Since every split quadruples the number of points, a small
    /// `max_spacing` is costly.
    pub fn split_until(&mut self, max_spacing: f64) -> &mut Self {
        if max_spacing.is_nan() || max_spacing <= 0. {
            warn!("split_until: ignoring non-positive maximum spacing ({max_spacing})");
            return self;
        }
        if !self.real_spacing.is_finite() {
            warn!("split_until: lattice spacing is {}", self.real_spacing);
            return self;
        }
        while self.real_spacing > max_spacing {
            self.split();
        }
        self
    }

    /// Halve the resolution: An `N×N` lattice becomes `((N-1)/2+1)²`, by
    /// keeping every other row and column. The discarded points are lost:
    /// a following `split` recomputes, rather than restores, them.
    ///
    /// A 3×3 lattice is already at its coarsest, and is left unchanged.
    pub fn join(&mut self) -> &mut Self {
        let old = self.size;
        if old <= 3 {
            debug!("join: {old}x{old} lattice cannot be joined further");
            return self;
        }

        let size = (old - 1) / 2 + 1;
        let mut grid = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                grid.push(self.grid[2 * i * old + 2 * j]);
            }
        }

        self.grid = grid;
        self.size = size;
        self.real_spacing *= 2.;
        debug!(
            "join: {old}x{old} -> {size}x{size}, spacing {}",
            self.real_spacing
        );
        self
    }

    /// Join `times` times
    pub fn join_times(&mut self, times: usize) -> &mut Self {
        for _ in 0..times {
            self.join();
        }
        self
    }

    /// Join until the real spacing is at least `min_spacing` meters, or
    /// the lattice is 3×3
    pub fn join_until(&mut self, min_spacing: f64) -> &mut Self {
        while self.real_spacing < min_spacing && self.size > 3 {
            self.join();
        }
        self
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use float_eq::assert_float_eq;

    fn is_valid_size(size: usize) -> bool {
        size >= 3 && (size - 1).is_power_of_two()
    }

    #[test]
    fn split() -> Result<(), Error> {
        let center = GeodeticPoint::geo(60., 5.);
        let mut lattice = Lattice::from_center(center, 10_000., 4)?;
        let before = lattice.clone();
        lattice.split();

        assert_eq!(lattice.size(), 5);
        assert_eq!(lattice.real_spacing(), 5000.);
        assert_eq!(lattice.virtual_size(), 4);

        // Old points are copied
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(lattice.real_at(2 * i, 2 * j), before.real_at(i, j));
            }
        }
        assert_eq!(lattice.center(), center);
        assert_eq!(lattice.northwest(), before.northwest());

        // New points on the edges of old cells are geodesic midpoints
        let a = before.real_at(0, 0);
        let b = before.real_at(0, 1);
        assert_eq!(lattice.real_at(0, 1), a.midpoint(&b));
        let c = before.real_at(1, 0);
        assert_eq!(lattice.real_at(1, 0), a.midpoint(&c));

        // ...and new points inside old cells are on the NW-SE diagonal
        let d = before.real_at(1, 1);
        assert_eq!(lattice.real_at(1, 1), a.midpoint(&d));

        // The new edge points are roughly one new spacing from their neighbours
        let d = distance_between(&a, &lattice.real_at(0, 1));
        assert_float_eq!(d, 5000., rmax <= 1e-3);
        Ok(())
    }

    #[test]
    fn join() -> Result<(), Error> {
        let mut lattice = Lattice::from_center(GeodeticPoint::geo(-20., 130.), 8000., 4)?;
        lattice.split_times(2);
        let fine = lattice.clone();
        assert_eq!(lattice.size(), 9);

        lattice.join();
        assert_eq!(lattice.size(), 5);
        assert_eq!(lattice.real_spacing(), 4000.);
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(lattice.real_at(i, j), fine.real_at(2 * i, 2 * j));
            }
        }

        // Already at the coarsest level
        lattice.join_times(5);
        assert_eq!(lattice.size(), 3);
        assert_eq!(lattice.real_spacing(), 8000.);
        Ok(())
    }

    #[test]
    fn round_trips() {
        let sw = GeodeticPoint::geo(55., 16.);
        let ne = GeodeticPoint::geo(59.5, 16.5);
        let mut lattice = Lattice::from_corners(sw, ne);
        let original = lattice.clone();
        let spacing = lattice.real_spacing();

        lattice.split_times(4);
        assert_eq!(lattice.size(), 33);
        assert!(is_valid_size(lattice.size()));
        assert_eq!(lattice.southwest(), sw);
        assert_eq!(lattice.northeast(), ne);

        // Joining after splitting keeps the original points
        lattice.join_times(4);
        assert_eq!(lattice.real_spacing(), spacing);
        assert_eq!(lattice, original);

        // The points discarded by a join are recomputed by a split, which
        // reproduces them when they were midpoints in the first place
        let mut lattice = original;
        lattice.split_times(2);
        let fine = lattice.clone();
        lattice.join().split();
        assert_eq!(lattice, fine);
    }

    #[test]
    fn until() -> Result<(), Error> {
        let mut lattice = Lattice::from_center(GeodeticPoint::geo(0., 0.), 10_000., 10)?;
        lattice.split_until(1000.);
        assert_eq!(lattice.real_spacing(), 625.);
        assert_eq!(lattice.size(), 33);

        // Already fine enough
        lattice.split_until(1000.);
        assert_eq!(lattice.size(), 33);

        lattice.join_until(2000.);
        assert_eq!(lattice.real_spacing(), 2500.);
        assert_eq!(lattice.size(), 9);

        // Bad thresholds are ignored
        lattice.split_until(0.);
        lattice.split_until(-1.);
        lattice.split_until(f64::NAN);
        assert_eq!(lattice.size(), 9);

        // Joining is bounded by the 3x3 lattice
        lattice.join_until(f64::INFINITY);
        assert_eq!(lattice.size(), 3);
        assert!(is_valid_size(lattice.size()));
        Ok(())
    }
}
