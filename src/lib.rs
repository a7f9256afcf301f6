//! *Geodesics and adaptive coordinate lattices on the ellipsoid*.
//!
//! Geodesics
//! ---------
//!
//! The [direct](crate::direct) and [inverse](crate::inverse) geodesic
//! problems are solved by the iterative method of
//! [Vincenty (1975)](crate::Bibliography::Vin75), using the full series
//! for the A and B coefficients.
//! The iteration is bounded: on pathological (near antipodal) input, the
//! last estimate is returned silently.
//!
//! All angles are in radians, all distances in meters. Longitudes are
//! never normalized.
//!
//! Lattices
//! --------
//!
//! A [`Lattice`] is a square grid of `2ᵏ + 1` by `2ᵏ + 1` geodetic points,
//! built from two corners, four corners, or a center and a radius. Its real
//! resolution is doubled by [`split`](Lattice::split) and halved by
//! [`join`](Lattice::join), while [`at`](Lattice::at) samples it at an
//! independent, "virtual", resolution by bilinear interpolation.
//!
//! ```rust
//! use vincenty::prelude::*;
//!
//! let sw = GeodeticPoint::geo(55., 16.);
//! let ne = GeodeticPoint::geo(59.5, 16.5);
//! let mut lattice = Lattice::from_corners(sw, ne);
//! lattice.split_until(10_000.);
//! assert!(lattice.real_spacing() <= 10_000.);
//! assert_eq!(lattice.southwest(), sw);
//! ```

mod coordinate;
mod ellipsoid;
mod format;
mod lattice;
mod math;
mod solver;

pub use crate::coordinate::direction;
pub use crate::coordinate::GeodesicVector;
pub use crate::coordinate::GeodeticPoint;
pub use crate::ellipsoid::Ellipsoid;
pub use crate::format::render_lattice;
pub use crate::format::render_point;
pub use crate::format::render_vector;
pub use crate::format::CoordinateFormat;
pub use crate::format::DirectionFormat;
pub use crate::format::Style;
pub use crate::lattice::Lattice;
pub use crate::lattice::DEFAULT_VIRTUAL_SIZE;
pub use crate::math::angular;
pub use crate::math::ulp::ulp_equals;
pub use crate::math::ulp::DEFAULT_MAX_ULP_DIFF;
pub use crate::solver::bearing_between;
pub use crate::solver::direct;
pub use crate::solver::direct_by;
pub use crate::solver::direct_with;
pub use crate::solver::distance_between;
pub use crate::solver::inverse;
pub use crate::solver::inverse_with;
pub use crate::solver::DEFAULT_ACCURACY;
pub use crate::solver::MAX_ITERATIONS;

/// Preamble for both lattice users and crate-internal modules
pub mod prelude {
    pub use crate::direction;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::GeodesicVector;
    pub use crate::GeodeticPoint;
    pub use crate::Lattice;
    pub use crate::Style;
    pub use crate::{bearing_between, direct, distance_between, inverse};
    pub use crate::{degrees_to_radians, radians_to_degrees, ulp_equals};
}

use thiserror::Error;

/// The single error type of the crate. Note that neither the geodesic
/// solver, nor lattice queries, ever fail: Only the construction of
/// values from unchecked input does.
#[derive(Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    General(&'static str),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),
}

/// Convert an angle from degrees to radians
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    angular::to_radians(degrees)
}

/// Convert an angle from radians to degrees
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    angular::to_degrees(radians)
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// T. Vincenty (1975) Direct and Inverse Solutions of Geodesics on the Ellipsoid
    /// with application of nested equations.
    /// Survey Review, 23(176): 88-93.
    /// [pdf](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
    /// (See also Wikipedia: [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty's_formulae)).
    Vin75,

    /// T. Vincenty (1976). Correspondence. Survey Review. 23(180): 294.
    Vin76,

    /// Charles F.F. Karney (2013) Algorithms for geodesics. Journal of Geodesy 87, 43–55.
    /// [DOI](https://doi.org/10.1007/s00190-012-0578-z)
    Kar13,

    /// Bruce Dawson (2012): *Comparing Floating Point Numbers, 2012 Edition*.
    /// [Web](https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/)
    Daw12,
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::BadParam("radius".to_string(), "-1".to_string());
        assert_eq!(err.to_string(), "malformed value for parameter radius: -1");
        let err = Error::General("Lattice: empty");
        assert_eq!(err.to_string(), "error: Lattice: empty");
    }

    #[test]
    fn conversions() {
        assert_eq!(degrees_to_radians(180.), std::f64::consts::PI);
        assert_eq!(radians_to_degrees(std::f64::consts::PI), 180.);
        assert_eq!(degrees_to_radians(-0.0), -0.0);
        for i in 0..10 {
            let t = (i * 30) as f64;
            assert!((radians_to_degrees(degrees_to_radians(t)) - t).abs() < 1e-12);
        }
    }
}
