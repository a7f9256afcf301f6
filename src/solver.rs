//! Free functions for the direct and inverse geodesic problems on the
//! default ellipsoid (WGS84). For other ellipsoids, use the methods
//! [`Ellipsoid::geodesic_fwd`] and [`Ellipsoid::geodesic_inv`] directly.

use crate::prelude::*;

/// Convergence threshold, in radians, for the iteration on σ (direct)
/// and λ (inverse).
pub const DEFAULT_ACCURACY: f64 = 1e-11;

/// Upper bound on the number of rounds in the iterative solutions.
/// For reasonable input, 2 or 3 rounds suffice.
pub const MAX_ITERATIONS: usize = 6;

/// Solve the direct geodesic problem: The point reached by starting at
/// `from`, heading `bearing` radians clockwise from north, and travelling
/// `distance` meters along the geodesic.
///
/// # Examples
///
/// ```rust
/// use vincenty::prelude::*;
/// let p = GeodeticPoint::geo(10., 0.);
/// let q = direct(&p, direction::EAST, 5000.);
/// assert!(q.longitude() > 0.);
/// assert!(q.latitude() < p.latitude());
/// ```
#[must_use]
pub fn direct(from: &GeodeticPoint, bearing: f64, distance: f64) -> GeodeticPoint {
    direct_with(from, bearing, distance, DEFAULT_ACCURACY)
}

/// [`direct`], with a user supplied convergence threshold
#[must_use]
pub fn direct_with(
    from: &GeodeticPoint,
    bearing: f64,
    distance: f64,
    accuracy: f64,
) -> GeodeticPoint {
    Ellipsoid::default().geodesic_fwd(from, bearing, distance, accuracy)
}

/// [`direct`], along the forward bearing and over the distance of `vector`
#[must_use]
pub fn direct_by(from: &GeodeticPoint, vector: &GeodesicVector) -> GeodeticPoint {
    direct(from, vector.bearing1, vector.distance)
}

/// Solve the inverse geodesic problem: The forward bearing, distance, and
/// reverse bearing from `from` to `to`.
///
/// # Examples
///
/// ```rust
/// use vincenty::prelude::*;
/// let a = GeodeticPoint::geo(0., 0.);
/// let b = GeodeticPoint::geo(0., 1.);
/// let v = inverse(&a, &b);
/// assert!((v.bearing1 - direction::EAST).abs() < 1e-12);
/// assert!((v.distance - 111_319.491).abs() < 1e-3);
/// ```
#[must_use]
pub fn inverse(from: &GeodeticPoint, to: &GeodeticPoint) -> GeodesicVector {
    inverse_with(from, to, DEFAULT_ACCURACY)
}

/// [`inverse`], with a user supplied convergence threshold
#[must_use]
pub fn inverse_with(from: &GeodeticPoint, to: &GeodeticPoint, accuracy: f64) -> GeodesicVector {
    Ellipsoid::default().geodesic_inv(from, to, accuracy)
}

/// The geodesic distance between two points, in meters
#[must_use]
pub fn distance_between(from: &GeodeticPoint, to: &GeodeticPoint) -> f64 {
    inverse(from, to).distance
}

/// The forward bearing from `from` towards `to`, in radians
#[must_use]
pub fn bearing_between(from: &GeodeticPoint, to: &GeodeticPoint) -> f64 {
    inverse(from, to).bearing1
}

// ----- Tests ---------------------------------------------------------------------
