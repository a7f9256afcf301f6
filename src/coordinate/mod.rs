use crate::prelude::*;

pub mod point;
pub mod vector;

pub use point::GeodeticPoint;
pub use vector::GeodesicVector;

/// Compass bearings, in radians, clockwise from north
pub mod direction {
    use std::f64::consts::FRAC_PI_4;

    pub const NORTH: f64 = 0.;
    pub const NORTHEAST: f64 = FRAC_PI_4;
    pub const EAST: f64 = 2. * FRAC_PI_4;
    pub const SOUTHEAST: f64 = 3. * FRAC_PI_4;
    pub const SOUTH: f64 = 4. * FRAC_PI_4;
    pub const SOUTHWEST: f64 = 5. * FRAC_PI_4;
    pub const WEST: f64 = 6. * FRAC_PI_4;
    pub const NORTHWEST: f64 = 7. * FRAC_PI_4;

    pub const N: f64 = NORTH;
    pub const NE: f64 = NORTHEAST;
    pub const E: f64 = EAST;
    pub const SE: f64 = SOUTHEAST;
    pub const S: f64 = SOUTH;
    pub const SW: f64 = SOUTHWEST;
    pub const W: f64 = WEST;
    pub const NW: f64 = NORTHWEST;
}

// ----- O P E R A T O R S -----------------------------------------------------------

use std::ops::{Add, Div, Mul, Sub};

/// Travel from a point, along the forward bearing of a vector
impl Add<GeodesicVector> for GeodeticPoint {
    type Output = Self;
    fn add(self, other: GeodesicVector) -> Self {
        direct(&self, other.bearing1, other.distance)
    }
}

/// Travel from a point, along the reverse bearing of a vector
impl Sub<GeodesicVector> for GeodeticPoint {
    type Output = Self;
    fn sub(self, other: GeodesicVector) -> Self {
        direct(&self, other.bearing2, other.distance)
    }
}

/// `b - a` is the geodesic from `a` to `b`
impl Sub for GeodeticPoint {
    type Output = GeodesicVector;
    fn sub(self, other: Self) -> GeodesicVector {
        inverse(&other, &self)
    }
}

/// Scale the distance. The reverse bearing no longer applies, and is zeroed
impl Mul<f64> for GeodesicVector {
    type Output = Self;
    fn mul(self, factor: f64) -> Self {
        GeodesicVector::new(self.bearing1, self.distance * factor, 0.)
    }
}

/// Scale the distance. The reverse bearing no longer applies, and is zeroed
impl Div<f64> for GeodesicVector {
    type Output = Self;
    fn div(self, divisor: f64) -> Self {
        GeodesicVector::new(self.bearing1, self.distance / divisor, 0.)
    }
}

impl GeodeticPoint {
    /// The point halfway along the geodesic from `self` to `other`
    #[must_use]
    pub fn midpoint(&self, other: &GeodeticPoint) -> GeodeticPoint {
        let v = inverse(self, other);
        direct(self, v.bearing1, v.distance / 2.)
    }
}

// ----- T E S T S ---------------------------------------------------
