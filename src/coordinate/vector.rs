use crate::math::ulp::{ulp_equals, DEFAULT_MAX_ULP_DIFF};
use crate::prelude::*;
use std::fmt;

/// The geodesic relation between two points: The forward bearing at the
/// first point, the distance in meters, and the reverse bearing at the second.
///
/// Note that a `GeodesicVector` built by [`new`](GeodesicVector::new) need
/// not correspond to any pair of points on the ellipsoid: the three
/// elements are not checked for consistency.
#[derive(Debug, Default, Copy, Clone)]
pub struct GeodesicVector {
    pub bearing1: f64,
    pub distance: f64,
    pub bearing2: f64,
}

impl GeodesicVector {
    #[must_use]
    pub fn new(bearing1: f64, distance: f64, bearing2: f64) -> GeodesicVector {
        GeodesicVector {
            bearing1,
            distance,
            bearing2,
        }
    }
}

/// Vectors are compared by forward bearing and distance only
impl PartialEq for GeodesicVector {
    fn eq(&self, other: &Self) -> bool {
        ulp_equals(self.bearing1, other.bearing1, DEFAULT_MAX_ULP_DIFF)
            && ulp_equals(self.distance, other.distance, DEFAULT_MAX_ULP_DIFF)
    }
}

impl fmt::Display for GeodesicVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut style = Style::default();
        if let Some(precision) = f.precision() {
            style.precision = precision;
        }
        f.write_str(&crate::render_vector(self, &style))
    }
}

// ----- T E S T S ---------------------------------------------------
