use crate::math::angular;
use crate::math::ulp::{ulp_equals, DEFAULT_MAX_ULP_DIFF};
use crate::prelude::*;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// A geodetic position, `[latitude, longitude]`, in radians. Neither
/// element is range checked: in particular, longitudes are never wrapped.
#[derive(Debug, Default, Copy, Clone)]
pub struct GeodeticPoint(pub [f64; 2]);

impl Index<usize> for GeodeticPoint {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for GeodeticPoint {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

/// Points are equal when both latitude and longitude are equal to within
/// [`DEFAULT_MAX_ULP_DIFF`](crate::DEFAULT_MAX_ULP_DIFF) units in the last place
impl PartialEq for GeodeticPoint {
    fn eq(&self, other: &Self) -> bool {
        ulp_equals(self[0], other[0], DEFAULT_MAX_ULP_DIFF)
            && ulp_equals(self[1], other[1], DEFAULT_MAX_ULP_DIFF)
    }
}

// ----- C O N S T R U C T O R S ---------------------------------------------

/// Constructors
impl GeodeticPoint {
    /// A `GeodeticPoint` from latitude/longitude in radians
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> GeodeticPoint {
        GeodeticPoint([latitude, longitude])
    }

    /// A `GeodeticPoint` from latitude/longitude in degrees
    #[must_use]
    pub fn geo(latitude: f64, longitude: f64) -> GeodeticPoint {
        GeodeticPoint([angular::to_radians(latitude), angular::to_radians(longitude)])
    }

    /// A `GeodeticPoint` from latitude/longitude given as degrees, minutes
    /// and seconds
    #[must_use]
    pub fn dms(latitude: (i32, u16, f64), longitude: (i32, u16, f64)) -> GeodeticPoint {
        let latitude = angular::dms_to_dd(latitude.0, latitude.1, latitude.2);
        let longitude = angular::dms_to_dd(longitude.0, longitude.1, longitude.2);
        GeodeticPoint::geo(latitude, longitude)
    }

    /// A `GeodeticPoint` from latitude/longitude given as degrees and
    /// minutes
    #[must_use]
    pub fn dm(latitude: (i32, f64), longitude: (i32, f64)) -> GeodeticPoint {
        let latitude = angular::dm_to_dd(latitude.0, latitude.1);
        let longitude = angular::dm_to_dd(longitude.0, longitude.1);
        GeodeticPoint::geo(latitude, longitude)
    }

    /// The point at latitude 0, longitude 0
    #[must_use]
    pub fn origin() -> GeodeticPoint {
        GeodeticPoint([0., 0.])
    }

    /// A `GeodeticPoint` consisting of 2 `NaN`s
    #[must_use]
    pub fn nan() -> GeodeticPoint {
        GeodeticPoint([f64::NAN, f64::NAN])
    }
}

// ----- A C C E S S O R S ---------------------------------------------

impl GeodeticPoint {
    /// Latitude, in radians
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self[0]
    }

    /// Longitude, in radians
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self[1]
    }

    /// Latitude and longitude, in degrees
    #[must_use]
    pub fn to_degrees(&self) -> (f64, f64) {
        (
            angular::to_degrees(self.latitude()),
            angular::to_degrees(self.longitude()),
        )
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self[0].is_finite() && self[1].is_finite()
    }
}

/// Parse `"latitude,longitude"`, in degrees, e.g. `"55.5,12.25"`
impl FromStr for GeodeticPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat, lon)) = s.trim().split_once(',') else {
            return Err(Error::Syntax(format!("expected 'lat,lon', got '{s}'")));
        };
        let Ok(lat) = lat.trim().parse::<f64>() else {
            return Err(Error::Syntax(format!("bad latitude in '{s}'")));
        };
        let Ok(lon) = lon.trim().parse::<f64>() else {
            return Err(Error::Syntax(format!("bad longitude in '{s}'")));
        };
        Ok(GeodeticPoint::geo(lat, lon))
    }
}

/// Renders the point in raw radians. Use [`render_point`](crate::render_point)
/// for other formats. A precision given in the format string, as in
/// `{:.3}`, overrides the default.
impl fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut style = Style::default();
        if let Some(precision) = f.precision() {
            style.precision = precision;
        }
        f.write_str(&crate::render_point(self, &style))
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        let p = GeodeticPoint::geo(55.51, 12.76);
        let q = GeodeticPoint::dms((55, 30, 36.), (12, 45, 36.));
        assert_eq!(p, q);
        assert_eq!(GeodeticPoint::dm((55, 30.6), (12, 45.6)), q);
        assert_eq!(GeodeticPoint::dm((-55, 30.6), (0, 0.)), GeodeticPoint::geo(-55.51, 0.));
        assert_eq!(p.latitude(), p[0]);
        assert_eq!(p.longitude(), p[1]);
        assert_eq!(GeodeticPoint::new(0., 0.), GeodeticPoint::origin());

        let (lat, lon) = GeodeticPoint::geo(-30., 200.).to_degrees();
        assert!((lat + 30.).abs() < 1e-12);
        // No wraparound
        assert!((lon - 200.).abs() < 1e-12);

        assert!(p.is_finite());
        assert!(!GeodeticPoint::nan().is_finite());
    }

    #[test]
    fn equality() {
        let p = GeodeticPoint::new(1., 1.);
        let q = GeodeticPoint::new(f64::from_bits(1_f64.to_bits() + 7), 1.);
        let r = GeodeticPoint::new(1., f64::from_bits(1_f64.to_bits() + 8));
        assert_eq!(p, q);
        assert_ne!(p, r);
    }

    #[test]
    fn parsing() -> Result<(), Error> {
        let p: GeodeticPoint = "55,12".parse()?;
        assert_eq!(p, GeodeticPoint::geo(55., 12.));
        let p: GeodeticPoint = " -33.5 , 18.25 ".parse()?;
        assert_eq!(p, GeodeticPoint::geo(-33.5, 18.25));

        assert!(matches!("55".parse::<GeodeticPoint>(), Err(Error::Syntax(_))));
        assert!(matches!("55,x".parse::<GeodeticPoint>(), Err(Error::Syntax(_))));
        assert!(matches!(",".parse::<GeodeticPoint>(), Err(Error::Syntax(_))));
        Ok(())
    }

    #[test]
    fn display() {
        let p = GeodeticPoint::new(0.5, -1.25);
        assert_eq!(p.to_string(), "[0.500000,-1.250000]");
        assert_eq!(format!("{p:.2}"), "[0.50,-1.25]");
    }
}
