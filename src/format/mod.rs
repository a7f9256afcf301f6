//! Human readable rendering of points, vectors and lattices.
//!
//! Rendering is governed by an explicit [`Style`], handed to the render
//! functions. Nothing is kept in global state.

use crate::math::angular;
use crate::prelude::*;
use std::str::FromStr;

/// How to render a [`GeodeticPoint`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateFormat {
    /// Radians, as stored
    #[default]
    Raw,
    /// Decimal degrees
    Dd,
    /// Degrees and decimal minutes
    Dm,
    /// Degrees, minutes and decimal seconds
    Dms,
}

/// How to render the bearings of a [`GeodesicVector`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DirectionFormat {
    #[default]
    Rad,
    Deg,
}

/// Render configuration. `precision` is the number of decimals
/// given for the last (or only) component of each number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub coordinates: CoordinateFormat,
    pub directions: DirectionFormat,
    pub precision: usize,
}

impl Default for Style {
    fn default() -> Style {
        Style {
            coordinates: CoordinateFormat::default(),
            directions: DirectionFormat::default(),
            precision: 6,
        }
    }
}

impl Style {
    #[must_use]
    pub fn new(coordinates: CoordinateFormat, directions: DirectionFormat, precision: usize) -> Style {
        Style {
            coordinates,
            directions,
            precision,
        }
    }
}

impl FromStr for CoordinateFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" | "rad" => Ok(CoordinateFormat::Raw),
            "dd" => Ok(CoordinateFormat::Dd),
            "dm" => Ok(CoordinateFormat::Dm),
            "dms" => Ok(CoordinateFormat::Dms),
            _ => Err(Error::BadParam("format".to_string(), s.to_string())),
        }
    }
}

impl FromStr for DirectionFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rad" => Ok(DirectionFormat::Rad),
            "deg" => Ok(DirectionFormat::Deg),
            _ => Err(Error::BadParam("directions".to_string(), s.to_string())),
        }
    }
}

fn sign(negative: bool) -> &'static str {
    if negative {
        "-"
    } else {
        ""
    }
}

fn render_angle(angle: f64, style: &Style) -> String {
    let p = style.precision;
    match style.coordinates {
        CoordinateFormat::Raw => format!("{angle:.p$}"),
        CoordinateFormat::Dd => format!("{:.p$}", angular::to_degrees(angle)),
        CoordinateFormat::Dm => {
            let dm = angular::to_dm(angle);
            format!("{}{}°{:.p$}'", sign(dm.negative), dm.degrees, dm.minutes)
        }
        CoordinateFormat::Dms => {
            let dms = angular::to_dms(angle);
            format!(
                "{}{}°{}'{:.p$}\"",
                sign(dms.negative),
                dms.degrees,
                dms.minutes,
                dms.seconds
            )
        }
    }
}

/// Render a point as `[latitude,longitude]`
///
/// # Examples
///
/// ```rust
/// use vincenty::*;
/// let p = GeodeticPoint::geo(55.51, -12.76);
/// let style = Style::new(CoordinateFormat::Dms, DirectionFormat::Deg, 1);
/// assert_eq!(render_point(&p, &style), "[55°30'36.0\",-12°45'36.0\"]");
/// ```
#[must_use]
pub fn render_point(point: &GeodeticPoint, style: &Style) -> String {
    format!(
        "[{},{}]",
        render_angle(point.latitude(), style),
        render_angle(point.longitude(), style)
    )
}

/// Render a vector as `{bearing1,distance,bearing2}`
#[must_use]
pub fn render_vector(vector: &GeodesicVector, style: &Style) -> String {
    let p = style.precision;
    let (b1, b2) = match style.directions {
        DirectionFormat::Rad => (vector.bearing1, vector.bearing2),
        DirectionFormat::Deg => (
            angular::to_degrees(vector.bearing1),
            angular::to_degrees(vector.bearing2),
        ),
    };
    format!("{{{b1:.p$},{:.p$},{b2:.p$}}}", vector.distance)
}

/// Render the real points of a lattice, one row per line, north first
#[must_use]
pub fn render_lattice(lattice: &Lattice, style: &Style) -> String {
    let mut text = String::new();
    for row in lattice.rows() {
        let line: Vec<String> = row.iter().map(|p| render_point(p, style)).collect();
        text += &line.join(" ");
        text.push('\n');
    }
    text
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points() {
        let p = GeodeticPoint::geo(55.51, 12.76);
        let mut style = Style::new(CoordinateFormat::Dd, DirectionFormat::Deg, 2);
        assert_eq!(render_point(&p, &style), "[55.51,12.76]");

        style.coordinates = CoordinateFormat::Dm;
        assert_eq!(render_point(&p, &style), "[55°30.60',12°45.60']");

        style.coordinates = CoordinateFormat::Dms;
        assert_eq!(render_point(&p, &style), "[55°30'36.00\",12°45'36.00\"]");

        // Sign survives below one degree
        let q = GeodeticPoint::geo(-0.5, 0.);
        style.coordinates = CoordinateFormat::Dm;
        assert_eq!(render_point(&q, &style), "[-0°30.00',0°0.00']");

        style.coordinates = CoordinateFormat::Raw;
        style.precision = 3;
        assert_eq!(render_point(&GeodeticPoint::new(1., -2.), &style), "[1.000,-2.000]");
    }

    #[test]
    fn vectors() {
        let v = GeodesicVector::new(direction::EAST, 1234.5, direction::WEST);
        let mut style = Style::new(CoordinateFormat::Dd, DirectionFormat::Deg, 1);
        assert_eq!(render_vector(&v, &style), "{90.0,1234.5,270.0}");
        style.directions = DirectionFormat::Rad;
        style.precision = 3;
        assert_eq!(render_vector(&v, &style), "{1.571,1234.500,4.712}");
    }

    #[test]
    fn parsing() -> Result<(), Error> {
        assert_eq!("DMS".parse::<CoordinateFormat>()?, CoordinateFormat::Dms);
        assert_eq!("dd".parse::<CoordinateFormat>()?, CoordinateFormat::Dd);
        assert_eq!("deg".parse::<DirectionFormat>()?, DirectionFormat::Deg);
        assert!("grads".parse::<DirectionFormat>().is_err());
        assert!(matches!(
            "utm".parse::<CoordinateFormat>(),
            Err(Error::BadParam(_, _))
        ));
        Ok(())
    }
}
