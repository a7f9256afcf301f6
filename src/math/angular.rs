use std::f64::consts::PI;

/// Convert degrees to radians. Computed as `(degrees / 180) π`, so the
/// quadrant angles come out as exact multiples of `π/2`.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    (degrees / 180.0) * PI
}

/// Convert radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    (radians * 180.0) / PI
}

/// Simplistic transformation from degrees, minutes and seconds-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from degree-component,
/// minutes forced to unsigned by u16 type, but passing a negative value for
/// seconds leads to undefined behaviour.
#[must_use]
pub fn dms_to_dd(d: i32, m: u16, s: f64) -> f64 {
    d.signum() as f64 * (d.abs() as f64 + (m as f64 + s / 60.) / 60.)
}

/// Simplistic transformation from degrees and minutes-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from
/// degree-component, but passing a negative value for minutes leads
/// to undefined behaviour.
#[must_use]
pub fn dm_to_dd(d: i32, m: f64) -> f64 {
    d.signum() as f64 * (d.abs() as f64 + (m / 60.))
}

/// An angle split into (unsigned) degrees, minutes and seconds-with-decimals.
/// The sign is kept separately, so angles in `(-1°, 0°)` survive.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// An angle split into (unsigned) degrees and minutes-with-decimals.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Dm {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: f64,
}

/// Absolute value of an angle in seconds of arc, snapped to whole
/// micro-arcseconds so that e.g. 29.999999999999996° splits as 30°0'0".
fn arcseconds(radians: f64) -> (bool, f64) {
    let dd = to_degrees(radians);
    let total = (dd.abs() * 3600. * 1e6).round() / 1e6;
    (dd < 0., total)
}

/// Split an angle, given in radians, into degrees, minutes and seconds.
#[must_use]
pub fn to_dms(radians: f64) -> Dms {
    let (negative, total) = arcseconds(radians);
    let d = (total / 3600.).floor();
    let rest = total - d * 3600.;
    let m = (rest / 60.).floor();
    Dms {
        negative,
        degrees: d as u32,
        minutes: m as u32,
        seconds: rest - m * 60.,
    }
}

/// Split an angle, given in radians, into degrees and minutes.
#[must_use]
pub fn to_dm(radians: f64) -> Dm {
    let (negative, total) = arcseconds(radians);
    let d = (total / 3600.).floor();
    Dm {
        negative,
        degrees: d as u32,
        minutes: (total - d * 3600.) / 60.,
    }
}

/// normalize arbitrary angles to [0, 2π):
#[must_use]
pub fn normalize_positive(angle: f64) -> f64 {
    let angle = angle % (2.0 * PI);
    if angle < 0. {
        return angle + 2.0 * PI;
    }
    angle
}

// ----- Tests ---------------------------------------------------------------------
