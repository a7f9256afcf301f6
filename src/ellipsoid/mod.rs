mod geodesics;

/// An ellipsoid of revolution, given by its semimajor axis, *a*, and its
/// flattening, *f*. The geodesic solver is implemented as methods on this
/// type, see [`geodesic_fwd`](Ellipsoid::geodesic_fwd) and
/// [`geodesic_inv`](Ellipsoid::geodesic_inv).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// WGS84, as given by its semimajor and semiminor axes, is the default
/// ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::from_axes(6_378_137.0, 6_356_752.3142)
    }
}

/// Constructors for `Ellipsoid`
impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub const fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// Ellipsoid given by its semimajor and semiminor axes, *f = (a - b) / a*
    #[must_use]
    pub fn from_axes(semimajor_axis: f64, semiminor_axis: f64) -> Ellipsoid {
        let f = (semimajor_axis - semiminor_axis) / semimajor_axis;
        Ellipsoid::new(semimajor_axis, f)
    }
}

impl Ellipsoid {
    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    // ----- Axes and flattening ---------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    // ----- Latitudes -------------------------------------------------------------

    /// Sine and cosine of the reduced latitude, 𝛽, corresponding to the
    /// geographic latitude, 𝜙: *tan 𝛽 = (1 - f) tan 𝜙*
    #[must_use]
    pub fn reduced_latitude_sin_cos(&self, latitude: f64) -> (f64, f64) {
        let tan = (1. - self.f) * latitude.tan();
        let cos = 1. / (1. + tan * tan).sqrt();
        (tan * cos, cos)
    }
}

// ----- Tests ---------------------------------------------------------------------
