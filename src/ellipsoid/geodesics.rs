use crate::ellipsoid::Ellipsoid;
use crate::math::ulp::{ulp_equals, DEFAULT_MAX_ULP_DIFF};
use crate::solver::MAX_ITERATIONS;
use crate::{GeodesicVector, GeodeticPoint};
use log::trace;
use std::f64::consts::PI;

// ----- Geodesics -------------------------------------------------------------
impl Ellipsoid {
    /// For general geodesics, we use the algorithm by Vincenty
    /// ([1975](crate::Bibliography::Vin75)), with updates by the same author
    /// ([1976](crate::Bibliography::Vin76)).
    /// The Vincenty algorithm is relatively simple to implement, but for near-antipodal
    /// cases, it suffers from lack of convergence and loss of accuracy.
    ///
    /// Here, the iteration on σ stops when two consecutive estimates differ by less
    /// than `accuracy`, or after [`MAX_ITERATIONS`](crate::MAX_ITERATIONS) rounds,
    /// whichever comes first. Lack of convergence is not reported: the last estimate
    /// is used as is.
    ///
    /// A `distance` which is ULP-equal to zero returns `from` unchanged, since the
    /// general formula is singular there.
    ///
    /// Karney ([2013](crate::Bibliography::Kar13)) presented an algorithm which is
    /// exact to machine precision, and converges everywhere.
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn geodesic_fwd(
        &self,
        from: &GeodeticPoint,
        azimuth: f64,
        distance: f64,
        accuracy: f64,
    ) -> GeodeticPoint {
        if ulp_equals(0., distance, DEFAULT_MAX_ULP_DIFF) {
            return *from;
        }

        // Coordinates of the point of origin, P1
        let B1 = from.latitude();
        let L1 = from.longitude();
        let f = self.f;

        // The latitude of P1 projected onto the auxiliary sphere
        let (U1sin, U1cos) = self.reduced_latitude_sin_cos(B1);
        let U1tan = U1sin / U1cos;

        // σ_1, here ss1, is the angular distance on the aux sphere from P1 to equator
        let (azisin, azicos) = azimuth.sin_cos();
        let ss1 = U1tan.atan2(azicos);

        // α, the forward azimuth of the geodesic at equator
        let aasin = U1cos * azisin;
        let aacos2 = 1. - aasin * aasin;

        let us = aacos2 * self.second_eccentricity_squared();
        let A = coefficient_a(us);
        let B = coefficient_b(us);

        // Initial estimate for σ, the arc length on the auxiliary sphere
        let b = self.semiminor_axis();
        let mut ss = distance / (b * A);
        let mut ssmx2cos;
        let mut i = 0;

        loop {
            i += 1;

            // 2σ_m, where σ_m is the latitude of the midpoint on the aux sphere
            ssmx2cos = (2. * ss1 + ss).cos();
            let (sssin, sscos) = ss.sin_cos();
            let dss = delta_sigma(B, sssin, sscos, ssmx2cos);

            let prevss = ss;
            ss = distance / (b * A) + dss;

            // Stop criterion: Last update of σ made little difference
            if (prevss - ss).abs() <= accuracy {
                break;
            }
            if i >= MAX_ITERATIONS {
                trace!("geodesic_fwd: no convergence after {i} iterations");
                break;
            }
        }

        // B2: Latitude of destination
        let (sssin, sscos) = ss.sin_cos();
        let t = U1sin * sssin - U1cos * sscos * azicos;
        let B2 = (U1sin * sscos + U1cos * sssin * azicos).atan2((1. - f) * aasin.hypot(t));

        // L2: Longitude of destination
        let ll = (sssin * azisin).atan2(U1cos * sscos - U1sin * sssin * azicos);
        let C = f / 16. * aacos2 * (4. + f * (4. - 3. * aacos2));
        let L = ll
            - (1. - C)
                * f
                * aasin
                * (ss + C * sssin * (ssmx2cos + C * sscos * (-1. + 2. * ssmx2cos * ssmx2cos)));

        GeodeticPoint::new(B2, L1 + L)
    }

    /// The inverse geodesic problem: Distance and azimuths between two points.
    ///
    /// The forward azimuth, `bearing1`, is normalized to [0, 2π). The reverse
    /// azimuth, `bearing2`, is the azimuth of the geodesic at `to`, turned
    /// half a revolution, hence lies in (0, 2π]. Two ULP-equal points give the
    /// all-zero vector.
    ///
    /// See [`geodesic_fwd`](crate::Ellipsoid::geodesic_fwd) for the iteration
    /// bound.
    #[must_use]
    #[allow(non_snake_case)] // allow math-like notation
    pub fn geodesic_inv(
        &self,
        from: &GeodeticPoint,
        to: &GeodeticPoint,
        accuracy: f64,
    ) -> GeodesicVector {
        let B1 = from.latitude();
        let B2 = to.latitude();
        let L1 = from.longitude();
        let L2 = to.longitude();

        if ulp_equals(B1, B2, DEFAULT_MAX_ULP_DIFF) && ulp_equals(L1, L2, DEFAULT_MAX_ULP_DIFF) {
            return GeodesicVector::default();
        }

        let f = self.f;
        let U1 = ((1. - f) * B1.tan()).atan();
        let U2 = ((1. - f) * B2.tan()).atan();
        let (U1sin, U1cos) = U1.sin_cos();
        let (U2sin, U2cos) = U2.sin_cos();

        // Initial estimate for λ, the longitude on the auxiliary sphere
        let L = L2 - L1;
        let mut ll = L;

        let (mut aacos2, mut ssmx2cos);
        let (mut sssin, mut sscos, mut ss);
        let (mut llsin, mut llcos);
        let mut i = 0;

        loop {
            i += 1;

            // σ, the angular separation between the points
            (llsin, llcos) = ll.sin_cos();
            let t1 = U2cos * llsin;
            let t2 = U1cos * U2sin - U1sin * U2cos * llcos;
            sssin = (t1 * t1 + t2 * t2).sqrt();
            sscos = U1sin * U2sin + U1cos * U2cos * llcos;
            ss = sssin.atan2(sscos);

            // α, the forward azimuth of the geodesic at equator
            let aasin = U1cos * U2cos * llsin / sssin;
            aacos2 = 1. - aasin * aasin;

            let prevll = ll;

            // Geodesics along the equator: cos²α vanishes, and with it the
            // denominator of cos 2σ_m
            if ulp_equals(aacos2, 0., 2 * DEFAULT_MAX_ULP_DIFF) {
                ssmx2cos = 0.;
                ll = L + f * aasin * ss;
            } else {
                // cosine of 2 times σ_m, the angular separation from the midpoint to the equator
                ssmx2cos = sscos - 2. * U1sin * U2sin / aacos2;
                let C = f / 16. * aacos2 * (4. + f * (4. - 3. * aacos2));
                ll = L
                    + (1. - C)
                        * f
                        * aasin
                        * (ss
                            + C * sssin
                                * (ssmx2cos + C * sscos * (-1. + 2. * ssmx2cos * ssmx2cos)));
            }

            if (ll - prevll).abs() <= accuracy {
                break;
            }
            if i >= MAX_ITERATIONS {
                trace!("geodesic_inv: no convergence after {i} iterations");
                break;
            }
        }

        // The difference between the dist on the aux sphere and on the ellipsoid.
        let us = aacos2 * self.second_eccentricity_squared();
        let dss = delta_sigma(coefficient_b(us), sssin, sscos, ssmx2cos);
        let s = self.semiminor_axis() * coefficient_a(us) * (ss - dss);

        // Forward azimuth, normalized to [0, 2π)
        let mut a1 = (U2cos * llsin).atan2(U1cos * U2sin - U1sin * U2cos * llcos);
        if a1 < 0. {
            a1 += 2. * PI;
        }

        // Return azimuth: the forward azimuth at P2, turned by 180°
        let a2 = (U1cos * llsin).atan2(-U1sin * U2cos + U1cos * U2sin * llcos) + PI;

        GeodesicVector::new(a1, s, a2)
    }

    /// Geodesic distance between two points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// // Compute the distance between Copenhagen and Paris
    /// use vincenty::{Ellipsoid, GeodeticPoint, DEFAULT_ACCURACY};
    /// let ellps = Ellipsoid::default();
    /// let p0 = GeodeticPoint::geo(55., 12.);
    /// let p1 = GeodeticPoint::geo(49., 2.);
    /// let d = ellps.distance(&p0, &p1, DEFAULT_ACCURACY);
    /// assert!((d - 956_066.231).abs() < 1e-2);
    /// ```
    #[must_use]
    pub fn distance(&self, from: &GeodeticPoint, to: &GeodeticPoint, accuracy: f64) -> f64 {
        self.geodesic_inv(from, to, accuracy).distance
    }
}

/// Vincenty's A, in the full precision form
fn coefficient_a(us: f64) -> f64 {
    1. + us / 16384. * (4096. + us * (-768. + us * (320. - 175. * us)))
}

/// Vincenty's B, in the full precision form
fn coefficient_b(us: f64) -> f64 {
    us / 1024. * (256. + us * (-128. + us * (74. - 47. * us)))
}

/// dσ: The correction term for σ
#[allow(non_snake_case)]
fn delta_sigma(B: f64, sssin: f64, sscos: f64, ssmx2cos: f64) -> f64 {
    let t1 = -1. + 2. * ssmx2cos * ssmx2cos;
    let t2 = -3. + 4. * sssin * sssin;
    let t3 = -3. + 4. * ssmx2cos * ssmx2cos;
    B * sssin * (ssmx2cos + B / 4. * (sscos * t1 - B / 6. * ssmx2cos * t2 * t3))
}

// ----- Tests ---------------------------------------------------------------------
