//! Shared datum-shift correction formulas.
//!
//! These closed-form series estimate the coordinate difference between a
//! datum and WGS84 at a given position. They are evaluated at the *source*
//! position with the shift bundle of whichever non-WGS84 datum is involved;
//! [`Geodetic`](crate::Geodetic) adds the result when heading towards WGS84
//! and subtracts it when leaving, which is why round-trips are approximate
//! rather than exact (the linearization is evaluated at slightly different
//! coordinates on each leg).
//!
//! The latitude and longitude corrections come back in arcseconds and the
//! height correction in meters. Inputs are unrestricted reals: there is no
//! range validation, and latitudes at exactly ±90° hit the `cos(B)`
//! denominator of [`longitude_shift`] — callers keep latitudes strictly
//! inside (−90°, 90°).

use crate::ellipsoid::ShiftParameters;
use uom::si::angle::{radian, second};
use uom::si::f64::{Angle, Length};
use uom::si::length::meter;

/// Arcseconds per radian, rounded as the conversion tables publish it.
#[doc(alias = "ρ")]
const ARC_SECONDS_PER_RADIAN: f64 = 206_264.806_2;

// M: meridian radius of curvature on the averaged ellipsoid
fn meridian_radius(sin_b: f64, p: &ShiftParameters) -> f64 {
    p.semi_major_axis * (1.0 - p.eccentricity_squared)
        / (1.0 - p.eccentricity_squared * sin_b * sin_b).powf(1.5)
}

// N: prime-vertical radius of curvature on the averaged ellipsoid
fn prime_vertical_radius(sin_b: f64, p: &ShiftParameters) -> f64 {
    p.semi_major_axis * (1.0 - p.eccentricity_squared * sin_b * sin_b).powf(-0.5)
}

/// Latitude correction ΔB, in arcseconds, at the given position.
///
/// Combines the eccentricity-rate and axis-rate terms with the origin
/// translation projected onto the local meridian.
#[doc(alias = "dB")]
#[must_use]
pub fn latitude_shift(
    latitude: Angle,
    longitude: Angle,
    height: Length,
    p: &ShiftParameters,
) -> Angle {
    let b = latitude.get::<radian>();
    let l = longitude.get::<radian>();
    let h = height.get::<meter>();
    let sin_b = b.sin();
    let cos_b = b.cos();
    let a = p.semi_major_axis;
    let m = meridian_radius(sin_b, p);
    let n = prime_vertical_radius(sin_b, p);

    Angle::new::<second>(
        ARC_SECONDS_PER_RADIAN / (m + h)
            * (n / a * p.eccentricity_squared * sin_b * cos_b * p.delta_semi_major_axis
                + ((n * n) / (a * a) + 1.0) * n * sin_b * cos_b
                    * p.delta_eccentricity_squared
                    / 2.0
                - (p.delta_x * l.cos() + p.delta_y * l.sin()) * sin_b
                + p.delta_z * cos_b),
    )
}

/// Longitude correction ΔL, in arcseconds, at the given position.
///
/// The origin translation projected onto the local parallel, divided by
/// `(N + H)·cos(B)`.
#[doc(alias = "dL")]
#[must_use]
pub fn longitude_shift(
    latitude: Angle,
    longitude: Angle,
    height: Length,
    p: &ShiftParameters,
) -> Angle {
    let b = latitude.get::<radian>();
    let l = longitude.get::<radian>();
    let h = height.get::<meter>();
    let n = prime_vertical_radius(b.sin(), p);

    Angle::new::<second>(
        ARC_SECONDS_PER_RADIAN / ((n + h) * b.cos())
            * (-p.delta_x * l.sin() + p.delta_y * l.cos()),
    )
}

/// Ellipsoidal-height correction ΔH, in meters, at the given position.
///
/// Defined by the same tables as the angular corrections but not applied by
/// any conversion in this crate: altitude passes through datum hops
/// unchanged, since no vertical datum is modeled.
#[doc(alias = "dH")]
#[must_use]
pub fn height_shift(
    latitude: Angle,
    longitude: Angle,
    _height: Length,
    p: &ShiftParameters,
) -> Length {
    let b = latitude.get::<radian>();
    let l = longitude.get::<radian>();
    let sin_b = b.sin();
    let n = prime_vertical_radius(sin_b, p);
    let a = p.semi_major_axis;

    Length::new::<meter>(
        -a / n * p.delta_semi_major_axis
            + n * sin_b * sin_b * p.delta_eccentricity_squared / 2.0
            + (p.delta_x * l.cos() + p.delta_y * l.sin()) * b.cos()
            + p.delta_z * sin_b,
    )
}
