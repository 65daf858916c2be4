//! Reference-ellipsoid constant bundles and the pairwise shift parameters
//! derived from them.
//!
//! The numeric values reproduce the conversion tables this crate is
//! contractually bit-compatible with; they are the defining inputs of every
//! series in the crate and are never mutated at runtime.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defining constants of a reference ellipsoid.
///
/// Only the semi-major axis and the inverse flattening are stored, since
/// that is the form the source tables publish; flattening and the first
/// eccentricity squared are derived on demand (at compile time, for the
/// bundles below).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// Equatorial radius in meters.
    #[doc(alias = "a")]
    pub semi_major_axis: f64,
    /// The published `1/f` value.
    #[doc(alias = "1/f")]
    pub inverse_flattening: f64,
}

impl Ellipsoid {
    /// The constant bundle the conversion tables carry for WGS84.
    pub const WGS84: Self = Self {
        semi_major_axis: 6_378_245.0,
        inverse_flattening: 298.3,
    };

    /// The constant bundle the conversion tables carry for SK-42.
    pub const SK42: Self = Self {
        semi_major_axis: 6_378_137.0,
        inverse_flattening: 298.257_223_563,
    };

    /// The constant bundle the conversion tables carry for PZ-90.
    pub const PZ90: Self = Self {
        semi_major_axis: 6_378_136.5,
        inverse_flattening: 298.257_84,
    };

    #[doc(alias = "f")]
    #[must_use]
    pub const fn flattening(&self) -> f64 {
        1.0 / self.inverse_flattening
    }

    #[doc(alias = "e^2")]
    // e^2 = 1 - b^2/a^2
    //     = 1 - (a - af)^2 / a^2
    //     = 1 - (1 - 2 * f + f^2)
    //     = 2 * f - f^2
    #[must_use]
    pub const fn eccentricity_squared(&self) -> f64 {
        let f = self.flattening();
        2.0 * f - f * f
    }
}

/// Linearized shift of a datum relative to WGS84.
///
/// One bundle exists per datum pair, and only pairs involving WGS84 are
/// defined; the correction formulas in [`helmert`](crate::helmert) evaluate
/// the same bundle whether the shift is being added (leaf datum towards
/// WGS84) or subtracted (WGS84 towards the leaf datum).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftParameters {
    /// Mean of the two semi-major axes, in meters.
    pub semi_major_axis: f64,
    /// Mean of the two first eccentricities squared.
    pub eccentricity_squared: f64,
    /// WGS84's semi-major axis minus this datum's, in meters.
    #[doc(alias = "da")]
    pub delta_semi_major_axis: f64,
    /// WGS84's first eccentricity squared minus this datum's.
    #[doc(alias = "de^2")]
    pub delta_eccentricity_squared: f64,
    /// Origin translation along X, in meters.
    pub delta_x: f64,
    /// Origin translation along Y, in meters.
    pub delta_y: f64,
    /// Origin translation along Z, in meters.
    pub delta_z: f64,
}

impl ShiftParameters {
    /// Derives the shift bundle for `ellipsoid` against WGS84 from the
    /// empirically fixed origin translation of that datum pair.
    #[must_use]
    pub const fn against_wgs84(
        ellipsoid: Ellipsoid,
        delta_x: f64,
        delta_y: f64,
        delta_z: f64,
    ) -> Self {
        let wgs84 = Ellipsoid::WGS84;
        Self {
            semi_major_axis: (ellipsoid.semi_major_axis + wgs84.semi_major_axis) / 2.0,
            eccentricity_squared: (ellipsoid.eccentricity_squared()
                + wgs84.eccentricity_squared())
                / 2.0,
            delta_semi_major_axis: wgs84.semi_major_axis - ellipsoid.semi_major_axis,
            delta_eccentricity_squared: wgs84.eccentricity_squared()
                - ellipsoid.eccentricity_squared(),
            delta_x,
            delta_y,
            delta_z,
        }
    }
}
