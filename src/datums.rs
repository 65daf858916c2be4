//! Datum markers and their compile-time parameter bundles.
//!
//! A datum is a zero-sized marker type used only to tag
//! [`Geodetic`](crate::Geodetic) positions with the system they are
//! expressed in, so that positions from different datums cannot be mixed up.
//! The numeric parameters travel as associated constants, keeping the
//! position types plain `Copy` values.

use crate::ellipsoid::{Ellipsoid, ShiftParameters};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reference datum usable as the type parameter of
/// [`Geodetic`](crate::Geodetic).
pub trait Datum {
    /// The datum's ellipsoid constant bundle.
    const ELLIPSOID: Ellipsoid;
}

/// A datum whose offset from WGS84 is captured by a linearized shift.
///
/// SK-42 and PZ-90 publish their shift against WGS84 only; converting
/// between the two of them therefore composes through WGS84 (eg,
/// `sk42.to_wgs84().to_pz90()`). No direct SK-42 ↔ PZ-90 parameters exist,
/// so none are modeled.
pub trait HelmertToWgs84: Datum {
    /// The datum's shift bundle against WGS84.
    const SHIFT: ShiftParameters;
}

/// The [World Geodetic System '84][wgs84] datum.
///
/// This is the hub of the conversion graph: every other datum and grid in
/// this crate converts to or from WGS84 (or, for Gauss-Krüger, to SK-42,
/// which in turn shifts to WGS84).
///
/// [wgs84]: https://en.wikipedia.org/wiki/World_Geodetic_System#WGS_84
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wgs84;

/// The Soviet geodetic system of 1942 ("Pulkovo 1942"), the datum of the
/// [Gauss-Krüger](crate::GaussKruger) survey grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sk42;

/// The PZ-90 datum used by GLONASS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pz90;

impl Datum for Wgs84 {
    const ELLIPSOID: Ellipsoid = Ellipsoid::WGS84;
}

impl Datum for Sk42 {
    const ELLIPSOID: Ellipsoid = Ellipsoid::SK42;
}

impl Datum for Pz90 {
    const ELLIPSOID: Ellipsoid = Ellipsoid::PZ90;
}

impl HelmertToWgs84 for Sk42 {
    const SHIFT: ShiftParameters =
        ShiftParameters::against_wgs84(Ellipsoid::SK42, 23.92, -141.27, -80.9);
}

impl HelmertToWgs84 for Pz90 {
    const SHIFT: ShiftParameters =
        ShiftParameters::against_wgs84(Ellipsoid::PZ90, -1.1, -0.3, -0.9);
}
