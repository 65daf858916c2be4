//! This library provides hard-to-misuse datum shifts and map-grid
//! projections for engineers with other things to worry about than geodesy.
//!
//! A position's numbers mean nothing without the datum they are expressed
//! in: the same latitude and longitude read against WGS84, [SK-42][sk42], or
//! [PZ-90][pz90] can disagree by a couple hundred meters on the ground. This
//! library makes the datum part of the type. A [`Geodetic<Wgs84>`] cannot be
//! passed where a [`Geodetic<Sk42>`] is expected; moving between datums is
//! an explicit conversion that applies the published linearized shift for
//! that pair.
//!
//! WGS84 is the hub of the conversion graph. SK-42 and PZ-90 each publish
//! shift parameters against WGS84 only, so converting between the two of
//! them composes through the hub (`.to_wgs84().to_pz90()`); no direct
//! shortcut exists, by construction. Two projected grids hang off the graph:
//! [`GaussKruger`] (the 6°-zone Soviet survey grid, on SK-42) and [`Utm`]
//! (on WGS84, with zone overrides for Norway and Svalbard and a band-letter
//! scheme that records the hemisphere).
//!
//! Every angle and length in the API is a [`uom`] quantity, so degrees,
//! radians, and arcseconds cannot be silently confused; every unit read is
//! an explicit `get::<unit>()`.
//!
//! Two things to keep in mind:
//!
//! - The transforms reproduce the published closed-form series, which are
//!   truncated: a round-trip such as WGS84 → SK-42 → WGS84 lands within a
//!   micro-degree of where it started, not exactly on it.
//! - Nothing here normalizes angles. What you put in is what the series
//!   see, and latitudes are assumed to lie strictly inside (−90°, 90°).
//!
//! # Examples
//!
//! A GPS fix over Moscow, re-expressed on both grids:
//!
//! ```
//! use versta::{GaussKruger, Geodetic, Utm, Wgs84};
//! use uom::si::f64::{Angle, Length};
//! use uom::si::{angle::degree, length::meter};
//!
//! let fix = Geodetic::<Wgs84>::builder()
//!     .latitude(Angle::new::<degree>(55.751244))
//!     .longitude(Angle::new::<degree>(37.618423))
//!     .altitude(Length::new::<meter>(150.))
//!     .build();
//!
//! // the same place on the Soviet survey grid (via SK-42)
//! let gauss = GaussKruger::from_sk42(&fix.to_sk42());
//! assert_eq!((gauss.y().get::<meter>() * 1e-6) as i32, 7); // 6°-zone 7
//!
//! // and as a UTM grid reference
//! let utm = Utm::from_wgs84(&fix);
//! assert_eq!(utm.zone().to_string(), "37U");
//! ```
//!
//! Going the other way, from coordinates read off a Gauss-Krüger map sheet
//! back to a world position:
//!
//! ```
//! use versta::GaussKruger;
//! use uom::si::angle::degree;
//! use uom::si::f64::Length;
//! use uom::si::length::meter;
//!
//! let sheet = GaussKruger::builder()
//!     .x(Length::new::<meter>(6_181_000.))
//!     .y(Length::new::<meter>(7_413_000.))
//!     .height(Length::new::<meter>(200.))
//!     .build();
//!
//! let position = sheet.to_sk42().to_wgs84();
//! assert!((position.latitude().get::<degree>() - 55.74).abs() < 0.01);
//! ```
//!
//! [sk42]: https://en.wikipedia.org/wiki/SK-42_reference_system
//! [pz90]: https://en.wikipedia.org/wiki/PZ-90

pub mod datums;
pub mod ellipsoid;
pub mod gauss_kruger;
pub mod geodetic;
pub mod helmert;
pub mod utm;

pub use datums::{Datum, HelmertToWgs84, Pz90, Sk42, Wgs84};
pub use ellipsoid::{Ellipsoid, ShiftParameters};
pub use gauss_kruger::GaussKruger;
pub use geodetic::Geodetic;
pub use utm::{ParseUtmZoneError, Utm, UtmZone};
