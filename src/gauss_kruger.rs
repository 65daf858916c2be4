//! Gauss-Krüger flat coordinates on the SK-42 datum.
//!
//! The [Gauss-Krüger][gk] grid divides the earth into 6°-wide longitude
//! zones and maps each onto a plane with a transverse-Mercator projection of
//! the SK-42 ellipsoid. `x` grows northward from the equator; `y` embeds the
//! zone number: it is `(5 + 10·zone)·10⁵` plus the offset from the zone's
//! central meridian, so the zone can be recovered from the coordinate alone.
//!
//! Both directions are fixed-coefficient series; the coefficients below are
//! the published table values and are reproduced verbatim.
//!
//! [gk]: https://en.wikipedia.org/wiki/Gauss%E2%80%93Kr%C3%BCger_coordinate_system

use crate::datums::Sk42;
use crate::geodetic::Geodetic;
use std::marker::PhantomData;
use uom::si::f64::{Angle, Length};
use uom::si::{
    angle::{degree, radian},
    length::meter,
};
use uom::ConstZero;

#[cfg(any(test, feature = "approx"))]
use approx::AbsDiffEq;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Meridian arc length per radian of latitude on the SK-42 ellipsoid.
const ARC_PER_RADIAN: f64 = 6_367_558.496_8;
/// Equatorial radius the published series are tabulated against.
const EQUATORIAL_RADIUS: f64 = 6_378_245.0;

/// A position on the [Gauss-Krüger](self) grid.
///
/// Construct one by forward-projecting a [`Geodetic<Sk42>`] position with
/// [`GaussKruger::from_sk42`], or from raw survey coordinates via
/// [`GaussKruger::builder`]/[`GaussKruger::build`] for inverse projection
/// with [`GaussKruger::to_sk42`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaussKruger {
    x: Length,
    y: Length,
    height: Length,
}

impl GaussKruger {
    /// Constructs a grid position from raw survey coordinates.
    ///
    /// No validation is performed; the inverse series assume `y` carries a
    /// plausible zone prefix.
    #[must_use]
    pub fn build(Components { x, y, height }: Components) -> Self {
        Self::builder().x(x).y(y).height(height).build()
    }

    /// Provides a constructor for a [`GaussKruger`] position.
    pub fn builder() -> Builder<MissingX, MissingY, MissingHeight> {
        Builder {
            under_construction: GaussKruger {
                x: Length::ZERO,
                y: Length::ZERO,
                height: Length::ZERO,
            },
            has: (PhantomData, PhantomData, PhantomData),
        }
    }

    /// Forward-projects an SK-42 position onto the grid.
    ///
    /// The zone is derived from the longitude; the height carries over
    /// unchanged.
    #[must_use]
    pub fn from_sk42(sk42: &Geodetic<Sk42>) -> Self {
        let b = sk42.latitude().get::<radian>();
        let l = sk42.longitude().get::<degree>();

        let zone = zone_number(l);
        let lo = Angle::new::<degree>(l - f64::from(3 + 6 * (zone - 1))).get::<radian>();
        let lo2 = lo * lo;

        let sin_b = b.sin();
        let sin2 = sin_b.powi(2);
        let sin4 = sin_b.powi(4);
        let sin6 = sin_b.powi(6);

        let xa = lo2 * (109_500. - 574_700. * sin2 + 863_700. * sin4 - 398_600. * sin6);
        let xb = lo2 * (278_194. - 830_174. * sin2 + 572_434. * sin4 - 16_010. * sin6 + xa);
        let xc = lo2 * (672_483.4 - 811_219.9 * sin2 + 5_420. * sin4 - 10.6 * sin6 + xb);
        let xd = lo2 * (1_594_561.25 + 5_336.535 * sin2 + 26.79 * sin4 + 0.149 * sin6 + xc);
        let x = ARC_PER_RADIAN * b
            - (b * 2.).sin() * (16_002.89 + 66.960_7 * sin2 + 0.351_5 * sin4 - xd);

        let ya = lo2 * (79_690. - 866_190. * sin2 + 1_730_360. * sin4 - 945_460. * sin6);
        let yb = lo2 * (270_806. - 1_523_417. * sin2 + 1_327_645. * sin4 - 21_701. * sin6 + ya);
        let yc = lo2 * (1_070_204.16 - 2_136_826.66 * sin2 + 17.98 * sin4 - 11.99 * sin6 + yb);
        let y = f64::from(5 + 10 * zone) * 100_000.
            + lo * b.cos()
                * (EQUATORIAL_RADIUS + 21_346.141_5 * sin2 + 107.159 * sin4 + 0.597_7 * sin6 + yc);

        GaussKruger {
            x: Length::new::<meter>(x),
            y: Length::new::<meter>(y),
            height: sk42.altitude(),
        }
    }

    /// Inverse-projects this grid position back to SK-42.
    ///
    /// The zone is recovered from the prefix of `y`; the latitude comes from
    /// a closed-form inversion of the meridian arc length refined by
    /// correction series, and the longitude is the zone's central meridian
    /// plus the recovered offset.
    #[must_use]
    pub fn to_sk42(&self) -> Geodetic<Sk42> {
        let x = self.x.get::<meter>();
        let y = self.y.get::<meter>();

        let zone = (y * 1e-6) as i32;

        let bi = x / ARC_PER_RADIAN;
        let bo = bi
            + (bi * 2.).sin()
                * (0.002_525_886_85 - 0.000_014_918_6 * bi.sin().powi(2)
                    + 0.000_000_119_04 * bi.sin().powi(4));
        let zo = (y - f64::from(10 * zone + 5) * 100_000.) / (EQUATORIAL_RADIUS * bo.cos());

        let sin2 = bo.sin().powi(2);
        let sin4 = bo.sin().powi(4);
        let sin6 = bo.sin().powi(6);
        let zo2 = zo * zo;

        let ba = zo2 * (0.016_72 - 0.006_3 * sin2 + 0.011_88 * sin4 - 0.003_28 * sin6);
        let bb = zo2 * (0.042_858 - 0.025_318 * sin2 + 0.014_346 * sin4 - 0.001_264 * sin6 - ba);
        let bc =
            zo2 * (0.105_006_14 - 0.045_599_16 * sin2 + 0.002_289_01 * sin4 - 0.000_029_87 * sin6
                - bb);
        let db = zo2
            * (bo * 2.).sin()
            * (0.251_684_631 - 0.003_369_263 * sin2 + 0.000_011_276 * sin4 - bc);

        let la = zo2 * (0.003_8 + 0.052_4 * sin2 + 0.048_2 * sin4 + 0.003_2 * sin6);
        let lb = zo2 * (0.012_25 + 0.094_77 * sin2 + 0.032_82 * sin4 - 0.000_34 * sin6 - la);
        let lc =
            zo2 * (0.042_002_5 + 0.148_740_7 * sin2 + 0.005_942 * sin4 - 0.000_015 * sin6 - lb);
        let ld = zo2
            * (0.167_789_75 + 0.162_735_86 * sin2 - 0.000_524_9 * sin4 - 0.000_008_46 * sin6 - lc);
        let dl = zo
            * (1. - 0.003_346_710_8 * sin2 - 0.000_005_600_2 * sin4 - 0.000_000_018_7 * sin6 - ld);

        Geodetic::<Sk42>::builder()
            .latitude(Angle::new::<radian>(bo - db))
            .longitude(
                Angle::new::<degree>(6. * (f64::from(zone) - 0.5)) + Angle::new::<radian>(dl),
            )
            .altitude(self.height)
            .build()
    }

    /// Returns the northward grid coordinate.
    #[must_use]
    pub fn x(&self) -> Length {
        self.x
    }

    /// Returns the zone-prefixed eastward grid coordinate.
    #[must_use]
    pub fn y(&self) -> Length {
        self.y
    }

    /// Returns the height, carried through projection unchanged.
    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }
}

// 6°-wide zones counted from the prime meridian; truncation, not rounding,
// so the zone flips at its exact western edge
fn zone_number(longitude_degrees: f64) -> i32 {
    ((6. + longitude_degrees) / 6.) as i32
}

impl From<Geodetic<Sk42>> for GaussKruger {
    fn from(sk42: Geodetic<Sk42>) -> Self {
        Self::from_sk42(&sk42)
    }
}

impl From<GaussKruger> for Geodetic<Sk42> {
    fn from(gk: GaussKruger) -> Self {
        gk.to_sk42()
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq for GaussKruger {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        // in meters
        1e-6
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x
            .get::<meter>()
            .abs_diff_eq(&other.x.get::<meter>(), epsilon)
            && self
                .y
                .get::<meter>()
                .abs_diff_eq(&other.y.get::<meter>(), epsilon)
            && self
                .height
                .get::<meter>()
                .abs_diff_eq(&other.height.get::<meter>(), epsilon)
    }
}

/// Argument type for [`GaussKruger::build`].
#[derive(Debug, Default)]
#[must_use]
pub struct Components {
    /// The northward grid coordinate.
    pub x: Length,

    /// The zone-prefixed eastward grid coordinate.
    pub y: Length,

    /// The height above the SK-42 ellipsoid.
    pub height: Length,
}

/// Used to indicate that a partially-constructed [`GaussKruger`] is missing the x component.
pub struct MissingX;
/// Used to indicate that a partially-constructed [`GaussKruger`] has the x component set.
pub struct HasX;
/// Used to indicate that a partially-constructed [`GaussKruger`] is missing the y component.
pub struct MissingY;
/// Used to indicate that a partially-constructed [`GaussKruger`] has the y component set.
pub struct HasY;
/// Used to indicate that a partially-constructed [`GaussKruger`] is missing the height component.
pub struct MissingHeight;
/// Used to indicate that a partially-constructed [`GaussKruger`] has the height component set.
pub struct HasHeight;

/// [Builder] for a [`GaussKruger`] position.
///
/// Construct one through [`GaussKruger::builder`], and finalize with
/// [`Builder::build`].
///
/// [Builder]: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
#[derive(Debug)]
#[must_use]
pub struct Builder<X, Y, H> {
    under_construction: GaussKruger,
    has: (PhantomData<X>, PhantomData<Y>, PhantomData<H>),
}

// manual impls of Clone and Copy to avoid requiring the markers to be Copy + Clone
impl<X, Y, H> Clone for Builder<X, Y, H> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<X, Y, H> Copy for Builder<X, Y, H> {}

impl<X, Y, H> Builder<X, Y, H> {
    /// Sets the northward grid coordinate of the position-to-be.
    pub fn x(mut self, x: impl Into<Length>) -> Builder<HasX, Y, H> {
        self.under_construction.x = x.into();
        Builder {
            under_construction: self.under_construction,
            has: (PhantomData::<HasX>, self.has.1, self.has.2),
        }
    }

    /// Sets the zone-prefixed eastward grid coordinate of the position-to-be.
    pub fn y(mut self, y: impl Into<Length>) -> Builder<X, HasY, H> {
        self.under_construction.y = y.into();
        Builder {
            under_construction: self.under_construction,
            has: (self.has.0, PhantomData::<HasY>, self.has.2),
        }
    }

    /// Sets the height of the position-to-be.
    pub fn height(mut self, height: impl Into<Length>) -> Builder<X, Y, HasHeight> {
        self.under_construction.height = height.into();
        Builder {
            under_construction: self.under_construction,
            has: (self.has.0, self.has.1, PhantomData::<HasHeight>),
        }
    }
}

impl Builder<HasX, HasY, HasHeight> {
    #[must_use]
    pub fn build(self) -> GaussKruger {
        self.under_construction
    }
}
