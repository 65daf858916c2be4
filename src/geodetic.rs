//! Geodetic positions tagged with the datum they are expressed in.

use crate::datums::{HelmertToWgs84, Pz90, Sk42, Wgs84};
use crate::helmert;
use std::fmt;
use std::fmt::Display;
use std::marker::PhantomData;
use uom::si::f64::{Angle, Length};
use uom::si::{angle::degree, length::meter};
use uom::ConstZero;

#[cfg(any(test, feature = "approx"))]
use approx::AbsDiffEq;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::datums::Datum;

/// A geodetic position (latitude, longitude, ellipsoidal altitude) in the
/// [`Datum`] `D`.
///
/// Positions are plain value objects; conversions construct new positions
/// and never mutate their input. The stored angles are returned exactly as
/// given — there is **no wrap-around or normalization anywhere** in this
/// crate, because the conversion series are evaluated at the raw
/// coordinates. The series also assume the latitude lies strictly inside
/// (−90°, 90°); values outside are accepted unchecked and flow through the
/// trigonometry unvalidated.
///
/// To construct one, use [a builder] via [`Geodetic::builder`] or provide a
/// [`Components`] to [`Geodetic::build`]:
///
/// ```rust
/// use versta::{Geodetic, Wgs84};
/// use uom::si::f64::{Angle, Length};
/// use uom::si::{angle::degree, length::meter};
///
/// let position = Geodetic::<Wgs84>::builder()
///     .latitude(Angle::new::<degree>(55.751244))
///     .longitude(Angle::new::<degree>(37.618423))
///     .altitude(Length::new::<meter>(150.))
///     .build();
/// ```
///
/// [a builder]: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
// don't require D: Serialize/Deserialize since we skip it anyway
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct Geodetic<D> {
    latitude: Angle,
    longitude: Angle,
    altitude: Length,

    #[cfg_attr(feature = "serde", serde(skip))]
    datum: PhantomData<D>,
}

// manual impls of Clone, Copy, and PartialEq to avoid requiring D: Copy + Clone + PartialEq
impl<D> Clone for Geodetic<D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<D> Copy for Geodetic<D> {}
impl<D> PartialEq for Geodetic<D> {
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude
            && self.longitude == other.longitude
            && self.altitude == other.altitude
    }
}

impl<D> Geodetic<D> {
    /// Constructs a position from latitude, longitude, and altitude.
    ///
    /// The altitude is measured as distance above the datum's reference
    /// ellipsoid.
    #[must_use]
    pub fn build(
        Components {
            latitude,
            longitude,
            altitude,
        }: Components,
    ) -> Self {
        Self::builder()
            .latitude(latitude)
            .longitude(longitude)
            .altitude(altitude)
            .build()
    }

    /// Provides a constructor for a [`Geodetic`] position in the datum `D`.
    pub fn builder() -> Builder<D, MissingLatitude, MissingLongitude, MissingAltitude> {
        Builder {
            under_construction: Geodetic {
                latitude: Angle::ZERO,
                longitude: Angle::ZERO,
                altitude: Length::ZERO,
                datum: PhantomData,
            },
            has: (PhantomData, PhantomData, PhantomData),
        }
    }

    /// Returns the angle north of the equator.
    ///
    /// The value is returned exactly as stored or computed; it is *not*
    /// normalized into [−90°, 90°].
    #[must_use]
    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    /// Returns the angle east of the datum's prime meridian.
    ///
    /// The value is returned exactly as stored or computed; it is *not*
    /// normalized into [−180°, 180°).
    #[must_use]
    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    /// Returns the distance beyond the datum's reference ellipsoid.
    ///
    /// Every conversion in this crate carries altitude through unchanged;
    /// no vertical datum is modeled.
    #[must_use]
    pub fn altitude(&self) -> Length {
        self.altitude
    }
}

impl<D> Geodetic<D>
where
    D: HelmertToWgs84,
{
    /// Re-expresses this position in WGS84 by adding `D`'s linearized shift,
    /// evaluated at this position.
    #[must_use]
    pub fn to_wgs84(&self) -> Geodetic<Wgs84> {
        Geodetic {
            latitude: self.latitude
                + helmert::latitude_shift(self.latitude, self.longitude, self.altitude, &D::SHIFT),
            longitude: self.longitude
                + helmert::longitude_shift(self.latitude, self.longitude, self.altitude, &D::SHIFT),
            altitude: self.altitude,
            datum: PhantomData,
        }
    }
}

impl Geodetic<Wgs84> {
    // the shift is evaluated at the WGS84 coordinates but with the
    // destination datum's bundle, mirroring the add direction; round-trips
    // are therefore approximate, not exact.
    fn shifted_to<D: HelmertToWgs84>(&self) -> Geodetic<D> {
        Geodetic {
            latitude: self.latitude
                - helmert::latitude_shift(self.latitude, self.longitude, self.altitude, &D::SHIFT),
            longitude: self.longitude
                - helmert::longitude_shift(self.latitude, self.longitude, self.altitude, &D::SHIFT),
            altitude: self.altitude,
            datum: PhantomData,
        }
    }

    /// Re-expresses this position in SK-42 by subtracting SK-42's linearized
    /// shift, evaluated at this position.
    #[must_use]
    pub fn to_sk42(&self) -> Geodetic<Sk42> {
        self.shifted_to()
    }

    /// Re-expresses this position in PZ-90 by subtracting PZ-90's linearized
    /// shift, evaluated at this position.
    #[must_use]
    pub fn to_pz90(&self) -> Geodetic<Pz90> {
        self.shifted_to()
    }
}

impl From<Geodetic<Sk42>> for Geodetic<Wgs84> {
    fn from(sk42: Geodetic<Sk42>) -> Self {
        sk42.to_wgs84()
    }
}

impl From<Geodetic<Pz90>> for Geodetic<Wgs84> {
    fn from(pz90: Geodetic<Pz90>) -> Self {
        pz90.to_wgs84()
    }
}

impl From<Geodetic<Wgs84>> for Geodetic<Sk42> {
    fn from(wgs84: Geodetic<Wgs84>) -> Self {
        wgs84.to_sk42()
    }
}

impl From<Geodetic<Wgs84>> for Geodetic<Pz90> {
    fn from(wgs84: Geodetic<Wgs84>) -> Self {
        wgs84.to_pz90()
    }
}

impl<D> Display for &Geodetic<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat = self.latitude();
        let lat_is_positive = lat.is_sign_positive();
        let lat = lat.abs().get::<degree>();
        let lon = self.longitude();
        let lon_is_positive = lon.is_sign_positive();
        let lon = lon.abs().get::<degree>();
        let alt = self.altitude.get::<meter>();
        match (lat_is_positive, lon_is_positive) {
            (true, true) => write!(f, "{lat}°N, {lon}°E, {alt}m"),
            (true, false) => write!(f, "{lat}°N, {lon}°W, {alt}m"),
            (false, true) => write!(f, "{lat}°S, {lon}°E, {alt}m"),
            (false, false) => write!(f, "{lat}°S, {lon}°W, {alt}m"),
        }
    }
}

#[cfg(any(test, feature = "approx"))]
impl<D> AbsDiffEq for Geodetic<D> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        // in degrees for the angles and meters for the altitude; the shift
        // series are only good to the linearization anyway
        1e-9
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.latitude
            .get::<degree>()
            .abs_diff_eq(&other.latitude.get::<degree>(), epsilon)
            && self
                .longitude
                .get::<degree>()
                .abs_diff_eq(&other.longitude.get::<degree>(), epsilon)
            && self
                .altitude
                .get::<meter>()
                .abs_diff_eq(&other.altitude.get::<meter>(), epsilon)
    }
}

/// Argument type for [`Geodetic::build`].
#[derive(Debug, Default)]
#[must_use]
pub struct Components {
    /// The latitude angle of the proposed position.
    pub latitude: Angle,

    /// The longitude angle of the proposed position.
    pub longitude: Angle,

    /// The altitude of the proposed position, measured as distance above the
    /// datum's reference ellipsoid.
    pub altitude: Length,
}

/// Used to indicate that a partially-constructed [`Geodetic`] is missing the latitude component.
pub struct MissingLatitude;
/// Used to indicate that a partially-constructed [`Geodetic`] has the latitude component set.
pub struct HasLatitude;
/// Used to indicate that a partially-constructed [`Geodetic`] is missing the longitude component.
pub struct MissingLongitude;
/// Used to indicate that a partially-constructed [`Geodetic`] has the longitude component set.
pub struct HasLongitude;
/// Used to indicate that a partially-constructed [`Geodetic`] is missing the altitude component.
pub struct MissingAltitude;
/// Used to indicate that a partially-constructed [`Geodetic`] has the altitude component set.
pub struct HasAltitude;

/// [Builder] for a [`Geodetic`] position.
///
/// Construct one through [`Geodetic::builder`], and finalize with
/// [`Builder::build`].
///
/// [Builder]: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
#[derive(Debug)]
#[must_use]
pub struct Builder<D, Latitude, Longitude, Altitude> {
    under_construction: Geodetic<D>,
    has: (
        PhantomData<Latitude>,
        PhantomData<Longitude>,
        PhantomData<Altitude>,
    ),
}

// manual impls of Clone and Copy to avoid requiring D: Copy + Clone
impl<D, L1, L2, A> Clone for Builder<D, L1, L2, A> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<D, L1, L2, A> Copy for Builder<D, L1, L2, A> {}

impl<D, L1, L2, A> Builder<D, L1, L2, A> {
    /// Sets the latitudal angle of the position-to-be.
    ///
    /// The conversion series assume a latitude strictly inside (−90°, 90°);
    /// values outside are accepted unchecked.
    pub fn latitude(mut self, latitude: impl Into<Angle>) -> Builder<D, HasLatitude, L2, A> {
        self.under_construction.latitude = latitude.into();
        Builder {
            under_construction: self.under_construction,
            has: (PhantomData::<HasLatitude>, self.has.1, self.has.2),
        }
    }

    /// Sets the longitudal angle of the position-to-be.
    pub fn longitude(mut self, longitude: impl Into<Angle>) -> Builder<D, L1, HasLongitude, A> {
        self.under_construction.longitude = longitude.into();
        Builder {
            under_construction: self.under_construction,
            has: (self.has.0, PhantomData::<HasLongitude>, self.has.2),
        }
    }

    /// Sets the altitude of the position-to-be, measured as distance above
    /// the datum's reference ellipsoid.
    pub fn altitude(mut self, altitude: impl Into<Length>) -> Builder<D, L1, L2, HasAltitude> {
        self.under_construction.altitude = altitude.into();
        Builder {
            under_construction: self.under_construction,
            has: (self.has.0, self.has.1, PhantomData::<HasAltitude>),
        }
    }
}

impl<D> Builder<D, HasLatitude, HasLongitude, HasAltitude> {
    #[must_use]
    pub fn build(self) -> Geodetic<D> {
        self.under_construction
    }
}

#[cfg(test)]
mod tests {
    use super::{Components, Geodetic};
    use crate::datums::{Pz90, Sk42, Wgs84};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use quickcheck::quickcheck;
    use rstest::rstest;
    use uom::si::angle::{degree, radian};
    use uom::si::f64::{Angle, Length};
    use uom::si::length::meter;

    fn d(degrees: f64) -> Angle {
        Angle::new::<degree>(degrees)
    }
    fn m(meters: f64) -> Length {
        Length::new::<meter>(meters)
    }

    fn moscow() -> Geodetic<Wgs84> {
        Geodetic::build(Components {
            latitude: d(55.751244),
            longitude: d(37.618423),
            altitude: m(150.),
        })
    }

    impl quickcheck::Arbitrary for Geodetic<Wgs84> {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            // quickcheck will give us awkward f64 values -- we ignore those
            let mut sane = || loop {
                match f64::arbitrary(g) {
                    0. => break 0.,
                    f if f.is_normal() => break f,
                    _ => {}
                }
            };
            // keep latitudes away from the poles, where the longitude shift
            // divides by cos(B)
            Geodetic::build(Components {
                latitude: d(sane().rem_euclid(170.) - 85.),
                longitude: d(sane().rem_euclid(360.) - 180.),
                altitude: m(sane().rem_euclid(20_000.) - 1_000.),
            })
        }
    }

    #[rstest]
    #[case(0.)]
    #[case(55.751244)]
    #[case(-189.5)]
    #[case(721.)]
    fn degree_radian_round_trip(#[case] degrees: f64) {
        let angle = d(degrees);
        assert_relative_eq!(angle.get::<degree>(), degrees, epsilon = f64::EPSILON * 1e3);
        assert_relative_eq!(
            angle.get::<radian>(),
            degrees.to_radians(),
            epsilon = f64::EPSILON * 1e3
        );
    }

    #[test]
    fn no_wrap_around_on_access() {
        let over_rotated = Geodetic::<Wgs84>::builder()
            .latitude(d(95.))
            .longitude(d(381.))
            .altitude(m(0.))
            .build();
        assert_relative_eq!(
            over_rotated.latitude().get::<degree>(),
            95.,
            epsilon = f64::EPSILON * 1e3
        );
        assert_relative_eq!(
            over_rotated.longitude().get::<degree>(),
            381.,
            epsilon = f64::EPSILON * 1e3
        );
    }

    #[test]
    fn wgs84_to_sk42_matches_reference() {
        let sk42 = moscow().to_sk42();
        assert_abs_diff_eq!(
            sk42.latitude().get::<degree>(),
            55.751_176_025_989_722,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            sk42.longitude().get::<degree>(),
            37.620_437_490_718_878,
            epsilon = 1e-9
        );
        assert_eq!(sk42.altitude(), m(150.));
    }

    #[test]
    fn wgs84_to_pz90_matches_reference() {
        let pz90 = moscow().to_pz90();
        assert_abs_diff_eq!(
            pz90.latitude().get::<degree>(),
            55.751_262_966_851_179,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            pz90.longitude().get::<degree>(),
            37.618_416_091_609_873,
            epsilon = 1e-9
        );
        assert_eq!(pz90.altitude(), m(150.));
    }

    #[test]
    fn sk42_to_wgs84_matches_reference() {
        let wgs84 = Geodetic::<Sk42>::build(Components {
            latitude: d(55.751_176_025_989_722),
            longitude: d(37.620_437_490_718_878),
            altitude: m(150.),
        })
        .to_wgs84();
        assert_abs_diff_eq!(
            wgs84.latitude().get::<degree>(),
            55.751_244_031_883_218,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            wgs84.longitude().get::<degree>(),
            37.618_423_041_177_088,
            epsilon = 1e-9
        );
    }

    #[test]
    fn pz90_to_wgs84_matches_reference() {
        let wgs84 = Geodetic::<Pz90>::build(Components {
            latitude: d(55.751244),
            longitude: d(37.618423),
            altitude: m(150.),
        })
        .to_wgs84();
        assert_abs_diff_eq!(
            wgs84.latitude().get::<degree>(),
            55.751_225_033_148_820,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            wgs84.longitude().get::<degree>(),
            37.618_429_908_390_127,
            epsilon = 1e-9
        );
    }

    #[test]
    fn sk42_to_pz90_composes_through_wgs84() {
        let pz90 = moscow().to_sk42().to_wgs84().to_pz90();
        // two shift hops stay in the same neighborhood
        assert_abs_diff_eq!(
            pz90.latitude().get::<degree>(),
            55.751244,
            epsilon = 1e-3
        );
        assert_eq!(pz90.altitude(), m(150.));
    }

    fn try_datum_round_trip(wgs84: Geodetic<Wgs84>) {
        let via_sk42 = wgs84.to_sk42().to_wgs84();
        assert_abs_diff_eq!(via_sk42, wgs84, epsilon = 1e-5);
        assert_eq!(via_sk42.altitude(), wgs84.altitude());

        let via_pz90 = wgs84.to_pz90().to_wgs84();
        assert_abs_diff_eq!(via_pz90, wgs84, epsilon = 1e-5);
        assert_eq!(via_pz90.altitude(), wgs84.altitude());
    }

    quickcheck! {
        fn datum_round_trip(wgs84: Geodetic<Wgs84>) -> () {
            try_datum_round_trip(wgs84);
        }
    }

    // the linearized shift is evaluated at slightly different coordinates on
    // each leg, so mid-latitude round-trips are tight but not exact
    #[rstest]
    #[case(d(55.751244), d(37.618423), m(150.))]
    #[case(d(48.8566), d(2.3522), m(35.))]
    #[case(d(-33.9249), d(18.4241), m(42.))]
    #[case(d(0.), d(0.), m(0.))]
    fn mid_latitude_round_trips_are_tight(
        #[case] latitude: Angle,
        #[case] longitude: Angle,
        #[case] altitude: Length,
    ) {
        let wgs84 = Geodetic::<Wgs84>::build(Components {
            latitude,
            longitude,
            altitude,
        });
        assert_abs_diff_eq!(wgs84.to_sk42().to_wgs84(), wgs84, epsilon = 1e-6);
        assert_abs_diff_eq!(wgs84.to_pz90().to_wgs84(), wgs84, epsilon = 1e-6);
    }

    #[test]
    fn from_impls_mirror_the_methods() {
        let wgs84 = moscow();
        let sk42: Geodetic<Sk42> = wgs84.into();
        assert_eq!(sk42, wgs84.to_sk42());
        let back: Geodetic<Wgs84> = sk42.into();
        assert_eq!(back, sk42.to_wgs84());
        let pz90: Geodetic<Pz90> = wgs84.into();
        assert_eq!(pz90, wgs84.to_pz90());
    }

    #[test]
    fn display_quadrants() {
        let fuji = Geodetic::<Wgs84>::build(Components {
            latitude: d(35.3619),
            longitude: d(138.7280),
            altitude: m(2294.),
        });
        let shown = format!("{}", &fuji);
        assert!(shown.contains("°N") && shown.contains("°E"), "{shown}");
        let south_west = Geodetic::<Wgs84>::build(Components {
            latitude: d(-35.3619),
            longitude: d(-138.7280),
            altitude: m(2294.),
        });
        let shown = format!("{}", &south_west);
        assert!(shown.contains("°S") && shown.contains("°W"), "{shown}");
    }
}
