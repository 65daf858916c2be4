//! UTM grid coordinates on the WGS84 datum.
//!
//! [UTM][utm] maps 6°-wide longitude zones onto planes with a
//! transverse-Mercator projection scaled by `k0 = 0.9996`, offset by a
//! 500 km false easting, and — south of the equator — a 10 000 km false
//! northing. A zone is written as its number followed by a latitude-band
//! letter, eg `"37U"`; the band letter is what records the hemisphere on
//! the way back.
//!
//! [utm]: https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system

use crate::datums::{Datum, Wgs84};
use crate::geodetic::Geodetic;
use std::fmt;
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;
use thiserror::Error;
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

#[doc(alias = "k0")]
const SCALE_FACTOR: f64 = 0.9996;
#[doc(alias = "E0")]
const FALSE_EASTING: f64 = 500_000.;
#[doc(alias = "N0")]
const SOUTHERN_FALSE_NORTHING: f64 = 10_000_000.;

/// A UTM longitude-zone number and latitude-band letter, eg `"37U"`.
///
/// Zones are produced by [`Utm::from_wgs84`] or parsed from their string
/// form:
///
/// ```rust
/// use versta::UtmZone;
///
/// let zone: UtmZone = "37U".parse().unwrap();
/// assert_eq!(zone.number(), 37);
/// assert_eq!(zone.band(), 'U');
/// assert_eq!(zone.to_string(), "37U");
/// assert!("NaNU".parse::<UtmZone>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtmZone {
    number: u8,
    band: char,
}

impl UtmZone {
    /// Constructs a zone from its number and band letter.
    ///
    /// No validation is performed; band letters below `'N'` select the
    /// southern hemisphere when the zone is used for inverse projection.
    #[must_use]
    pub fn new(number: u8, band: char) -> Self {
        Self { number, band }
    }

    /// Returns the latitude-band letter for the given latitude.
    ///
    /// The 20 bands `C`..`X` (skipping `I` and `O`) are 8° tall and cover
    /// latitudes from −80° up to 84°. Latitudes outside that range yield the
    /// sentinel `'Z'` rather than an error; the sentinel flows into the zone
    /// string like any other band, so callers that care about the limits
    /// must check for it.
    #[must_use]
    pub fn band_for_latitude(latitude: Angle) -> char {
        const BANDS: [char; 19] = [
            'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U',
            'V', 'W',
        ];
        let lat = latitude.get::<degree>();
        if !(-80.0..=84.0).contains(&lat) {
            // out of the UTM limits
            return 'Z';
        }
        if lat >= 72.0 {
            return 'X';
        }
        BANDS[((lat + 80.0) / 8.0) as usize]
    }

    /// Returns the longitude-zone number.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Returns the latitude-band letter.
    #[must_use]
    pub fn band(&self) -> char {
        self.band
    }

    // bands below 'N' lie south of the equator
    fn is_southern(&self) -> bool {
        self.band < 'N'
    }
}

impl Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.band)
    }
}

impl FromStr for UtmZone {
    type Err = ParseUtmZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(band) = s.chars().last().filter(char::is_ascii_alphabetic) else {
            return Err(ParseUtmZoneError::MissingBand(s.to_owned()));
        };
        let number = s[..s.len() - band.len_utf8()]
            .parse()
            .map_err(|_| ParseUtmZoneError::InvalidNumber(s.to_owned()))?;
        Ok(Self { number, band })
    }
}

/// Error returned when a `"<number><band>"` zone string cannot be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseUtmZoneError {
    /// The string does not end in a band letter.
    #[error("UTM zone `{0}` has no trailing band letter")]
    MissingBand(String),
    /// The characters before the band letter are not a zone number.
    #[error("UTM zone `{0}` has no parseable zone number")]
    InvalidNumber(String),
}

/// A position on the UTM grid.
///
/// Construct one by forward-projecting a [`Geodetic<Wgs84>`] position with
/// [`Utm::from_wgs84`], or from raw grid coordinates via [`Utm::builder`]/
/// [`Utm::build`] for inverse projection with [`Utm::to_wgs84`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Utm {
    easting: Length,
    northing: Length,
    altitude: Length,
    zone: UtmZone,
}

impl Utm {
    /// Constructs a grid position from raw coordinates and a zone.
    #[must_use]
    pub fn build(
        Components {
            easting,
            northing,
            altitude,
            zone,
        }: Components,
    ) -> Self {
        Self::builder()
            .easting(easting)
            .northing(northing)
            .altitude(altitude)
            .zone(zone)
            .build()
    }

    /// Provides a constructor for a [`Utm`] position.
    pub fn builder() -> Builder<MissingEasting, MissingNorthing, MissingAltitude, MissingZone> {
        Builder {
            under_construction: Utm {
                easting: Length::ZERO,
                northing: Length::ZERO,
                altitude: Length::ZERO,
                zone: UtmZone {
                    number: 0,
                    band: 'Z',
                },
            },
            has: (PhantomData, PhantomData, PhantomData, PhantomData),
        }
    }

    /// Forward-projects a WGS84 position onto the grid.
    ///
    /// The zone number follows from the longitude, except for the zone-32
    /// widening over southern Norway and the four zones covering Svalbard.
    /// The altitude carries over unchanged.
    #[must_use]
    pub fn from_wgs84(wgs84: &Geodetic<Wgs84>) -> Self {
        let lat = wgs84.latitude().get::<degree>();
        let lon = wgs84.longitude().get::<degree>();
        let lat_rad = wgs84.latitude().get::<radian>();
        let lon_rad = wgs84.longitude().get::<radian>();

        let mut zone_number = ((lon + 180.) / 6.) as i32 + 1;

        if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
            zone_number = 32;
        }

        // special zones for Svalbard
        if (72.0..84.0).contains(&lat) {
            if (0.0..9.0).contains(&lon) {
                zone_number = 31;
            } else if (9.0..21.0).contains(&lon) {
                zone_number = 33;
            } else if (21.0..33.0).contains(&lon) {
                zone_number = 35;
            } else if (33.0..42.0).contains(&lon) {
                zone_number = 37;
            }
        }

        // +3 puts the origin in the middle of the zone
        let central_meridian =
            Angle::new::<degree>(f64::from((zone_number - 1) * 6 - 177)).get::<radian>();

        let zone = UtmZone {
            number: zone_number as u8,
            band: UtmZone::band_for_latitude(wgs84.latitude()),
        };

        let a = Wgs84::ELLIPSOID.semi_major_axis;
        let e2 = Wgs84::ELLIPSOID.eccentricity_squared();
        let ep2 = e2 / (1. - e2);

        let n = a / (1. - e2 * lat_rad.sin().powi(2)).sqrt();
        let t = lat_rad.tan() * lat_rad.tan();
        let c = ep2 * lat_rad.cos().powi(2);
        let big_a = lat_rad.cos() * (lon_rad - central_meridian);

        let m = a
            * ((1. - e2 / 4. - 3. / 64. * e2.powi(2) - 5. / 256. * e2.powi(3)) * lat_rad
                - (2. * lat_rad).sin()
                    * (3. / 8. * e2 + 3. / 32. * e2.powi(2) + 45. / 1024. * e2.powi(3))
                + (4. * lat_rad).sin() * (15. / 256. * e2.powi(2) + 45. / 1024. * e2.powi(3))
                - (6. * lat_rad).sin() * (35. / 3072. * e2.powi(3)));

        let easting = SCALE_FACTOR
            * n
            * (big_a
                + (1. - t + c) * big_a.powi(3) / 6.
                + (5. - 18. * t + t * t + 72. * c - 58. * ep2) * big_a.powi(5) / 120.)
            + FALSE_EASTING;

        let mut northing = SCALE_FACTOR
            * (m + n
                * lat_rad.tan()
                * (big_a * big_a / 2.
                    + (5. - t + 9. * c + 4. * c * c) * big_a.powi(4) / 24.
                    + (61. - 58. * t + t * t + 600. * c - 330. * ep2) * big_a.powi(5) / 720.));

        if lat < 0. {
            northing += SOUTHERN_FALSE_NORTHING;
        }

        Utm {
            easting: Length::new::<meter>(easting),
            northing: Length::new::<meter>(northing),
            altitude: wgs84.altitude(),
            zone,
        }
    }

    /// Inverse-projects this grid position back to WGS84.
    ///
    /// The footpoint latitude is recovered from the meridian arc length and
    /// refined by the standard correction series; the band letter of the
    /// zone decides whether the southern false northing is removed first.
    #[must_use]
    pub fn to_wgs84(&self) -> Geodetic<Wgs84> {
        let a = Wgs84::ELLIPSOID.semi_major_axis;
        let e2 = Wgs84::ELLIPSOID.eccentricity_squared();
        let ep2 = e2 / (1. - e2);
        let e1 = (1. - (1. - e2).sqrt()) / (1. + (1. - e2).sqrt());

        // remove the false easting so x is the offset from the central meridian
        let x = self.easting.get::<meter>() - FALSE_EASTING;
        let mut y = self.northing.get::<meter>();
        if self.zone.is_southern() {
            y -= SOUTHERN_FALSE_NORTHING;
        }

        // +3 puts the origin in the middle of the zone
        let central_meridian = f64::from((i32::from(self.zone.number()) - 1) * 6 - 180 + 3);

        let m = y / SCALE_FACTOR;
        let mu = m / (a * (1. - e2 / 4. - 3. * e2 * e2 / 64. - 5. * e2 * e2 * e2 / 256.));

        let phi1 = mu
            + (2. * mu).sin() * (3. * e1 / 2. - (27. / 32.) * e1.powi(3) / 32.)
            + (4. * mu).sin() * ((21. / 16.) * e1.powi(2) - (55. / 32.) * e1.powi(4))
            + (6. * mu).sin() * ((151. / 96.) * e1.powi(3));

        let n1 = a / (1. - e2 * phi1.sin().powi(2)).sqrt();
        let t1 = phi1.tan() * phi1.tan();
        let c1 = ep2 * phi1.cos().powi(2);
        let r1 = a * (1. - e2) / (1. - e2 * phi1.sin().powi(2)).powf(1.5);
        let d = x / (n1 * SCALE_FACTOR);

        let latitude = phi1
            - (n1 * phi1.tan() / r1)
                * (d * d / 2.
                    - (5. + 3. * t1 + 10. * c1 - 4. * c1.powi(2) - 9. * ep2) * d.powi(4) / 24.
                    + (61. + 90. * t1 + 298. * c1 + 45. * t1.powi(2) - 252. * ep2
                        - 3. * c1.powi(2))
                        * d.powi(6)
                        / 720.);

        let longitude = (d - (1. + 2. * t1 + c1) * d.powi(3) / 6.
            + (5. - 2. * c1 + 28. * t1 - 3. * c1.powi(2) + 8. * ep2 + 24. * t1.powi(2))
                * d.powi(5)
                / 120.)
            / phi1.cos();

        Geodetic::<Wgs84>::builder()
            .latitude(Angle::new::<radian>(latitude))
            .longitude(Angle::new::<degree>(central_meridian) + Angle::new::<radian>(longitude))
            .altitude(self.altitude)
            .build()
    }

    /// Returns the easting, including the 500 km false easting.
    #[must_use]
    pub fn easting(&self) -> Length {
        self.easting
    }

    /// Returns the northing, including the southern false northing for
    /// positions below the equator.
    #[must_use]
    pub fn northing(&self) -> Length {
        self.northing
    }

    /// Returns the altitude, carried through projection unchanged.
    #[must_use]
    pub fn altitude(&self) -> Length {
        self.altitude
    }

    /// Returns the longitude zone and latitude band.
    #[must_use]
    pub fn zone(&self) -> UtmZone {
        self.zone
    }
}

impl From<Geodetic<Wgs84>> for Utm {
    fn from(wgs84: Geodetic<Wgs84>) -> Self {
        Self::from_wgs84(&wgs84)
    }
}

impl From<Utm> for Geodetic<Wgs84> {
    fn from(utm: Utm) -> Self {
        utm.to_wgs84()
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq for Utm {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        // in meters
        1e-6
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.zone == other.zone
            && self
                .easting
                .get::<meter>()
                .abs_diff_eq(&other.easting.get::<meter>(), epsilon)
            && self
                .northing
                .get::<meter>()
                .abs_diff_eq(&other.northing.get::<meter>(), epsilon)
            && self
                .altitude
                .get::<meter>()
                .abs_diff_eq(&other.altitude.get::<meter>(), epsilon)
    }
}

/// Argument type for [`Utm::build`].
#[derive(Debug)]
#[must_use]
pub struct Components {
    /// The easting, including the 500 km false easting.
    pub easting: Length,

    /// The northing, including the southern false northing for positions
    /// below the equator.
    pub northing: Length,

    /// The altitude of the proposed position.
    pub altitude: Length,

    /// The longitude zone and latitude band.
    pub zone: UtmZone,
}

/// Used to indicate that a partially-constructed [`Utm`] is missing the easting component.
pub struct MissingEasting;
/// Used to indicate that a partially-constructed [`Utm`] has the easting component set.
pub struct HasEasting;
/// Used to indicate that a partially-constructed [`Utm`] is missing the northing component.
pub struct MissingNorthing;
/// Used to indicate that a partially-constructed [`Utm`] has the northing component set.
pub struct HasNorthing;
/// Used to indicate that a partially-constructed [`Utm`] is missing the altitude component.
pub struct MissingAltitude;
/// Used to indicate that a partially-constructed [`Utm`] has the altitude component set.
pub struct HasAltitude;
/// Used to indicate that a partially-constructed [`Utm`] is missing the zone component.
pub struct MissingZone;
/// Used to indicate that a partially-constructed [`Utm`] has the zone component set.
pub struct HasZone;

/// [Builder] for a [`Utm`] position.
///
/// Construct one through [`Utm::builder`], and finalize with
/// [`Builder::build`].
///
/// [Builder]: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
#[derive(Debug)]
#[must_use]
pub struct Builder<E, N, A, Z> {
    under_construction: Utm,
    has: (
        PhantomData<E>,
        PhantomData<N>,
        PhantomData<A>,
        PhantomData<Z>,
    ),
}

// manual impls of Clone and Copy to avoid requiring the markers to be Copy + Clone
impl<E, N, A, Z> Clone for Builder<E, N, A, Z> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<E, N, A, Z> Copy for Builder<E, N, A, Z> {}

impl<E, N, A, Z> Builder<E, N, A, Z> {
    /// Sets the easting of the position-to-be, including the false easting.
    pub fn easting(mut self, easting: impl Into<Length>) -> Builder<HasEasting, N, A, Z> {
        self.under_construction.easting = easting.into();
        Builder {
            under_construction: self.under_construction,
            has: (PhantomData::<HasEasting>, self.has.1, self.has.2, self.has.3),
        }
    }

    /// Sets the northing of the position-to-be, including the southern false
    /// northing where it applies.
    pub fn northing(mut self, northing: impl Into<Length>) -> Builder<E, HasNorthing, A, Z> {
        self.under_construction.northing = northing.into();
        Builder {
            under_construction: self.under_construction,
            has: (self.has.0, PhantomData::<HasNorthing>, self.has.2, self.has.3),
        }
    }

    /// Sets the altitude of the position-to-be.
    pub fn altitude(mut self, altitude: impl Into<Length>) -> Builder<E, N, HasAltitude, Z> {
        self.under_construction.altitude = altitude.into();
        Builder {
            under_construction: self.under_construction,
            has: (self.has.0, self.has.1, PhantomData::<HasAltitude>, self.has.3),
        }
    }

    /// Sets the zone of the position-to-be.
    pub fn zone(mut self, zone: UtmZone) -> Builder<E, N, A, HasZone> {
        self.under_construction.zone = zone;
        Builder {
            under_construction: self.under_construction,
            has: (self.has.0, self.has.1, self.has.2, PhantomData::<HasZone>),
        }
    }
}

impl Builder<HasEasting, HasNorthing, HasAltitude, HasZone> {
    #[must_use]
    pub fn build(self) -> Utm {
        self.under_construction
    }
}

#[cfg(test)]
mod tests {
    use super::{Components, ParseUtmZoneError, Utm, UtmZone};
    use crate::datums::Wgs84;
    use crate::geodetic;
    use crate::geodetic::Geodetic;
    use approx::assert_abs_diff_eq;
    use quickcheck::quickcheck;
    use rstest::rstest;
    use uom::si::angle::degree;
    use uom::si::f64::{Angle, Length};
    use uom::si::length::meter;

    fn d(degrees: f64) -> Angle {
        Angle::new::<degree>(degrees)
    }
    fn m(meters: f64) -> Length {
        Length::new::<meter>(meters)
    }

    fn wgs84(latitude: f64, longitude: f64, altitude: f64) -> Geodetic<Wgs84> {
        Geodetic::build(geodetic::Components {
            latitude: d(latitude),
            longitude: d(longitude),
            altitude: m(altitude),
        })
    }

    #[rstest]
    #[case(84., 'X')]
    #[case(83.9, 'X')]
    #[case(72., 'X')]
    #[case(64., 'W')]
    #[case(56., 'V')]
    #[case(55.75, 'U')]
    #[case(48., 'U')]
    #[case(40., 'T')]
    #[case(32., 'S')]
    #[case(24., 'R')]
    #[case(16., 'Q')]
    #[case(8., 'P')]
    #[case(0., 'N')]
    #[case(-0.0001, 'M')]
    #[case(-8.5, 'L')]
    #[case(-16.5, 'K')]
    #[case(-24.5, 'J')]
    #[case(-32.5, 'H')]
    #[case(-40.5, 'G')]
    #[case(-48.5, 'F')]
    #[case(-56.5, 'E')]
    #[case(-64.5, 'D')]
    #[case(-80., 'C')]
    #[case(-80.0001, 'Z')]
    #[case(84.0001, 'Z')]
    #[case(90., 'Z')]
    fn band_letters(#[case] latitude: f64, #[case] expected: char) {
        assert_eq!(UtmZone::band_for_latitude(d(latitude)), expected);
    }

    #[test]
    fn bands_are_monotone() {
        let mut previous = 'C';
        let mut lat = -80.0;
        while lat < 84.0 {
            let band = UtmZone::band_for_latitude(d(lat));
            assert_ne!(band, 'Z', "latitude {lat} is inside the UTM limits");
            assert!(band >= previous, "band went backwards at latitude {lat}");
            previous = band;
            lat += 0.25;
        }
    }

    #[rstest]
    #[case("37U", 37, 'U')]
    #[case("7N", 7, 'N')]
    #[case("34H", 34, 'H')]
    fn zone_parsing(#[case] s: &str, #[case] number: u8, #[case] band: char) {
        let zone: UtmZone = s.parse().unwrap();
        assert_eq!(zone.number(), number);
        assert_eq!(zone.band(), band);
        assert_eq!(zone.to_string(), s);
    }

    #[rstest]
    #[case("", ParseUtmZoneError::MissingBand(String::new()))]
    #[case("37", ParseUtmZoneError::MissingBand("37".into()))]
    #[case("U", ParseUtmZoneError::InvalidNumber("U".into()))]
    #[case("abcU", ParseUtmZoneError::InvalidNumber("abcU".into()))]
    #[case("-1N", ParseUtmZoneError::InvalidNumber("-1N".into()))]
    #[case("300N", ParseUtmZoneError::InvalidNumber("300N".into()))]
    fn malformed_zones_fail_loudly(#[case] s: &str, #[case] expected: ParseUtmZoneError) {
        assert_eq!(s.parse::<UtmZone>(), Err(expected));
    }

    #[test]
    fn forward_matches_reference() {
        // Moscow
        let utm = Utm::from_wgs84(&wgs84(55.751244, 37.618423, 150.));
        assert_abs_diff_eq!(utm.easting().get::<meter>(), 413_283.062_741_802, epsilon = 1e-5);
        assert_abs_diff_eq!(
            utm.northing().get::<meter>(),
            6_179_366.817_824_654,
            epsilon = 1e-5
        );
        assert_eq!(utm.zone(), UtmZone::new(37, 'U'));
        assert_eq!(utm.zone().to_string(), "37U");
        assert_eq!(utm.altitude(), m(150.));

        // Berlin
        let utm = Utm::from_wgs84(&wgs84(52.52, 13.405, 34.));
        assert_abs_diff_eq!(utm.easting().get::<meter>(), 391_777.459_565_451, epsilon = 1e-5);
        assert_abs_diff_eq!(
            utm.northing().get::<meter>(),
            5_820_174.336_777_413,
            epsilon = 1e-5
        );
        assert_eq!(utm.zone().to_string(), "33U");
    }

    #[test]
    fn southern_hemisphere_gets_the_false_northing() {
        // Cape Town
        let utm = Utm::from_wgs84(&wgs84(-33.9249, 18.4241, 42.));
        assert_abs_diff_eq!(
            utm.northing().get::<meter>(),
            6_243_115.724_422_760,
            epsilon = 1e-5
        );
        assert_eq!(utm.zone().to_string(), "34H");

        // one point each side of the equator differs by exactly the offset
        let north = Utm::from_wgs84(&wgs84(0.5, 10., 0.));
        let south = Utm::from_wgs84(&wgs84(-0.5, 10., 0.));
        assert_abs_diff_eq!(north.northing().get::<meter>(), 55_274.501_141_771, epsilon = 1e-5);
        assert_abs_diff_eq!(
            south.northing().get::<meter>(),
            9_944_725.498_858_228,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            north.northing().get::<meter>() + south.northing().get::<meter>(),
            10_000_000.,
            epsilon = 1e-5
        );
        // and the inverse recovers the sign from the band letter
        assert!(south.to_wgs84().latitude().get::<degree>() < 0.);
    }

    #[test]
    fn norway_and_svalbard_overrides() {
        // Bergen sits in the widened zone 32
        assert_eq!(Utm::from_wgs84(&wgs84(60.39, 5.32, 0.)).zone().to_string(), "32V");
        // Svalbard skips the even zones
        for (lon, expected) in [(5., "31X"), (15., "33X"), (25., "35X"), (35., "37X")] {
            assert_eq!(
                Utm::from_wgs84(&wgs84(78., lon, 0.)).zone().to_string(),
                expected
            );
        }
    }

    #[test]
    fn inverse_matches_reference() {
        let utm = Utm::build(Components {
            easting: m(413_283.062_741_802),
            northing: m(6_179_366.817_824_654),
            altitude: m(150.),
            zone: "37U".parse().unwrap(),
        });
        let wgs84 = utm.to_wgs84();
        assert_abs_diff_eq!(
            wgs84.latitude().get::<degree>(),
            55.751_244_213_148_524,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            wgs84.longitude().get::<degree>(),
            37.618_422_992_439_690,
            epsilon = 1e-9
        );
        assert_eq!(wgs84.altitude(), m(150.));
    }

    // the forward and inverse series are truncated at different orders, so
    // round-trips are bounded but not exact
    #[rstest]
    #[case(55.751244, 37.618423, 150.)]
    #[case(52.52, 13.405, 34.)]
    #[case(-33.9249, 18.4241, 42.)]
    #[case(40.7128, -74.006, 10.)]
    #[case(-36.8485, 174.7633, 196.)]
    fn round_trip_through_the_grid(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] altitude: f64,
    ) {
        let start = wgs84(latitude, longitude, altitude);
        let back = Utm::from_wgs84(&start).to_wgs84();
        assert_abs_diff_eq!(back, start, epsilon = 1e-6);
        assert_eq!(back.altitude(), start.altitude());
    }

    fn try_utm_round_trip(position: Geodetic<Wgs84>) {
        let back = Utm::from_wgs84(&position).to_wgs84();
        assert_abs_diff_eq!(back, position, epsilon = 1e-5);
        assert_eq!(back.altitude(), position.altitude());
    }

    quickcheck! {
        fn utm_round_trip(lat_seed: f64, lon_seed: f64) -> () {
            let lat = if lat_seed.is_finite() { lat_seed.rem_euclid(164.) - 80. } else { 0. };
            let lon = if lon_seed.is_finite() { lon_seed.rem_euclid(360.) - 180. } else { 0. };
            try_utm_round_trip(wgs84(lat, lon, 100.));
        }
    }

    #[test]
    fn from_impls_mirror_the_methods() {
        let start = wgs84(55.751244, 37.618423, 150.);
        let utm: Utm = start.into();
        assert_eq!(utm, Utm::from_wgs84(&start));
        let back: Geodetic<Wgs84> = utm.into();
        assert_eq!(back, utm.to_wgs84());
    }
}
