// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! wgs84-ecef
//!
//! A library for converting positions between
//! [geodetic](https://en.wikipedia.org/wiki/Geodetic_coordinates) and
//! [Earth-Centred, Earth-Fixed](https://en.wikipedia.org/wiki/Earth-centered,_Earth-fixed_coordinate_system)
//! (ECEF) coordinates on the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid.
//!
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! has become the de facto standard for satellite navigation since its adoption
//! by the Navstar Global Positioning System
//! ([GPS](https://www.gps.gov/systems/gps/performance/accuracy/)).
//! GPS receivers calculate positions in ECEF coordinates, while most
//! navigation and survey data is expressed as latitude, longitude and height.
//!
//! ## Conversions
//!
//! A `Geodetic` position is a latitude and longitude in degrees together
//! with a height in metres above the ellipsoid.
//! An `Ecef` position is a point in a Cartesian frame with its origin at the
//! centre of the ellipsoid and its z axis through the North pole.
//!
//! - `geodetic_to_ecef` converts a `Geodetic` position to `Ecef`, it fails
//!   with a `DomainError` if the latitude or longitude is out of range;
//! - `ecef_to_geodetic` converts an `Ecef` position to `Geodetic`, it accepts
//!   any position.
//!
//! The conversion from ECEF to geodetic coordinates calculates the latitude
//! directly, without iteration, using
//! [Bowring's](https://doi.org/10.1179/sre.1976.23.181.323) formula.
//!
//! ## Design
//!
//! The `Ellipsoid` struct holds the WGS-84 parameters and the parameters
//! derived from them. The static `WGS84_ELLIPSOID` is the WGS-84
//! `Ellipsoid` used by the top level functions and the `From` traits.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod ecef;
pub mod ellipsoid;
pub mod error;
pub mod geodetic;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use ecef::Ecef;
pub use error::DomainError;
pub use geodetic::Geodetic;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use once_cell::sync::Lazy;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,

    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
}

impl Ellipsoid {
    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    ///
    /// The Semiminor axis is the WGS-84 literal value, so the second
    /// Eccentricity is calculated from the Semimajor and Semiminor axes
    /// rather than from the flattening.
    #[must_use]
    pub fn wgs84() -> Self {
        let a = ellipsoid::wgs84::A;
        let f = ellipsoid::wgs84::F;
        let b = ellipsoid::wgs84::B;
        Self {
            a,
            f,
            b,
            e_2: ellipsoid::calculate_sq_eccentricity(f),
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(a, b),
        }
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// Calculate the prime vertical radius of curvature at a geodetic latitude.
    /// * `lat` - the geodetic latitude.
    #[must_use]
    pub fn calculate_prime_vertical_radius(&self, lat: Angle) -> Metres {
        ellipsoid::calculate_prime_vertical_radius(lat, self.a, self.e_2)
    }

    /// Calculate the geodetic latitude of a point in a meridian plane.
    /// * `p` - the distance of the point from the polar axis.
    /// * `z` - the distance of the point from the equatorial plane.
    #[must_use]
    pub fn calculate_geodetic_latitude(&self, p: Metres, z: Metres) -> Angle {
        ellipsoid::calculate_geodetic_latitude(p, z, self.a, self.b, self.e_2, self.ep_2)
    }
}

/// A static instance of the WGS-84 `Ellipsoid`.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// Convert a geodetic position on the WGS-84 ellipsoid to ECEF coordinates.
/// * `lat` - the latitude, -90° to 90°.
/// * `lon` - the longitude, -180° to 180°.
/// * `height` - the height above the ellipsoid.
///
/// # Errors
///
/// `DomainError` if the latitude or longitude is out of range.
///
/// # Examples
/// ```
/// use wgs84_ecef::*;
///
/// let ecef = geodetic_to_ecef(Degrees(0.0), Degrees(0.0), Metres(0.0)).unwrap();
/// assert_eq!(Metres(6_378_137.0), ecef.x());
/// assert_eq!(Metres(0.0), ecef.y());
/// assert_eq!(Metres(0.0), ecef.z());
///
/// let result = geodetic_to_ecef(Degrees(91.0), Degrees(0.0), Metres(0.0));
/// assert_eq!(Err(DomainError::LatitudeOutOfRange { degrees: 91.0 }), result);
/// ```
pub fn geodetic_to_ecef(lat: Degrees, lon: Degrees, height: Metres) -> Result<Ecef, DomainError> {
    Ecef::from_geodetic(&Geodetic::new(lat, lon, height), &WGS84_ELLIPSOID)
}

/// Convert ECEF coordinates to a geodetic position on the WGS-84 ellipsoid.
///
/// Any coordinates are accepted, see `Ecef::to_geodetic` for the handling of
/// points on the polar axis and the loss of precision near the poles.
/// * `x`, `y`, `z` - the ECEF coordinates.
///
/// returns the geodetic position, with longitude in the range (-180°, 180°].
///
/// # Examples
/// ```
/// use wgs84_ecef::*;
///
/// // The North pole
/// let position = ecef_to_geodetic(Metres(0.0), Metres(0.0), Metres(6_356_752.314_2));
/// assert_eq!(Degrees(90.0), position.lat());
/// assert_eq!(Degrees(0.0), position.lon());
/// assert_eq!(Metres(0.0), position.height());
/// ```
#[must_use]
pub fn ecef_to_geodetic(x: Metres, y: Metres, z: Metres) -> Geodetic {
    Ecef::new(x, y, z).to_geodetic(&WGS84_ELLIPSOID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_ellipsoid_wgs84() {
        let geoid = Ellipsoid::wgs84();
        assert_eq!(ellipsoid::wgs84::A, geoid.a());
        assert_eq!(ellipsoid::wgs84::F, geoid.f());
        assert_eq!(ellipsoid::wgs84::B, geoid.b());
        assert_eq!(
            ellipsoid::calculate_sq_eccentricity(ellipsoid::wgs84::F),
            geoid.e_2()
        );
        assert_eq!(
            ellipsoid::calculate_sq_2nd_eccentricity(ellipsoid::wgs84::A, ellipsoid::wgs84::B),
            geoid.ep_2()
        );

        // b = a (1 - f), to within the rounding of the literal Semiminor axis
        assert!(is_within_tolerance(
            geoid.a().0 * (1.0 - geoid.f()),
            geoid.b().0,
            1.0e-4
        ));
    }

    #[test]
    fn test_ellipsoid_traits() {
        let geoid = Ellipsoid::wgs84();

        let geoid_clone = geoid.clone();
        assert!(geoid_clone == geoid);
        assert_eq!(geoid, *WGS84_ELLIPSOID);

        println!("Ellipsoid: {:?}", geoid);
    }

    #[test]
    fn test_ellipsoid_calculate_prime_vertical_radius() {
        let geoid = Ellipsoid::wgs84();
        assert_eq!(
            geoid.a(),
            geoid.calculate_prime_vertical_radius(Angle::from(Degrees(0.0)))
        );
        assert!(is_within_tolerance(
            6_399_593.625_758_493,
            geoid
                .calculate_prime_vertical_radius(Angle::from(Degrees(90.0)))
                .0,
            1.0e-6
        ));
    }

    #[test]
    fn test_geodetic_to_ecef_domain() {
        for (lat, lon) in [(91.0, 0.0), (-91.0, 0.0), (0.0, 181.0), (0.0, -181.0)] {
            assert!(geodetic_to_ecef(Degrees(lat), Degrees(lon), Metres(0.0)).is_err());
        }
        assert!(geodetic_to_ecef(Degrees(90.0), Degrees(-180.0), Metres(0.0)).is_ok());
    }

    #[test]
    fn test_ecef_to_geodetic_south_pole() {
        let position = ecef_to_geodetic(Metres(0.0), Metres(0.0), Metres(-6_356_752.314_2));
        assert_eq!(Degrees(-90.0), position.lat());
        assert_eq!(Degrees(0.0), position.lon());
        assert_eq!(Metres(0.0), position.height());
    }

    #[test]
    fn test_round_trip() {
        for i in -9..10 {
            let lat = Degrees(f64::from(i) * 9.5);
            for j in -6..7 {
                let lon = Degrees(f64::from(j) * 30.0);
                let height = Metres(f64::from(i * j) * 100.0);
                let ecef = geodetic_to_ecef(lat, lon, height).unwrap();
                let result = ecef_to_geodetic(ecef.x(), ecef.y(), ecef.z());

                assert!(is_within_tolerance(lat.0, result.lat().0, 1.0e-9));
                assert!(is_within_tolerance(height.0, result.height().0, 1.0e-3));
                // -180° is returned as 180°
                let delta_lon = libm::fabs(lon.0 - result.lon().0);
                assert!(delta_lon < 1.0e-9 || is_within_tolerance(360.0, delta_lon, 1.0e-9));
            }
        }
    }
}
