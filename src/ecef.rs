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

//! The ecef module contains the `Ecef` type: a position in the
//! Earth-Centred, Earth-Fixed Cartesian frame, and the conversions between
//! `Ecef` and `Geodetic` positions on an `Ellipsoid`.
//!
//! The ECEF frame has its origin at the centre of the ellipsoid, its z axis
//! through the North pole and its x axis through the intersection of the
//! Equator and the prime meridian.
//!
//! See: [Geographic coordinate conversion](https://en.wikipedia.org/wiki/Geographic_coordinate_conversion).

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::error::DomainError;
use crate::geodetic::{Geodetic, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::{Ellipsoid, Metres};
use angle_sc::{Angle, Degrees};
use core::fmt;

/// Normalise a longitude into the half open range (-180°, 180°].
#[must_use]
fn normalise_longitude(lon: Degrees) -> Degrees {
    if lon.0 == MIN_LONGITUDE.0 {
        MAX_LONGITUDE
    } else {
        lon
    }
}

/// A position in the Earth-Centred, Earth-Fixed Cartesian frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ecef {
    x: Metres,
    y: Metres,
    z: Metres,
}

impl Ecef {
    /// Constructor.
    /// * `x` - the distance along the axis through latitude 0°, longitude 0°.
    /// * `y` - the distance along the axis through latitude 0°, longitude 90°.
    /// * `z` - the distance along the polar axis, positive North.
    #[must_use]
    pub const fn new(x: Metres, y: Metres, z: Metres) -> Self {
        Self { x, y, z }
    }

    /// Accessor for the distance along the axis through latitude 0°, longitude 0°.
    #[must_use]
    pub const fn x(&self) -> Metres {
        self.x
    }

    /// Accessor for the distance along the axis through latitude 0°, longitude 90°.
    #[must_use]
    pub const fn y(&self) -> Metres {
        self.y
    }

    /// Accessor for the distance along the polar axis, positive North.
    #[must_use]
    pub const fn z(&self) -> Metres {
        self.z
    }

    /// Convert a `Geodetic` position to an `Ecef` position.
    ///
    /// ```text
    /// x = (N + h) cos(lat) cos(lon)
    /// y = (N + h) cos(lat) sin(lon)
    /// z = (N (1 - e^2) + h) sin(lat)
    /// ```
    ///
    /// where N is the prime vertical radius of curvature at lat.
    /// * `position` - the geodetic position.
    /// * `ellipsoid` - the `Ellipsoid`.
    ///
    /// # Errors
    ///
    /// `DomainError` if the latitude is not within -90° to 90° or the
    /// longitude is not within -180° to 180°.
    pub fn from_geodetic(position: &Geodetic, ellipsoid: &Ellipsoid) -> Result<Self, DomainError> {
        position
            .check_domain()
            .inspect_err(|error| tracing::debug!(%error, "rejected geodetic position"))?;

        let lat = Angle::from(position.lat());
        let lon = Angle::from(position.lon());
        let h = position.height().0;

        let n = ellipsoid.calculate_prime_vertical_radius(lat).0;
        let r = (n + h) * lat.cos().0;
        Ok(Self {
            x: Metres(r * lon.cos().0),
            y: Metres(r * lon.sin().0),
            z: Metres((n * (1.0 - ellipsoid.e_2()) + h) * lat.sin().0),
        })
    }

    /// Convert the `Ecef` position to a `Geodetic` position.
    ///
    /// The latitude is calculated directly, without iteration, using
    /// Bowring's formula, see `ellipsoid::calculate_geodetic_latitude`.
    ///
    /// Points on the polar axis (x and y both zero) are placed at a pole
    /// with longitude 0°: the North pole if z is positive, otherwise the
    /// South pole. So the centre of the ellipsoid is placed at the South pole.
    ///
    /// The longitude is in the range (-180°, 180°].
    /// If any component is not finite, the result is NaN.
    ///
    /// Note: the height is calculated as `p / cos(lat) - N`, which loses
    /// precision near the poles where cos(lat) approaches zero. Points very
    /// close to, but not on, the polar axis may have an inaccurate height.
    /// Distances from the polar axis greater than about 1.8e308 m overflow
    /// to an infinite height.
    /// * `ellipsoid` - the `Ellipsoid`.
    #[must_use]
    pub fn to_geodetic(&self, ellipsoid: &Ellipsoid) -> Geodetic {
        let (x, y, z) = (self.x.0, self.y.0, self.z.0);
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Geodetic::new(Degrees(f64::NAN), Degrees(f64::NAN), Metres(f64::NAN));
        }

        // On the polar axis
        if x == 0.0 && y == 0.0 {
            tracing::trace!(z, "position on the polar axis");
            let b = ellipsoid.b().0;
            return if 0.0 < z {
                Geodetic::new(MAX_LATITUDE, Degrees(0.0), Metres(z - b))
            } else {
                Geodetic::new(MIN_LATITUDE, Degrees(0.0), Metres(z + b))
            };
        }

        let p = Metres(libm::hypot(x, y));
        let lat = ellipsoid.calculate_geodetic_latitude(p, self.z);
        // not Angle::from_y_x, which rounds tiny vectors to 0°
        let lon = Degrees(libm::atan2(y, x).to_degrees());
        let n = ellipsoid.calculate_prime_vertical_radius(lat);
        Geodetic::new(
            Degrees::from(lat),
            normalise_longitude(lon),
            Metres(p.0 / lat.cos().0 - n.0),
        )
    }
}

impl TryFrom<&Geodetic> for Ecef {
    type Error = DomainError;

    /// Convert a `Geodetic` position on the WGS 84 ellipsoid to `Ecef`.
    fn try_from(position: &Geodetic) -> Result<Self, Self::Error> {
        Self::from_geodetic(position, &crate::WGS84_ELLIPSOID)
    }
}

impl From<&Ecef> for Geodetic {
    /// Convert an `Ecef` position to `Geodetic` on the WGS 84 ellipsoid.
    fn from(position: &Ecef) -> Self {
        position.to_geodetic(&crate::WGS84_ELLIPSOID)
    }
}

impl fmt::Display for Ecef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} m, y: {} m, z: {} m", self.x.0, self.y.0, self.z.0)
    }
}
