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

//! The geodetic module contains the `Geodetic` type: a position given by its
//! latitude, longitude and height above the ellipsoid.

use crate::error::DomainError;
use crate::Metres;
use angle_sc::{Degrees, Validate};
use core::fmt;
use unit_sphere::LatLong;

/// The minimum valid latitude, in degrees.
pub const MIN_LATITUDE: Degrees = Degrees(-90.0);
/// The maximum valid latitude, in degrees.
pub const MAX_LATITUDE: Degrees = Degrees(90.0);
/// The minimum valid longitude, in degrees.
pub const MIN_LONGITUDE: Degrees = Degrees(-180.0);
/// The maximum valid longitude, in degrees.
pub const MAX_LONGITUDE: Degrees = Degrees(180.0);

/// Test whether a latitude is within the closed range -90° to 90°.
///
/// Note: NaN is not a valid latitude.
#[must_use]
pub fn is_valid_latitude(lat: Degrees) -> bool {
    (MIN_LATITUDE.0..=MAX_LATITUDE.0).contains(&lat.0)
}

/// Test whether a longitude is within the closed range -180° to 180°.
///
/// Note: NaN is not a valid longitude.
#[must_use]
pub fn is_valid_longitude(lon: Degrees) -> bool {
    (MIN_LONGITUDE.0..=MAX_LONGITUDE.0).contains(&lon.0)
}

/// A geodetic position: latitude and longitude in degrees together with
/// the ellipsoidal height in metres.
///
/// The height is measured along the ellipsoid normal, it is not an
/// orthometric (above mean sea level) height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geodetic {
    /// The latitude and longitude.
    lat_long: LatLong,
    /// The height above the ellipsoid.
    height: Metres,
}

impl Validate for Geodetic {
    /// Test whether a `Geodetic` position is valid.
    /// Whether -90° <= `latitude` <= 90° and -180° <= `longitude` <= 180°.
    fn is_valid(&self) -> bool {
        is_valid_latitude(self.lat()) && is_valid_longitude(self.lon())
    }
}

impl Geodetic {
    /// Constructor.
    ///
    /// Note: the position is not validated, see `check_domain`.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    /// * `height` - the height above the ellipsoid.
    #[must_use]
    pub const fn new(lat: Degrees, lon: Degrees, height: Metres) -> Self {
        Self {
            lat_long: LatLong::new(lat, lon),
            height,
        }
    }

    /// Construct a `Geodetic` position from a `LatLong` and a height.
    /// * `lat_long` - the latitude and longitude.
    /// * `height` - the height above the ellipsoid.
    #[must_use]
    pub const fn from_lat_long(lat_long: LatLong, height: Metres) -> Self {
        Self { lat_long, height }
    }

    /// Accessor for the latitude and longitude.
    #[must_use]
    pub const fn lat_long(&self) -> &LatLong {
        &self.lat_long
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat_long.lat()
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lat_long.lon()
    }

    /// Accessor for the height above the ellipsoid.
    #[must_use]
    pub const fn height(&self) -> Metres {
        self.height
    }

    /// Check that the position is within the domain of the coordinate
    /// conversions.
    ///
    /// # Errors
    ///
    /// `DomainError::LatitudeOutOfRange` if the latitude is not within
    /// -90° to 90°, otherwise `DomainError::LongitudeOutOfRange` if the
    /// longitude is not within -180° to 180°.
    pub fn check_domain(&self) -> Result<(), DomainError> {
        let lat = self.lat();
        if !is_valid_latitude(lat) {
            return Err(DomainError::LatitudeOutOfRange { degrees: lat.0 });
        }

        let lon = self.lon();
        if !is_valid_longitude(lon) {
            return Err(DomainError::LongitudeOutOfRange { degrees: lon.0 });
        }

        Ok(())
    }
}

impl fmt::Display for Geodetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat: {}°, lon: {}°, height: {} m",
            self.lat().0,
            self.lon().0,
            self.height.0
        )
    }
}
