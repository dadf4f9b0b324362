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

//! The ellipsoid module contains functions for calculating the derived
//! parameters of an ellipsoid, given its Semimajor axis (the equivalent of its
//! radius), Semiminor axis and flattening ratio.
//!
//! It also contains the latitude formulae shared by the geodetic and ECEF
//! conversions.

#![allow(clippy::suboptimal_flops)]

pub mod wgs84;

use crate::Metres;
use angle_sc::Angle;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use wgs84_ecef::Metres;
/// use wgs84_ecef::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use wgs84_ecef::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid from its
/// Semimajor and Semiminor axes.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `b` - the Semiminor axis of the ellipsoid.
/// # Examples
/// ```
/// use wgs84_ecef::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
///
/// // The WGS 84 sq 2nd eccentricity, using the literal Semiminor axis.
/// assert_eq!(0.006739496756586903, calculate_sq_2nd_eccentricity(wgs84::A, wgs84::B));
/// ```
#[must_use]
pub fn calculate_sq_2nd_eccentricity(a: Metres, b: Metres) -> f64 {
    let b_2 = b.0 * b.0;
    (a.0 * a.0 - b_2) / b_2
}

/// Calculate the prime vertical radius of curvature at a geodetic latitude.
///
/// This is the distance along the ellipsoid normal from the surface to the
/// polar axis: `N = a / sqrt(1 - e^2 sin^2 lat)`.
/// * `lat` - the geodetic latitude.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// # Examples
/// ```
/// use angle_sc::{Angle, Degrees};
/// use wgs84_ecef::ellipsoid::{calculate_prime_vertical_radius, calculate_sq_eccentricity, wgs84};
///
/// let e_2 = calculate_sq_eccentricity(wgs84::F);
///
/// // At the Equator, the radius of curvature is the Semimajor axis.
/// let n = calculate_prime_vertical_radius(Angle::from(Degrees(0.0)), wgs84::A, e_2);
/// assert_eq!(wgs84::A, n);
/// ```
#[must_use]
pub fn calculate_prime_vertical_radius(lat: Angle, a: Metres, e_2: f64) -> Metres {
    let sin_lat = lat.sin().0;
    Metres(a.0 / libm::sqrt(1.0 - e_2 * sin_lat * sin_lat))
}

/// Calculate the parametric (reduced) latitude of a point in a meridian plane.
///
/// This is Bowring's auxiliary angle: `atan2(z a, p b)`, calculated as
/// `atan2(z, p b / a)` so that it does not overflow for large `z` or `p`.
/// * `p` - the distance of the point from the polar axis.
/// * `z` - the distance of the point from the equatorial plane.
/// * `a`, `b` - the Semimajor and Semiminor axes of the ellipsoid.
#[must_use]
pub fn calculate_parametric_latitude(p: Metres, z: Metres, a: Metres, b: Metres) -> Angle {
    Angle::from_y_x(z.0, p.0 * (b.0 / a.0))
}

/// Calculate the geodetic latitude of a point in a meridian plane using
/// Bowring's formula.
///
/// B. R. Bowring, *Transformation from spatial to geographical coordinates*,
/// Survey Review 23 (181), 1976.
/// * `p` - the distance of the point from the polar axis.
/// * `z` - the distance of the point from the equatorial plane.
/// * `a`, `b` - the Semimajor and Semiminor axes of the ellipsoid.
/// * `e_2`, `ep_2` - the squares of the first and second Eccentricities.
///
/// returns the geodetic latitude of the point.
#[allow(clippy::similar_names)]
#[must_use]
pub fn calculate_geodetic_latitude(
    p: Metres,
    z: Metres,
    a: Metres,
    b: Metres,
    e_2: f64,
    ep_2: f64,
) -> Angle {
    let theta = calculate_parametric_latitude(p, z, a, b);
    let sin_theta = theta.sin().0;
    let cos_theta = theta.cos().0;
    Angle::from_y_x(
        z.0 + ep_2 * b.0 * sin_theta * sin_theta * sin_theta,
        p.0 - e_2 * a.0 * cos_theta * cos_theta * cos_theta,
    )
}
