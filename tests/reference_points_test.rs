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

extern crate wgs84_ecef;

use angle_sc::{is_within_tolerance, Degrees};
use wgs84_ecef::{ecef_to_geodetic, geodetic_to_ecef, Metres};

const FILENAME: &str = "data/wgs84_ecef_reference_points.csv";

/// latitude, longitude, height, x, y, z
type DataRecord = (f64, f64, f64, f64, f64, f64);

/// The maximum height at which the round trip is accurate to a millimetre.
const MAX_PRECISE_HEIGHT: f64 = 100_000.0;

#[test]
fn test_geodetic_to_ecef_reference_points() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<DataRecord>() {
        let (lat, lon, height, x, y, z) = result?;

        let ecef = geodetic_to_ecef(Degrees(lat), Degrees(lon), Metres(height))?;
        assert!(
            is_within_tolerance(x, ecef.x().0, 1.0e-6),
            "x, line: {count} expected: {x} result: {ecef}"
        );
        assert!(
            is_within_tolerance(y, ecef.y().0, 1.0e-6),
            "y, line: {count} expected: {y} result: {ecef}"
        );
        assert!(
            is_within_tolerance(z, ecef.z().0, 1.0e-6),
            "z, line: {count} expected: {z} result: {ecef}"
        );

        count += 1;
    }
    assert_eq!(20, count);

    Ok(())
}

#[test]
fn test_ecef_to_geodetic_reference_points() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    for (index, result) in rdr.deserialize::<DataRecord>().enumerate() {
        let (lat, lon, height, x, y, z) = result?;

        let position = ecef_to_geodetic(Metres(x), Metres(y), Metres(z));
        assert!(
            is_within_tolerance(lat, position.lat().0, 1.0e-6),
            "lat, line: {index} expected: {lat} result: {position}"
        );
        assert!(
            is_within_tolerance(lon, position.lon().0, 1.0e-9),
            "lon, line: {index} expected: {lon} result: {position}"
        );

        // Bowring's formula loses precision at satellite altitudes
        let tolerance = if libm::fabs(height) <= MAX_PRECISE_HEIGHT {
            1.0e-3
        } else {
            1.0
        };
        assert!(
            is_within_tolerance(height, position.height().0, tolerance),
            "height, line: {index} expected: {height} result: {position}"
        );
    }

    Ok(())
}
