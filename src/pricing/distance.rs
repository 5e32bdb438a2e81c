//! Geodesic distance between two coordinates.

use geo::{Distance, Geodesic, Point};

use super::models::Coordinate;

/// Distance in whole meters along the WGS-84 ellipsoid, truncated.
///
/// Arguments are ordered before solving so that `distance_meters(a, b)` and
/// `distance_meters(b, a)` truncate the same float.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> i64 {
    if a == b {
        return 0;
    }

    let (from, to) = if (a.latitude(), a.longitude()) <= (b.latitude(), b.longitude()) {
        (a, b)
    } else {
        (b, a)
    };

    let meters = Geodesic::distance(to_point(from), to_point(to));
    // Earth-bound distances stay far below i64::MAX.
    meters.trunc() as i64
}

fn to_point(coordinate: Coordinate) -> Point<f64> {
    Point::new(coordinate.longitude(), coordinate.latitude())
}
