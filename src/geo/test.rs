use crate::geo::{EARTH_RADIUS, MeetingPoint, SegmentIntersection, haversine, intersect, truncate};

use approx::assert_relative_eq;
use geo::{Line, Point, coord, wkt};

#[test]
fn haversine_identity() {
    let points = wkt! {
        LINESTRING (4.8952 52.3702, -77.023438 38.912615, 151.180025 -33.883572, 0.0 0.0)
    };

    for point in points.points() {
        assert_eq!(haversine(point, point), 0.0);
    }
}

#[test]
fn haversine_symmetry() {
    let points = wkt! {
        LINESTRING (4.8952 52.3702, -77.023438 38.912615, 151.180025 -33.883572, 0.0 0.0, 179.9 -89.9)
    };

    for p in points.points() {
        for q in points.points() {
            assert_eq!(haversine(p, q), haversine(q, p));
        }
    }
}

#[test]
fn haversine_antipodes_are_half_a_great_circle() {
    let half = EARTH_RADIUS * std::f64::consts::PI;

    for lon in (-1800..=1800).step_by(5).map(|lon| lon as f64 / 10.0) {
        for lat in (-90..=90).map(|lat| lat as f64) {
            let p = Point::new(lon, lat);
            let q = Point::new(if lon > 0.0 { lon - 180.0 } else { lon + 180.0 }, -lat);

            let distance = haversine(p, q);
            assert!(distance.is_finite(), "{p:?} to {q:?} is {distance}");
            assert_relative_eq!(distance, half, max_relative = 1e-6);
        }
    }
}

#[test]
fn haversine_quarter_meridian() {
    // Equator to pole along a meridian is a quarter of a great circle.
    let distance = haversine(Point::new(0.0, 0.0), Point::new(0.0, 90.0));
    assert_relative_eq!(
        distance,
        EARTH_RADIUS * std::f64::consts::FRAC_PI_2,
        max_relative = 1e-12
    );
}

#[test]
fn haversine_short_distance() {
    // One thousandth of a degree of latitude, roughly 111 meters.
    let distance = haversine(Point::new(4.8952, 52.3702), Point::new(4.8952, 52.3712));
    assert_relative_eq!(distance, EARTH_RADIUS * 0.001f64.to_radians(), max_relative = 1e-9);
}

#[test]
fn truncates_toward_zero() {
    assert_eq!(truncate(1.23459, 4), 1.2345);
    assert_eq!(truncate(-1.23459, 4), -1.2345);
    assert_eq!(truncate(52.37029999, 4), 52.3702);
    assert_eq!(truncate(10.0, 4), 10.0);
}

#[test]
fn truncation_drops_negative_zero() {
    let value = truncate(-0.00001, 4);
    assert_eq!(value, 0.0);
    assert!(value.is_sign_positive());
}

#[test]
fn meeting_point_display() {
    assert_eq!(MeetingPoint::new(10.0, 20.0).to_string(), "10.0000;20.0000");
    assert_eq!(
        MeetingPoint::new(52.370289, 4.895299).to_string(),
        "52.3702;4.8952"
    );
    assert_eq!(
        MeetingPoint::new(-33.883572, 151.180025).to_string(),
        "-33.8835;151.1800"
    );
}

#[test]
fn meeting_point_from_lon_lat_point() {
    let point = MeetingPoint::from(Point::new(20.00009, 10.00001));
    assert_eq!(point, MeetingPoint { lat: 10.0, lon: 20.0 });
}

#[test]
fn crossing_segments() {
    let a = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 4.0, y: 4.0 });
    let b = Line::new(coord! { x: 0.0, y: 4.0 }, coord! { x: 4.0, y: 0.0 });

    assert_eq!(
        intersect(&a, &b),
        Some(SegmentIntersection::Point(coord! { x: 2.0, y: 2.0 }))
    );
    assert_eq!(
        intersect(&b, &a),
        Some(SegmentIntersection::Point(coord! { x: 2.0, y: 2.0 }))
    );
}

#[test]
fn lines_crossing_outside_segments() {
    let a = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 });
    let b = Line::new(coord! { x: 0.0, y: 4.0 }, coord! { x: 4.0, y: 0.0 });

    assert_eq!(intersect(&a, &b), None);
}

#[test]
fn touching_endpoints() {
    let a = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 });
    let b = Line::new(coord! { x: 1.0, y: 1.0 }, coord! { x: 2.0, y: 0.0 });

    assert_eq!(
        intersect(&a, &b),
        Some(SegmentIntersection::Point(coord! { x: 1.0, y: 1.0 }))
    );
}

#[test]
fn parallel_segments() {
    let a = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 });
    let b = Line::new(coord! { x: 0.0, y: 1.0 }, coord! { x: 1.0, y: 1.0 });

    assert_eq!(intersect(&a, &b), None);
}

#[test]
fn collinear_segments() {
    let a = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 0.0 });
    let overlapping = Line::new(coord! { x: 3.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 });
    let disjoint = Line::new(coord! { x: 3.0, y: 0.0 }, coord! { x: 4.0, y: 0.0 });
    let adjacent = Line::new(coord! { x: 2.0, y: 0.0 }, coord! { x: 4.0, y: 0.0 });

    let overlap = intersect(&a, &overlapping).expect("collinear segments must overlap");
    assert_eq!(
        overlap,
        SegmentIntersection::Overlap(Line::new(
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 2.0, y: 0.0 }
        ))
    );
    assert_eq!(overlap.point(), None);

    assert_eq!(intersect(&a, &disjoint), None);
    assert_eq!(
        intersect(&a, &adjacent),
        Some(SegmentIntersection::Point(coord! { x: 2.0, y: 0.0 }))
    );
}

#[test]
fn degenerate_segments() {
    let a = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 2.0 });
    let on = Line::new(coord! { x: 1.0, y: 1.0 }, coord! { x: 1.0, y: 1.0 });
    let off = Line::new(coord! { x: 1.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 });

    assert_eq!(
        intersect(&a, &on),
        Some(SegmentIntersection::Point(coord! { x: 1.0, y: 1.0 }))
    );
    assert_eq!(
        intersect(&on, &a),
        Some(SegmentIntersection::Point(coord! { x: 1.0, y: 1.0 }))
    );
    assert_eq!(intersect(&a, &off), None);
    assert_eq!(intersect(&on, &on), Some(SegmentIntersection::Point(coord! { x: 1.0, y: 1.0 })));
    assert_eq!(intersect(&on, &off), None);
}

#[test]
fn geographic_crossing() {
    let a = wkt! { LINESTRING (4.8900 52.3700, 4.9000 52.3800) };
    let b = wkt! { LINESTRING (4.8900 52.3800, 4.9000 52.3700) };

    let a = a.lines().next().expect("linestring must have a line");
    let b = b.lines().next().expect("linestring must have a line");

    let point = intersect(&a, &b)
        .and_then(|intersection| intersection.point())
        .expect("segments must cross");

    assert_relative_eq!(point.x, 4.8950, max_relative = 1e-12);
    assert_relative_eq!(point.y, 52.3750, max_relative = 1e-12);
}
