use geo::{Coord, Line};

/// The non-empty outcome of intersecting two line segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments meet in exactly one coordinate.
    Point(Coord),
    /// The segments are collinear and share a sub-segment.
    Overlap(Line),
}

impl SegmentIntersection {
    /// Returns the coordinate of a point intersection, and `None`
    /// for a collinear overlap.
    pub fn point(&self) -> Option<Coord> {
        match self {
            SegmentIntersection::Point(coord) => Some(*coord),
            SegmentIntersection::Overlap(_) => None,
        }
    }
}

#[inline]
fn cross(a: Coord, b: Coord) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
fn dot(a: Coord, b: Coord) -> f64 {
    a.x * b.x + a.y * b.y
}

#[inline]
fn length(a: Coord) -> f64 {
    dot(a, a).sqrt()
}

/// Computes the planar intersection of two closed line segments.
///
/// Uses the parametric form `p + t·r = q + u·s`, solving for `t` and `u`
/// through the cross product of the direction vectors. A zero denominator
/// marks parallel segments, which only intersect when they are collinear.
/// Bounds are inclusive, so segments touching at an endpoint intersect.
///
/// ### Example
/// ```rust
/// use geo::{coord, Line};
/// use rendezvous::geo::{intersect, SegmentIntersection};
///
/// let a = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 2.0 });
/// let b = Line::new(coord! { x: 0.0, y: 2.0 }, coord! { x: 2.0, y: 0.0 });
///
/// assert_eq!(
///     intersect(&a, &b),
///     Some(SegmentIntersection::Point(coord! { x: 1.0, y: 1.0 }))
/// );
/// ```
pub fn intersect(a: &Line, b: &Line) -> Option<SegmentIntersection> {
    let r = a.delta();
    let s = b.delta();
    let qp = b.start - a.start;

    let denominator = cross(r, s);

    // Scale the tolerance by the segment lengths, degrees are small numbers.
    if denominator.abs() <= f64::EPSILON * length(r) * length(s) {
        if cross(qp, r).abs() > f64::EPSILON * length(qp) * length(r) {
            return None;
        }

        return collinear(a, b);
    }

    let t = cross(qp, s) / denominator;
    let u = cross(qp, r) / denominator;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(SegmentIntersection::Point(a.start + r * t))
    } else {
        None
    }
}

fn collinear(a: &Line, b: &Line) -> Option<SegmentIntersection> {
    let r = a.delta();
    let rr = dot(r, r);

    if rr == 0.0 {
        return contains(b, a.start).then_some(SegmentIntersection::Point(a.start));
    }

    if dot(b.delta(), b.delta()) == 0.0 {
        return contains(a, b.start).then_some(SegmentIntersection::Point(b.start));
    }

    // Project `b` onto `a`, in units of `a`'s length.
    let t0 = dot(b.start - a.start, r) / rr;
    let t1 = dot(b.end - a.start, r) / rr;

    let lower = t0.min(t1).max(0.0);
    let upper = t0.max(t1).min(1.0);

    if lower > upper {
        None
    } else if lower == upper {
        Some(SegmentIntersection::Point(a.start + r * lower))
    } else {
        Some(SegmentIntersection::Overlap(Line::new(
            a.start + r * lower,
            a.start + r * upper,
        )))
    }
}

/// Whether `point` lies on the closed segment `line`.
fn contains(line: &Line, point: Coord) -> bool {
    let d = line.delta();
    let offset = point - line.start;
    let dd = dot(d, d);

    if dd == 0.0 {
        return offset.x == 0.0 && offset.y == 0.0;
    }

    if cross(offset, d).abs() > f64::EPSILON * length(offset) * length(d) {
        return false;
    }

    (0.0..=dd).contains(&dot(offset, d))
}
