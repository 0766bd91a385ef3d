use super::types::{Point, Segment};

/// Signed doubled area of the triangle `p, q, r`.
///
/// Positive for a counter-clockwise turn, negative for clockwise, zero when
/// the three points are collinear.
#[inline]
pub fn orient(p: Point, q: Point, r: Point) -> f64 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

/// Whether `q` lies inside the bounding box of `p`-`r`.
///
/// Only meaningful when `p`, `q`, `r` are already known to be collinear.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    p.x.min(r.x) <= q.x && q.x <= p.x.max(r.x) && p.y.min(r.y) <= q.y && q.y <= p.y.max(r.y)
}

/// Relative tolerance for treating an orientation as collinear
const COLLINEAR_EPS: f64 = 1e-9;

/// Sign of `orient(p, q, r)`, with rounding noise from mapped coordinates
/// counted as zero. The tolerance scales with `|q - p| * |r - p|`, so exact
/// integer inputs keep an exact test.
#[inline]
fn orientation_sign(p: Point, q: Point, r: Point) -> i8 {
    let o = orient(p, q, r);
    let tol = COLLINEAR_EPS * (q.x - p.x).hypot(q.y - p.y) * (r.x - p.x).hypot(r.y - p.y);
    if o > tol {
        1
    } else if o < -tol {
        -1
    } else {
        0
    }
}

/// Whether two closed segments share at least one point, including touching
/// endpoints and collinear overlap.
pub fn segments_intersect(a: Segment, b: Segment) -> bool {
    let (a1, a2) = (a.start, a.end);
    let (b1, b2) = (b.start, b.end);

    let o1 = orientation_sign(a1, a2, b1);
    let o2 = orientation_sign(a1, a2, b2);
    let o3 = orientation_sign(b1, b2, a1);
    let o4 = orientation_sign(b1, b2, a2);

    if o1 * o2 < 0 && o3 * o4 < 0 {
        return true;
    }

    (o1 == 0 && on_segment(a1, b1, a2))
        || (o2 == 0 && on_segment(a1, b2, a2))
        || (o3 == 0 && on_segment(b1, a1, b2))
        || (o4 == 0 && on_segment(b1, a2, b2))
}
