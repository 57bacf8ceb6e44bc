//! Barycentric coordinate computation for point-in-triangle testing.

use super::vec2::Vec2;

/// Relative tolerance for the weight-sum sanity check.
const SUM_REL_TOLERANCE: f64 = 1e-9;

/// Twice the unsigned area of triangle ABC, via the shoelace formula.
///
/// Computed in f64: the weight-sum check below uses a tolerance finer than
/// f32 rounding, so the areas themselves must carry the extra precision.
#[inline]
fn double_area(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (bx, by) = (b.x as f64, b.y as f64);
    let (cx, cy) = (c.x as f64, c.y as f64);
    ((ax * by + bx * cy + cx * ay) - (ay * bx + by * cx + cy * ax)).abs()
}

/// Computes barycentric weights `[u, v, w]` of point `p` against triangle
/// `(a, b, c)` in 2D.
///
/// The weights express `p` as a convex combination of the three vertices
/// and are used both for the point-in-triangle test and for attribute
/// interpolation (depth, texture coordinates).
///
/// Returns `None` when there is no containment:
/// - the triangle is degenerate (zero area),
/// - any weight falls outside `[0, 1]`,
/// - the weights do not sum to 1 within a small relative tolerance
///   (sub-areas of a point outside the triangle overshoot the total area).
///
/// This runs once per candidate pixel inside a triangle's bounding box, so
/// it stays branch-light: one area per sub-triangle and early exits.
pub fn barycentric(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> Option<[f32; 3]> {
    let area_abc = double_area(a, b, c);
    if area_abc == 0.0 {
        return None;
    }

    let u = double_area(p, c, b) / area_abc;
    let v = double_area(a, c, p) / area_abc;
    let w = double_area(a, b, p) / area_abc;

    // Unsigned sub-areas make the weights non-negative; only the upper
    // bound and the sum need checking.
    if u > 1.0 || v > 1.0 || w > 1.0 {
        return None;
    }
    let sum = u + v + w;
    if (sum - 1.0).abs() > SUM_REL_TOLERANCE * sum.max(1.0) {
        return None;
    }

    Some([u as f32, v as f32, w as f32])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const A: Vec2 = Vec2::new(0.0, 0.0);
    const B: Vec2 = Vec2::new(10.0, 0.0);
    const C: Vec2 = Vec2::new(0.0, 10.0);

    #[test]
    fn interior_point_weights_sum_to_one() {
        let [u, v, w] = barycentric(A, B, C, Vec2::new(2.0, 3.0)).unwrap();
        assert_relative_eq!(u + v + w, 1.0, epsilon = 1e-6);
        assert!(u > 0.0 && v > 0.0 && w > 0.0);
    }

    #[test]
    fn vertex_gets_full_weight() {
        let [u, v, w] = barycentric(A, B, C, B).unwrap();
        assert_relative_eq!(u, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v, 1.0, epsilon = 1e-6);
        assert_relative_eq!(w, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn exterior_point_has_no_containment() {
        assert!(barycentric(A, B, C, Vec2::new(11.0, 0.0)).is_none());
        assert!(barycentric(A, B, C, Vec2::new(-1.0, -1.0)).is_none());
        assert!(barycentric(A, B, C, Vec2::new(6.0, 6.0)).is_none());
    }

    #[test]
    fn degenerate_triangle_has_no_containment() {
        // All three vertices collinear: zero area.
        let p = Vec2::new(1.0, 1.0);
        assert!(barycentric(A, Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0), p).is_none());
        // Fully collapsed triangle.
        assert!(barycentric(A, A, A, A).is_none());
    }

    #[test]
    fn weights_interpolate_linearly() {
        // Midpoint of edge BC weights B and C equally.
        let [u, v, w] = barycentric(A, B, C, Vec2::new(5.0, 5.0)).unwrap();
        assert_relative_eq!(u, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v, 0.5, epsilon = 1e-6);
        assert_relative_eq!(w, 0.5, epsilon = 1e-6);
    }
}
