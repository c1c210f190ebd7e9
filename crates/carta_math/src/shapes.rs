use crate::*;

/// Create the 6 vertices of 2 triangles forming a `width` x `height` rectangle
///
/// The top-left corner is at the origin, the rectangle extends to `+x` and `-y`.
#[must_use]
pub fn rect<T: Real>(width: T, height: T) -> [Vec2<T>; 6] {
    let zero = T::zero();
    [
        Vec2::new(zero, zero), Vec2::new(width, zero), Vec2::new(zero, -height),
        Vec2::new(zero, -height), Vec2::new(width, zero), Vec2::new(width, -height),
    ]
}

/// Create a triangle list of an ellipse centered at the origin, made out of `slices` triangles sharing the center
///
/// Every triangle is stored as `center, previous, current`, with the slices going counter-clockwise, starting at `(radius_x, 0)`.
///
/// # Panics
///
/// Panics if `slices` is less than 3.
#[must_use]
pub fn circle<T: Real>(radius_x: T, radius_y: T, slices: usize) -> Vec<Vec2<T>> {
    assert!(slices >= 3, "A circle needs at least 3 slices, got {slices}");

    let center = Vec2::zero();
    let first = Vec2::new(radius_x, T::zero());
    let step = T::TWO_PI / T::from_usize(slices);

    let mut points = Vec::with_capacity(slices * 3);
    let mut prev = first;
    for idx in 1..slices {
        let (sin, cos) = Radians(step * T::from_usize(idx)).sin_cos();
        let cur = Vec2::new(cos * radius_x, sin * radius_y);
        points.extend_from_slice(&[center, prev, cur]);
        prev = cur;
    }
    // Close the loop on the exact starting point
    points.extend_from_slice(&[center, prev, first]);
    points
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn rect_vertices() {
        let verts = rect(3.0f32, 2.0);
        assert_eq!(verts[0], Vec2::new(0.0, 0.0));
        assert_eq!(verts[5], Vec2::new(3.0, -2.0));

        // Both triangles have the same winding
        let area = |a: Vec2<f32>, b: Vec2<f32>, c: Vec2<f32>| (b - a).cross(c - a);
        assert!(area(verts[0], verts[1], verts[2]) < 0.0);
        assert!(area(verts[3], verts[4], verts[5]) < 0.0);
        assert_eq!(area(verts[0], verts[1], verts[2]).abs() + area(verts[3], verts[4], verts[5]).abs(), 12.0);
    }

    #[test]
    fn circle_fan() {
        let points = circle(2.0f64, 1.0, 4);
        assert_eq!(points.len(), 12);
        for tri in points.chunks(3) {
            assert_eq!(tri[0], Vec2::zero());
        }

        assert_eq!(points[1], Vec2::new(2.0, 0.0));
        assert!(points[2].is_close_to(Vec2::new(0.0, 1.0), 1e-15));
        assert!(points[5].is_close_to(Vec2::new(-2.0, 0.0), 1e-15));
        assert_eq!(points[11], Vec2::new(2.0, 0.0));

        // Every outer vertex lies on the ellipse
        for p in &points[1..] {
            if *p != Vec2::zero() {
                assert!(((p.x / 2.0).powi(2) + p.y.powi(2) - 1.0).abs() < 1e-15);
            }
        }
    }

    #[test]
    #[should_panic]
    fn circle_needs_slices() {
        let _ = circle(1.0f32, 1.0, 2);
    }
}
