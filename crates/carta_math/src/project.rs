use crate::{*, logging::math_warning};

/// Window rectangle that normalized device coordinates map to
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Viewport<T: Real> {
    pub x      : T,
    pub y      : T,
    pub width  : T,
    pub height : T,
}

impl<T: Real> Viewport<T> {
    /// Create a new viewport
    #[inline]
    #[must_use]
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self { x, y, width, height }
    }
}

/// Transform an object space point into window coordinates
///
/// Window x and y are in the range of the viewport, window z is mapped to `[0, 1]`.
#[must_use]
pub fn project<T: Real>(obj: Vec3<T>, modelview: Mat4<T>, projection: Mat4<T>, viewport: Viewport<T>) -> Vec3<T> {
    let half = T::from_f64(0.5);

    let clip = projection * modelview * obj.extend(T::one());
    let ndc = if clip.w == T::zero() { clip.shrink() } else { clip.shrink() / clip.w };

    Vec3 { x: viewport.x + viewport.width * (ndc.x + T::one()) * half,
           y: viewport.y + viewport.height * (ndc.y + T::one()) * half,
           z: (ndc.z + T::one()) * half }
}

/// Transform window coordinates back into object space
///
/// Fails when `projection * modelview` can't be inverted.
pub fn unproject<T: Real>(win: Vec3<T>, modelview: Mat4<T>, projection: Mat4<T>, viewport: Viewport<T>) -> Result<Vec3<T>> {
    let mvp = projection * modelview;
    let Some(inv) = mvp.try_inverse() else {
        let determinant = mvp.determinant().to_f64();
        math_warning!(LOG_PROJECT_CAT, "Cannot unproject {win}, the transform is singular (determinant: {determinant})");
        return Err(Error::SingularTransform { determinant });
    };

    let two = T::from_i32(2);
    let ndc = Vec4 { x: two * (win.x - viewport.x) / viewport.width - T::one(),
                     y: two * (win.y - viewport.y) / viewport.height - T::one(),
                     z: two * win.z - T::one(),
                     w: T::one() };

    let obj = inv * ndc;
    Ok(if obj.w == T::zero() { obj.shrink() } else { obj.shrink() / obj.w })
}

/// Convert screen coordinates (origin at the top-left, y pointing down) to normalized device coordinates (origin at the center, y pointing up)
#[must_use]
pub fn screen_to_gl_coords<T: Real>(x: i32, y: i32, screen_width: i32, screen_height: i32) -> Vec2<T> {
    let two = T::from_i32(2);
    Vec2 { x: two * T::from_i32(x) / T::from_i32(screen_width) - T::one(),
           y: -two * T::from_i32(y) / T::from_i32(screen_height) + T::one() }
}

/// Convert normalized device coordinates to screen coordinates, truncating to whole pixels
#[must_use]
pub fn gl_to_screen_coords<T: Real>(coords: Vec2<T>, screen_width: i32, screen_height: i32) -> (i32, i32) {
    let half = T::from_f64(0.5);
    let x = (coords.x + T::one()) * half * T::from_i32(screen_width);
    let y = (-coords.y + T::one()) * half * T::from_i32(screen_height);
    (x.to_f64() as i32, y.to_f64() as i32)
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn project_ortho() {
        let modelview = Mat4::create_translation(Vec3::new(203.0f64, 1.0, 0.0));
        let projection = Mat4::create_ortho_2d(0.0, 1536.0, 960.0, 0.0);
        let viewport = Viewport::new(0.0, 0.0, 1536.0, 960.0);

        let win = project(Vec3::new(1002.0, 960.0, 0.0), modelview, projection, viewport);
        assert!(win.is_close_to(Vec3::new(1205.0, -1.0, 0.5), 1e-4));
    }

    #[test]
    fn unproject_inverts_project() {
        let modelview = Mat4::create_look_at(Vec3::new(4.0f64, 3.0, 3.0), Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        let projection = Mat4::create_perspective(Degrees(45.0), 4.0 / 3.0, 0.1, 100.0);
        let viewport = Viewport::new(0.0, 0.0, 1536.0, 960.0);

        let obj = Vec3::new(0.5, -0.25, 1.0);
        let win = project(obj, modelview, projection, viewport);
        let back = unproject(win, modelview, projection, viewport);
        assert!(matches!(back, Ok(back) if back.is_close_to(obj, 1e-9)));
    }

    #[test]
    fn unproject_singular() {
        let viewport = Viewport::new(0.0f32, 0.0, 800.0, 600.0);
        let res = unproject(Vec3::new(1.0, 2.0, 0.5), Mat4::zero(), Mat4::identity(), viewport);
        assert_eq!(res, Err(Error::SingularTransform { determinant: 0.0 }));
    }

    #[test]
    fn screen_coords() {
        assert_eq!(screen_to_gl_coords::<f32>(0, 0, 800, 600), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_gl_coords::<f32>(400, 300, 800, 600), Vec2::new(0.0, 0.0));
        assert_eq!(screen_to_gl_coords::<f64>(800, 600, 800, 600), Vec2::new(1.0, -1.0));

        assert_eq!(gl_to_screen_coords(Vec2::new(-1.0f32, 1.0), 800, 600), (0, 0));
        assert_eq!(gl_to_screen_coords(Vec2::new(0.0f32, 0.0), 800, 600), (400, 300));
        assert_eq!(gl_to_screen_coords(Vec2::new(0.5f64, -0.5), 800, 600), (600, 450));

        for (x, y) in [(17, 33), (640, 480), (799, 1)] {
            let gl = screen_to_gl_coords::<f64>(x, y, 800, 600);
            let (sx, sy) = gl_to_screen_coords(gl, 800, 600);
            assert!((sx - x).abs() <= 1 && (sy - y).abs() <= 1);
        }
    }
}
