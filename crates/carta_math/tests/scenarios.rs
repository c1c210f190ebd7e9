use carta_math::*;

#[test]
fn identity_product_is_exact() {
    assert_eq!(Mat4::<f32>::identity() * Mat4::identity(), Mat4::identity());
    assert_eq!(Mat4::<f64>::identity() * Mat4::identity(), Mat4::identity());
}

#[test]
fn ortho_projection_to_window() {
    let modelview = Mat4::create_translation(Vec3::new(203.0f64, 1.0, 0.0));
    let projection = Mat4::create_ortho_2d(0.0, 1536.0, 960.0, 0.0);
    let viewport = Viewport::new(0.0, 0.0, 1536.0, 960.0);

    let obj = Vec3::new(1002.0, 960.0, 0.0);
    let win = project(obj, modelview, projection, viewport);
    assert!(win.is_close_to(Vec3::new(1205.0, -1.0, 0.5), 1e-4), "{win}");

    let back = unproject(win, modelview, projection, viewport).map(|back| back.is_close_to(obj, 1e-4));
    assert_eq!(back, Ok(true));

    // Same pipeline in single precision
    let modelview: Mat4<f32> = modelview.cast();
    let projection: Mat4<f32> = projection.cast();
    let win = project(obj.cast(), modelview, projection, viewport.cast_viewport());
    assert!(win.is_close_to(Vec3::new(1205.0, -1.0, 0.5), 1e-4), "{win}");
}

#[test]
fn axis_angle_rotation() {
    let q = Quat::from_axis_angle(Degrees(30.0f32), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(q.rotate(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(1.0, 0.0, 0.0));

    let (sin, cos) = Degrees(30.0f32).to_radians().sin_cos();
    assert!(q.rotate(Vec3::new(0.0, 1.0, 0.0)).is_close_to(Vec3::new(0.0, cos, sin), 1e-5));
}

#[test]
fn point_in_aabb() {
    let aabb = Aabb::new(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    assert!(aabb.contains_point(Vec3::new(0.5, 0.5, 0.5)));
    assert!(!aabb.contains_point(Vec3::new(1.0, 1.0, 1.5)));
}

#[test]
fn transformed_aabb() {
    let aabb = Aabb::new(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    let mat = Mat4::create_translation(Vec3::new(0.0, 0.0, 0.5)) * Mat4::create_scale(Vec3::new(2.0, 1.0, 1.0));
    let expected = Aabb::new(Vec3::new(0.0, 0.0, 0.5), Vec3::new(2.0, 1.0, 1.5));

    assert!(aabb.transform(mat).is_close_to(expected, 1e-6));
    assert!(aabb.transform_arvo(mat).is_close_to(expected, 1e-6));
}

#[test]
fn look_at_yaws_cube() {
    let view = Mat4::create_look_at(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

    let mut corners = Vec::new();
    for x in [-1.0f32, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                corners.push(Vec3::new(x, y, z));
            }
        }
    }

    for corner in corners {
        let rotated = view.transform_coordinate(corner);
        // Looking down +x, world +z ends up on the right (+x in view space)
        assert!(rotated.is_close_to(Vec3::new(corner.z, corner.y, -corner.x), 1e-2), "{corner} -> {rotated}");
        assert!(view.inverse().transform_coordinate(rotated).is_close_to(corner, 1e-2));
    }
}

trait CastViewport {
    fn cast_viewport(self) -> Viewport<f32>;
}

impl CastViewport for Viewport<f64> {
    fn cast_viewport(self) -> Viewport<f32> {
        Viewport::new(self.x as f32, self.y as f32, self.width as f32, self.height as f32)
    }
}
