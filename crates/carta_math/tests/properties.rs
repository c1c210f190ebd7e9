use carta_math::{*, dynamic::*};
use rand::{Rng, SeedableRng, rngs::StdRng};

const ITERATIONS : usize = 256;

fn scalar(rng: &mut StdRng) -> f64 {
    rng.gen_range(-10.0..10.0)
}

fn vec3(rng: &mut StdRng) -> Vec3<f64> {
    Vec3::new(scalar(rng), scalar(rng), scalar(rng))
}

fn mat<const N: usize>(rng: &mut StdRng) -> [f64; N] {
    core::array::from_fn(|_| scalar(rng))
}

fn unit_quat(rng: &mut StdRng) -> Quat<f64> {
    loop {
        let q = Quat::new(scalar(rng), scalar(rng), scalar(rng), scalar(rng));
        if q.norm() > 0.1 {
            return q.normalize();
        }
    }
}

/// Closeness relative to the magnitude of the values being compared
fn rel_close(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn vector_laws() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0001);
    for _ in 0..ITERATIONS {
        let (u, v, w) = (vec3(&mut rng), vec3(&mut rng), vec3(&mut rng));
        let s = scalar(&mut rng);

        assert_eq!(u + v, v + u);
        assert!(((u + v) + w).is_close_to(u + (v + w), 1e-12));
        assert!(((u + v) * s).is_close_to(u * s + v * s, 1e-12));
        assert_eq!(u - u, Vec3::zero());
        assert_eq!(u.dot(v), v.dot(u));
        assert!(u.dot(u) >= 0.0);

        let cross = u.cross(v);
        assert_eq!(cross, -v.cross(u));
        assert!(rel_close(cross.dot(u), 0.0, 1e-12 * u.len_sq().max(v.len_sq())));
        assert!(rel_close(cross.dot(v), 0.0, 1e-12 * u.len_sq().max(v.len_sq())));

        let n = u.normalize();
        assert!(n.is_close_to_normalized(1e-12));
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0002);
    for _ in 0..ITERATIONS {
        let m2 = Mat2::from_array(mat(&mut rng));
        let m3 = Mat3::from_array(mat(&mut rng));
        let m4 = Mat4::from_array(mat(&mut rng));

        assert_eq!(m2 * Mat2::identity(), m2);
        assert_eq!(Mat2::identity() * m2, m2);
        assert_eq!(m3 * Mat3::identity(), m3);
        assert_eq!(Mat3::identity() * m3, m3);
        assert_eq!(m4 * Mat4::identity(), m4);
        assert_eq!(Mat4::identity() * m4, m4);
    }
}

#[test]
fn determinant_and_inverse() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0003);
    for _ in 0..ITERATIONS {
        let m2 = Mat2::from_array(mat(&mut rng));
        let m3 = Mat3::from_array(mat(&mut rng));
        let m4 = Mat4::from_array(mat(&mut rng));

        assert!(rel_close(m2.transpose().determinant(), m2.determinant(), 1e-10));
        assert!(rel_close(m3.transpose().determinant(), m3.determinant(), 1e-10));
        assert!(rel_close(m4.transpose().determinant(), m4.determinant(), 1e-10));

        if m2.determinant().abs() > 1.0 {
            assert!((m2 * m2.inverse()).is_close_to(Mat2::identity(), 1e-9));
        }
        if m3.determinant().abs() > 1.0 {
            assert!((m3 * m3.inverse()).is_close_to(Mat3::identity(), 1e-9));
        }
        if m4.determinant().abs() > 1.0 {
            assert!((m4 * m4.inverse()).is_close_to(Mat4::identity(), 1e-9));
        }
    }
}

#[test]
fn product_laws() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0004);
    for _ in 0..ITERATIONS {
        let a = Mat2x3::from_array(mat(&mut rng));
        let b = Mat3x4::from_array(mat(&mut rng));
        let c = Mat4x2::from_array(mat(&mut rng));

        assert!(((a * b) * c).is_close_to(a * (b * c), 1e-9));
        assert!((a * b).transpose().is_close_to(b.transpose() * a.transpose(), 1e-12));

        let v = Vec2::new(scalar(&mut rng), scalar(&mut rng));
        assert!(((a * b) * c * v).is_close_to(a * (b * (c * v)), 1e-9));
    }
}

#[test]
fn dynamic_matches_fixed() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0005);
    for _ in 0..ITERATIONS / 4 {
        let a = Mat3x4::from_array(mat(&mut rng));
        let b = Mat4x2::from_array(mat(&mut rng));
        let v = Vec4::new(scalar(&mut rng), scalar(&mut rng), scalar(&mut rng), scalar(&mut rng));

        let dyn_a = MatMN::from(a);
        let dyn_b = MatMN::from(b);
        assert_eq!(dyn_a.rows(), 3);
        assert_eq!(dyn_a.columns(), 4);

        assert!(dyn_a.mul_mxn(&dyn_b).mat3x2().is_close_to(a * b, 1e-12));
        assert!(dyn_a.mul_nx1(&VecX::from(v)).vec3().is_close_to(a * v, 1e-12));
        assert!(dyn_a.transpose().mat4x3().is_close_to(a.transpose(), 0.0));
    }
}

#[test]
fn unit_quaternions() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0006);
    for _ in 0..ITERATIONS {
        let q = unit_quat(&mut rng);
        let r = unit_quat(&mut rng);
        let p = vec3(&mut rng);

        assert!(q.is_close_to_normalized(1e-12));
        assert!((q * q.conjugate()).is_close_to(Quat::identity(), 1e-12));
        assert!(q.conjugate().is_close_to(q.inverse(), 1e-12));
        assert!((q * r).is_close_to_normalized(1e-12));

        let rotated = q.rotate(p);
        assert!(rel_close(rotated.len(), p.len(), 1e-12));
        assert_eq!(Quat::identity().rotate(p), p);
        assert!(q.conjugate().rotate(rotated).is_close_to(p, 1e-10));
        assert!((q * r).rotate(p).is_close_to(q.rotate(r.rotate(p)), 1e-10));

        let rot = q.to_mat3();
        assert!((rot * rot.transpose()).is_close_to(Mat3::identity(), 1e-12));
        assert!(rel_close(rot.determinant(), 1.0, 1e-12));
        assert!((rot * p).is_close_to(rotated, 1e-10));
        let rot4 = q.to_mat4();
        assert!((rot4 * rot4.transpose()).is_close_to(Mat4::identity(), 1e-12));
        assert!(Quat::from_mat4(rot4).orientation_eq_thresh(q, 1e-12));
    }
}

#[test]
fn project_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0007);
    let viewport = Viewport::new(0.0, 0.0, 1280.0, 720.0);
    let projection = Mat4::create_perspective(Degrees(60.0), 1280.0 / 720.0, 0.1, 100.0);

    for _ in 0..ITERATIONS {
        let eye = vec3(&mut rng) * 5.0;
        // Keep the object in front of the camera and away from a degenerate up vector
        if eye.len() < 5.0 || eye.normalize().y.abs() > 0.99 {
            continue;
        }
        let modelview = Mat4::create_look_at(eye, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        let obj = Vec3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));

        let win = project(obj, modelview, projection, viewport);
        let back = unproject(win, modelview, projection, viewport);
        assert!(matches!(back, Ok(back) if back.is_close_to(obj, 1e-6)), "{obj} -> {win} -> {back:?}");
    }
}

#[test]
fn ray_against_aabb() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0008);
    let aabb = Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));

    for _ in 0..ITERATIONS {
        // Start inside the box, any direction
        let orig = Vec3::new(rng.gen_range(-0.9..0.9), rng.gen_range(-1.9..1.9), rng.gen_range(-2.9..2.9));
        let mut dir = vec3(&mut rng);
        if dir.len_sq() < 1e-6 {
            dir = Vec3::new(1.0, 0.0, 0.0);
        }
        let hit = aabb.intersect_ray(Ray::new(orig, dir));
        assert!(hit.hit);
        assert!(hit.t_min < 0.0 && hit.t_max > 0.0, "{} {}", hit.t_min, hit.t_max);

        // Start outside the x slab, moving parallel to it
        let side = if rng.gen::<bool>() { 1.0f64 } else { -1.0 };
        let orig = Vec3::new(side * rng.gen_range(1.5f64..2.5), scalar(&mut rng), scalar(&mut rng));
        let dir = Vec3::new(0.0, scalar(&mut rng), scalar(&mut rng));
        assert!(!aabb.intersect_ray(Ray::new(orig, dir)).hit);

        // Start on an x face, moving parallel to it
        let orig = Vec3::new(side, rng.gen_range(-1.9..1.9), rng.gen_range(-2.9..2.9));
        let dir = Vec3::new(0.0, rng.gen_range(0.1..1.0) * side, rng.gen_range(-1.0..1.0));
        let hit = aabb.intersect_ray(Ray::new(orig, dir));
        assert!(hit.hit);
        assert!(hit.t_min < 0.0 && hit.t_max > 0.0, "{} {}", hit.t_min, hit.t_max);
    }
}
