//! Matrix builders for model, view and projection transforms.
//!
//! `translate` and `scale` write their entries into a copy of the incoming
//! matrix rather than multiplying into it. Scene layouts chain
//! `trans = translate(trans, …)` and depend on the second call replacing the
//! first translation, so these must stay overwrite-style.

use std::f32::consts::PI;

use crate::mat4::Mat4;
use crate::vec::Vec3;

pub fn radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

pub fn degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Copy of `m` with column 3 xyz set to `v`; `w` is left as is.
pub fn translate(m: Mat4, v: Vec3) -> Mat4 {
    let mut t = m;
    t[3][0] = v.x();
    t[3][1] = v.y();
    t[3][2] = v.z();
    t
}

/// Copy of `m` with its upper-left 3x3 replaced by a rotation of `angle`
/// radians about `axis`. The axis is normalized here; every other entry of
/// `m` is kept.
pub fn rotate(m: Mat4, angle: f32, axis: Vec3) -> Mat4 {
    let (s, c) = angle.sin_cos();
    let k = 1.0 - c;

    let r = axis.normalize();
    let (x, y, z) = (r.x(), r.y(), r.z());

    let mut mr = m;

    mr[0][0] = k * x * x + c;
    mr[0][1] = k * x * y + s * z;
    mr[0][2] = k * x * z - s * y;

    mr[1][0] = k * x * y - s * z;
    mr[1][1] = k * y * y + c;
    mr[1][2] = k * y * z + s * x;

    mr[2][0] = k * x * z + s * y;
    mr[2][1] = k * y * z - s * x;
    mr[2][2] = k * z * z + c;

    mr
}

/// Copy of `m` with the xyz diagonal set to `v`.
pub fn scale(m: Mat4, v: Vec3) -> Mat4 {
    let mut s = m;
    s[0][0] = v.x();
    s[1][1] = v.y();
    s[2][2] = v.z();
    s
}

/// Right-handed OpenGL projection (NDC depth in [-1, 1]).
///
/// Requires `0 < fov < π` and `z_near != z_far`.
pub fn perspective(fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Mat4 {
    let mut p = Mat4::ZERO;

    let tan_half_fov = (fov / 2.0).tan();
    let depth = z_far - z_near;

    p[0][0] = 1.0 / (aspect_ratio * tan_half_fov);
    p[1][1] = 1.0 / tan_half_fov;
    p[2][2] = -(z_far + z_near) / depth;
    p[2][3] = -1.0;
    p[3][2] = -(2.0 * z_far * z_near) / depth;

    p
}

/// Right-handed view matrix looking from `eye` towards `target`.
///
/// Degenerate when `world_up` is parallel to `eye - target`.
pub fn look_at(eye: Vec3, target: Vec3, world_up: Vec3) -> Mat4 {
    let forward = (eye - target).normalize();
    let left = world_up.cross(forward).normalize();
    let up = forward.cross(left);

    let mut m = Mat4::IDENTITY;

    for (i, axis) in [left, up, forward].into_iter().enumerate() {
        m[0][i] = axis.x();
        m[1][i] = axis.y();
        m[2][i] = axis.z();
        m[3][i] = -axis.dot(eye);
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec4;

    const EPS: f32 = 1e-4;

    fn assert_mat_close(a: Mat4, b: Mat4) {
        for j in 0..4 {
            for i in 0..4 {
                assert!(
                    (a[j][i] - b[j][i]).abs() < EPS,
                    "[{j}][{i}]: {} vs {}",
                    a[j][i],
                    b[j][i]
                );
            }
        }
    }

    #[test]
    fn angle_conversion() {
        assert!((radians(180.0) - PI).abs() < 1e-6);
        assert!((degrees(PI / 2.0) - 90.0).abs() < 1e-4);
        assert!((degrees(radians(-37.5)) + 37.5).abs() < 1e-4);
    }

    #[test]
    fn translate_overwrites_instead_of_adding() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let once = translate(Mat4::IDENTITY, v);
        assert_eq!(translate(once, v), once);
        assert_eq!(once.col(3), Vec4::new(1.0, 2.0, 3.0, 1.0));

        let moved = translate(once, Vec3::new(10.0, 0.8, -5.0));
        assert_eq!(moved.col(3), Vec4::new(10.0, 0.8, -5.0, 1.0));
    }

    #[test]
    fn translate_keeps_w() {
        let m = translate(Mat4::ZERO, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(m[3][3], 0.0);
    }

    #[test]
    fn scale_overwrites_diagonal() {
        let s = scale(Mat4::IDENTITY, Vec3::new(5.0, 5.5, 0.0));
        let s2 = scale(s, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(s2[0][0], 2.0);
        assert_eq!(s2[1][1], 2.0);
        assert_eq!(s2[2][2], 2.0);
        assert_eq!(s2[3][3], 1.0);
    }

    #[test]
    fn rotate_matches_axis_angle() {
        for (deg, axis) in [
            (90.0, Vec3::Y),
            (-90.0, Vec3::X),
            (33.0, Vec3::new(0.5, 1.0, 0.0)),
            (210.0, Vec3::new(-1.0, 2.0, 3.0)),
        ] {
            let ours = rotate(Mat4::IDENTITY, radians(deg), axis);
            let theirs =
                glam::Mat4::from_axis_angle(glam::Vec3::from(axis).normalize(), radians(deg));
            assert_mat_close(ours, theirs.into());
        }
    }

    #[test]
    fn rotate_quarter_turn_about_y_sends_x_to_minus_z() {
        let r = rotate(Mat4::IDENTITY, radians(90.0), Vec3::Y);
        let p = r.transform_point(Vec3::X);
        assert!(p.x().abs() < EPS);
        assert!((p.z() + 1.0).abs() < EPS);
    }

    #[test]
    fn rotate_keeps_translation_column() {
        let t = translate(Mat4::IDENTITY, Vec3::new(4.5, -1.0, -16.0));
        let r = rotate(t, radians(-90.0), Vec3::X);
        assert_eq!(r.col(3), t.col(3));
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let (near, far) = (0.1, 100.0);
        let p = perspective(radians(45.0), 1.5, near, far);

        let at_near = p.transform_point(Vec3::new(0.0, 0.0, -near));
        let at_far = p.transform_point(Vec3::new(0.0, 0.0, -far));

        assert!((at_near.z() / at_near.w() + 1.0).abs() < EPS);
        assert!((at_far.z() / at_far.w() - 1.0).abs() < EPS);
    }

    #[test]
    fn perspective_matches_gl_convention() {
        let ours = perspective(radians(60.0), 16.0 / 9.0, 0.5, 50.0);
        let theirs = glam::Mat4::perspective_rh_gl(radians(60.0), 16.0 / 9.0, 0.5, 50.0);
        assert_mat_close(ours, theirs.into());
    }

    #[test]
    fn look_at_sends_eye_to_origin() {
        let eye = Vec3::new(2.0, 0.5, -3.0);
        let front = Vec3::new(0.3, -0.2, -1.0).normalize();
        let view = look_at(eye, eye + front, Vec3::Y);
        let p = view.transform_point(eye);
        assert!(p.truncate().magnitude() < EPS);
        assert_eq!(p.w(), 1.0);
    }

    #[test]
    fn look_at_down_negative_z() {
        let view = look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, 2.0), Vec3::Y);
        assert_eq!(view.col(3), Vec4::new(0.0, 0.0, -3.0, 1.0));
        assert_eq!(view.row(0).truncate(), Vec3::X);
        assert_eq!(view.row(1).truncate(), Vec3::Y);
        assert_eq!(view.row(2).truncate(), Vec3::Z);
    }

    #[test]
    fn look_at_matches_glam() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let target = Vec3::new(-4.0, 0.5, 0.0);
        let ours = look_at(eye, target, Vec3::Y);
        let theirs = glam::Mat4::look_at_rh(eye.into(), target.into(), glam::Vec3::Y);
        assert_mat_close(ours, theirs.into());
    }

    #[test]
    fn model_matrix_composition() {
        let trans = translate(Mat4::IDENTITY, Vec3::new(4.5, 0.8, 1.0));
        let scale_m = scale(Mat4::IDENTITY, Vec3::new(12.0, 5.5, 1.0));
        let model = trans * scale_m;
        let corner = model.transform_point(Vec3::new(0.5, 0.5, 0.0));
        assert!((corner.x() - 10.5).abs() < EPS);
        assert!((corner.y() - 3.55).abs() < EPS);
        assert!((corner.z() - 1.0).abs() < EPS);
    }
}
