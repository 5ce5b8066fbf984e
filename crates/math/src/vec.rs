use std::ops::{
    Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Three-component float vector.
///
/// Components live in a `[f32; 3]` so that `v[0]`, `v[1]`, `v[2]` always
/// alias `x`, `y`, `z` in that order. Serializes as `[x, y, z]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vec3([f32; 3]);

impl Vec3 {
    pub const ZERO: Self = Self([0.0, 0.0, 0.0]);
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Copy of `self` with the y component replaced.
    #[inline]
    pub fn with_y(mut self, y: f32) -> Self {
        self.0[1] = y;
        self
    }

    pub const fn to_array(self) -> [f32; 3] {
        self.0
    }

    pub fn cross(self, r: Self) -> Self {
        Self::new(
            self.y() * r.z() - self.z() * r.y(),
            self.z() * r.x() - self.x() * r.z(),
            self.x() * r.y() - self.y() * r.x(),
        )
    }

    pub fn dot(self, r: Self) -> f32 {
        self.x() * r.x() + self.y() * r.y() + self.z() * r.z()
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// No zero check: a zero vector produces NaN components.
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Widen to a `Vec4` with the given `w`.
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.0[0], self.0[1], self.0[2], w)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self {
        Self(a)
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Self(v.to_array())
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::Vec3::from_array(v.0)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, r: Self) -> Self {
        Self::new(self.x() + r.x(), self.y() + r.y(), self.z() + r.z())
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, r: Self) {
        *self = *self + r;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, r: Self) -> Self {
        Self::new(self.x() - r.x(), self.y() - r.y(), self.z() - r.z())
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, r: Self) {
        *self = *self - r;
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::new(self.x() * s, self.y() * s, self.z() * s)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

/// Component-wise product.
impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, r: Self) -> Self {
        Self::new(self.x() * r.x(), self.y() * r.y(), self.z() * r.z())
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, r: Self) {
        *self = *self * r;
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    fn div(self, s: f32) -> Self {
        Self::new(self.x() / s, self.y() / s, self.z() / s)
    }
}

/// Four-component float vector, used as a matrix column.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vec4([f32; 4]);

impl Vec4 {
    pub const ZERO: Self = Self([0.0; 4]);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[3]
    }

    pub const fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Drop `w`.
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }

    pub fn dot(self, r: Self) -> f32 {
        self.0.iter().zip(r.0.iter()).map(|(a, b)| a * b).sum()
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(a: [f32; 4]) -> Self {
        Self(a)
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

/// Component-wise product.
impl Mul for Vec4 {
    type Output = Self;

    fn mul(self, r: Self) -> Self {
        Self::new(
            self.x() * r.x(),
            self.y() * r.y(),
            self.z() * r.z(),
            self.w() * r.w(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn index_aliases_named_components() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], v.x());
        assert_eq!(v[1], v.y());
        assert_eq!(v[2], v.z());

        v[1] = 7.0;
        assert_eq!(v.y(), 7.0);

        let w = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!([w[0], w[1], w[2], w[3]], [w.x(), w.y(), w.z(), w.w()]);
    }

    #[test]
    fn cross_matches_right_hand_rule() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let samples = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.3, 0.9, 0.1),
            Vec3::new(4.0, -1.0, 0.5),
            Vec3::new(0.0, 0.0, -1.0),
        ];
        for a in samples {
            for b in samples {
                let (a, b) = (a.normalize(), b.normalize());
                let c = a.cross(b);
                assert!(approx(c.dot(a), 0.0), "{a:?} x {b:?}");
                assert!(approx(c.dot(b), 0.0), "{a:?} x {b:?}");
            }
        }
    }

    #[test]
    fn normalize_gives_unit_length() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1e-3, 2e-3, 5e-4),
            Vec3::new(120.0, -80.0, 33.0),
        ] {
            assert!(approx(v.normalize().magnitude(), 1.0));
        }
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vec3::ZERO.normalize();
        assert!(n.x().is_nan());
    }

    #[test]
    fn arithmetic_and_compound_assignment() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::X;
        assert_eq!(v, Vec3::new(1.0, 3.0, 4.0));
        v *= 2.0;
        assert_eq!(v, Vec3::new(2.0, 6.0, 8.0));
        assert_eq!(0.5 * v, v / 2.0);
        assert_eq!(v * Vec3::new(0.0, 1.0, 2.0), Vec3::new(0.0, 6.0, 16.0));
    }

    #[test]
    fn vec4_dot_and_product() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(2.0, 0.0, 1.0, 0.5);
        assert_eq!(a.dot(b), 7.0);
        assert_eq!(a * b, Vec4::new(2.0, 0.0, 3.0, 2.0));
        assert_eq!(a.truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn glam_conversion_preserves_order() {
        let v = Vec3::new(1.0, -2.0, 3.5);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(Vec3::from(g), v);
    }
}
