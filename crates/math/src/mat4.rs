use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::vec::{Vec3, Vec4};

/// Column-major 4x4 matrix: `m[col][row]`.
///
/// Layout matches what an OpenGL-style backend expects for a `mat4` uniform,
/// so `bytemuck::bytes_of(&m)` can be uploaded as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    cols: [Vec4; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self::from_diagonal(1.0);
    pub const ZERO: Self = Self::from_diagonal(0.0);

    /// `diag(d, d, d, d)`.
    pub const fn from_diagonal(d: f32) -> Self {
        Self {
            cols: [
                Vec4::new(d, 0.0, 0.0, 0.0),
                Vec4::new(0.0, d, 0.0, 0.0),
                Vec4::new(0.0, 0.0, d, 0.0),
                Vec4::new(0.0, 0.0, 0.0, d),
            ],
        }
    }

    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    pub fn col(&self, j: usize) -> Vec4 {
        self.cols[j]
    }

    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(
            self.cols[0][i],
            self.cols[1][i],
            self.cols[2][i],
            self.cols[3][i],
        )
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (j, col) in self.cols.iter().enumerate() {
            out[j * 4..j * 4 + 4].copy_from_slice(&col.to_array());
        }
        out
    }

    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.cols.map(Vec4::to_array)
    }

    /// Apply to a point (`w = 1`) without the perspective divide.
    pub fn transform_point(&self, p: Vec3) -> Vec4 {
        *self * p.extend(1.0)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;

    fn index(&self, j: usize) -> &Vec4 {
        &self.cols[j]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, j: usize) -> &mut Vec4 {
        &mut self.cols[j]
    }
}

impl Mul for Mat4 {
    type Output = Self;

    /// `self ∘ r`: rows of `self` dotted with columns of `r`.
    fn mul(self, r: Self) -> Self {
        let rows = [self.row(0), self.row(1), self.row(2), self.row(3)];
        let mut m = Self::ZERO;
        for j in 0..4 {
            for (i, row) in rows.iter().enumerate() {
                m[j][i] = row.dot(r[j]);
            }
        }
        m
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        let [c0, c1, c2, c3] = m.to_cols_array_2d();
        Self::from_cols(c0.into(), c1.into(), c2.into(), c3.into())
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array(&m.to_cols_array())
    }
}
