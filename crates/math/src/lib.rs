//! Transform math: array-backed vectors, a column-major `Mat4`, and the
//! builder functions that produce model, view and projection matrices.
//!
//! # Invariants
//! - `v[i]` and `m[col][row]` follow declared field order; storage is a
//!   fixed-size array, never pointer arithmetic.
//! - `A * B` applies `B` first, then `A`, to a column vector.
//! - `translate` and `scale` overwrite matrix entries instead of composing.
//! - Degenerate inputs (zero-length normalize, `near == far`, up parallel to
//!   forward) are the caller's responsibility and yield NaN/inf.

mod mat4;
mod transform;
mod vec;

pub use mat4::Mat4;
pub use transform::{degrees, look_at, perspective, radians, rotate, scale, translate};
pub use vec::{Vec3, Vec4};

pub fn crate_info() -> &'static str {
    "claustrophobia-math v0.1.0"
}
