//! First-person camera: state, per-frame update, and lens.
//!
//! # Invariants
//! - `update` is a pure function of `(state, input, dt)`; no globals.
//! - Horizontal movement only happens while grounded.
//! - The camera never ends a frame below `ground_height`.
//! - Pitch stays within `±pitch_limit` degrees.

pub mod camera;
pub mod config;
pub mod lens;

pub use camera::{CameraState, VerticalState, update};
pub use config::{LensConfig, LookConfig, MovementConfig};
pub use lens::Lens;

pub fn crate_info() -> &'static str {
    "claustrophobia-camera v0.1.0"
}
