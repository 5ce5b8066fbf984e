//! Input intent: what the windowing layer saw this frame, reduced to actions.
//!
//! # Invariants
//! - The camera consumes `FrameInput`, never raw window events.
//! - The first cursor sample only sets the reference point.

pub mod action;
pub mod cursor;

pub use action::{Action, FrameInput};
pub use cursor::CursorTracker;

pub fn crate_info() -> &'static str {
    "claustrophobia-input v0.1.0"
}
