use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A discrete key intent the camera understands.
///
/// The windowing layer maps its own key codes onto these; the camera never
/// sees a key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    /// Close the demo.
    Quit,
    /// Start a jump (only honoured while grounded).
    Jump,
    /// Move along the look direction.
    MoveForward,
    /// Move against the look direction.
    MoveBackward,
    /// Strafe against the camera's right vector.
    StrafeLeft,
    /// Strafe along the camera's right vector.
    StrafeRight,
}

/// Everything the input layer collected during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Actions whose key is currently held down.
    pub held: BTreeSet<Action>,
    /// Cursor positions in window pixels, oldest first.
    pub cursor: Vec<(f32, f32)>,
    /// Relative pointer motion `(dx, dy)` in pixels, `dy` positive upward,
    /// for backends that report deltas instead of positions. Applied as is,
    /// with no reference sample.
    pub look_delta: (f32, f32),
    /// Vertical scroll offset accumulated this frame.
    pub scroll: f32,
    /// New framebuffer size, if the window was resized.
    pub resize: Option<(u32, u32)>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    pub fn cursor_at(mut self, x: f32, y: f32) -> Self {
        self.cursor.push((x, y));
        self
    }

    pub fn looked(mut self, dx: f32, dy: f32) -> Self {
        self.look_delta.0 += dx;
        self.look_delta.1 += dy;
        self
    }

    pub fn scrolled(mut self, dy: f32) -> Self {
        self.scroll += dy;
        self
    }

    pub fn resized(mut self, width: u32, height: u32) -> Self {
        self.resize = Some((width, height));
        self
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}
