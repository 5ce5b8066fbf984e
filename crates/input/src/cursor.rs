use serde::{Deserialize, Serialize};

/// Turns absolute cursor positions into look offsets.
///
/// The first sample has no predecessor, so it only records the reference
/// point; otherwise the camera would snap on the first mouse move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CursorTracker {
    last: Option<(f32, f32)>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a reference point has been recorded yet.
    pub fn has_reference(&self) -> bool {
        self.last.is_some()
    }

    /// Offset from the previous sample as `(dx, dy)` with `dy` pointing up
    /// (screen y grows downward). `None` for the very first sample.
    pub fn offset(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let prev = self.last.replace((x, y));
        match prev {
            Some((last_x, last_y)) => Some((x - last_x, last_y - y)),
            None => {
                tracing::debug!(x, y, "cursor reference point recorded");
                None
            }
        }
    }

    /// Forget the reference point, e.g. after the window regains focus.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
