use claustrophobia_input::{Action, CursorTracker, FrameInput};
use claustrophobia_math::{Mat4, Vec3, look_at, radians};
use serde::{Deserialize, Serialize};

use crate::config::{LensConfig, LookConfig, MovementConfig};
use crate::lens::Lens;

/// Vertical motion phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalState {
    /// Resting at `ground_height`; the only state that allows walking.
    Grounded,
    /// Rising until `jump_y_limit`.
    Jumping,
    /// Descending until `ground_height`.
    Falling,
}

/// Everything the camera knows between frames.
///
/// Advanced once per tick by [`update`]. `up` is the fixed world up used for
/// strafing and for the view matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec3,
    /// Unit look direction, derived from `yaw`/`pitch`.
    pub front: Vec3,
    pub up: Vec3,
    /// Degrees, unbounded.
    pub yaw: f32,
    /// Degrees, within `±look.pitch_limit`.
    pub pitch: f32,
    pub vertical: VerticalState,
    pub lens: Lens,
    pub cursor: CursorTracker,
    pub quit_requested: bool,
    pub movement: MovementConfig,
    pub look: LookConfig,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(
            MovementConfig::default(),
            LookConfig::default(),
            Lens::new(LensConfig::default(), 1200, 800),
        )
    }
}

impl CameraState {
    pub fn new(movement: MovementConfig, look: LookConfig, lens: Lens) -> Self {
        let position = movement.start_position;
        let pitch = clamp_pitch(look.pitch, look.pitch_limit);
        let vertical = if position.y() > movement.ground_height {
            VerticalState::Falling
        } else {
            VerticalState::Grounded
        };

        Self {
            position,
            front: direction(look.yaw, pitch),
            up: Vec3::Y,
            yaw: look.yaw,
            pitch,
            vertical,
            lens,
            cursor: CursorTracker::new(),
            quit_requested: false,
            movement,
            look,
        }
    }

    pub fn ground_height(&self) -> f32 {
        self.movement.ground_height
    }

    pub fn is_grounded(&self) -> bool {
        self.vertical == VerticalState::Grounded
    }

    /// Camera right vector, `normalize(front × up)`.
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        look_at(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.lens.projection()
    }

    /// Feed an absolute cursor position; the first one only sets the
    /// reference point.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((dx, dy)) = self.cursor.offset(x, y) {
            self.look_by(dx, dy);
        }
    }

    /// Rotate by a cursor offset in pixels, `dy` positive upward.
    pub fn look_by(&mut self, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.yaw += dx * self.look.sensitivity;
        let pitch = self.pitch + dy * self.look.sensitivity;
        self.pitch = clamp_pitch(pitch, self.look.pitch_limit);
        self.front = direction(self.yaw, self.pitch);
    }

    /// Keyboard pass: jump trigger, then grounded movement.
    ///
    /// Holding jump consumes the frame's keyboard input whether or not a jump
    /// starts. Movement keys do nothing while airborne.
    pub fn process_keys(&mut self, input: &FrameInput, dt: f32) {
        if input.is_held(Action::Quit) && !self.quit_requested {
            tracing::info!("quit requested");
            self.quit_requested = true;
        }

        let ground = self.movement.ground_height;

        if input.is_held(Action::Jump) {
            if self.vertical == VerticalState::Grounded && self.position.y() == ground {
                tracing::debug!(y = self.position.y(), "grounded -> jumping");
                self.vertical = VerticalState::Jumping;
            } else {
                tracing::trace!(vertical = ?self.vertical, "jump ignored while airborne");
            }
            return;
        }

        if self.vertical != VerticalState::Grounded || self.position.y() > ground {
            return;
        }

        let speed = self.movement.camera_velocity * dt;

        if input.is_held(Action::MoveForward) {
            self.position += speed * self.front;
        }
        if input.is_held(Action::MoveBackward) {
            self.position -= speed * self.front;
        }
        if input.is_held(Action::StrafeLeft) {
            self.position -= self.right() * speed;
        }
        if input.is_held(Action::StrafeRight) {
            self.position += self.right() * speed;
        }

        self.position = self.position.with_y(ground);
    }

    /// Gravity pass: rise while jumping, fall whenever above ground and not
    /// jumping, land exactly on `ground_height`.
    pub fn apply_vertical(&mut self, dt: f32) {
        let ground = self.movement.ground_height;
        let step = self.movement.jump_velocity * dt;

        if self.vertical == VerticalState::Jumping {
            self.position[1] += step;
            if self.position.y() >= self.movement.jump_y_limit {
                tracing::debug!(y = self.position.y(), "jumping -> falling");
                self.vertical = VerticalState::Falling;
            }
        }

        if self.vertical != VerticalState::Jumping && self.position.y() > ground {
            self.vertical = VerticalState::Falling;
            self.position[1] -= step;
        }

        if self.vertical == VerticalState::Falling && self.position.y() <= ground {
            tracing::debug!(y = self.position.y(), "falling -> grounded");
            self.position[1] = ground;
            self.vertical = VerticalState::Grounded;
        }
    }
}

/// Advance the camera by one frame.
///
/// Order: framebuffer resize, cursor look, raw look deltas, scroll zoom,
/// keyboard, gravity.
pub fn update(state: CameraState, input: &FrameInput, dt: f32) -> CameraState {
    let mut next = state;

    if let Some((width, height)) = input.resize {
        next.lens.resize(width, height);
    }
    for &(x, y) in &input.cursor {
        next.cursor_moved(x, y);
    }
    let (dx, dy) = input.look_delta;
    next.look_by(dx, dy);
    next.lens.zoom(input.scroll);
    next.process_keys(input, dt);
    next.apply_vertical(dt);

    tracing::trace!(
        x = next.position.x(),
        y = next.position.y(),
        z = next.position.z(),
        yaw = next.yaw,
        pitch = next.pitch,
        vertical = ?next.vertical,
        "camera updated"
    );

    next
}

/// Like `f32::clamp` to `±limit`, but a negative or NaN limit does not panic.
fn clamp_pitch(pitch: f32, limit: f32) -> f32 {
    pitch.max(-limit).min(limit)
}

/// Unit look vector for yaw/pitch in degrees.
fn direction(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (radians(yaw), radians(pitch));
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}
