use claustrophobia_camera::{CameraState, Lens, update};
use claustrophobia_input::FrameInput;
use claustrophobia_math::Mat4;
use serde::Serialize;

use crate::config::{ConfigError, DemoConfig};
use crate::layout::Draw;

/// What the backend needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub index: u64,
    /// Seconds since the demo started.
    pub elapsed: f32,
    pub view: Mat4,
    pub projection: Mat4,
    pub draws: Vec<Draw>,
    pub camera: CameraState,
    pub quit_requested: bool,
}

/// Owns the camera for one demo run and turns per-frame input into a
/// [`Frame`].
///
/// The windowing layer calls [`Demo::tick`] once per frame with the input it
/// collected and the wall-clock seconds since the previous call.
#[derive(Debug, Clone)]
pub struct Demo {
    config: DemoConfig,
    camera: CameraState,
    elapsed: f32,
    frames: u64,
}

impl Demo {
    pub fn new(config: DemoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lens = Lens::new(config.lens, config.window.width, config.window.height);
        let camera = CameraState::new(config.movement, config.look, lens);
        tracing::info!(
            variant = ?config.variant,
            width = config.window.width,
            height = config.window.height,
            "demo initialised"
        );
        Ok(Self {
            config,
            camera,
            elapsed: 0.0,
            frames: 0,
        })
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Frames produced so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Advance by `dt` seconds and build the frame's matrices.
    pub fn tick(&mut self, input: &FrameInput, dt: f32) -> Frame {
        let _span = tracing::info_span!("frame", index = self.frames).entered();

        self.camera = update(self.camera, input, dt);
        self.elapsed += dt;

        let frame = Frame {
            index: self.frames,
            elapsed: self.elapsed,
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(),
            draws: self.config.variant.draws(self.elapsed),
            camera: self.camera,
            quit_requested: self.camera.quit_requested,
        };
        self.frames += 1;

        tracing::trace!(draws = frame.draws.len(), "frame built");
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claustrophobia_camera::VerticalState;
    use claustrophobia_input::Action;
    use claustrophobia_math::Vec3;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn rejects_invalid_config() {
        let mut config = DemoConfig::corridor();
        config.lens.far = 0.0;
        assert!(Demo::new(config).is_err());
    }

    #[test]
    fn first_frame_of_corridor() {
        let mut demo = Demo::new(DemoConfig::corridor()).unwrap();
        let frame = demo.tick(&FrameInput::new(), DT);

        assert_eq!(frame.index, 0);
        assert_eq!(frame.draws.len(), 18);
        assert!(!frame.quit_requested);

        let eye = frame.view.transform_point(Vec3::new(2.0, 0.5, -3.0));
        assert!(eye.truncate().magnitude() < 1e-4);
        assert_eq!(frame.projection, demo.camera().projection_matrix());
        assert_eq!(demo.frame_count(), 1);
    }

    #[test]
    fn cube_frames_advance_the_spin() {
        let mut demo = Demo::new(DemoConfig::cube()).unwrap();
        let a = demo.tick(&FrameInput::new(), 0.5);
        let b = demo.tick(&FrameInput::new(), 0.5);
        assert_eq!(a.draws.len(), 1);
        assert_ne!(a.draws[0].model, b.draws[0].model);
        assert!((demo.elapsed() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn jump_through_the_driver() {
        let mut demo = Demo::new(DemoConfig::cube()).unwrap();
        let frame = demo.tick(&FrameInput::new().hold(Action::Jump), DT);
        assert_eq!(frame.camera.vertical, VerticalState::Jumping);

        let mut frame = frame;
        for _ in 0..600 {
            frame = demo.tick(&FrameInput::new(), DT);
            if frame.camera.vertical == VerticalState::Grounded {
                break;
            }
        }
        assert_eq!(frame.camera.vertical, VerticalState::Grounded);
        assert_eq!(frame.camera.position.y(), 0.0);
    }

    #[test]
    fn quit_surfaces_on_the_frame() {
        let mut demo = Demo::new(DemoConfig::corridor()).unwrap();
        let frame = demo.tick(&FrameInput::new().hold(Action::Quit), DT);
        assert!(frame.quit_requested);
    }

    #[test]
    fn resize_changes_projection() {
        let mut demo = Demo::new(DemoConfig::corridor()).unwrap();
        let before = demo.tick(&FrameInput::new(), DT).projection;
        let after = demo.tick(&FrameInput::new().resized(800, 800), DT).projection;
        assert_ne!(before[0][0], after[0][0]);
        assert_eq!(before[1][1], after[1][1]);
    }
}
