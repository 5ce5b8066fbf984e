use crate::demo::Frame;

/// Backend interface. A GPU backend uploads the frame's matrices and issues
/// one draw per [`Draw`](crate::Draw); it never feeds anything back.
pub trait Renderer {
    /// What one rendered frame becomes: text, a submitted command buffer, etc.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Text renderer for headless runs and logs.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// Also list every draw with its translation.
    pub list_draws: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draws() -> Self {
        Self { list_draws: true }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let cam = &frame.camera;
        let p = cam.position;
        let f = cam.front;

        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame {} (t={:.3}s) ===\n",
            frame.index, frame.elapsed
        ));
        out.push_str(&format!(
            "Camera: pos=({:.3}, {:.3}, {:.3}) front=({:.3}, {:.3}, {:.3}) yaw={:.1} pitch={:.1} state={:?}\n",
            p.x(),
            p.y(),
            p.z(),
            f.x(),
            f.y(),
            f.z(),
            cam.yaw,
            cam.pitch,
            cam.vertical
        ));
        out.push_str(&format!(
            "Lens: fov={:.1} aspect={:.3}\n",
            cam.lens.fov(),
            cam.lens.aspect()
        ));
        out.push_str(&format!("Draws: {}\n", frame.draws.len()));

        if self.list_draws {
            for d in &frame.draws {
                let t = d.model.col(3);
                out.push_str(&format!(
                    "  [{}] {:?}/{:?} at=({:.2}, {:.2}, {:.2})\n",
                    d.label,
                    d.mesh,
                    d.texture,
                    t.x(),
                    t.y(),
                    t.z()
                ));
            }
        }

        if frame.quit_requested {
            out.push_str("Quit requested\n");
        }

        out
    }
}
