//! Demo scenes and the frame driver.
//!
//! # Invariants
//! - The backend only ever receives matrices; it cannot mutate camera state.
//! - View, projection and every model matrix are rebuilt each frame.
//! - The two demo variants share all code and differ only by `DemoConfig`.

mod config;
mod demo;
mod layout;
mod renderer;

pub use config::{ConfigError, DemoConfig, WindowConfig};
pub use demo::{Demo, Frame};
pub use layout::{Draw, Mesh, SceneVariant, Texture, corridor, cube};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "claustrophobia-scene v0.1.0"
}
