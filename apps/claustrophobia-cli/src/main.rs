use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use claustrophobia_input::{Action, FrameInput};
use claustrophobia_scene::{DebugTextRenderer, Demo, DemoConfig, Renderer, SceneVariant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "claustrophobia-cli", about = "Headless driver for the first-person demo core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    Corridor,
    Cube,
}

impl From<Variant> for SceneVariant {
    fn from(v: Variant) -> Self {
        match v {
            Variant::Corridor => SceneVariant::Corridor,
            Variant::Cube => SceneVariant::Cube,
        }
    }
}

#[derive(clap::Args)]
struct Source {
    /// Built-in preset to start from
    #[arg(long, value_enum, default_value = "corridor")]
    variant: Variant,
    /// YAML config file; overrides --variant
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Source {
    fn load(&self) -> anyhow::Result<DemoConfig> {
        match &self.config {
            Some(path) => DemoConfig::load(path)
                .with_context(|| format!("loading config {}", path.display())),
            None => Ok(DemoConfig::preset(self.variant.into())),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Print a configuration as YAML
    Config {
        #[command(flatten)]
        source: Source,
    },
    /// Run scripted input through the camera and print each frame
    Simulate {
        #[command(flatten)]
        source: Source,
        /// Number of frames to run
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Seconds per frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Press jump on this frame
        #[arg(long)]
        jump_at: Option<u64>,
        /// Hold move-forward for the whole run
        #[arg(long)]
        forward: bool,
        /// Horizontal cursor travel per frame, in pixels
        #[arg(long, default_value = "0")]
        turn: f32,
        /// Print every Nth frame
        #[arg(long, default_value = "10")]
        every: u64,
        /// List every draw in printed frames
        #[arg(long)]
        draws: bool,
    },
    /// Dump one frame's matrices as JSON
    Frame {
        #[command(flatten)]
        source: Source,
        /// Seconds since start to render at
        #[arg(long, default_value = "0")]
        elapsed: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("claustrophobia-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("math: {}", claustrophobia_math::crate_info());
            println!("input: {}", claustrophobia_input::crate_info());
            println!("camera: {}", claustrophobia_camera::crate_info());
            println!("scene: {}", claustrophobia_scene::crate_info());
        }
        Commands::Config { source } => {
            let config = source.load()?;
            print!("{}", config.to_yaml()?);
        }
        Commands::Simulate {
            source,
            frames,
            dt,
            jump_at,
            forward,
            turn,
            every,
            draws,
        } => {
            let config = source.load()?;
            let center = (
                config.window.width as f32 / 2.0,
                config.window.height as f32 / 2.0,
            );
            let mut demo = Demo::new(config)?;
            let renderer = if draws {
                DebugTextRenderer::with_draws()
            } else {
                DebugTextRenderer::new()
            };
            let every = every.max(1);

            println!("Simulating {frames} frames at dt={dt}");
            for i in 0..frames {
                let cursor_x = center.0 + turn * i as f32;
                let mut input = FrameInput::new().cursor_at(cursor_x, center.1);
                if forward {
                    input = input.hold(Action::MoveForward);
                }
                if jump_at == Some(i) {
                    input = input.hold(Action::Jump);
                }

                let frame = demo.tick(&input, dt);
                if i % every == 0 || i + 1 == frames {
                    print!("{}", renderer.render(&frame));
                }
                if frame.quit_requested {
                    break;
                }
            }

            let cam = demo.camera();
            tracing::info!(
                frames = demo.frame_count(),
                elapsed = demo.elapsed(),
                vertical = ?cam.vertical,
                "simulation finished"
            );
        }
        Commands::Frame { source, elapsed } => {
            let mut demo = Demo::new(source.load()?)?;
            let frame = demo.tick(&FrameInput::new(), elapsed);
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
    }

    Ok(())
}
