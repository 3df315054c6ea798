// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::{DemoConfig, DemoKind};

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-demos")]
#[command(about = "Headless runner for the point graph, room, particle and garden scenes", long_about = None)]
pub struct Cli {
    /// JSON config file; command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Demo to run
    #[arg(long, value_enum)]
    pub demo: Option<DemoKind>,

    /// Number of frames to simulate
    #[arg(long)]
    pub frames: Option<u64>,

    /// Fixed frame delta in seconds
    #[arg(long, conflicts_with = "realtime")]
    pub dt: Option<f32>,

    /// Pace frames by the wall clock instead of a fixed delta
    #[arg(long)]
    pub realtime: bool,

    /// Seed for particle velocities
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the particle texture unavailable for this many frames
    #[arg(long)]
    pub texture_delay: Option<u64>,

    /// Cursor position in pixels over an 800x600 window, e.g. `790,300`
    #[arg(long, value_parser = parse_cursor)]
    pub cursor: Option<(f32, f32)>,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Apply command-line overrides on top of `config`
    pub fn apply(&self, mut config: DemoConfig) -> DemoConfig {
        if let Some(demo) = self.demo {
            config.demo = demo;
        }
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if self.realtime {
            config.fixed_dt = None;
        } else if let Some(dt) = self.dt {
            config.fixed_dt = Some(dt);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delay) = self.texture_delay {
            config.texture_delay = delay;
        }
        config
    }
}

fn parse_cursor(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok((x, y))
}
