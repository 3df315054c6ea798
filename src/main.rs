use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use scene_demos::cli::Cli;
use scene_demos::config::{DemoConfig, DemoKind};
use scene_demos::demos::{
    create_demo, placeholder_phone, placeholder_table, Assets, Demo, FrameInput, ParticlesDemo,
};
use scene_demos::frame::{FixedStep, FrameInfo, Interval, RealTimeFrames};
use scene_demos::input::CursorTracker;
use scene_demos::scene::SceneGraph;
use scene_demos::texture::{Texture, TextureSlot};

// === Constants ===

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const STATS_INTERVAL: f32 = 1.0;
const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_667);

fn sprite_texture() -> Texture {
    Texture::new("spark", 32, 32)
}

/// Build the selected demo against the built-in placeholder assets
fn build_demo(config: &DemoConfig) -> Box<dyn Demo> {
    let mut sprite = TextureSlot::default();
    sprite.set_ready(sprite_texture());

    if config.demo == DemoKind::Particles && config.texture_delay > 0 {
        return Box::new(
            ParticlesDemo::new(config.emitter.clone(), sprite, config.seed)
                .deliver_texture_at(config.texture_delay, sprite_texture()),
        );
    }

    create_demo(
        config,
        Assets {
            phone: placeholder_phone(),
            table: placeholder_table(),
            sprite,
        },
    )
}

fn frames(config: &DemoConfig) -> Box<dyn Iterator<Item = FrameInfo>> {
    let total = config.frames;
    match config.fixed_dt {
        Some(dt) => Box::new(FixedStep::new(dt).take_while(move |f| f.number < total)),
        None => Box::new(
            RealTimeFrames::new()
                .take_while(move |f| f.number < total)
                .inspect(|_| std::thread::sleep(TARGET_FRAME_TIME)),
        ),
    }
}

fn run(cli: &Cli, config: &DemoConfig) {
    let mut demo = build_demo(config);
    let mut scene = SceneGraph::new();
    demo.build(&mut scene);

    let mut cursor = CursorTracker::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    if let Some((x, y)) = cli.cursor {
        cursor.move_cursor(x, y);
    }
    let input = FrameInput {
        camera_state: cursor.camera_state(),
    };

    log::info!(
        "running {} for {} frames ({}), look {:?}",
        demo.name(),
        config.frames,
        config
            .fixed_dt
            .map(|dt| format!("dt {dt:.4}s"))
            .unwrap_or_else(|| "real time".to_string()),
        input.camera_state
    );

    let mut stats = Interval::new(STATS_INTERVAL);
    let mut last = None;
    for frame in frames(config) {
        demo.update(&frame, &input, &mut scene);
        if stats.tick(frame.delta) && !cli.no_ui {
            println!("[{:>6}] {}", frame.number, demo.summary(&scene));
        }
        last = Some(frame);
    }

    let camera = demo.camera();
    log::info!(
        "finished after {} frames ({:.2}s): {}; camera at {} facing {}",
        last.map_or(0, |f| f.number + 1),
        last.map_or(0.0, |f| f.time),
        demo.summary(&scene),
        camera.position,
        camera.forward()
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("Failed to load config: {:?}", path))?,
        None => DemoConfig::default(),
    };
    let config = cli.apply(config);
    config.validate().context("Invalid settings")?;

    run(&cli, &config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_run_yields_configured_frame_count() {
        let config = DemoConfig {
            frames: 3,
            ..DemoConfig::default()
        };
        let numbers: Vec<u64> = frames(&config).map(|f| f.number).collect();
        assert_eq!(numbers, vec![0, 1, 2]);
    }

    #[test]
    fn zero_frames_runs_nothing() {
        let config = DemoConfig {
            frames: 0,
            ..DemoConfig::default()
        };
        assert_eq!(frames(&config).count(), 0);
    }
}
