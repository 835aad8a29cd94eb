//! Stride - headless first-person walk
//!
//! Builds a scene of static boxes, feeds a scripted sequence of key and mouse
//! events through the player controller at a fixed frame rate, and logs the
//! resulting camera pose.
//!
//! Usage: `stride [SETTINGS_PATH] [--write-settings]`
//!
//! `--write-settings` writes the effective settings back to `SETTINGS_PATH`,
//! or to the config directory when no path is given.

mod scene;
mod script;
mod settings;
mod trajectory;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use stride_core::GameTime;
use stride_game::{InputBindings, KeyEventQueue, LookAngles, PlayerController};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use settings::Settings;
use trajectory::Trajectory;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut settings_path = None;
    let mut write_settings = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--write-settings" => write_settings = true,
            _ => settings_path = Some(PathBuf::from(arg)),
        }
    }

    let settings = match &settings_path {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    if write_settings {
        let saved = match &settings_path {
            Some(path) => settings.save_to(path),
            None => settings.save(),
        };
        saved.context("Failed to write settings")?;
    }

    settings
        .locomotion
        .validate()
        .context("Invalid locomotion settings")?;
    let bindings =
        InputBindings::with_overrides(&settings.bindings).context("Invalid key bindings")?;

    let harness = &settings.harness;
    if harness.frame_rate.is_nan() || harness.frame_rate <= 0.0 {
        anyhow::bail!("Frame rate must be positive, got {}", harness.frame_rate);
    }

    info!("Starting Stride walk...");

    let world = scene::build(harness.seed, harness.box_count);
    let mut player = PlayerController::with_config(settings.locomotion.clone()).with_bindings(bindings);
    let mut look = LookAngles::with_config(settings.look.clone());
    let mut time = GameTime::new(settings.time.clone());
    let mut trajectory = Trajectory::default();

    // Script events go through the same queue a platform input thread would use
    let queue = KeyEventQueue::new();
    let input = queue.sender();
    let frame_delta = 1.0 / harness.frame_rate;

    for frame in 0..harness.frames {
        for step in script::steps_at(&harness.script, frame) {
            if let Some(key) = &step.key {
                input.send(key.clone(), step.pressed);
            }
            if let Some(delta) = step.look_delta() {
                look.handle_mouse_look(delta);
                debug!(frame, yaw = look.yaw, pitch = look.pitch, "look changed");
            }
        }

        player.drain(&queue);
        player.set_orientation(look.rotation());

        time.update(frame_delta);
        let pose = player.tick(&world, time.delta_time);
        trajectory.record(frame, time.total_time, player.body(), player.grounding());

        if harness.log_interval > 0 && frame % harness.log_interval == 0 {
            info!(
                frame,
                x = pose.position.x,
                y = pose.position.y,
                z = pose.position.z,
                grounding = ?player.grounding(),
                "pose"
            );
        }
    }

    let pose = player.pose();
    info!(
        frames = harness.frames,
        seconds = time.total_time,
        position = ?pose.position,
        min_height = ?trajectory.min_height(),
        "Walk finished"
    );

    if let Some(path) = &harness.record_path {
        match trajectory.write_json(path) {
            Ok(()) => info!("Wrote trajectory to {:?}", path),
            Err(e) => warn!("{:#}", e),
        }
    }

    Ok(())
}
