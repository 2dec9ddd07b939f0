//! Quickdraw demo application.
//!
//! Opens a window, pumps input into the toolkit once per frame, and renders
//! the demo scene. Config comes from `quickdraw.toml` next to the binary
//! (override with the `QUICKDRAW_CONFIG` environment variable).

mod config;
mod demo;
mod renderer;
mod stage;

use std::path::PathBuf;
use std::process::ExitCode;

use miniquad::conf;
use tracing_subscriber::EnvFilter;

use crate::stage::Stage;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let path = std::env::var_os("QUICKDRAW_CONFIG")
        .map_or_else(|| PathBuf::from("quickdraw.toml"), PathBuf::from);
    let config = match config::load(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "could not load config");
            return ExitCode::FAILURE;
        }
    };

    let conf = conf::Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width,
        window_height: config.window.height,
        ..conf::Conf::default()
    };

    miniquad::start(conf, move |mut ctx| {
        let stage = Stage::new(&mut ctx, &config);
        miniquad::UserData::owning(stage, ctx)
    });

    ExitCode::SUCCESS
}
