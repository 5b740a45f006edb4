// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bildwerk — command-line shell.
//
// Entry point. Initialises logging, loads the config, acquires an image,
// applies the requested transform, and writes the display-ready result.

mod cli;
mod services;
mod session;

use std::path::Path;
use std::process::ExitCode;

use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::human_errors::humanize_error;
use bildwerk_core::{PipelineConfig, PixelBuffer};
use clap::Parser;
use image::RgbImage;

use cli::{Cli, Command, ImageJob};
use services::config_store;
use session::Session;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "bildwerk failed");
            let human = humanize_error(&err);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config_store::default_config_path);

    if let Command::InitConfig { force } = cli.command {
        return init_config(&config_path, force);
    }

    let config = config_store::load_config(&config_path);
    let Some(job) = cli.command.into_job()? else {
        return Ok(());
    };
    run_job(job, &config)
}

fn run_job(job: ImageJob, config: &PipelineConfig) -> Result<()> {
    let mut session = Session::new();

    match (&job.source.input, job.source.camera) {
        (Some(path), _) => {
            session.load_file(path)?;
        }
        (None, camera) => {
            let index = camera.flatten().unwrap_or(config.camera_index);
            let backend = bildwerk_capture::platform_camera();
            session.capture(backend.as_ref(), index, config)?;
        }
    }

    if let Some(current) = session.current() {
        tracing::info!(
            width = current.width(),
            height = current.height(),
            "Source image ready"
        );
    }

    let (width, height) = job
        .output
        .viewport
        .unwrap_or((config.viewport_width, config.viewport_height));

    let shown = match job.operation {
        Some(op) => {
            session.apply(op)?;
            session.display_processed(width, height, config.display_filter)?
        }
        None => session.display_current(width, height, config.display_filter)?,
    };

    write_display(&shown, &job.output.out)?;
    println!(
        "Saved {}x{} image to {}",
        shown.width(),
        shown.height(),
        job.output.out.display()
    );
    Ok(())
}

/// Encode a display (RGB) buffer to `path`; the format follows the extension.
fn write_display(shown: &PixelBuffer, path: &Path) -> Result<()> {
    let image = RgbImage::from_raw(shown.width(), shown.height(), shown.data().to_vec())
        .ok_or_else(|| BildwerkError::InvalidBuffer("display buffer has wrong length".into()))?;
    image
        .save(path)
        .map_err(|err| BildwerkError::Encode(format!("{}: {err}", path.display())))
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Config already exists at {} (use --force to overwrite)", path.display());
        return Ok(());
    }
    config_store::persist_config(path, &PipelineConfig::default())?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
