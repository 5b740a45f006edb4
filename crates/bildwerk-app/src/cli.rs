// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use bildwerk_core::error::Result;
use bildwerk_core::{BrightnessDelta, Channel, CircleSpec, Region};
use bildwerk_image::Operation;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bildwerk")]
#[command(version, about = "Load or capture an image, transform it, and render it for display", long_about = None)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/bildwerk/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the source image without transforming it
    Show {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Keep one colour channel (0 = blue, 1 = green, 2 = red)
    Channel {
        #[command(flatten)]
        source: SourceArgs,
        /// Channel index
        #[arg(value_name = "INDEX")]
        index: u8,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Crop to the rectangle from (X1,Y1) up to but excluding (X2,Y2)
    Crop {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(value_name = "X1,Y1,X2,Y2", value_parser = parse_region)]
        region: Region,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Brighten by adding DELTA (0-100) to the HSV value channel
    Brightness {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(value_name = "DELTA", allow_negative_numbers = true)]
        delta: i32,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Draw a red circle outline centred at (X,Y) with radius R
    Circle {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(value_name = "X,Y,R", value_parser = parse_circle)]
        circle: CircleSpec,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write the default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Where the image comes from.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Image file to load
    #[arg(short, long, value_name = "FILE", conflicts_with = "camera", required_unless_present = "camera")]
    pub input: Option<PathBuf>,

    /// Capture from a camera instead (index defaults to the configured one)
    #[arg(long, value_name = "INDEX")]
    pub camera: Option<Option<u32>>,
}

/// Where and how to write the display image.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output image file (format from extension)
    #[arg(short, long, value_name = "FILE")]
    pub out: PathBuf,

    /// Viewport to fit the result into (overrides config)
    #[arg(long, value_name = "WxH", value_parser = parse_viewport)]
    pub viewport: Option<(u32, u32)>,
}

/// A parsed image command: source, the optional transform, and output.
pub struct ImageJob {
    pub source: SourceArgs,
    pub operation: Option<Operation>,
    pub output: OutputArgs,
}

impl Command {
    /// Split an image command into its parts, validating transform
    /// parameters. Returns `Ok(None)` for commands that take no image.
    pub fn into_job(self) -> Result<Option<ImageJob>> {
        let (source, operation, output) = match self {
            Command::Show { source, output } => (source, None, output),
            Command::Channel { source, index, output } => {
                (source, Some(Operation::ExtractChannel(Channel::try_from(index)?)), output)
            }
            Command::Crop { source, region, output } => (source, Some(Operation::Crop(region)), output),
            Command::Brightness { source, delta, output } => (
                source,
                Some(Operation::AdjustBrightness(BrightnessDelta::new(delta)?)),
                output,
            ),
            Command::Circle { source, circle, output } => (source, Some(Operation::DrawCircle(circle)), output),
            Command::InitConfig { .. } => return Ok(None),
        };
        Ok(Some(ImageJob {
            source,
            operation,
            output,
        }))
    }
}

fn parse_numbers<const N: usize>(text: &str) -> std::result::Result<[u32; N], String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got {}", parts.len()));
    }
    let mut values = [0u32; N];
    for (slot, part) in values.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("'{part}' is not a non-negative integer"))?;
    }
    Ok(values)
}

fn parse_region(text: &str) -> std::result::Result<Region, String> {
    let [x1, y1, x2, y2] = parse_numbers::<4>(text)?;
    Ok(Region::new(x1, y1, x2, y2))
}

fn parse_circle(text: &str) -> std::result::Result<CircleSpec, String> {
    let [x, y, radius] = parse_numbers::<3>(text)?;
    Ok(CircleSpec::new(x, y, radius))
}

fn parse_viewport(text: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("'{text}' is not WIDTHxHEIGHT"))?;
    let parse = |v: &str| v.trim().parse::<u32>().map_err(|_| format!("'{v}' is not a size"));
    Ok((parse(w)?, parse(h)?))
}
