use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::{DegeneratePolicy, Vec3};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Handling of zero-length directions
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Degenerate {
    /// Abort the render with an error
    Fail,
    /// Drop the affected shading term
    Zero,
}

impl From<Degenerate> for DegeneratePolicy {
    fn from(value: Degenerate) -> Self {
        match value {
            Degenerate::Fail => DegeneratePolicy::Fail,
            Degenerate::Zero => DegeneratePolicy::Zero,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Ray cast a sphere scene with Blinn-Phong shading")]
pub struct Args {
    /// Scene file (JSON). The built-in demo scene is used when omitted.
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Image width in pixels [default: scene file value, else 300]
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels [default: scene file value, else 200]
    #[arg(long)]
    pub height: Option<u32>,

    /// Camera position as x,y,z [default: scene file value, else 0,0,1]
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub camera: Option<Vec3>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Render on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Worker thread count for parallel rendering [default: all cores]
    #[arg(long)]
    pub threads: Option<usize>,

    /// Zero-length direction handling [default: fail in debug builds, zero in release]
    #[arg(long, value_enum)]
    pub degenerate: Option<Degenerate>,

    /// Logging level (RUST_LOG still applies per module)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Parse "x,y,z" into a vector.
pub fn parse_vec3(value: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{value}'"));
    }

    let mut xyz = [0.0_f32; 3];
    for (slot, part) in xyz.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid component '{part}': {e}"))?;
    }

    Ok(Vec3::from_array(xyz))
}
