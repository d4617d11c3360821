use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
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

#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A recursive ray tracer for simple sphere and triangle scenes")]
pub struct Args {
    /// Scene file to render
    pub scene: PathBuf,

    /// Output file path (.png for clamped 8-bit, .exr for linear float)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// YAML render settings
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Image width in pixels, overrides settings
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels, overrides settings
    #[arg(long)]
    pub height: Option<u32>,

    /// Maximum number of specular bounces, overrides settings
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Portion of light color applied as ambient light, overrides settings
    #[arg(long)]
    pub ambient_fraction: Option<f32>,

    /// Scene parameter override, e.g. --param "Eye X=1.5". Can be repeated.
    #[arg(long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Trace a single pixel instead of rendering. (0, 0) is the bottom left pixel.
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pub probe: Option<Vec<u32>>,

    /// Set the logging level
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
