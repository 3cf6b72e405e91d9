// Command-line flags and the validated run configuration.

use crate::error::Error;
use clap::Parser;
use std::path::PathBuf;

/// Largest accepted window side. Keeps width * height allocatable and both
/// sides representable as u32 for PNG snapshots.
pub const MAX_SIDE: usize = 16_384;

#[derive(Parser, Debug)]
#[command(name = "cursor-trail")]
#[command(version, about = "A chain of shrinking discs that follows the mouse", long_about = None)]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// Render offscreen with a scripted pointer instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Frames to render in headless mode
    #[arg(long, default_value_t = 240)]
    pub frames: u64,

    /// Write the last headless frame to this PNG file
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Window { fps: usize },
    Headless { frames: u64, snapshot: Option<PathBuf> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub mode: Mode,
}

impl Args {
    /// Default filter directive when RUST_LOG is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl TryFrom<&Args> for Config {
    type Error = Error;

    fn try_from(args: &Args) -> Result<Self, Error> {
        if args.width == 0 || args.height == 0 {
            return Err(Error::InvalidArgs(format!(
                "window size must be non-zero, got {}x{}",
                args.width, args.height
            )));
        }
        if args.width > MAX_SIDE || args.height > MAX_SIDE {
            return Err(Error::InvalidArgs(format!(
                "window size must be at most {MAX_SIDE}x{MAX_SIDE}, got {}x{}",
                args.width, args.height
            )));
        }

        let mode = if args.headless {
            // nothing else stops a headless run
            if args.frames == 0 {
                return Err(Error::InvalidArgs("--frames must be at least 1 with --headless".into()));
            }
            Mode::Headless { frames: args.frames, snapshot: args.snapshot.clone() }
        } else {
            if args.snapshot.is_some() {
                return Err(Error::InvalidArgs("--snapshot needs --headless".into()));
            }
            if args.fps == 0 {
                return Err(Error::InvalidArgs("--fps must be at least 1".into()));
            }
            Mode::Window { fps: args.fps }
        };

        Ok(Config { width: args.width, height: args.height, mode })
    }
}
