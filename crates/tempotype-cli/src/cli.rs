//! Argument definitions.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tempotype::OutputMode;

#[derive(Debug, Parser)]
#[command(name = "tempotype", version, about = "Style text by typing speed")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render text styled for a typing speed
    Render(RenderArgs),
    /// Print the zero-padded word count of text
    Count {
        /// Text to count
        text: String,
    },
    /// Print the tier table as a YAML stylesheet
    Tiers {
        /// YAML tier stylesheet to load instead of the stock tiers
        #[arg(long, value_name = "FILE")]
        tiers: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Text to render
    pub text: String,

    /// Typing speed in characters per second
    #[arg(
        short,
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        conflicts_with = "keystrokes"
    )]
    pub speed: f64,

    /// Keystroke times in milliseconds; the speed is measured from them
    #[arg(long, value_name = "MS", value_delimiter = ',')]
    pub keystrokes: Option<Vec<u64>>,

    /// YAML tier stylesheet to load instead of the stock tiers
    #[arg(long, value_name = "FILE")]
    pub tiers: Option<PathBuf>,

    /// Output mode: auto, term, text, html, or json
    #[arg(short, long, value_name = "MODE", default_value = "auto")]
    pub output: OutputMode,
}
