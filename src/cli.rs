/// CLI argument parsing and headless command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::color;
use crate::contrast::{self, Contrast};

#[derive(Parser)]
#[command(
    name = "swatchr",
    version,
    about = "Swatchr - a terminal-based color palette editor"
)]
pub struct Cli {
    /// Seed the palette with these colors instead of the built-in
    /// defaults. Invalid entries are skipped with a notice.
    #[arg(short, long = "seed", value_name = "HEX")]
    pub seed: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the normalized #RRGGBB form of a hex color.
    Normalize { color: String },
    /// Classify a background color as bright or dark.
    Contrast { color: String },
}

/// Execute a headless CLI command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Normalize { color } => {
            let normalized = color::normalize_hex(&color)?;
            println!("{normalized}");
        }
        Command::Contrast { color } => {
            let normalized = color::normalize_hex(&color)?;
            let label = match contrast::classify(&normalized) {
                Contrast::Bright => "bright",
                Contrast::Dark => "dark",
            };
            println!("{label}");
        }
    }
    Ok(())
}
