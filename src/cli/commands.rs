use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::converter::convert;
use crate::models::{ConversionMode, Hemisphere, UtmInput};
use crate::{clipboard, share, storage, tui};

#[derive(Parser)]
#[command(name = "dltm-converter")]
#[command(version = "0.1.0")]
#[command(about = "Convert between Dubai DLTM, UTM and WGS84 coordinates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a coordinate pair and print the result
    Convert {
        /// Conversion direction
        #[arg(long, value_enum)]
        mode: ConversionMode,
        /// First coordinate: Easting or Latitude, depending on mode
        #[arg(allow_negative_numbers = true)]
        value1: String,
        /// Second coordinate: Northing or Longitude, depending on mode
        #[arg(allow_negative_numbers = true)]
        value2: String,
        /// UTM zone number, 1-60 (UTM modes only)
        #[arg(long)]
        zone: Option<String>,
        /// UTM hemisphere (UTM modes only)
        #[arg(long, value_enum, default_value_t = Hemisphere::North)]
        hemisphere: Hemisphere,
        /// Copy the formatted result to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Show or clear this session's conversion history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recent conversions, newest first
    List,
    /// Remove all recorded conversions
    Clear,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert { mode, value1, value2, zone, hemisphere, copy }) => {
            run_convert(mode, &value1, &value2, zone, hemisphere, copy)
        }
        Some(Commands::History { command }) => match command {
            HistoryCommands::List => list_history(),
            HistoryCommands::Clear => clear_history(),
        },
        None => tui::run_interactive(),
    }
}

fn run_convert(
    mode: ConversionMode,
    value1: &str,
    value2: &str,
    zone: Option<String>,
    hemisphere: Hemisphere,
    copy: bool,
) -> Result<()> {
    let utm = zone.map(|zone| UtmInput::new(zone, hemisphere));
    let conversion = convert(mode, value1, value2, utm.as_ref())?;

    let (label1, label2) = mode.output_labels();
    println!("{}", mode.label());
    println!("  {:<10} {}", format!("{label1}:"), conversion.output1);
    println!("  {:<10} {}", format!("{label2}:"), conversion.output2);
    println!("  {:<10} {}", "Map link:", share::maps_url(conversion.latitude, conversion.longitude));

    let history_path = storage::history_path();
    let mut history = storage::load_history(&history_path);
    history.record(
        mode,
        format!("{}, {}", value1.trim(), value2.trim()),
        conversion.output_text(),
    );
    storage::save_history(&history_path, &history)?;

    if copy {
        // The conversion itself succeeded; a headless clipboard is a warning
        if let Err(err) = clipboard::copy_to_clipboard(&conversion.output_text()) {
            eprintln!("Warning: {err}");
        }
    }

    Ok(())
}

fn list_history() -> Result<()> {
    let history = storage::load_history(&storage::history_path());

    if history.is_empty() {
        println!("No conversions recorded in this session.");
        return Ok(());
    }

    println!("Recent conversions ({})", history.len());
    for entry in history.iter() {
        println!(
            "  {}  {:<10}  {} → {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.mode.label(),
            entry.input_text,
            entry.output_text
        );
    }

    Ok(())
}

fn clear_history() -> Result<()> {
    let history_path = storage::history_path();
    let mut history = storage::load_history(&history_path);
    history.clear();
    storage::save_history(&history_path, &history)?;
    println!("Conversion history cleared.");
    Ok(())
}
