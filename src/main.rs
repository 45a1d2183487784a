// src/main.rs

use clap::{Parser, Subcommand};
use tracing::Level;

use boost_tool::{
    backend::Powercfg,
    power::{apply_power_settings_text, current_settings, list_boost_modes},
};

#[derive(Parser)]
#[command(
    name = "boost_tool",
    about = "Configure CPU boost mode and maximum processor state on the active Windows power scheme"
)]
struct Cli {
    /// Log powercfg invocations as they happen.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a boost mode and maximum processor state to the selected rail(s).
    Apply {
        /// Boost mode code, 0-6 (see list-modes).
        #[arg(long, default_value = "1")]
        boost_mode: String,

        /// Maximum processor state percentage, 20-100.
        #[arg(long, default_value = "95")]
        max_processor_state: String,

        /// Target rail: ac, dc or both.
        #[arg(long, default_value = "both")]
        power_type: String,
    },
    /// List the valid boost mode codes and their labels.
    ListModes,
    /// Show the current boost mode and maximum processor state per rail.
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_target(false)
        .init();

    match cli.command {
        Commands::Apply {
            boost_mode,
            max_processor_state,
            power_type,
        } => {
            let report =
                apply_power_settings_text(&Powercfg, &boost_mode, &max_processor_state, &power_type);
            println!("{}", report);
            if report.starts_with("Error:") {
                std::process::exit(1);
            }
        }
        Commands::ListModes => {
            println!("{}", list_boost_modes());
        }
        Commands::Status => {
            let settings = current_settings(&Powercfg)?;
            let show = |value: Option<u32>| match value {
                Some(v) => v.to_string(),
                None => "unknown".to_string(),
            };
            println!("AC boost mode: {}", show(settings.ac_boost_mode));
            println!("DC boost mode: {}", show(settings.dc_boost_mode));
            println!(
                "AC max processor state: {}%",
                show(settings.ac_max_processor_state)
            );
            println!(
                "DC max processor state: {}%",
                show(settings.dc_max_processor_state)
            );
        }
    }

    Ok(())
}
