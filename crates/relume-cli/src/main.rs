use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "relume")]
#[command(version, about = "Low-light image enhancement with quality metrics", long_about = None)]
struct Cli {
    /// Print progress and configuration details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enhance a low-light image and report quality metrics
    Enhance {
        /// Input image (png, jpg, bmp, gif)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path (default: <stem>_enhanced.png beside the input)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Fixed gamma instead of the random draw from [0.5, 1.0]
        #[arg(long, value_name = "G")]
        gamma: Option<f32>,

        /// Equalizer clip limit
        #[arg(long, value_name = "C")]
        clip_limit: Option<f32>,

        /// Equalizer tile grid as ROWSxCOLS
        #[arg(long, value_name = "RxC")]
        tile_grid: Option<String>,

        /// Skip the metrics report
        #[arg(long)]
        no_metrics: bool,
    },

    /// Compute entropy and CII for an original/enhanced image pair
    Metrics {
        /// Original image
        #[arg(value_name = "ORIGINAL")]
        original: PathBuf,

        /// Enhanced image
        #[arg(value_name = "ENHANCED")]
        enhanced: PathBuf,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    relume_core::config::set_verbose(cli.verbose);

    let result = match cli.command {
        Commands::Enhance {
            input,
            out,
            gamma,
            clip_limit,
            tile_grid,
            no_metrics,
        } => commands::cmd_enhance(input, out, gamma, clip_limit, tile_grid, no_metrics),
        Commands::Metrics {
            original,
            enhanced,
            json,
        } => commands::cmd_metrics(original, enhanced, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
