use anyhow::Result;
use clap::{Parser, Subcommand};
use hide_cli::commands;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hide")]
#[command(about = "Hide - Encode and decode data into/from images using the LSB technique", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode data into an image
    Encode {
        /// Path to the image file
        img_path: String,

        /// Data to be encoded
        data: String,

        /// Name of the new image file (format taken from its extension)
        new_img_name: String,
    },

    /// Decode data from an image
    Decode {
        /// Path to the image file
        img_path: String,

        /// Print only the recovered text
        #[arg(long)]
        raw: bool,
    },

    /// Report whether an image carries a terminated payload
    Inspect {
        /// Path to the image file
        img_path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            img_path,
            data,
            new_img_name,
        } => commands::encode::execute(&img_path, &data, &new_img_name),

        Commands::Decode { img_path, raw } => commands::decode::execute(&img_path, raw),

        Commands::Inspect { img_path } => commands::inspect::execute(&img_path),
    }
}
