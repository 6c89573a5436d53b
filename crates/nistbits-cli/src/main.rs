//! CLI for nistbits — linear complexity and random excursions variant reports.

mod commands;

use clap::{Parser, Subcommand};
use commands::InputArgs;

#[derive(Parser)]
#[command(name = "nistbits")]
#[command(about = "nistbits — linear complexity and random excursions variant scoring for bit strings")]
#[command(version = nistbits_tests::VERSION)]
struct Cli {
    /// Log per-call summaries and conversion progress (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Linear complexity (Berlekamp-Massey) of the whole input.
    /// With --block-size, also run the block linear complexity test.
    Complexity {
        #[command(flatten)]
        input: InputArgs,

        /// Block length in bits for the block linear complexity test
        #[arg(long)]
        block_size: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Random excursions variant test: one p-value per state -9..-1, 1..9
    Excursions {
        #[command(flatten)]
        input: InputArgs,

        /// Output view: messages (one block per state) or table
        #[arg(long, default_value = "messages", value_parser = ["messages", "table"])]
        view: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run both the linear complexity test and the excursions variant test
    All {
        #[command(flatten)]
        input: InputArgs,

        /// Block length in bits for the block linear complexity test
        #[arg(long, default_value_t = nistbits_tests::DEFAULT_BLOCK_SIZE)]
        block_size: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Complexity {
            input,
            block_size,
            json,
        } => commands::complexity::run(&input, block_size, json),
        Commands::Excursions { input, view, json } => {
            commands::excursions::run(&input, &view, json)
        }
        Commands::All {
            input,
            block_size,
            json,
        } => commands::all::run(&input, block_size, json),
    }
}
