//! HEXDRAUGHTS CLI
//!
//! Commands:
//! - play: AI vs AI self play on the standard layout
//! - suggest: pick a move for a board position read from JSON

use clap::{Parser, Subcommand};

mod play;
mod suggest;

#[derive(Parser)]
#[command(name = "hexdraughts")]
#[command(about = "Hex checkers rules engine and minimax opponent")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full AI vs AI game
    Play(play::PlayArgs),
    /// Suggest a move for a saved board position
    Suggest(suggest::SuggestArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Suggest(args) => suggest::run(args),
    }
}
