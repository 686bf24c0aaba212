use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;
use std::time::Duration;

use cube4_ai::{
    game::{Game, GameConfig, GameStatus, DEFAULT_DEPTH},
    search::Searcher,
    transport::{run_session, FileTransport},
    Player,
};

#[derive(Parser)]
#[command(name = "cube4")]
#[command(about = "Plays 4x4x4 Connect Four against an opponent through a shared file")]
struct Cli {
    /// The bot's player id (0 or 1)
    player: u8,
    /// File shared with the opponent process
    file: PathBuf,
    /// The opponent's player id, defaults to the other id
    #[arg(long)]
    opponent: Option<u8>,
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,
    /// Seed for reproducible tie-breaks between equal moves
    #[arg(long)]
    seed: Option<u64>,
    /// Delay between polls of the shared file in milliseconds
    #[arg(long, default_value_t = 50)]
    poll_ms: u64,
    /// Print the board after the game ends
    #[arg(long)]
    show_board: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let bot = Player::from_id(cli.player)?;
    let opponent = match cli.opponent {
        Some(id) => Player::from_id(id)?,
        None => bot.opponent(),
    };
    info!(bot = bot.id(), opponent = opponent.id(), depth = cli.depth, "starting session");
    let config = GameConfig {
        bot,
        opponent,
        depth: cli.depth,
    };

    let mut game = match cli.seed {
        Some(seed) => Game::with_searcher(
            config,
            Searcher::with_seed(bot, opponent, config.depth, seed),
        )?,
        None => Game::new(config)?,
    };
    let mut transport = FileTransport::new(cli.file, Duration::from_millis(cli.poll_ms));

    let status = run_session(&mut game, &mut transport)?;
    match status {
        GameStatus::BotWon => println!("Bot wins"),
        GameStatus::OpponentWon => println!("Player wins"),
        GameStatus::Draw => println!("Draw!"),
        GameStatus::Ongoing => println!("Session ended"),
    }

    if cli.show_board {
        game.board().display()?;
    }
    Ok(())
}
