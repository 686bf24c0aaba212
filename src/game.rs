//! A single game against an external opponent
//!
//! The authoritative board lives here. The searcher only ever sees it by
//! reference and works on its own clones; moves are committed once the
//! search has returned.

use tracing::info;

use crate::{
    board::{Board, Player},
    evaluation::{has_win, Score},
    search::Searcher,
    Result,
};

/// The number of plies searched when no depth is configured
pub const DEFAULT_DEPTH: u32 = 5;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    pub bot: Player,
    pub opponent: Player,
    pub depth: u32,
}

impl GameConfig {
    /// Builds a configuration from raw player ids at the default depth
    pub fn from_ids(bot_id: u8, opponent_id: u8) -> Result<Self> {
        Ok(Self {
            bot: Player::from_id(bot_id)?,
            opponent: Player::from_id(opponent_id)?,
            depth: DEFAULT_DEPTH,
        })
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot: Player::B,
            opponent: Player::A,
            depth: DEFAULT_DEPTH,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameStatus {
    Ongoing,
    BotWon,
    OpponentWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// The outcome of one committed bot move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MoveReport {
    pub column: usize,
    pub score: Score,
    pub status: GameStatus,
}

pub struct Game {
    board: Board,
    searcher: Searcher,
}

impl Game {
    /// Starts a game on an empty cube, breaking ties randomly
    pub fn new(config: GameConfig) -> Result<Self> {
        let searcher = Searcher::new(config.bot, config.opponent, config.depth);
        Self::with_searcher(config, searcher)
    }

    pub fn with_searcher(config: GameConfig, searcher: Searcher) -> Result<Self> {
        Ok(Self::from_board(Board::new(config.bot, config.opponent)?, searcher))
    }

    /// Resumes a game from an existing position scored for `board.player()`
    pub fn from_board(board: Board, searcher: Searcher) -> Self {
        Self { board, searcher }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        if has_win(&self.board, self.board.player()) {
            GameStatus::BotWon
        } else if has_win(&self.board, self.board.opponent()) {
            GameStatus::OpponentWon
        } else if self.board.legal_columns().is_empty() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    /// Commits a column received from the opponent
    pub fn opponent_move(&mut self, column: usize) -> Result<GameStatus> {
        let height = self.board.drop_piece(self.board.opponent(), column)?;
        let status = self.status();
        info!(column, height, ?status, "opponent moved");
        Ok(status)
    }

    /// Searches for and commits the bot's reply
    ///
    /// Returns `None` when there is nothing left to play, which ends the game.
    pub fn bot_move(&mut self) -> Result<Option<MoveReport>> {
        let (column, score) = self.searcher.choose_move(&self.board);
        let column = match column {
            Some(column) => column,
            None => {
                info!(status = ?self.status(), "no move available");
                return Ok(None);
            }
        };

        let height = self.board.drop_piece(self.board.player(), column)?;
        let status = self.status();
        info!(
            column,
            height,
            score,
            depth = self.searcher.depth(),
            nodes = self.searcher.node_count,
            ?status,
            "bot moved"
        );
        Ok(Some(MoveReport {
            column,
            score,
            status,
        }))
    }
}
