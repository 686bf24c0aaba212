//! Turn exchange with the opponent process
//!
//! The opponent and the bot share a single text file. The opponent writes
//! `start` to let the bot open, `<c` after dropping into column `c`, and
//! `end` to stop the session; the bot answers with `>c`.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::game::{Game, GameStatus};
use crate::Error;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Message {
    /// The bot makes the first move
    Start,
    /// The session is over
    End,
    /// The opponent dropped a piece into this column
    OpponentMove(usize),
}

impl Message {
    /// Parses one line of the shared file, ignoring anything unrecognised
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "start" => Some(Message::Start),
            "end" => Some(Message::End),
            line => line
                .strip_prefix('<')
                .and_then(|column| column.trim().parse().ok())
                .map(Message::OpponentMove),
        }
    }
}

/// A request/response channel to the opponent
pub trait Transport {
    /// Polls for the next message, `None` if there is nothing new
    fn receive(&mut self) -> Result<Option<Message>>;

    fn send(&mut self, column: usize) -> Result<()>;

    /// Waits before the next poll after an empty `receive`
    fn idle(&mut self) {}
}

/// The polled shared file used by the opponent process
pub struct FileTransport {
    path: PathBuf,
    poll_interval: Duration,
}

impl FileTransport {
    pub fn new<P: Into<PathBuf>>(path: P, poll_interval: Duration) -> Self {
        Self {
            path: path.into(),
            poll_interval,
        }
    }
}

impl Transport for FileTransport {
    fn receive(&mut self) -> Result<Option<Message>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };
        Ok(contents.lines().next().and_then(Message::parse))
    }

    fn send(&mut self, column: usize) -> Result<()> {
        fs::write(&self.path, format!(">{}", column))
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    fn idle(&mut self) {
        thread::sleep(self.poll_interval);
    }
}

/// Plays moves through `transport` until the session or the game ends
pub fn run_session<T: Transport>(game: &mut Game, transport: &mut T) -> Result<GameStatus> {
    loop {
        let message = match transport.receive()? {
            Some(message) => message,
            None => {
                transport.idle();
                continue;
            }
        };
        debug!(?message, "received");

        match message {
            Message::End => {
                info!("session ended by opponent");
                return Ok(game.status());
            }
            Message::OpponentMove(column) => {
                println!("Enemy move: {}", column);
                match game.opponent_move(column) {
                    Ok(status) if status.is_over() => return Ok(status),
                    Ok(_) => {}
                    // an unplayable column leaves the board as it was, the bot still replies
                    Err(err @ Error::ColumnFull(_)) | Err(err @ Error::ColumnOutOfRange(_)) => {
                        warn!(column, %err, "ignoring opponent move");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Message::Start => {}
        }

        match game.bot_move()? {
            Some(report) => {
                println!("Bot move: {}", report.column);
                transport.send(report.column)?;
                if report.status.is_over() {
                    return Ok(report.status);
                }
            }
            None => {
                println!("Game over");
                return Ok(game.status());
            }
        }
    }
}
