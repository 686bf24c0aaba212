use thiserror::Error;

/// Errors raised by board access and player setup
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("coordinate ({x}, {y}, {z}) is outside the cube")]
    OutOfBounds { x: usize, y: usize, z: usize },
    #[error("column {0} is out of range, columns must be between 0 and 15")]
    ColumnOutOfRange(usize),
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("unknown player id {0}, expected 0 or 1")]
    UnknownPlayer(u8),
    #[error("player and opponent must be different")]
    IdenticalPlayers,
}

pub type Result<T> = std::result::Result<T, Error>;
