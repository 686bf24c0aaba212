use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use tracing::warn;

use std::io::{stdout, Write};

use crate::{Error, Result, CELLS, COLUMNS, SIZE};

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Maps a raw player id as used by the opponent process (`0` or `1`)
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Player::A),
            1 => Ok(Player::B),
            _ => Err(Error::UnknownPlayer(id)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    PlayerA,
    PlayerB,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }
}

/// A cell position inside the cube, `z` being the height
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    pub const fn in_bounds(&self) -> bool {
        self.x < SIZE && self.y < SIZE && self.z < SIZE
    }

    const fn offset(&self) -> usize {
        self.z * SIZE * SIZE + self.y * SIZE + self.x
    }
}

/// Converts a column index into its `(x, y)` position on the footprint
pub const fn column_to_xy(column: usize) -> (usize, usize) {
    (column % SIZE, column / SIZE)
}

/// The 4x4x4 game cube
///
/// The board remembers which player it is scored for (`player`) and who
/// plays against it (`opponent`). Cells only ever change through
/// [`Board::drop_piece`], so every stack is filled bottom-up without gaps.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; CELLS], // cells are stored x first, then y, then bottom-to-top
    player: Player,
    opponent: Player,
}

impl Board {
    pub fn new(player: Player, opponent: Player) -> Result<Self> {
        if player == opponent {
            return Err(Error::IdenticalPlayers);
        }
        Ok(Self {
            cells: [Cell::Empty; CELLS],
            player,
            opponent,
        })
    }

    /// Builds a position from a string of hexadecimal column digits,
    /// alternating pieces starting with `player`
    pub fn from_moves<S: AsRef<str>>(
        player: Player,
        opponent: Player,
        moves: S,
    ) -> anyhow::Result<Self> {
        let mut board = Self::new(player, opponent)?;
        let mut turn = player;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(16) {
                Some(column) => {
                    board.drop_piece(turn, column as usize)?;
                    turn = turn.opponent();
                }
                None => anyhow::bail!("could not parse '{}' as a valid move", column_char),
            }
        }
        Ok(board)
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn opponent(&self) -> Player {
        self.opponent
    }

    pub fn get_cell(&self, x: usize, y: usize, z: usize) -> Result<Cell> {
        let coord = Coord::new(x, y, z);
        if !coord.in_bounds() {
            return Err(Error::OutOfBounds { x, y, z });
        }
        Ok(self.cell(coord))
    }

    // callers guarantee `coord` is inside the cube
    pub(crate) fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.offset()]
    }

    /// Drops a piece into a column, returning the height it landed at
    pub fn drop_piece(&mut self, player: Player, column: usize) -> Result<usize> {
        if column >= COLUMNS {
            return Err(Error::ColumnOutOfRange(column));
        }
        let (x, y) = column_to_xy(column);
        for z in 0..SIZE {
            let offset = Coord::new(x, y, z).offset();
            if self.cells[offset].is_empty() {
                self.cells[offset] = player.into();
                return Ok(z);
            }
        }
        warn!(column, "stack is full, piece not dropped");
        Err(Error::ColumnFull(column))
    }

    /// The number of pieces stacked in a column
    pub fn column_height(&self, column: usize) -> usize {
        if column >= COLUMNS {
            return 0;
        }
        let (x, y) = column_to_xy(column);
        (0..SIZE)
            .take_while(|&z| !self.cell(Coord::new(x, y, z)).is_empty())
            .count()
    }

    /// Whether the top cell of a column is taken; out-of-range columns
    /// can never be played so they count as full
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLUMNS {
            return true;
        }
        let (x, y) = column_to_xy(column);
        !self.cell(Coord::new(x, y, SIZE - 1)).is_empty()
    }

    /// Playable columns in ascending order, empty once the cube is full
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLUMNS)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    pub fn count_full_columns(&self) -> usize {
        (0..COLUMNS)
            .filter(|&column| self.is_column_full(column))
            .count()
    }

    pub fn piece_count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Prints every `y` row with the four height layers side by side
    pub fn display(&self) -> anyhow::Result<()> {
        let mut stdout = stdout();
        let own = Cell::from(self.player);
        let other = Cell::from(self.opponent);

        stdout.queue(PrintStyledContent(style("Board:\n")))?;
        for y in 0..SIZE {
            for z in 0..SIZE {
                for x in 0..SIZE {
                    let cell = self.cell(Coord::new(x, y, z));
                    let (symbol, color) = if cell == own {
                        ("0", Color::Green)
                    } else if cell == other {
                        ("1", Color::Blue)
                    } else {
                        ("-", Color::White)
                    };
                    stdout
                        .queue(PrintStyledContent(
                            style(symbol).attribute(Attribute::Bold).with(color),
                        ))?
                        .queue(PrintStyledContent(style(" ")))?;
                }
                stdout.queue(PrintStyledContent(style("    ")))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
