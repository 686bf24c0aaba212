//! Win detection and static evaluation over the 76 lines of the cube

use crate::{
    board::{Board, Cell, Player},
    lines::{Line, LINES},
    LINE_LENGTH,
};

/// Search scores; wins and losses are represented by the infinities
pub type Score = i64;

/// A decided win for the bot
pub const INFINITY: Score = Score::MAX;
/// A decided loss for the bot, kept symmetric with `INFINITY` so it can be negated
pub const NEG_INFINITY: Score = -Score::MAX;

/// Bonus for a line completely owned by the scored player
pub const WIN_SCORE: Score = 1_010_000;
/// Bonus for 3 own pieces and one empty cell
pub const THREE_SCORE: Score = 5;
/// Bonus for 2 own pieces and two empty cells
pub const TWO_SCORE: Score = 2;
/// Penalty for 3 opponent pieces and one empty cell
pub const OPPONENT_THREE_PENALTY: Score = 4;

/// Reads the current contents of a line
pub fn line_cells(board: &Board, line: &Line) -> [Cell; LINE_LENGTH] {
    let mut cells = [Cell::Empty; LINE_LENGTH];
    for (cell, &coord) in cells.iter_mut().zip(line.iter()) {
        *cell = board.cell(coord);
    }
    cells
}

pub fn is_winning_line(cells: &[Cell; LINE_LENGTH], player: Player) -> bool {
    let own = Cell::from(player);
    cells.iter().all(|&cell| cell == own)
}

/// Whether any line through the cube is filled by `player`
pub fn has_win(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| is_winning_line(&line_cells(board, line), player))
}

/// Heuristic value of a single line from the point of view of `player`
///
/// The 3-piece and 2-piece bonuses exclude each other. The opponent's
/// 3-piece penalty is applied independently of both.
pub fn score_line(cells: &[Cell; LINE_LENGTH], player: Player) -> Score {
    let own = Cell::from(player);
    let other = Cell::from(player.opponent());
    let count = |target: Cell| cells.iter().filter(|&&cell| cell == target).count();

    let own_count = count(own);
    let empty_count = count(Cell::Empty);
    let mut score = 0;

    if own_count == 4 {
        score += WIN_SCORE;
    }
    if own_count == 3 && empty_count == 1 {
        score += THREE_SCORE;
    } else if own_count == 2 && empty_count == 2 {
        score += TWO_SCORE;
    }
    if count(other) == 3 && empty_count == 1 {
        score -= OPPONENT_THREE_PENALTY;
    }
    score
}

/// Static evaluation of the whole cube for a fixed perspective
pub fn board_score(board: &Board, player: Player) -> Score {
    LINES
        .iter()
        .map(|line| score_line(&line_cells(board, line), player))
        .sum()
}
