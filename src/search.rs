//! A depth-limited game tree search for the cube

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{
    board::{Board, Player},
    evaluation::{board_score, has_win, Score, INFINITY, NEG_INFINITY},
};

/// The order in which sibling columns are explored
///
/// Only the first of several equally scored columns is ever chosen, so the
/// order decides ties and nothing else.
#[derive(Clone, Debug)]
pub enum ColumnOrder {
    /// Uniformly shuffled at every node
    Shuffled(ChaCha8Rng),
    /// Ascending column index
    Ascending,
}

impl ColumnOrder {
    fn arrange(&mut self, columns: &mut [usize]) {
        match self {
            ColumnOrder::Shuffled(rng) => columns.shuffle(rng),
            ColumnOrder::Ascending => columns.sort_unstable(),
        }
    }
}

/// A minimax agent with alpha-beta pruning and a fixed search depth
///
/// # Notes
/// Every node re-scans the whole cube for wins and works on its own clone
/// of the board, so sibling branches never share state. Leaf positions are
/// always scored from the bot's perspective, never the side to move.
#[derive(Clone, Debug)]
pub struct Searcher {
    bot: Player,
    opponent: Player,
    depth: u32,
    order: ColumnOrder,

    /// The number of nodes visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a `Searcher` that breaks ties with an entropy-seeded shuffle
    pub fn new(bot: Player, opponent: Player, depth: u32) -> Self {
        Self::with_order(bot, opponent, depth, ColumnOrder::Shuffled(ChaCha8Rng::from_entropy()))
    }

    /// Creates a `Searcher` with reproducible tie-breaks
    pub fn with_seed(bot: Player, opponent: Player, depth: u32, seed: u64) -> Self {
        Self::with_order(bot, opponent, depth, ColumnOrder::Shuffled(ChaCha8Rng::seed_from_u64(seed)))
    }

    pub fn with_order(bot: Player, opponent: Player, depth: u32, order: ColumnOrder) -> Self {
        Self {
            bot,
            opponent,
            depth,
            order,
            node_count: 0,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Picks the bot's next column and its backed-up score
    ///
    /// The root node is searched as a minimising node, so the first ply
    /// drops the opponent's pieces. The evaluation weights are tuned
    /// against this orientation. Returns no column when the game is
    /// already decided or the cube is full.
    pub fn choose_move(&mut self, board: &Board) -> (Option<usize>, Score) {
        self.node_count = 0;
        let (column, score) = self.minimax(board, self.depth, NEG_INFINITY, INFINITY, false);
        debug!(?column, score, nodes = self.node_count, "search finished");
        (column, score)
    }

    /// Searches `depth` plies below `board` within the `(alpha, beta)` window
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Option<usize>, Score) {
        self.node_count += 1;

        if has_win(board, self.bot) {
            return (None, INFINITY);
        }
        if has_win(board, self.opponent) {
            return (None, NEG_INFINITY);
        }

        let mut columns = board.legal_columns();
        if columns.is_empty() {
            return (None, 0);
        }
        if depth == 0 {
            return (None, board_score(board, self.bot));
        }

        self.order.arrange(&mut columns);

        let mover = if maximizing { self.bot } else { self.opponent };
        let mut best_column = columns[0];
        let mut best_score = if maximizing { NEG_INFINITY } else { INFINITY };

        for &column in columns.iter() {
            let mut next = board.clone();
            if next.drop_piece(mover, column).is_err() {
                continue;
            }

            let (_, score) = self.minimax(&next, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = column;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = column;
                }
                beta = beta.min(best_score);
            }

            // the remaining siblings cannot change the result
            if alpha >= beta {
                break;
            }
        }

        (Some(best_column), best_score)
    }
}
