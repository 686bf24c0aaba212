//! The fixed set of straight 4-cell lines through the cube

use crate::{board::Coord, LINE_LENGTH, NUM_LINES, SIZE};

/// Four cells forming a straight line through the cube
pub type Line = [Coord; LINE_LENGTH];

/// Every winning line, grouped by family: rows along x, rows along y,
/// vertical stacks, diagonals in the xz, yz and xy planes, and the four
/// space diagonals between opposite corners
pub const LINES: [Line; NUM_LINES] = generate_lines();

const fn generate_lines() -> [Line; NUM_LINES] {
    let mut lines = [[Coord::new(0, 0, 0); LINE_LENGTH]; NUM_LINES];
    let mut n = 0;

    // axis-aligned rows, two coordinates fixed
    let mut a = 0;
    while a < SIZE {
        let mut b = 0;
        while b < SIZE {
            let mut i = 0;
            while i < SIZE {
                lines[n][i] = Coord::new(i, b, a);
                lines[n + SIZE * SIZE][i] = Coord::new(b, i, a);
                lines[n + 2 * SIZE * SIZE][i] = Coord::new(b, a, i);
                i += 1;
            }
            n += 1;
            b += 1;
        }
        a += 1;
    }
    n += 2 * SIZE * SIZE;

    // planar diagonals, one coordinate fixed
    let mut fixed = 0;
    while fixed < SIZE {
        let mut i = 0;
        while i < SIZE {
            let rev = SIZE - 1 - i;
            // xz plane
            lines[n][i] = Coord::new(i, fixed, i);
            lines[n + 1][i] = Coord::new(i, fixed, rev);
            // yz plane
            lines[n + 2 * SIZE][i] = Coord::new(fixed, i, i);
            lines[n + 2 * SIZE + 1][i] = Coord::new(fixed, i, rev);
            // xy plane
            lines[n + 4 * SIZE][i] = Coord::new(i, i, fixed);
            lines[n + 4 * SIZE + 1][i] = Coord::new(i, rev, fixed);
            i += 1;
        }
        n += 2;
        fixed += 1;
    }
    n += 4 * SIZE;

    // space diagonals
    let mut i = 0;
    while i < SIZE {
        let rev = SIZE - 1 - i;
        lines[n][i] = Coord::new(i, i, i);
        lines[n + 1][i] = Coord::new(i, i, rev);
        lines[n + 2][i] = Coord::new(i, rev, i);
        lines[n + 3][i] = Coord::new(rev, i, i);
        i += 1;
    }

    lines
}
