use crate::chess::board::Board;

const EMPTY: char = ' ';

/// Draws `board` as rows of glyphs, top row (`y == size`) first.
///
/// Cells are separated by one space; empty squares are a blank.
pub fn board_to_unicode(board: &Board) -> String {
    let size = board.size() as usize;
    let mut grid: Vec<Vec<char>> = vec![vec![EMPTY; size]; size];

    for p in board.pieces() {
        let gx = (p.x - 1) as usize;
        let gy = (board.size() - p.y) as usize;
        grid[gy][gx] = p.symbol();
    }

    grid.into_iter()
        .map(|row| {
            row.into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
