//! Plain board configurations.
//!
//! A configuration is three lines:
//!
//! ```text
//! 5
//! Kd5, Ba5, Bb4
//! Kb1
//! ```
//!
//! the board size, then White's pieces, then Black's. Each token is a kind letter
//! (`K` or `B`) followed by a location. Anything after the third line other than
//! blank lines makes the file invalid.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::chess::board::Board;
use crate::chess::piece::{Piece, PieceKind, Side};
use crate::core::coord::Coord;
use crate::core::location::{index_to_location, location_to_index, LocationError, MAX_COLUMNS};

/// Why a configuration could not be turned into a [`Board`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size {0} is outside 1..=26")]
    SizeOutOfRange(i32),

    #[error("invalid size line {0:?}")]
    InvalidSize(String),

    #[error("missing {0} line")]
    MissingLine(&'static str),

    #[error("invalid piece token {0:?}")]
    InvalidToken(String),

    #[error("invalid location in {token:?}: {source}")]
    InvalidLocation {
        token: String,
        #[source]
        source: LocationError,
    },

    #[error("piece at {at:?} is outside a board of size {size}")]
    OutOfBounds { at: Coord, size: i32 },

    #[error("two pieces share the square {0:?}")]
    DuplicateSquare(Coord),

    #[error("{side} has {kings} kings, expected exactly one")]
    KingCount { side: Side, kings: usize },

    #[error("unexpected data after the black pieces: {0:?}")]
    TrailingData(String),

    #[error("i/o error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: IoFailure,
    },
}

/// A shared `io::Error`, so [`BoardError`] stays `Clone` and comparable.
///
/// Two failures compare equal when their [`io::ErrorKind`] does.
#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct IoFailure(Arc<io::Error>);

impl IoFailure {
    pub fn kind(&self) -> io::ErrorKind {
        self.0.kind()
    }
}

impl From<io::Error> for IoFailure {
    fn from(e: io::Error) -> Self {
        Self(Arc::new(e))
    }
}

impl PartialEq for IoFailure {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }
}

impl Eq for IoFailure {}

/// One entry of a side's piece list: a kind and the square it stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSpec {
    pub kind: PieceKind,
    pub at: Coord,
}

impl PieceSpec {
    pub fn new(kind: PieceKind, at: Coord) -> Self {
        Self { kind, at }
    }

    /// Parses a token such as `Kd5`.
    pub fn parse(token: &str) -> Result<Self, BoardError> {
        let mut chars = token.chars();
        let kind = chars
            .next()
            .and_then(PieceKind::from_letter)
            .ok_or_else(|| BoardError::InvalidToken(token.to_string()))?;
        let at = location_to_index(chars.as_str()).map_err(|source| BoardError::InvalidLocation {
            token: token.to_string(),
            source,
        })?;
        Ok(Self { kind, at })
    }

    fn into_piece(self, side: Side) -> Piece {
        Piece::new(self.kind, side, self.at.x, self.at.y)
    }
}

impl Board {
    /// Builds a board from per-side piece lists; White's pieces come first in collection order.
    pub fn from_specs(
        size: i32,
        whites: &[PieceSpec],
        blacks: &[PieceSpec],
    ) -> Result<Board, BoardError> {
        let pieces = whites
            .iter()
            .map(|s| s.into_piece(Side::White))
            .chain(blacks.iter().map(|s| s.into_piece(Side::Black)))
            .collect();
        Board::new(size, pieces)
    }
}

/// Parses a configuration from its text form.
pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let mut lines = text.lines();

    let size_line = lines.next().ok_or(BoardError::MissingLine("size"))?.trim();
    let size: i32 = size_line
        .parse()
        .map_err(|_| BoardError::InvalidSize(size_line.to_string()))?;
    if !(1..=MAX_COLUMNS).contains(&size) {
        return Err(BoardError::SizeOutOfRange(size));
    }

    let whites = parse_side(lines.next().ok_or(BoardError::MissingLine("white"))?)?;
    let blacks = parse_side(lines.next().ok_or(BoardError::MissingLine("black"))?)?;

    if let Some(extra) = lines.find(|l| !l.trim().is_empty()) {
        return Err(BoardError::TrailingData(extra.trim().to_string()));
    }

    Board::from_specs(size, &whites, &blacks)
}

fn parse_side(line: &str) -> Result<Vec<PieceSpec>, BoardError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }
    line.split(',').map(|t| PieceSpec::parse(t.trim())).collect()
}

/// Serializes a board into the text form read by [`parse_board`].
///
/// Within each side kings are listed before bishops; otherwise collection order is kept.
pub fn board_to_string(board: &Board) -> String {
    format!(
        "{}\n{}\n{}\n",
        board.size(),
        side_line(board, Side::White),
        side_line(board, Side::Black)
    )
}

fn side_line(board: &Board, side: Side) -> String {
    let mut tokens = Vec::new();
    for kind in PieceKind::ALL {
        tokens.extend(
            board
                .pieces_of(side)
                .filter(|p| p.kind == kind)
                .map(piece_token),
        );
    }
    tokens.join(", ")
}

fn piece_token(p: &Piece) -> String {
    // Pieces on a board built by `Board::new` always have a valid location.
    let loc = index_to_location(p.at()).unwrap_or_default();
    format!("{}{}", p.kind.letter(), loc)
}

/// Reads and validates a configuration file.
pub fn load_board(path: &Path) -> Result<Board, BoardError> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    match parse_board(&text) {
        Ok(board) => {
            tracing::info!(
                path = %path.display(),
                size = board.size(),
                pieces = board.pieces().len(),
                "loaded board"
            );
            Ok(board)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "rejected board configuration");
            Err(e)
        }
    }
}

fn io_error(path: &Path, e: io::Error) -> BoardError {
    BoardError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    }
}

/// Writes a board in the plain configuration format, replacing any existing file.
pub fn save_board(path: &Path, board: &Board) -> Result<(), BoardError> {
    fs::write(path, board_to_string(board)).map_err(|e| io_error(path, e))?;
    tracing::info!(path = %path.display(), "saved board");
    Ok(())
}
