//! The interactive game: a human plays one side, the automated mover the other.
//!
//! Everything is driven through `BufRead`/`Write`, so a whole session can be scripted.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;

use crate::chess::board::Board;
use crate::chess::config::{load_board, save_board};
use crate::chess::piece::Side;
use crate::core::coord::Coord;
use crate::core::location::{parse_move, LocationError};
use crate::render::board_to_unicode;
use crate::rules::checkmate::{classify, GameOutcome};
use crate::rules::movegen::{can_move_to, move_to, Move};
use crate::search::mover::find_automated_move;

/// Typing this instead of a move (or a file name) stops the session.
pub const QUIT: &str = "QUIT";

/// Why a typed move was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Malformed(#[from] LocationError),

    #[error("no piece on {0:?}")]
    NoPiece(Coord),

    #[error("the piece on {0:?} belongs to the opponent")]
    NotYourPiece(Coord),

    #[error("the piece on {from:?} cannot move to {to:?}")]
    Illegal { from: Coord, to: Coord },
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayEnd {
    Finished(GameOutcome),
    Saved(PathBuf),
    InputClosed,
}

/// Checks a typed move such as `e2e3` for `side` on `board`.
pub fn parse_human_move(board: &Board, side: Side, text: &str) -> Result<Move, MoveError> {
    let (from, to) = parse_move(text)?;
    let piece = board.piece_at(from).ok_or(MoveError::NoPiece(from))?;
    if piece.side != side {
        return Err(MoveError::NotYourPiece(from));
    }
    if !board.contains(to) || !can_move_to(board, piece, to) {
        return Err(MoveError::Illegal { from, to });
    }
    Ok(Move::new(from, to))
}

/// Plays from `board` with White to move until the game ends, the human quits, or input runs out.
pub fn run_play<R, W, G>(
    board: &mut Board,
    human: Side,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> io::Result<PlayEnd>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut to_move = Side::White;
    writeln!(out, "The initial configuration is:")?;

    loop {
        writeln!(out, "{}", board_to_unicode(board))?;

        let outcome = classify(board, to_move);
        match outcome {
            GameOutcome::Ongoing => {}
            GameOutcome::Checkmate { loser } | GameOutcome::KingCaptured { loser } => {
                writeln!(out, "Game over. {} wins.", loser.other())?;
                tracing::debug!(?outcome, "game over");
                return Ok(PlayEnd::Finished(outcome));
            }
            GameOutcome::Stalemate { .. } => {
                writeln!(out, "Game over. Stalemate.")?;
                tracing::debug!(?outcome, "game over");
                return Ok(PlayEnd::Finished(outcome));
            }
        }

        if to_move == human {
            write!(out, "Next move of {to_move}: ")?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(PlayEnd::InputClosed);
            };

            if line == QUIT {
                write!(out, "File name to store the configuration: ")?;
                out.flush()?;
                let Some(name) = read_line(input)? else {
                    return Ok(PlayEnd::InputClosed);
                };
                let path = PathBuf::from(name);
                match save_board(&path, board) {
                    Ok(()) => {
                        writeln!(out, "The game configuration saved")?;
                        return Ok(PlayEnd::Saved(path));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "could not save the configuration");
                        writeln!(out, "The game configuration could not be saved.")?;
                        continue;
                    }
                }
            }

            match parse_human_move(board, to_move, &line) {
                Ok(mv) => {
                    tracing::debug!(side = %to_move, mv = %mv.notation(), "human move");
                    move_to(board, mv.from, mv.to);
                    writeln!(out, "The configuration after {to_move}'s move is:")?;
                    to_move = to_move.other();
                }
                Err(e) => {
                    tracing::debug!(input = %line, error = %e, "rejected move");
                    writeln!(out, "This is not a valid move.")?;
                }
            }
        } else {
            // `classify` returned Ongoing, so the mover has at least one legal move.
            let Some(mv) = find_automated_move(board, to_move, rng) else {
                tracing::warn!(side = %to_move, "automated side found no move");
                writeln!(out, "Game over. Stalemate.")?;
                return Ok(PlayEnd::Finished(GameOutcome::Stalemate { side: to_move }));
            };
            writeln!(out, "Next move of {to_move} is {}.", mv.notation())?;
            move_to(board, mv.from, mv.to);
            writeln!(out, "The configuration after {to_move}'s move is:")?;
            to_move = to_move.other();
        }
    }
}

/// Asks for a configuration file until one loads. `None` if the user quits or input runs out.
pub fn prompt_for_board<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<Board>> {
    loop {
        write!(out, "File name for initial configuration: ")?;
        out.flush()?;
        let Some(name) = read_line(input)? else {
            return Ok(None);
        };
        if name == QUIT {
            return Ok(None);
        }
        match load_board(Path::new(&name)) {
            Ok(board) => return Ok(Some(board)),
            Err(_) => writeln!(out, "This is not a valid file.")?,
        }
    }
}

/// Next input line without its line ending; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
