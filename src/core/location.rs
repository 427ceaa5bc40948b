//! Text locations (`a1`, `z26`) and their index form.

use thiserror::Error;

use crate::core::coord::Coord;

/// Largest column (and board size) the letter notation can express.
pub const MAX_COLUMNS: i32 = 26;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("empty location")]
    Empty,

    #[error("invalid column {0:?}, expected a letter between 'a' and 'z'")]
    InvalidColumn(char),

    #[error("invalid row {0:?}, expected a positive integer")]
    InvalidRow(String),

    #[error("column index {0} is outside 1..=26")]
    ColumnOutOfRange(i32),

    #[error("row index {0} must be at least 1")]
    RowOutOfRange(i32),

    #[error("invalid move {0:?}, expected two locations such as e2e4")]
    InvalidMove(String),
}

/// Converts a location such as `e7` into `(5, 7)`.
pub fn location_to_index(loc: &str) -> Result<Coord, LocationError> {
    let mut chars = loc.chars();
    let column = chars.next().ok_or(LocationError::Empty)?;
    if !column.is_ascii_lowercase() {
        return Err(LocationError::InvalidColumn(column));
    }
    let rest = chars.as_str();
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LocationError::InvalidRow(rest.to_string()));
    }
    let row: i32 = rest
        .parse()
        .map_err(|_| LocationError::InvalidRow(rest.to_string()))?;
    if row < 1 {
        return Err(LocationError::InvalidRow(rest.to_string()));
    }
    Ok(Coord::new((column as u8 - b'a') as i32 + 1, row))
}

/// Converts `(5, 7)` back into `e7`.
pub fn index_to_location(at: Coord) -> Result<String, LocationError> {
    if !(1..=MAX_COLUMNS).contains(&at.x) {
        return Err(LocationError::ColumnOutOfRange(at.x));
    }
    if at.y < 1 {
        return Err(LocationError::RowOutOfRange(at.y));
    }
    let column = (b'a' + (at.x - 1) as u8) as char;
    Ok(format!("{column}{}", at.y))
}

/// Splits a move such as `e2e4` or `a9a10` into its origin and destination.
///
/// The destination starts at the second letter, so rows of any width work.
pub fn parse_move(text: &str) -> Result<(Coord, Coord), LocationError> {
    let text = text.trim();
    let invalid = || LocationError::InvalidMove(text.to_string());

    let split = text
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .ok_or_else(invalid)?;

    let from = location_to_index(&text[..split]).map_err(|_| invalid())?;
    let to = location_to_index(&text[split..]).map_err(|_| invalid())?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_locations() {
        assert_eq!(location_to_index("a26"), Ok(Coord::new(1, 26)));
        assert_eq!(location_to_index("z1"), Ok(Coord::new(26, 1)));
        assert_eq!(location_to_index("a1"), Ok(Coord::new(1, 1)));
        assert_eq!(location_to_index("z26"), Ok(Coord::new(26, 26)));
        assert_eq!(location_to_index("e7"), Ok(Coord::new(5, 7)));
        assert_eq!(location_to_index("e2"), Ok(Coord::new(5, 2)));

        assert_eq!(index_to_location(Coord::new(1, 26)).as_deref(), Ok("a26"));
        assert_eq!(index_to_location(Coord::new(26, 1)).as_deref(), Ok("z1"));
        assert_eq!(index_to_location(Coord::new(5, 7)).as_deref(), Ok("e7"));
    }

    #[test]
    fn every_column_and_row_round_trips() {
        for column in 'a'..='z' {
            for row in 1..=26 {
                let loc = format!("{column}{row}");
                let idx = location_to_index(&loc).unwrap();
                assert_eq!(index_to_location(idx).unwrap(), loc);
            }
        }
    }

    #[test]
    fn rejects_malformed_locations() {
        assert_eq!(location_to_index(""), Err(LocationError::Empty));
        assert_eq!(location_to_index("A1"), Err(LocationError::InvalidColumn('A')));
        assert!(matches!(location_to_index("a"), Err(LocationError::InvalidRow(_))));
        assert!(matches!(location_to_index("a0"), Err(LocationError::InvalidRow(_))));
        assert!(matches!(location_to_index("a-1"), Err(LocationError::InvalidRow(_))));
        assert!(matches!(location_to_index("ab"), Err(LocationError::InvalidRow(_))));
        assert_eq!(
            index_to_location(Coord::new(27, 1)),
            Err(LocationError::ColumnOutOfRange(27))
        );
        assert_eq!(
            index_to_location(Coord::new(0, 1)),
            Err(LocationError::ColumnOutOfRange(0))
        );
    }

    #[test]
    fn moves_split_on_the_second_letter() {
        assert_eq!(
            parse_move("e2e3"),
            Ok((Coord::new(5, 2), Coord::new(5, 3)))
        );
        assert_eq!(
            parse_move("a9a10"),
            Ok((Coord::new(1, 9), Coord::new(1, 10)))
        );
        assert_eq!(
            parse_move(" z26y25\n"),
            Ok((Coord::new(26, 26), Coord::new(25, 25)))
        );
        assert!(parse_move("e2").is_err());
        assert!(parse_move("e2e").is_err());
        assert!(parse_move("22e3").is_err());
        assert!(parse_move("").is_err());
    }
}
