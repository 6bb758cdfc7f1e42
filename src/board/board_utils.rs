//! Square geometry shared by every generator.
//!
//! Squares are row-major indices `0..64` with row 0 at the top (Black's back
//! rank), so `0 == a8` and `63 == h1`. Offsets step along that index and
//! must be paired with the file tables below to avoid wrapping onto the
//! neighbouring rank.

use crate::errors::{ChessError, ChessResult};

/// Board square index (`0..=63`).
pub type Square = u8;

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

pub const A_FILE: [bool; NUM_TILES] = file_table(0);
pub const B_FILE: [bool; NUM_TILES] = file_table(1);
pub const G_FILE: [bool; NUM_TILES] = file_table(6);
pub const H_FILE: [bool; NUM_TILES] = file_table(7);

/// Row 0: where White pawns promote.
pub const EIGHTH_RANK: [bool; NUM_TILES] = row_table(0);
/// Row 1: Black pawns' starting rank.
pub const SEVENTH_RANK: [bool; NUM_TILES] = row_table(1);
/// Row 6: White pawns' starting rank.
pub const SECOND_RANK: [bool; NUM_TILES] = row_table(6);
/// Row 7: where Black pawns promote.
pub const FIRST_RANK: [bool; NUM_TILES] = row_table(7);

const fn file_table(file: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut sq = 0usize;
    while sq < NUM_TILES {
        table[sq] = sq % NUM_TILES_PER_ROW == file;
        sq += 1;
    }
    table
}

const fn row_table(row: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut sq = 0usize;
    while sq < NUM_TILES {
        table[sq] = sq / NUM_TILES_PER_ROW == row;
        sq += 1;
    }
    table
}

#[inline]
pub fn is_valid_tile_coordinate(coordinate: i16) -> bool {
    (0..NUM_TILES as i16).contains(&coordinate)
}

/// Step `square` by `offset`, or `None` when the result leaves the board.
///
/// This only checks the index range; file wrap is the caller's concern.
#[inline]
pub fn offset_square(square: Square, offset: i8) -> Option<Square> {
    let candidate = square as i16 + offset as i16;
    if is_valid_tile_coordinate(candidate) {
        Some(candidate as Square)
    } else {
        None
    }
}

/// Validate an externally supplied index.
pub fn checked_square(coordinate: i16) -> ChessResult<Square> {
    if is_valid_tile_coordinate(coordinate) {
        Ok(coordinate as Square)
    } else {
        Err(ChessError::InvalidSquare(coordinate))
    }
}

/// Convert algebraic notation (for example: "e4") to a square index.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let row = b'8' - rank;
    Ok(row * NUM_TILES_PER_ROW as u8 + (file - b'a'))
}

/// Convert a square index to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file = square % NUM_TILES_PER_ROW as u8;
    let row = square / NUM_TILES_PER_ROW as u8;
    let file_char = char::from(b'a' + file);
    let rank_char = char::from(b'8' - row);
    format!("{file_char}{rank_char}")
}
