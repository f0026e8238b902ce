// wall_encoding.rs - Per-cell wall masks and the whole-grid encoder

use bitflags::bitflags;
use clap::ValueEnum;
use log::debug;

use crate::cell_mapper::{cell_count, char_position, CharPosition};
use crate::error_handling::{EncodeError, Result};

/// Encoding a maze with a corrupted cell degrades to this value in
/// [`Strictness::Lenient`] mode.
pub const SENTINEL_ENCODING: &str = "0x0";

bitflags! {
    /// Which of a cell's four walls are present. One mask renders as one
    /// lowercase hex digit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WallMask: u8 {
        const NORTH = 0b0001;
        const EAST  = 0b0010;
        const SOUTH = 0b0100;
        const WEST  = 0b1000;
    }
}

impl WallMask {
    /// Renders the mask as its single hex digit (`0`..`f`).
    pub fn hex_digit(self) -> char {
        // Only four bits are defined, so the value always fits one digit.
        char::from_digit(u32::from(self.bits()), 16).expect("mask fits in one hex digit")
    }

    /// Parses one hex digit back into a mask. `None` for non-hex input.
    pub fn from_hex_digit(digit: char) -> Option<Self> {
        let value = digit.to_digit(16)?;
        WallMask::from_bits(value as u8)
    }
}

/// How to treat a cell whose center character is not a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strictness {
    /// Fail the whole operation on the first corrupted cell.
    Strict,
    /// Degrade the whole file's encoding to the `"0x0"` sentinel.
    Lenient,
}

fn char_at(lines: &[String], row: usize, col: usize) -> Option<char> {
    lines.get(row)?.chars().nth(col)
}

/// Reads the four wall glyphs around the cell center at `pos`.
///
/// The center itself must be a space; anything else (including a line too
/// short to reach it) is a grid mismatch. Neighbor positions that fall off
/// the grid or hold any non-wall character simply contribute no wall.
pub fn encode_cell(lines: &[String], pos: CharPosition) -> Result<WallMask> {
    match char_at(lines, pos.row, pos.col) {
        Some(' ') => {}
        found => {
            let found = match found {
                Some(c) => format!("{c:?}"),
                None => "nothing (line too short)".to_string(),
            };
            return Err(EncodeError::GridMismatch {
                row: pos.row,
                col: pos.col,
                found,
            });
        }
    }

    let mut mask = WallMask::empty();
    if pos
        .row
        .checked_sub(1)
        .and_then(|row| char_at(lines, row, pos.col))
        == Some('-')
    {
        mask |= WallMask::NORTH;
    }
    if char_at(lines, pos.row + 1, pos.col) == Some('-') {
        mask |= WallMask::SOUTH;
    }
    if char_at(lines, pos.row, pos.col + 1) == Some('|') {
        mask |= WallMask::EAST;
    }
    if pos
        .col
        .checked_sub(1)
        .and_then(|col| char_at(lines, pos.row, col))
        == Some('|')
    {
        mask |= WallMask::WEST;
    }
    Ok(mask)
}

/// Encodes a right-trimmed maze grid into its `0x`-prefixed hex string, one
/// digit per cell in ascending index order.
pub fn encode_maze(lines: &[String], grid_size: u32, strictness: Strictness) -> Result<String> {
    if grid_size == 0 {
        return Err(EncodeError::ZeroGridSize);
    }

    let count = cell_count(grid_size);
    let mut encoding = String::with_capacity(2 + count as usize);
    encoding.push_str("0x");

    for index in 0..count {
        let pos = char_position(index, grid_size);
        match encode_cell(lines, pos) {
            Ok(mask) => encoding.push(mask.hex_digit()),
            Err(err) => {
                return match strictness {
                    Strictness::Strict => Err(err),
                    Strictness::Lenient => {
                        debug!("degrading encoding to {SENTINEL_ENCODING}: {err}");
                        Ok(SENTINEL_ENCODING.to_string())
                    }
                }
            }
        }
    }
    Ok(encoding)
}

/// Looks up the wall mask of cell `index` inside an existing encoding
/// string. Short or malformed encodings yield the empty mask, so consumers
/// can walk any `0x`-prefixed string without pre-validating it.
pub fn wall_mask_at(encoding: &str, index: u32) -> WallMask {
    encoding
        .chars()
        .nth(index as usize + 2)
        .and_then(WallMask::from_hex_digit)
        .unwrap_or(WallMask::empty())
}
