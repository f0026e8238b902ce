// maze_file.rs - Reading drawn mazes from disk

use std::fs;
use std::path::Path;

use log::debug;

use crate::error_handling::{EncodeError, Result};
use crate::wall_encoding::{encode_maze, Strictness};

/// Reads a maze file into its lines, right-trimmed of trailing whitespace.
pub fn read_maze_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| EncodeError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(|line| line.trim_end().to_string()).collect())
}

/// Encodes one maze file into its `0x`-prefixed hex string.
pub fn encode_file(path: &Path, grid_size: u32, strictness: Strictness) -> Result<String> {
    let lines = read_maze_lines(path)?;
    debug!("read {} lines from {}", lines.len(), path.display());
    encode_maze(&lines, grid_size, strictness)
}
