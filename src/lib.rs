// lib.rs - Library exports for maze-hex-encoder
// Public API for turning drawn ASCII mazes into hex wall-mask encodings

pub mod cell_mapper;
pub mod error_handling;
pub mod manifest;
pub mod maze_file;
pub mod wall_encoding;

// Re-export commonly used types
pub use cell_mapper::{cell_count, char_position, true_position, CharPosition, TruePosition};
pub use error_handling::{EncodeError, Result};
pub use manifest::{
    encode_directory, load_manifest, write_manifest, MazeRecord, DEFAULT_GRID_SIZE,
    DEFAULT_MANIFEST_PATH,
};
pub use maze_file::{encode_file, read_maze_lines};
pub use wall_encoding::{
    encode_cell, encode_maze, wall_mask_at, Strictness, WallMask, SENTINEL_ENCODING,
};
