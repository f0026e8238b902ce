// manifest.rs - Batch directory encoding and the previous-mazes manifest

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error_handling::{EncodeError, Result};
use crate::maze_file::encode_file;
use crate::wall_encoding::{Strictness, SENTINEL_ENCODING};

/// Where batch runs drop the manifest unless told otherwise.
pub const DEFAULT_MANIFEST_PATH: &str = "resources/previous_mazes.json";

/// Batch grid size when none is given.
pub const DEFAULT_GRID_SIZE: u32 = 16;

/// One encoded maze in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeRecord {
    pub name: String,
    pub size: u32,
    pub encoding: String,
}

impl Default for MazeRecord {
    fn default() -> Self {
        Self {
            name: "Default Maze".to_string(),
            size: DEFAULT_GRID_SIZE,
            encoding: SENTINEL_ENCODING.to_string(),
        }
    }
}

/// Encodes every entry of `dir` as a maze file with one shared grid size.
///
/// Entries are visited in the order the filesystem yields them; pass
/// `sorted` to order them by file name instead, which makes the manifest
/// stable across runs. There is no extension filtering: a non-maze file
/// fails (or degrades to the sentinel under [`Strictness::Lenient`]), and an
/// unreadable entry aborts the whole batch.
pub fn encode_directory(
    dir: &Path,
    grid_size: u32,
    strictness: Strictness,
    sorted: bool,
) -> Result<Vec<MazeRecord>> {
    let read_err = |source| EncodeError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        paths.push(entry.map_err(read_err)?.path());
    }
    if sorted {
        paths.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));
    }

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let encoding = encode_file(&path, grid_size, strictness)?;
        info!("encoded {name} -> {} digits", encoding.len().saturating_sub(2));
        records.push(MazeRecord {
            name,
            size: grid_size,
            encoding,
        });
    }
    Ok(records)
}

/// Serializes the records as one JSON array, written in a single shot.
pub fn write_manifest(records: &[MazeRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string(records).map_err(|source| EncodeError::ManifestJson {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| EncodeError::ManifestWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, json).map_err(|source| EncodeError::ManifestWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a manifest back into its records.
pub fn load_manifest(path: &Path) -> Result<Vec<MazeRecord>> {
    let text = fs::read_to_string(path).map_err(|source| EncodeError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| EncodeError::ManifestJson {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTER_ONLY_2X2: &str = " - - \n|   |\n     \n|   |\n - - \n";
    const CORRUPTED_2X2: &str = " - - \n|   |\n     \n|X  |\n - - \n";

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "maze_hex_encoder_{tag}_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn manifest_json_shape_is_flat_objects() {
        let record = MazeRecord {
            name: "a.maze".to_string(),
            size: 2,
            encoding: "0xc3".to_string(),
        };
        let json = serde_json::to_string(&[record]).unwrap();
        assert_eq!(json, r#"[{"name":"a.maze","size":2,"encoding":"0xc3"}]"#);
    }

    #[test]
    fn default_record_is_the_sentinel() {
        let record = MazeRecord::default();
        assert_eq!(record.name, "Default Maze");
        assert_eq!(record.size, 16);
        assert_eq!(record.encoding, "0x0");
    }

    #[test]
    fn sorted_batch_orders_by_file_name() {
        let dir = scratch_dir("sorted_batch");
        fs::write(dir.join("b.maze"), OUTER_ONLY_2X2).unwrap();
        fs::write(dir.join("a.maze"), OUTER_ONLY_2X2).unwrap();

        let records = encode_directory(&dir, 2, Strictness::Strict, true).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a.maze", "b.maze"]);
        assert!(records.iter().all(|r| r.encoding == "0xc3" && r.size == 2));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn lenient_batch_keeps_bad_files_as_sentinel() {
        let dir = scratch_dir("lenient_batch");
        fs::write(dir.join("bad.maze"), CORRUPTED_2X2).unwrap();
        fs::write(dir.join("good.maze"), OUTER_ONLY_2X2).unwrap();

        let records = encode_directory(&dir, 2, Strictness::Lenient, true).unwrap();
        let encodings: Vec<&str> = records.iter().map(|r| r.encoding.as_str()).collect();
        assert_eq!(encodings, ["0x0", "0xc3"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn strict_batch_aborts_on_bad_file() {
        let dir = scratch_dir("strict_batch");
        fs::write(dir.join("bad.maze"), CORRUPTED_2X2).unwrap();

        let err = encode_directory(&dir, 2, Strictness::Strict, true).unwrap_err();
        assert!(err.is_grid_mismatch());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_entry_aborts_the_batch() {
        let dir = scratch_dir("nested_batch");
        fs::create_dir_all(dir.join("subdir")).unwrap();

        let err = encode_directory(&dir, 2, Strictness::Strict, true).unwrap_err();
        assert!(matches!(err, EncodeError::FileOpen { .. }));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn manifest_round_trips_through_disk() {
        let dir = scratch_dir("round_trip");
        let path = dir.join("previous_mazes.json");
        let records = vec![
            MazeRecord {
                name: "first.maze".to_string(),
                size: 16,
                encoding: "0xff".to_string(),
            },
            MazeRecord::default(),
        ];

        write_manifest(&records, &path).unwrap();
        let loaded = load_manifest(&path).unwrap();
        assert_eq!(loaded, records);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_manifest_creates_missing_parent_dirs() {
        let dir = scratch_dir("manifest_parent");
        let path = dir.join("resources").join("previous_mazes.json");

        write_manifest(&[MazeRecord::default()], &path).unwrap();
        assert!(path.is_file());

        let _ = fs::remove_dir_all(&dir);
    }
}
