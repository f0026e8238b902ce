// main.rs - CLI for converting drawn ASCII mazes into hex wall-mask encodings.
// Single files print their encoding to stdout; directories are batch-encoded
// into a JSON manifest.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use maze_hex_encoder::{
    encode_directory, encode_file, write_manifest, Strictness, DEFAULT_GRID_SIZE,
    DEFAULT_MANIFEST_PATH,
};

/// CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze text file to encode, or a directory of maze files to batch-encode
    path: PathBuf,

    /// Maze side length in cells; required for single files, defaults to 16
    /// in batch mode
    #[arg(short, long)]
    grid_size: Option<u32>,

    /// How to treat a cell whose center character is not a space
    #[arg(long, value_enum, default_value_t = Strictness::Strict)]
    strictness: Strictness,

    /// Manifest path written in batch mode
    #[arg(short, long, default_value = DEFAULT_MANIFEST_PATH)]
    output: PathBuf,

    /// Sort directory entries by file name before encoding, for a stable
    /// manifest order
    #[arg(long)]
    sorted: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.path.is_dir() {
        let grid_size = args.grid_size.unwrap_or(DEFAULT_GRID_SIZE);
        info!(
            "Batch-encoding {} with grid size {grid_size}",
            args.path.display()
        );
        let records = encode_directory(&args.path, grid_size, args.strictness, args.sorted)
            .with_context(|| format!("Failed to encode directory {}", args.path.display()))?;
        write_manifest(&records, &args.output)
            .with_context(|| format!("Failed to write manifest {}", args.output.display()))?;
        info!(
            "Wrote {} maze records to {}",
            records.len(),
            args.output.display()
        );
    } else {
        let grid_size = args
            .grid_size
            .context("--grid-size is required when encoding a single maze file")?;
        let encoding = encode_file(&args.path, grid_size, args.strictness)
            .with_context(|| format!("Failed to encode {}", args.path.display()))?;
        println!("{encoding}");
    }
    Ok(())
}
