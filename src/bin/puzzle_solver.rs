use anyhow::{Context, Result};
use clap::Parser;
use kata_solver::solver::find_all;
use kata_solver::utils::read_grid_file;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the grid file (one row per line)
    grid_file: PathBuf,

    /// Words to search for
    #[clap(required = true)]
    words: Vec<String>,

    /// Require every row of the grid to have the same length
    #[clap(short, long)]
    strict: bool,

    /// Print only found/not found, without the highlighted grid
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let grid = read_grid_file(&args.grid_file, args.strict)
        .with_context(|| format!("Failed to read grid from file: {}", args.grid_file.display()))?;
    info!(rows = grid.rows(), cells = grid.cell_count(), "grid loaded");
    println!("Loaded grid from {}\n", args.grid_file.display());

    let words: Vec<&str> = args.words.iter().map(String::as_str).collect();
    let mut found = 0;
    for (word, path) in find_all(&grid, &words) {
        match path {
            Some(path) => {
                found += 1;
                println!("{}: found", word);
                if !args.quiet {
                    for (i, (r, c)) in path.iter().enumerate() {
                        println!("  Step {}: ({}, {})", i + 1, r, c);
                    }
                    println!("{}\n", grid.to_string_with_highlight(&path));
                }
            }
            None => println!("{}: not found", word),
        }
    }
    println!("\n{} of {} words found.", found, words.len());
    Ok(())
}
