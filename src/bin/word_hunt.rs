use anyhow::{Context, Result};
use clap::Parser;
use kata_solver::puzzle::Grid;
use kata_solver::solver::find_path;
use kata_solver::utils::read_grid_file;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Play on the grid from this file instead of a random one
    #[clap(short, long)]
    grid_file: Option<PathBuf>,

    /// Seed for the random grid
    #[clap(short, long, default_value_t = 514514)]
    seed: u64,

    /// Rows of the random grid
    #[clap(long, default_value_t = 6)]
    rows: usize,

    /// Columns of the random grid
    #[clap(long, default_value_t = 6)]
    cols: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let grid = match &args.grid_file {
        Some(path) => read_grid_file(path, false)
            .with_context(|| format!("Failed to read grid from file: {}", path.display()))?,
        None => Grid::new_random_with_seed(args.rows, args.cols, args.seed),
    };

    let mut found_words = BTreeSet::new();
    let mut last_path = Vec::new();
    println!("Welcome to Word Hunt!");

    loop {
        println!("---------------------");
        println!("Words found: {}", found_words.len());
        println!("{}", grid.to_string_with_highlight(&last_path));

        print!("Enter a word, 'l' to list found words, 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            println!();
            break;
        }
        let trimmed_input = input.trim();

        match trimmed_input {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "l" => {
                let listed: Vec<&str> = found_words.iter().map(String::as_str).collect();
                println!("Found so far: {}", listed.join(", "));
                continue;
            }
            "" => {
                println!("Please type a word.");
                continue;
            }
            _ => {}
        }

        let word = trimmed_input.to_uppercase();
        match find_path(&grid, &word) {
            Some(path) => {
                if found_words.insert(word.clone()) {
                    println!("Found {}!", word);
                } else {
                    println!("{} was already found.", word);
                }
                last_path = path;
            }
            None => {
                println!("{} is not in the grid.", word);
                last_path.clear();
            }
        }
    }

    println!("---------------------");
    println!("Total words found: {}", found_words.len());
    Ok(())
}
