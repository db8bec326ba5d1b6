use clap::Parser;
use kata_solver::puzzle::{Grid, DEFAULT_ALPHABET};
use kata_solver::solver::find_path;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const WORDS: [&str; 12] = [
    "ANGULAR", "REACT", "UNDEFINED", "RED", "STRING", "CLASS", "ARRAY", "FUNCTION", "NULL",
    "PROMISE", "ITERATOR", "SNAKE",
];

#[derive(Parser, Debug)]
#[clap(author, version, about = "Plants words into random grids and checks the solver finds them", long_about = None)]
struct Args {
    /// Number of random grids to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Seed of the first grid; grid i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Grid side length
    #[clap(long, default_value_t = 8)]
    size: usize,
}

#[derive(Default)]
struct Tally {
    tried: u32,
    found: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut planted: BTreeMap<usize, Tally> = BTreeMap::new();
    let mut decoys: BTreeMap<usize, Tally> = BTreeMap::new();
    let started = Instant::now();

    println!("Starting solver evaluation for {} grids...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx;
        let base_grid = Grid::new_random_with_seed(args.size, args.size, current_seed);
        let mut rng = SmallRng::seed_from_u64(current_seed);

        println!("\nEvaluating grid {} (Seed: {})", board_idx, current_seed);

        for word in WORDS {
            let len = word.chars().count();
            let mut grid = base_grid.clone();
            let Some(walk) = grid.plant_word(word, &mut rng) else {
                warn!(word, seed = current_seed, "could not plant word");
                continue;
            };

            let tally = planted.entry(len).or_default();
            tally.tried += 1;
            match find_path(&grid, word) {
                Some(_) => tally.found += 1,
                None => eprintln!(
                    "Error: planted {} along {:?} but the solver missed it. Grid:\n{}",
                    word, walk, grid
                ),
            }

            // A shuffled copy of the word is a decoy; finding it is pure chance.
            let mut letters: Vec<char> = word.chars().collect();
            letters.shuffle(&mut rng);
            let decoy: String = letters.into_iter().collect();
            let hit = find_path(&base_grid, &decoy).is_some();
            debug!(decoy = %decoy, hit, "decoy searched");
            let tally = decoys.entry(len).or_default();
            tally.tried += 1;
            if hit {
                tally.found += 1;
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Grids evaluated: {} ({}x{})", args.boards, args.size, args.size);
    println!("Alphabet size: {}", DEFAULT_ALPHABET.len());
    println!("Elapsed: {:.2?}", started.elapsed());
    println!("\n--- Recall by word length ---");
    for (len, tally) in &planted {
        println!(
            "Length {:<3}: planted {:<4} found {:<4} ({:.1}%)",
            len,
            tally.tried,
            tally.found,
            percentage(tally)
        );
    }
    println!("\n--- Chance hits of shuffled decoys ---");
    for (len, tally) in &decoys {
        println!(
            "Length {:<3}: searched {:<4} hits {:<4} ({:.1}%)",
            len,
            tally.tried,
            tally.found,
            percentage(tally)
        );
    }
}

fn percentage(tally: &Tally) -> f64 {
    if tally.tried == 0 {
        0.0
    } else {
        100.0 * tally.found as f64 / tally.tried as f64
    }
}
