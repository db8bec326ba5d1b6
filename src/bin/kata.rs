use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use kata_solver::bank_ocr::parse_bank_account;
use kata_solver::braces::expand_braces;
use kata_solver::compass::create_compass_points;
use kata_solver::dates::{
    angle_between_clock_hands, is_leap_year, parse_iso8601, parse_rfc2822, time_span_to_string,
};
use kata_solver::dominoes::can_dominoes_make_row;
use kata_solver::permutations::get_permutations;
use kata_solver::poker::get_poker_hand_rank;
use kata_solver::ranges::extract_ranges;
use kata_solver::rectangles::get_figure_rectangles;
use kata_solver::stocks::get_most_profit_from_stock_quotes;
use kata_solver::url_shortener::UrlShortener;
use kata_solver::wrap::wrap_text;
use kata_solver::zigzag::get_zigzag_matrix;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Parser, Debug)]
#[clap(author, version, about = "Runs a single kata from the command line", long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an RFC 2822 date
    Rfc2822 { value: String },
    /// Parse an ISO 8601 date
    Iso8601 { value: String },
    /// Tell whether a year is a leap year
    LeapYear { year: i32 },
    /// Field-by-field span between two times (YYYY-MM-DDTHH:MM:SS[.fff])
    Timespan { start: String, end: String },
    /// Angle between the clock hands, in radians
    ClockAngle { hour: u32, minute: u32 },
    /// List the 32 compass points
    Compass,
    /// Expand shell-style braces
    Braces { pattern: String },
    /// Print the zigzag matrix of size n
    Zigzag { n: usize },
    /// Check whether dominoes such as 1-2 2-3 make a row
    Dominoes { tiles: Vec<String> },
    /// Collapse consecutive runs of integers
    Ranges {
        #[clap(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Read a scanned bank account number from a file
    Ocr { file: PathBuf },
    /// Wrap text at word boundaries
    Wrap {
        #[clap(short, long, default_value_t = 26)]
        columns: usize,
        text: String,
    },
    /// Rank a five-card poker hand
    Poker { cards: Vec<String> },
    /// Split an ASCII figure file into its rectangles
    Rectangles { file: PathBuf },
    /// List all permutations of a string
    Permutations { chars: String },
    /// Best profit from daily stock quotes
    Profit { quotes: Vec<i64> },
    /// Shorten a URL
    Shorten { url: String },
    /// Expand a short link
    Expand { code: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Rfc2822 { value } => println!("{}", parse_rfc2822(&value)?.to_rfc3339()),
        Command::Iso8601 { value } => println!("{}", parse_iso8601(&value)?.to_rfc3339()),
        Command::LeapYear { year } => println!("{}", is_leap_year(year)),
        Command::Timespan { start, end } => {
            let start = NaiveDateTime::parse_from_str(&start, TIME_FORMAT)
                .with_context(|| format!("invalid start time {:?}", start))?;
            let end = NaiveDateTime::parse_from_str(&end, TIME_FORMAT)
                .with_context(|| format!("invalid end time {:?}", end))?;
            println!("{}", time_span_to_string(&start, &end));
        }
        Command::ClockAngle { hour, minute } => {
            println!("{}", angle_between_clock_hands(hour, minute))
        }
        Command::Compass => {
            for point in create_compass_points() {
                println!("{:<5} {:>6.2}", point.abbreviation, point.azimuth);
            }
        }
        Command::Braces { pattern } => {
            for expansion in expand_braces(&pattern) {
                println!("{}", expansion);
            }
        }
        Command::Zigzag { n } => {
            for row in get_zigzag_matrix(n) {
                let cells: Vec<String> = row.iter().map(|v| format!("{:>3}", v)).collect();
                println!("{}", cells.join(" "));
            }
        }
        Command::Dominoes { tiles } => {
            let dominoes = tiles
                .iter()
                .map(|tile| parse_domino(tile))
                .collect::<Result<Vec<_>>>()?;
            println!("{}", can_dominoes_make_row(&dominoes));
        }
        Command::Ranges { nums } => println!("{}", extract_ranges(&nums)),
        Command::Ocr { file } => {
            let scan = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read scan: {}", file.display()))?;
            println!("{}", parse_bank_account(&scan)?);
        }
        Command::Wrap { columns, text } => {
            for line in wrap_text(&text, columns) {
                println!("{}", line);
            }
        }
        Command::Poker { cards } => {
            let hand: Vec<&str> = cards.iter().map(String::as_str).collect();
            println!("{}", get_poker_hand_rank(&hand)?);
        }
        Command::Rectangles { file } => {
            let figure = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read figure: {}", file.display()))?;
            for rectangle in get_figure_rectangles(&figure) {
                println!("{}", rectangle);
            }
        }
        Command::Permutations { chars } => {
            for permutation in get_permutations(&chars) {
                println!("{}", permutation);
            }
        }
        Command::Profit { quotes } => println!("{}", get_most_profit_from_stock_quotes(&quotes)),
        Command::Shorten { url } => println!("{}", UrlShortener::new().encode(&url)?),
        Command::Expand { code } => println!("{}", UrlShortener::new().decode(&code)),
    }
    Ok(())
}

fn parse_domino(tile: &str) -> Result<(u8, u8)> {
    let (a, b) = tile
        .split_once(['-', ','])
        .with_context(|| format!("domino {:?} is not written as a-b", tile))?;
    Ok((a.trim().parse()?, b.trim().parse()?))
}
