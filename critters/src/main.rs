//! Command-line front end for cats, households and points.
//!
//! Each subcommand drives one of the independent core components and prints
//! rendered lines to stdout. Diagnostics go to stderr via `tracing`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use critters::core::cat::Cat;
use critters::core::points::{first, format_points, make, parse_point, parse_points, try_add};
use critters::exit_codes;
use critters::io::config::{CONFIG_FILE, CrittersConfig, load_config};
use critters::logging;
use critters::roster::roster_from_path;
use tracing::debug;

#[derive(Parser)]
#[command(name = "critters", version, about = "Hungry cats, adopted humans and point sums")]
struct Cli {
    /// Config file (defaults to `critters.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Feed and exercise a cat, then print it.
    Cat {
        name: String,
        /// Mice to eat; repeatable, applied in order before any jumps.
        #[arg(long = "eat", value_name = "COUNT")]
        eat: Vec<u32>,
        /// Jump heights; repeatable, non-positive heights are ignored.
        #[arg(long = "jump", value_name = "HEIGHT", allow_negative_numbers = true)]
        jump: Vec<i64>,
        /// Four words for the cat to say.
        #[arg(long, num_args = 4, value_names = ["A", "B", "C", "D"])]
        say: Option<Vec<String>>,
    },
    /// Print every member of a household description file.
    Household {
        /// Description file (defaults to `household_path` from config).
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Coordinate pair utilities.
    Points {
        #[command(subcommand)]
        command: PointsCommand,
    },
}

#[derive(Subcommand)]
enum PointsCommand {
    /// Pairwise sum of two point lists such as "1,1 2,2" (truncates to the shorter).
    Add { left: String, right: String },
    /// First value of a whitespace-separated integer list.
    First { values: String },
    /// Echo a pair such as "3,4", or the origin when omitted.
    Make { pair: Option<String> },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = load_config(&config_path)?;
    logging::init(&config.log_filter);
    debug!(config = %config_path.display(), "config loaded");

    match cli.command {
        Command::Cat {
            name,
            eat,
            jump,
            say,
        } => cmd_cat(name, &eat, &jump, say.as_deref()),
        Command::Household { file } => cmd_household(&config, file),
        Command::Points { command } => cmd_points(command),
    }
}

fn cmd_cat(name: String, eat: &[u32], jump: &[i64], say: Option<&[String]>) -> Result<()> {
    let mut cat = Cat::new(name);
    for &count in eat {
        cat.eat(count);
    }
    for &height in jump {
        cat.jump(height);
    }
    println!("{}", cat);
    if let Some([a, b, c, d]) = say {
        println!("{}", cat.say(a, b, c, d));
    }
    Ok(())
}

fn cmd_household(config: &CrittersConfig, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| config.household_path.clone());
    for line in roster_from_path(&path)? {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_points(command: PointsCommand) -> Result<()> {
    match command {
        PointsCommand::Add { left, right } => {
            let left = parse_points(&left).context("parse left points")?;
            let right = parse_points(&right).context("parse right points")?;
            let sum = try_add(&left, &right).context("add points")?;
            println!("{}", format_points(&sum));
        }
        PointsCommand::First { values } => {
            let values = values
                .split_whitespace()
                .map(|raw| {
                    raw.parse::<i64>()
                        .with_context(|| format!("parse value '{}'", raw))
                })
                .collect::<Result<Vec<_>>>()?;
            println!("{}", first(&values)?);
        }
        PointsCommand::Make { pair } => {
            let pair = pair.as_deref().map(parse_point).transpose()?;
            println!("{}", format_points(&[make(pair)]));
        }
    }
    Ok(())
}
