//! Command line front end.
//!
//! Usage:
//!   mazes solve <maze.json> [--steps min|max|both] [--pretty]
//!   mazes validate --stdin [--pretty]
//!
//! Logging is configured through `MAZES_LOG` (e.g. `MAZES_LOG=debug`).

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use mazes::report::{ErrorResponse, SolutionResponse, SolutionsResponse, ValidResponse};
use mazes::{Maze, MazeDescription, Mode};

#[derive(Parser)]
#[command(name = "mazes")]
#[command(about = "Validate mazes and find their minimum and maximum paths")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a maze and print its solution paths
    Solve {
        #[command(flatten)]
        input: Input,

        /// Which solution to print
        #[arg(long, value_enum, default_value_t = Steps::Both)]
        steps: Steps,
    },
    /// Check a maze without printing paths
    Validate {
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args)]
struct Input {
    /// Path to a maze JSON file (use --stdin to read from stdin)
    #[arg(value_name = "FILE", required_unless_present = "stdin")]
    file: Option<PathBuf>,

    /// Read the maze from stdin instead of a file
    #[arg(long, conflicts_with = "file")]
    stdin: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Steps {
    Min,
    Max,
    Both,
}

impl Input {
    fn read(&self) -> io::Result<MazeDescription> {
        let json = match &self.file {
            Some(path) if !self.stdin => fs::read_to_string(path)?,
            _ => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };
        Ok(serde_json::from_str(&json)?)
    }

    fn print(&self, value: &impl Serialize) -> serde_json::Result<()> {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{out}");
        Ok(())
    }
}

fn init_logging() {
    if std::env::var("MAZES_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("MAZES_LOG")
            .write_style("MAZES_LOG_STYLE");
        env_logger::init_from_env(env);
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let (input, steps) = match &cli.command {
        Commands::Solve { input, steps } => (input, Some(*steps)),
        Commands::Validate { input } => (input, None),
    };
    let desc = input.read()?;
    log::debug!("read {} maze with {} walls", desc.grid_size, desc.walls.len());

    let result = Maze::parse(&desc).and_then(|maze| {
        let solutions = maze.solve_both()?;
        Ok((maze, solutions))
    });

    let (maze, solutions) = match result {
        Ok(ok) => ok,
        Err(e) => {
            input.print(&ErrorResponse::from(&e))?;
            return Ok(ExitCode::FAILURE);
        }
    };

    match steps {
        Some(Steps::Min) => input.print(&SolutionResponse::new(solutions.get(Mode::Shortest)))?,
        Some(Steps::Max) => input.print(&SolutionResponse::new(solutions.get(Mode::Longest)))?,
        Some(Steps::Both) => input.print(&SolutionsResponse::new(&solutions))?,
        None => input.print(&ValidResponse {
            ok: true,
            grid_size: maze.dims().to_string(),
            walls: maze.grid().wall_count(),
        })?,
    }
    Ok(ExitCode::SUCCESS)
}
