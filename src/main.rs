use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use kudoku::boundary::{self, BoundaryError, PuzzleRequest};
use kudoku::{Grid, SolveError, Solver};
use std::{fs, io::Read, path::PathBuf, process};

#[derive(Parser, Debug)]
#[command(name = "kudoku", version, about = "Sudoku solver with snapshot backtracking")]
struct Cli {
    /// Path to a puzzle file (81 chars with 0 or . for blanks). If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Treat the input as a JSON {"puzzle": [[..]]} request and reply with the JSON response
    #[arg(long)]
    json: bool,

    /// Abort after this many scan passes (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_passes: usize,

    /// Colored console output
    #[arg(long)]
    color: bool,
}

fn read_input(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

// 1 = bad input or I/O, 2 = unsolvable, 3 = pass budget exhausted
fn exit_code(err: &BoundaryError) -> i32 {
    match err {
        BoundaryError::Malformed(_) => 1,
        BoundaryError::Solve(SolveError::Unsolvable) => 2,
        BoundaryError::Solve(SolveError::Aborted { .. }) => 3,
    }
}

fn fail(cli: &Cli, err: BoundaryError) -> ! {
    let msg = format!("error: {err}");
    if cli.color {
        eprintln!("{}", msg.red().bold());
    } else {
        eprintln!("{msg}");
    }
    process::exit(exit_code(&err));
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let raw = read_input(&cli.input)?;
    let solver = if cli.max_passes == 0 {
        Solver::new()
    } else {
        Solver::with_max_passes(cli.max_passes)
    };

    if cli.json {
        let req: PuzzleRequest = serde_json::from_str(&raw).context("parse request body")?;
        match boundary::solve_request(&solver, &req) {
            Ok(resp) => println!("{}", serde_json::to_string(&resp)?),
            Err(err) => fail(&cli, err),
        }
        return Ok(());
    }

    let grid = match Grid::from_compact(&raw) {
        Ok(g) => g,
        Err(e) => fail(&cli, BoundaryError::Malformed(e.to_string())),
    };
    match solver.solve(&grid) {
        Ok(solved) => {
            let header = "Solved grid:";
            if cli.color {
                println!("{}", header.green().bold());
            } else {
                println!("{header}");
            }
            println!("{}", solved.to_pretty_string());
        }
        Err(err) => fail(&cli, err.into()),
    }
    Ok(())
}
