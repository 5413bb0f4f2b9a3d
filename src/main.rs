use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use algolab::harness;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about = "Solves classic algorithmic problems given in their textual format")]
struct Args {
    #[command(subcommand)]
    problem: Problem,
    /// Read the problem from this file instead of stdin.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, Debug)]
enum Problem {
    /// Point updates and prefix sums
    Fenwick,
    /// Set unions and same-set queries
    UnionFind,
    /// Integer polynomial multiplication
    PolyMul,
    /// Minimum interval cover
    IntervalCover,
    /// 0/1 knapsack
    Knapsack,
    /// Linear equation systems
    LinSolve,
    /// Longest increasing subsequence
    Lis,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let input = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };
    log::info!("solving {:?} from {} bytes of input", args.problem, input.len());

    let output = match args.problem {
        Problem::Fenwick => harness::fenwick(&input),
        Problem::UnionFind => harness::union_find(&input),
        Problem::PolyMul => harness::poly_mul(&input),
        Problem::IntervalCover => harness::interval_cover(&input),
        Problem::Knapsack => harness::knapsack(&input),
        Problem::LinSolve => harness::lin_solve(&input),
        Problem::Lis => harness::lis(&input),
    }
    .with_context(|| format!("failed to solve {:?}", args.problem))?;

    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
