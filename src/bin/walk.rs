//! hanoi-walk: Mean and standard deviation of the center of mass after T random moves.
//!
//! Values missing from the command line are prompted for on stdin as
//! `M=`, `N=`, `T=`, so the tool also works interactively.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use hanoi_walk::env_config;
use hanoi_walk::propagation::{propagate, DeadEndPolicy, EngineConfig};
use hanoi_walk::statistics::{summarize, CenterOfMassSummary};
use hanoi_walk::Params;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DeadEndArg {
    Drop,
    Hold,
}

impl From<DeadEndArg> for DeadEndPolicy {
    fn from(arg: DeadEndArg) -> Self {
        match arg {
            DeadEndArg::Drop => DeadEndPolicy::Drop,
            DeadEndArg::Hold => DeadEndPolicy::Hold,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hanoi-walk", version, about)]
struct Args {
    /// Number of stacks (M)
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    stacks: Option<i64>,

    /// Number of disks (N)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    disks: Option<i64>,

    /// Number of random moves (T)
    #[arg(short = 't', long, allow_negative_numbers = true)]
    steps: Option<i64>,

    /// Handling of towers with no legal move
    #[arg(long, value_enum, default_value_t = DeadEndArg::Drop)]
    dead_end: DeadEndArg,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v: per-generation progress, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct RunReport {
    params: Params,
    dead_end: DeadEndPolicy,
    summary: CenterOfMassSummary,
    dropped_mass: f64,
    elapsed_s: f64,
}

/// Whitespace-separated tokens from stdin, prompting before each read.
struct Prompter<R> {
    input: R,
    pending: Vec<String>,
}

impl<R: BufRead> Prompter<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: Vec::new(),
        }
    }

    fn ask(&mut self, label: &str) -> Result<i64> {
        if self.pending.is_empty() {
            print!("{}=", label);
            io::stdout().flush()?;
        }
        loop {
            if let Some(token) = self.pending.pop() {
                return token
                    .parse::<i64>()
                    .with_context(|| format!("{} must be an integer, got '{}'", label, token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("unexpected end of input while reading {}", label);
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_config::init_tracing(args.verbose);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock());
    let stacks = match args.stacks {
        Some(v) => v,
        None => prompter.ask("M")?,
    };
    let disks = match args.disks {
        Some(v) => v,
        None => prompter.ask("N")?,
    };
    let steps = match args.steps {
        Some(v) => v,
        None => prompter.ask("T")?,
    };

    let params = Params::new(stacks, disks, steps)?;
    let config = EngineConfig {
        dead_end: args.dead_end.into(),
        reserve_cap: env_config::reserve_cap(),
    };

    let t0 = Instant::now();
    let result = propagate(&params, &config)?;
    let summary = summarize(&result.distribution);
    let elapsed_s = t0.elapsed().as_secs_f64();

    tracing::info!(
        states = summary.num_states,
        total_mass = summary.total_mass,
        elapsed_s,
        "done"
    );

    if args.json {
        let report = RunReport {
            params,
            dead_end: config.dead_end,
            summary,
            dropped_mass: result.dropped_mass,
            elapsed_s,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("M = {}, N = {}", params.stacks, params.disks);
        println!(
            "Mean = {:.10}, Standard Deviation = {:.10}",
            summary.mean, summary.std_dev
        );
    }

    Ok(())
}
