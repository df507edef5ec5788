//! hanoi-profile: Center-of-mass statistics after every generation.
//!
//! Runs one propagation and records mean / std dev at each step 0..=T,
//! writing a JSON array of `GenerationStats` for plotting.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use hanoi_walk::constants::MASS_TOLERANCE;
use hanoi_walk::env_config;
use hanoi_walk::propagation::{propagate_with, EngineConfig};
use hanoi_walk::statistics::{summarize, GenerationStats};
use hanoi_walk::{Distribution, Params, Tower};

#[derive(Debug, Parser)]
#[command(name = "hanoi-profile", version, about)]
struct Args {
    /// Number of stacks (M)
    #[arg(short = 'm', long)]
    stacks: i64,

    /// Number of disks (N)
    #[arg(short = 'n', long)]
    disks: i64,

    /// Number of random moves (T)
    #[arg(short = 't', long)]
    steps: i64,

    /// Output JSON file
    #[arg(long, default_value = "outputs/profile.json")]
    output: PathBuf,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Profile {
    params: Params,
    generations: Vec<GenerationStats>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_config::init_tracing(args.verbose);

    let params = Params::new(args.stacks, args.disks, args.steps)?;
    let config = EngineConfig {
        reserve_cap: env_config::reserve_cap(),
        ..EngineConfig::default()
    };

    println!("=== hanoi-profile ===");
    println!(
        "M = {}, N = {}, T = {}, output: {}",
        params.stacks,
        params.disks,
        params.steps,
        args.output.display()
    );

    let initial = Distribution::singleton(Tower::new(params.stacks, params.disks)?);
    let mut generations = Vec::with_capacity(params.steps + 1);
    generations.push(GenerationStats {
        generation: 0,
        summary: summarize(&initial),
    });

    let t0 = Instant::now();
    propagate_with(&params, &config, |report, dist| {
        if (report.total_mass - 1.0).abs() > MASS_TOLERANCE && report.dropped_mass == 0.0 {
            tracing::warn!(
                generation = report.generation,
                total_mass = report.total_mass,
                "mass drifted from 1.0"
            );
        }
        generations.push(GenerationStats {
            generation: report.generation,
            summary: summarize(dist),
        });
    })?;
    println!(
        "Propagation completed in {:.2}s",
        t0.elapsed().as_secs_f64()
    );

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let profile = Profile {
        params,
        generations,
    };
    let json = serde_json::to_string_pretty(&profile)?;
    fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!(
        "Wrote {} ({} generations)",
        args.output.display(),
        profile.generations.len()
    );

    if let Some(last) = profile.generations.last() {
        println!(
            "Mean = {:.10}, Standard Deviation = {:.10}",
            last.summary.mean, last.summary.std_dev
        );
    }

    Ok(())
}
