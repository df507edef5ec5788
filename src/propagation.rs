//! Exact forward propagation of tower probabilities through T generations.
//!
//! Starting from the initial tower with probability 1.0, each generation splits
//! every tower's mass uniformly across its legal moves and merges successors
//! that coincide. No sampling: the final distribution is the exact law of the
//! random walk after T uniformly random legal moves.
//!
//! Generations are strictly sequential; a successor's mass is only final once
//! every predecessor has contributed, so generation g+1 is built completely
//! before g is dropped.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::constants::{state_space_bound, DEFAULT_DEAD_END_POLICY, DEFAULT_RESERVE_CAP};
use crate::distribution::Distribution;
use crate::error::HanoiError;
use crate::moves::{legal_moves_into, Move};
use crate::params::Params;
use crate::state::Tower;

/// What happens to the mass of a tower that has no legal move.
///
/// Only reachable when M = 1 or N = 0; for M ≥ 2 with at least one disk,
/// every tower has a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadEndPolicy {
    /// Mass is discarded and reported as dropped.
    #[default]
    Drop,
    /// Mass stays on the same tower, as if the walk waited one step.
    Hold,
}

#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub dead_end: DeadEndPolicy,
    /// Upper bound on entries reserved up front for a generation.
    pub reserve_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dead_end: DEFAULT_DEAD_END_POLICY,
            reserve_cap: DEFAULT_RESERVE_CAP,
        }
    }
}

/// Result of a single generation step.
pub struct StepOutcome {
    pub next: Distribution,
    /// Mass discarded under [`DeadEndPolicy::Drop`] during this step.
    pub dropped_mass: f64,
}

/// Progress record handed to the observer after each generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// 1-based generation number (generation 0 is the initial tower).
    pub generation: usize,
    pub states: usize,
    pub total_mass: f64,
    /// Mass discarded so far, cumulative over all generations.
    pub dropped_mass: f64,
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Final distribution after T generations.
pub struct Propagation {
    pub distribution: Distribution,
    /// Total mass discarded at dead ends over the whole run.
    pub dropped_mass: f64,
}

/// Advance one generation.
///
/// `capacity` is the number of entries reserved for the next generation.
pub fn step(current: &Distribution, dead_end: DeadEndPolicy, capacity: usize) -> StepOutcome {
    let mut next = Distribution::with_capacity(capacity);
    let mut moves: Vec<Move> = Vec::new();
    let mut dropped_mass = 0.0;

    for (tower, mass) in current.iter() {
        legal_moves_into(tower, &mut moves);

        if moves.is_empty() {
            match dead_end {
                DeadEndPolicy::Drop => dropped_mass += mass,
                DeadEndPolicy::Hold => {
                    next.add_mass(tower.clone(), mass);
                }
            }
            continue;
        }

        let share = mass / moves.len() as f64;
        for &mv in &moves {
            next.add_mass(tower.successor(mv), share);
        }
    }

    StepOutcome { next, dropped_mass }
}

/// Entries to reserve for the generation after one with `current_len` towers.
///
/// Each tower has at most M-1 successors, and no generation exceeds M^N towers.
fn next_capacity(params: &Params, current_len: usize, reserve_cap: usize) -> usize {
    let fan_out = params.stacks.saturating_sub(1).max(1);
    current_len
        .saturating_mul(fan_out)
        .min(state_space_bound(params.stacks, params.disks))
        .min(reserve_cap)
}

/// Run all T generations from the initial tower.
pub fn propagate(params: &Params, config: &EngineConfig) -> Result<Propagation, HanoiError> {
    propagate_with(params, config, |_, _| {})
}

/// Run all T generations, calling `observer` after each one.
pub fn propagate_with<F>(
    params: &Params,
    config: &EngineConfig,
    mut observer: F,
) -> Result<Propagation, HanoiError>
where
    F: FnMut(&GenerationReport, &Distribution),
{
    let initial = Tower::new(params.stacks, params.disks)?;
    let mut current = Distribution::singleton(initial);
    let mut dropped_total = 0.0;
    let t_total = Instant::now();

    tracing::debug!(
        stacks = params.stacks,
        disks = params.disks,
        steps = params.steps,
        dead_end = ?config.dead_end,
        "starting propagation"
    );

    for generation in 1..=params.steps {
        let t_gen = Instant::now();
        let capacity = next_capacity(params, current.len(), config.reserve_cap);

        let outcome = step(&current, config.dead_end, capacity);
        current = outcome.next;
        dropped_total += outcome.dropped_mass;

        let report = GenerationReport {
            generation,
            states: current.len(),
            total_mass: current.total_mass(),
            dropped_mass: dropped_total,
            elapsed: t_gen.elapsed(),
        };

        tracing::info!(
            states = report.states,
            mass = report.total_mass,
            "T = {}",
            generation
        );
        if outcome.dropped_mass > 0.0 {
            tracing::warn!(
                generation,
                dropped = outcome.dropped_mass,
                "mass dropped at towers with no legal move"
            );
        }

        observer(&report, &current);
    }

    tracing::debug!(
        states = current.len(),
        elapsed_s = t_total.elapsed().as_secs_f64(),
        "propagation complete"
    );

    Ok(Propagation {
        distribution: current,
        dropped_mass: dropped_total,
    })
}
