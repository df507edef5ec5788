//! # Hanoi Walk — Exact Random-Walk Distributions on Generalized Towers of Hanoi
//!
//! N disks of distinct weight 1..N sit on M stacks in a row, heaviest at the
//! bottom of each stack. At every step one legal move is chosen uniformly at
//! random, where a legal move shifts a top disk to a neighbouring stack that is
//! empty or topped by a heavier disk. This crate computes the **exact**
//! distribution over towers after T steps, then the mean and standard deviation
//! of the tower's center of mass Σ(w·i)/Σ(w).
//!
//! ## Pipeline
//!
//! | Stage | Rust module | Description |
//! |-------|-------------|-------------|
//! | 0 | [`params`] | Validate (M, N, T) |
//! | 1 | [`state`], [`moves`] | Tower representation, canonical hash, legal moves |
//! | 2 | [`propagation`] | T generations of uniform mass splitting, merging duplicate towers in a [`distribution::Distribution`] |
//! | 3 | [`statistics`] | Weighted mean / std dev of the center of mass |
//!
//! ## State key
//!
//! Within a stack the order is forced (strictly decreasing upwards), so a tower
//! is determined by which stack each weight sits on. The key is that assignment
//! read as a base-M number, giving at most M^N distinct towers.
//!
//! ## Dead ends
//!
//! With M ≥ 2 and N ≥ 1 every tower has a move. For M = 1 or N = 0 no move
//! exists; [`propagation::DeadEndPolicy`] decides whether that mass is dropped
//! (default) or held in place.

pub mod constants;
pub mod distribution;
pub mod env_config;
pub mod error;
pub mod moves;
pub mod params;
pub mod propagation;
pub mod state;
pub mod statistics;

pub use distribution::Distribution;
pub use error::HanoiError;
pub use moves::{legal_moves, Move};
pub use params::Params;
pub use propagation::{propagate, propagate_with, DeadEndPolicy, EngineConfig};
pub use state::Tower;
pub use statistics::{summarize, CenterOfMassSummary};
