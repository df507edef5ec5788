//! Error types for parameter and state validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanoiError {
    #[error("number of stacks must be at least 1 (got M={stacks})")]
    NoStacks { stacks: i64 },

    #[error("number of disks must be non-negative (got N={disks})")]
    NegativeDisks { disks: i64 },

    #[error("number of steps must be non-negative (got T={steps})")]
    NegativeSteps { steps: i64 },

    #[error("too many disks for 32-bit weights (got N={disks})")]
    TooManyDisks { disks: i64 },

    #[error("invalid tower: {0}")]
    InvalidState(String),
}
