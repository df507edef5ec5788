//! Validated run parameters: M stacks, N disks, T steps.

use serde::Serialize;

use crate::error::HanoiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Params {
    pub stacks: usize,
    pub disks: usize,
    pub steps: usize,
}

impl Params {
    /// Validate signed input as read from a prompt or the command line.
    ///
    /// Rejects M < 1, N < 0, T < 0 before any computation starts.
    pub fn new(stacks: i64, disks: i64, steps: i64) -> Result<Self, HanoiError> {
        if stacks < 1 {
            return Err(HanoiError::NoStacks { stacks });
        }
        if disks < 0 {
            return Err(HanoiError::NegativeDisks { disks });
        }
        if steps < 0 {
            return Err(HanoiError::NegativeSteps { steps });
        }
        if disks > i64::from(u32::MAX) {
            return Err(HanoiError::TooManyDisks { disks });
        }
        Ok(Self {
            stacks: stacks as usize,
            disks: disks as usize,
            steps: steps as usize,
        })
    }
}
