//! Engine constants.
//!
//! The state space of M stacks and N disks has at most M^N members (one stack
//! choice per disk weight), which is also the radix of [`crate::state::Tower::hash_key`].

use crate::propagation::DeadEndPolicy;

/// Center of mass reported for a tower holding zero total weight (only when N = 0).
pub const UNDEFINED_CENTER: f64 = -1.0;

/// Default upper bound on pre-sized generation capacity (entries).
///
/// The engine reserves less when M^N or the previous generation says fewer
/// states can be reached. Override with `HANOI_RESERVE_CAP`.
pub const DEFAULT_RESERVE_CAP: usize = 1_000_000;

/// Dead-end handling when neither the command line nor the caller chooses one.
pub const DEFAULT_DEAD_END_POLICY: DeadEndPolicy = DeadEndPolicy::Drop;

/// Tolerance used when checking that a generation still carries unit mass.
pub const MASS_TOLERANCE: f64 = 1e-9;

/// Upper bound on the number of reachable states: M^N, saturating at `usize::MAX`.
pub fn state_space_bound(stacks: usize, disks: usize) -> usize {
    if stacks <= 1 {
        return 1;
    }
    let mut bound: usize = 1;
    for _ in 0..disks {
        bound = bound.saturating_mul(stacks);
        if bound == usize::MAX {
            break;
        }
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_space_bound_small() {
        assert_eq!(state_space_bound(3, 3), 27);
        assert_eq!(state_space_bound(6, 6), 46_656);
        assert_eq!(state_space_bound(1, 10), 1);
        assert_eq!(state_space_bound(4, 0), 1);
    }

    #[test]
    fn test_state_space_bound_saturates() {
        assert_eq!(state_space_bound(10, 100), usize::MAX);
    }
}
