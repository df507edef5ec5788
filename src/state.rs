//! Tower state: N distinct disk weights partitioned across M stacks.
//!
//! Each stack is stored bottom-to-top with strictly decreasing weights, so the
//! lightest disk of a stack is always its last element. Because the order inside
//! a stack is forced, the stack index of every weight alone determines the whole
//! tower. [`Tower::hash_key`] exploits this: it is the mixed-radix number (base M)
//! whose digit `i` is the stack holding disk weight `i + 1`, least significant
//! digit first.
//!
//! A `Tower` is never mutated once built. Successors are fresh values produced
//! by [`Tower::apply`], so a tower stored as a map key can never change under
//! its own hash.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::UNDEFINED_CENTER;
use crate::error::HanoiError;
use crate::moves::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tower {
    stacks: Vec<Vec<u32>>,
    disks: usize,
}

impl Tower {
    /// Initial configuration: all N disks on stack 0, ordered N..1 bottom-to-top.
    pub fn new(stacks: usize, disks: usize) -> Result<Self, HanoiError> {
        if stacks < 1 {
            return Err(HanoiError::NoStacks {
                stacks: stacks as i64,
            });
        }
        let top = u32::try_from(disks).map_err(|_| HanoiError::TooManyDisks {
            disks: i64::try_from(disks).unwrap_or(i64::MAX),
        })?;

        let mut columns = vec![Vec::new(); stacks];
        columns[0] = (1..=top).rev().collect();
        Ok(Self {
            stacks: columns,
            disks,
        })
    }

    /// Build an arbitrary tower, checking the partition and ordering invariant.
    ///
    /// Every weight 1..N (N = total disk count) must appear exactly once, and each
    /// stack must be strictly decreasing from bottom to top.
    pub fn from_stacks(stacks: Vec<Vec<u32>>) -> Result<Self, HanoiError> {
        if stacks.is_empty() {
            return Err(HanoiError::NoStacks { stacks: 0 });
        }
        let disks: usize = stacks.iter().map(Vec::len).sum();
        let mut seen = vec![false; disks];

        for (i, stack) in stacks.iter().enumerate() {
            for (pos, &w) in stack.iter().enumerate() {
                if w == 0 || w as usize > disks {
                    return Err(HanoiError::InvalidState(format!(
                        "stack {i} holds weight {w}, expected 1..={disks}"
                    )));
                }
                if std::mem::replace(&mut seen[w as usize - 1], true) {
                    return Err(HanoiError::InvalidState(format!(
                        "weight {w} appears more than once"
                    )));
                }
                if pos > 0 && stack[pos - 1] <= w {
                    return Err(HanoiError::InvalidState(format!(
                        "stack {i} is not strictly decreasing bottom-to-top: {stack:?}"
                    )));
                }
            }
        }

        Ok(Self { stacks, disks })
    }

    /// Read-only view of the stacks, each ordered bottom-to-top.
    pub fn stacks(&self) -> &[Vec<u32>] {
        &self.stacks
    }

    pub fn num_stacks(&self) -> usize {
        self.stacks.len()
    }

    pub fn num_disks(&self) -> usize {
        self.disks
    }

    /// Lightest disk of stack `i`, or `None` if the stack is empty.
    pub fn top(&self, i: usize) -> Option<u32> {
        self.stacks[i].last().copied()
    }

    /// Stack index for each disk weight: `positions()[w - 1]` is the stack of weight `w`.
    pub fn positions(&self) -> Vec<usize> {
        let mut pos = vec![0usize; self.disks];
        for (i, stack) in self.stacks.iter().enumerate() {
            for &w in stack {
                pos[w as usize - 1] = i;
            }
        }
        pos
    }

    /// Canonical mixed-radix key: Σ stack(w) · M^(w-1) over all weights.
    ///
    /// Pure read of the stacks. Wraps modulo 2^64 when M^N does not fit, which
    /// only weakens it as a hash; equality stays structural.
    pub fn hash_key(&self) -> u64 {
        let radix = self.stacks.len() as u64;
        let mut key = 0u64;
        for (i, stack) in self.stacks.iter().enumerate() {
            if i == 0 {
                continue;
            }
            for &w in stack {
                let place = radix.wrapping_pow(w - 1);
                key = key.wrapping_add((i as u64).wrapping_mul(place));
            }
        }
        key
    }

    /// Weighted mean stack index: Σ(w · i) / Σ(w), or [`UNDEFINED_CENTER`] if Σ(w) = 0.
    pub fn center_of_mass(&self) -> f64 {
        let mut mass: u128 = 0;
        let mut moment: u128 = 0;
        for (i, stack) in self.stacks.iter().enumerate() {
            for &w in stack {
                mass += u128::from(w);
                moment += u128::from(w) * i as u128;
            }
        }
        if mass == 0 {
            UNDEFINED_CENTER
        } else {
            moment as f64 / mass as f64
        }
    }

    /// Check a move against the adjacency and ordering rule, then apply it.
    pub fn apply(&self, mv: Move) -> Result<Self, HanoiError> {
        let m = self.stacks.len();
        if mv.from >= m || mv.to >= m || mv.from.abs_diff(mv.to) != 1 {
            return Err(HanoiError::InvalidState(format!(
                "move {mv} is not between adjacent stacks of {m}"
            )));
        }
        let Some(disk) = self.top(mv.from) else {
            return Err(HanoiError::InvalidState(format!(
                "move {mv} starts from an empty stack"
            )));
        };
        if let Some(below) = self.top(mv.to) {
            if below < disk {
                return Err(HanoiError::InvalidState(format!(
                    "move {mv} puts disk {disk} on lighter disk {below}"
                )));
            }
        }
        Ok(self.successor(mv))
    }

    /// Apply a move already known to be legal.
    pub(crate) fn successor(&self, mv: Move) -> Self {
        let mut next = self.clone();
        if let Some(disk) = next.stacks[mv.from].pop() {
            debug_assert!(next.stacks[mv.to].last().map_or(true, |&t| t > disk));
            next.stacks[mv.to].push(disk);
        }
        next
    }
}

impl Hash for Tower {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_key().hash(state);
    }
}

impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stack) in self.stacks.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str("[")?;
            for (j, w) in stack.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{w}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
