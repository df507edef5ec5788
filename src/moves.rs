//! Legal-move enumeration.
//!
//! Only neighbouring stacks (i, i+1) exchange disks. For each neighbouring pair:
//! - both empty: no move
//! - one empty: the other top disk moves into it
//! - both occupied: the lighter top disk moves onto the heavier one
//!
//! So every neighbouring pair with at least one disk contributes exactly one
//! move, and a tower with M ≥ 2 and N ≥ 1 always has a legal move.

use std::fmt;

use serde::Serialize;

use crate::state::Tower;

/// Relocate the top disk of stack `from` onto stack `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Direction of the single legal move between stacks `a` and `a + 1`, if any.
fn compare_neighbours(tower: &Tower, a: usize) -> Option<Move> {
    let b = a + 1;
    match (tower.top(a), tower.top(b)) {
        (None, None) => None,
        (Some(_), None) => Some(Move { from: a, to: b }),
        (None, Some(_)) => Some(Move { from: b, to: a }),
        (Some(ta), Some(tb)) if ta < tb => Some(Move { from: a, to: b }),
        (Some(_), Some(_)) => Some(Move { from: b, to: a }),
    }
}

/// All legal moves from `tower`, ordered by neighbouring pair (0,1), (1,2), ...
pub fn legal_moves(tower: &Tower) -> Vec<Move> {
    let mut moves = Vec::with_capacity(tower.num_stacks().saturating_sub(1));
    legal_moves_into(tower, &mut moves);
    moves
}

/// Like [`legal_moves`], but reuses `out` (cleared first).
pub fn legal_moves_into(tower: &Tower, out: &mut Vec<Move>) {
    out.clear();
    for a in 0..tower.num_stacks().saturating_sub(1) {
        if let Some(mv) = compare_neighbours(tower, a) {
            out.push(mv);
        }
    }
}
