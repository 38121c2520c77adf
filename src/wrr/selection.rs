//! Priority computation and maximal-candidate selection.
//!
//! Both selections are a left-to-right scan in which only a strictly
//! greater candidate replaces the incumbent, so ties always resolve to
//! the lowest index.

use super::config::{WrrConfig, ZeroDenominatorPolicy};
use crate::error::{AllocError, AllocResult};

/// Computes `right / (allocated + y)` for one player.
///
/// # Errors
///
/// Returns [`AllocError::DivisionByZero`] when the denominator is zero
/// and the policy is [`ZeroDenominatorPolicy::Error`].
pub fn priority(
    player: usize,
    right: f64,
    allocated: usize,
    config: &WrrConfig,
) -> AllocResult<f64> {
    let denominator = allocated as f64 + config.y;
    if denominator == 0.0 {
        return match config.zero_denominator {
            ZeroDenominatorPolicy::Error => Err(AllocError::DivisionByZero { player, allocated }),
            ZeroDenominatorPolicy::InfinitePriority => Ok(f64::INFINITY),
        };
    }
    Ok(right / denominator)
}

/// Index of the first player with the maximal priority.
///
/// Returns `None` if `priorities` is empty.
pub fn select_player(priorities: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (j, &p) in priorities.iter().enumerate() {
        match best {
            Some((_, bp)) if p <= bp => {}
            _ => best = Some((j, p)),
        }
    }
    best.map(|(j, _)| j)
}

/// Index of the first non-removed item with the maximal value in `row`.
///
/// Items flagged in `removed` are invisible. A remaining item valued at
/// `-inf` is still selectable. Returns `None` when every item is removed.
pub fn select_item(row: &[f64], removed: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, (&v, &gone)) in row.iter().zip(removed).enumerate() {
        if gone {
            continue;
        }
        match best {
            Some((_, bv)) if v <= bv => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
