//! Weighted round-robin allocation loop.
//!
//! Each round recomputes every player's priority, lets the first
//! highest-priority player pick its most-valued remaining item, and
//! removes that item for everyone. The loop runs exactly once per item.

use super::config::WrrConfig;
use super::selection::{priority, select_item, select_player};
use super::types::{Allocation, AllocationEvent};
use crate::error::{AllocError, AllocResult};
use tracing::{debug, info, trace};

/// Executes the weighted round-robin allocation.
///
/// # Usage
///
/// ```
/// use u_fairdiv::wrr::{WrrConfig, WrrRunner};
///
/// let rights = [1.0, 1.0];
/// let valuations = vec![vec![3.0, 1.0, 2.0], vec![3.0, 1.0, 2.0]];
/// let alloc = WrrRunner::run(&rights, &valuations, &WrrConfig::default()).unwrap();
///
/// assert_eq!(alloc.bundle(0), vec![0, 1]);
/// assert_eq!(alloc.bundle(1), vec![2]);
/// ```
pub struct WrrRunner;

impl WrrRunner {
    /// Runs the allocation without touching `valuations`.
    ///
    /// Removed items are tracked in a per-run mask.
    pub fn run(
        rights: &[f64],
        valuations: &[Vec<f64>],
        config: &WrrConfig,
    ) -> AllocResult<Allocation> {
        Self::run_with_observer(rights, valuations, config, |_| {})
    }

    /// Runs the allocation, handing each event to `observer` as soon as it
    /// is produced.
    ///
    /// On error the observer may already have seen the events of earlier
    /// rounds, but no [`Allocation`] is returned.
    pub fn run_with_observer<F>(
        rights: &[f64],
        valuations: &[Vec<f64>],
        config: &WrrConfig,
        mut observer: F,
    ) -> AllocResult<Allocation>
    where
        F: FnMut(&AllocationEvent),
    {
        config.validate()?;
        let num_items = validate_input(rights, valuations)?;
        let num_players = rights.len();

        let mut allocated = vec![0usize; num_players];
        let mut removed = vec![false; num_items];
        let mut priorities = vec![0.0f64; num_players];
        let mut events = Vec::with_capacity(num_items);

        for round in 0..num_items {
            for (j, (&right, &count)) in rights.iter().zip(&allocated).enumerate() {
                priorities[j] = priority(j, right, count, config)?;
            }
            trace!(round, ?priorities, "priorities computed");

            let player = select_player(&priorities).ok_or_else(|| {
                AllocError::InvalidInput("no player available to pick".into())
            })?;
            let row = &valuations[player];
            let item = select_item(row, &removed).ok_or_else(|| {
                AllocError::InvalidInput(format!("no item left for player {player}"))
            })?;

            let event = AllocationEvent::new(player, item, row[item]);
            debug!(
                round,
                player,
                item,
                value = event.value,
                priority = priorities[player],
                "item allocated"
            );

            allocated[player] += 1;
            removed[item] = true;
            observer(&event);
            events.push(event);
        }

        info!(
            players = num_players,
            items = num_items,
            "allocation complete"
        );

        Ok(Allocation {
            events,
            allocated_counts: allocated,
        })
    }

    /// Runs the allocation and marks every allocated item as removed in the
    /// caller's matrix by setting its entry to `-inf` in every row.
    ///
    /// The matrix is only written once the run has succeeded; on error it
    /// is left as it was passed in.
    pub fn run_in_place(
        rights: &[f64],
        valuations: &mut [Vec<f64>],
        config: &WrrConfig,
    ) -> AllocResult<Allocation> {
        let alloc = Self::run(rights, valuations, config)?;
        for event in &alloc.events {
            for row in valuations.iter_mut() {
                row[event.item] = f64::NEG_INFINITY;
            }
        }
        Ok(alloc)
    }
}

/// Allocates every item with decay constant `y`, leaving `valuations`
/// untouched.
///
/// ```
/// let rights = [2.0, 3.0, 5.0];
/// let row = vec![11.0, 22.0, 33.0, 44.0, 55.0];
/// let valuations = vec![row.clone(), row.clone(), row];
///
/// let alloc = u_fairdiv::allocate(&rights, &valuations, 1.0).unwrap();
/// let players: Vec<usize> = alloc.events.iter().map(|e| e.player).collect();
/// assert_eq!(players, vec![2, 1, 2, 0, 2]);
/// ```
pub fn allocate(rights: &[f64], valuations: &[Vec<f64>], y: f64) -> AllocResult<Allocation> {
    WrrRunner::run(rights, valuations, &WrrConfig::default().with_y(y))
}

/// Like [`allocate`], but overwrites allocated items with `-inf` in the
/// caller's matrix.
pub fn allocate_in_place(
    rights: &[f64],
    valuations: &mut [Vec<f64>],
    y: f64,
) -> AllocResult<Allocation> {
    WrrRunner::run_in_place(rights, valuations, &WrrConfig::default().with_y(y))
}

/// Checks dimensions and values and returns the item count.
pub(crate) fn validate_input(rights: &[f64], valuations: &[Vec<f64>]) -> AllocResult<usize> {
    if rights.is_empty() {
        return Err(AllocError::InvalidInput("rights must not be empty".into()));
    }
    if valuations.is_empty() {
        return Err(AllocError::InvalidInput(
            "valuations must not be empty".into(),
        ));
    }
    if rights.len() != valuations.len() {
        return Err(AllocError::InvalidInput(format!(
            "{} rights but {} valuation rows",
            rights.len(),
            valuations.len()
        )));
    }

    let num_items = valuations[0].len();
    for (j, row) in valuations.iter().enumerate() {
        if row.len() != num_items {
            return Err(AllocError::InvalidInput(format!(
                "valuation row {j} has {} items, expected {num_items}",
                row.len()
            )));
        }
        if let Some(i) = row.iter().position(|v| v.is_nan()) {
            return Err(AllocError::InvalidInput(format!(
                "valuation of item {i} by player {j} is NaN"
            )));
        }
    }

    for (j, &right) in rights.iter().enumerate() {
        if !right.is_finite() || right <= 0.0 {
            return Err(AllocError::InvalidInput(format!(
                "right of player {j} must be positive and finite, got {right}"
            )));
        }
    }

    Ok(num_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrr::ZeroDenominatorPolicy;

    fn events(alloc: &Allocation) -> Vec<(usize, usize, f64)> {
        alloc
            .events
            .iter()
            .map(|e| (e.player, e.item, e.value))
            .collect()
    }

    fn identical_rows(players: usize) -> Vec<Vec<f64>> {
        vec![vec![11.0, 22.0, 33.0, 44.0, 55.0]; players]
    }

    #[test]
    fn test_equal_rights_equal_valuations() {
        let alloc = allocate(&[1.0, 1.0, 1.0], &identical_rows(3), 1.0).unwrap();
        assert_eq!(
            events(&alloc),
            vec![
                (0, 4, 55.0),
                (1, 3, 44.0),
                (2, 2, 33.0),
                (0, 1, 22.0),
                (1, 0, 11.0)
            ]
        );
        assert_eq!(alloc.allocated_counts, vec![2, 2, 1]);
    }

    #[test]
    fn test_run_does_not_mutate_input() {
        let valuations = identical_rows(2);
        let before = valuations.clone();
        WrrRunner::run(&[1.0, 3.0], &valuations, &WrrConfig::default()).unwrap();
        assert_eq!(valuations, before);
    }

    #[test]
    fn test_run_in_place_marks_removed() {
        let mut valuations = vec![vec![5.0, 1.0, 3.0], vec![2.0, 4.0, 6.0]];
        let alloc = allocate_in_place(&[1.0, 1.0], &mut valuations, 1.0).unwrap();

        assert_eq!(alloc.num_items(), 3);
        for row in &valuations {
            assert!(row.iter().all(|&v| v == f64::NEG_INFINITY));
        }
    }

    #[test]
    fn test_run_in_place_matches_run() {
        let rights = [1.0, 2.0, 4.0];
        let mut valuations = vec![
            vec![11.0, 11.0, 22.0, 33.0, 44.0],
            vec![11.0, 22.0, 44.0, 55.0, 66.0],
            vec![11.0, 33.0, 22.0, 11.0, 66.0],
        ];
        let expected = allocate(&rights, &valuations, 1.0).unwrap();
        let actual = allocate_in_place(&rights, &mut valuations, 1.0).unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_caller_negative_infinity_never_duplicates() {
        // Item 1 is already at -inf; after item 0 goes, it must still be
        // picked rather than item 0 again.
        let mut valuations = vec![vec![1.0, f64::NEG_INFINITY]];
        let alloc = allocate_in_place(&[1.0], &mut valuations, 1.0).unwrap();
        assert_eq!(
            events(&alloc),
            vec![(0, 0, 1.0), (0, 1, f64::NEG_INFINITY)]
        );
    }

    #[test]
    fn test_no_items() {
        let valuations = vec![Vec::new(), Vec::new()];
        let alloc = allocate(&[1.0, 2.0], &valuations, 1.0).unwrap();
        assert!(alloc.events.is_empty());
        assert_eq!(alloc.allocated_counts, vec![0, 0]);
    }

    #[test]
    fn test_no_items_zero_y_is_not_an_error() {
        let mut valuations = vec![Vec::new()];
        let alloc = allocate_in_place(&[1.0], &mut valuations, 0.0).unwrap();
        assert!(alloc.events.is_empty());
        assert_eq!(valuations, vec![Vec::<f64>::new()]);
    }

    #[test]
    fn test_invalid_dimensions() {
        let cases: Vec<(Vec<f64>, Vec<Vec<f64>>)> = vec![
            (vec![], vec![vec![1.0]]),
            (vec![1.0], vec![]),
            (vec![1.0, 1.0], vec![vec![1.0]]),
            (vec![1.0, 1.0], vec![vec![1.0, 2.0], vec![1.0]]),
        ];
        for (rights, valuations) in cases {
            let err = allocate(&rights, &valuations, 1.0).unwrap_err();
            assert!(
                matches!(err, AllocError::InvalidInput(_)),
                "expected InvalidInput for {rights:?} / {valuations:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_values() {
        let nan_value = allocate(&[1.0], &[vec![1.0, f64::NAN]], 1.0);
        assert!(matches!(nan_value, Err(AllocError::InvalidInput(_))));

        for right in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = allocate(&[1.0, right], &[vec![1.0], vec![1.0]], 1.0);
            assert!(matches!(result, Err(AllocError::InvalidInput(_))));
        }

        let bad_y = allocate(&[1.0], &[vec![1.0]], f64::NAN);
        assert!(matches!(bad_y, Err(AllocError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_input_leaves_matrix_untouched() {
        let mut valuations = vec![vec![1.0, 2.0], vec![3.0]];
        let before = valuations.clone();
        assert!(allocate_in_place(&[1.0, 1.0], &mut valuations, 1.0).is_err());
        assert_eq!(valuations, before);
    }

    #[test]
    fn test_zero_y_errors_by_default() {
        let result = allocate(&[1.0, 2.0], &identical_rows(2), 0.0);
        assert_eq!(
            result,
            Err(AllocError::DivisionByZero {
                player: 0,
                allocated: 0
            })
        );
    }

    #[test]
    fn test_zero_denominator_mid_run() {
        // y = -1: round one picks player 0 at priority -1; in round two its
        // denominator is 1 + (-1) = 0.
        let result = allocate(&[1.0, 2.0], &identical_rows(2), -1.0);
        assert_eq!(
            result,
            Err(AllocError::DivisionByZero {
                player: 0,
                allocated: 1
            })
        );
    }

    #[test]
    fn test_zero_y_infinite_priority() {
        let config = WrrConfig::default()
            .with_y(0.0)
            .with_zero_denominator(ZeroDenominatorPolicy::InfinitePriority);
        let valuations = vec![vec![5.0, 4.0, 3.0], vec![1.0, 2.0, 3.0]];
        let alloc = WrrRunner::run(&[1.0, 2.0], &valuations, &config).unwrap();

        assert_eq!(
            events(&alloc),
            vec![(0, 0, 5.0), (1, 2, 3.0), (1, 1, 2.0)]
        );
    }

    #[test]
    fn test_player_tie_prefers_lower_index() {
        // After player 1's first pick both priorities are exactly 1.0.
        let valuations = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]];
        let alloc = allocate(&[1.0, 2.0], &valuations, 1.0).unwrap();
        let players: Vec<usize> = alloc.events.iter().map(|e| e.player).collect();
        assert_eq!(players, vec![1, 0, 1]);
    }

    #[test]
    fn test_item_tie_prefers_lower_index() {
        let valuations = vec![vec![7.0, 9.0, 9.0, 9.0]];
        let alloc = allocate(&[1.0], &valuations, 1.0).unwrap();
        let items: Vec<usize> = alloc.events.iter().map(|e| e.item).collect();
        assert_eq!(items, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_observer_sees_events_in_order() {
        let valuations = identical_rows(3);
        let mut seen = Vec::new();
        let alloc = WrrRunner::run_with_observer(
            &[2.0, 3.0, 5.0],
            &valuations,
            &WrrConfig::default(),
            |e| seen.push(*e),
        )
        .unwrap();
        assert_eq!(seen, alloc.events);
    }
}
