//! Reference allocation scenarios.
//!
//! A fixed table of inputs with their known event sequences, used as a
//! self-check by the `wrr` binary and by the test suite.

use crate::error::AllocError;
use crate::wrr::{allocate, Allocation, AllocationEvent};
use thiserror::Error;

/// One reference input together with its expected events.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub rights: Vec<f64>,
    pub valuations: Vec<Vec<f64>>,
    pub y: f64,
    /// Expected `(player, item, value)` triples, in order.
    pub expected: Vec<(usize, usize, f64)>,
}

/// A scenario whose actual run diverged from its expected events.
#[derive(Debug, Error)]
pub enum ScenarioMismatch {
    #[error("scenario '{name}' failed: {source}")]
    Failed {
        name: &'static str,
        #[source]
        source: AllocError,
    },

    #[error("scenario '{name}': expected {expected}, got {actual}")]
    Events {
        name: &'static str,
        expected: String,
        actual: String,
    },
}

impl Scenario {
    pub fn expected_events(&self) -> Vec<AllocationEvent> {
        self.expected
            .iter()
            .map(|&(player, item, value)| AllocationEvent::new(player, item, value))
            .collect()
    }

    /// Runs the allocator and compares against the expected events.
    pub fn check(&self) -> Result<Allocation, ScenarioMismatch> {
        let alloc = allocate(&self.rights, &self.valuations, self.y).map_err(|source| {
            ScenarioMismatch::Failed {
                name: self.name,
                source,
            }
        })?;

        let expected = self.expected_events();
        if alloc.events != expected {
            return Err(ScenarioMismatch::Events {
                name: self.name,
                expected: render(&expected),
                actual: render(&alloc.events),
            });
        }
        Ok(alloc)
    }
}

fn render(events: &[AllocationEvent]) -> String {
    let parts: Vec<String> = events
        .iter()
        .map(|e| format!("({}, {}, {})", e.player, e.item, e.value))
        .collect();
    format!("[{}]", parts.join(", "))
}

/// The four reference scenarios.
pub fn reference_scenarios() -> Vec<Scenario> {
    let ascending = vec![11.0, 22.0, 33.0, 44.0, 55.0];
    vec![
        Scenario {
            name: "same rights, same valuations",
            rights: vec![1.0, 1.0, 1.0],
            valuations: vec![ascending.clone(), ascending.clone(), ascending.clone()],
            y: 1.0,
            expected: vec![
                (0, 4, 55.0),
                (1, 3, 44.0),
                (2, 2, 33.0),
                (0, 1, 22.0),
                (1, 0, 11.0),
            ],
        },
        Scenario {
            name: "same rights, different valuations",
            rights: vec![1.0, 1.0, 1.0],
            valuations: vec![
                vec![11.0, 11.0, 22.0, 33.0, 44.0],
                vec![11.0, 22.0, 44.0, 55.0, 66.0],
                vec![11.0, 33.0, 22.0, 11.0, 66.0],
            ],
            y: 1.0,
            expected: vec![
                (0, 4, 44.0),
                (1, 3, 55.0),
                (2, 1, 33.0),
                (0, 2, 22.0),
                (1, 0, 11.0),
            ],
        },
        Scenario {
            name: "different rights, same valuations",
            rights: vec![2.0, 3.0, 5.0],
            valuations: vec![ascending.clone(), ascending.clone(), ascending],
            y: 1.0,
            expected: vec![
                (2, 4, 55.0),
                (1, 3, 44.0),
                (2, 2, 33.0),
                (0, 1, 22.0),
                (2, 0, 11.0),
            ],
        },
        Scenario {
            name: "different rights, different valuations",
            rights: vec![1.0, 2.0, 4.0],
            valuations: vec![
                vec![11.0, 15.0, 22.0, 90.0, 44.0],
                vec![39.0, 22.0, 44.0, 55.0, 66.0],
                vec![11.0, 51.0, 22.0, 77.0, 66.0],
            ],
            y: 1.0,
            expected: vec![
                (2, 3, 77.0),
                (1, 4, 66.0),
                (2, 1, 51.0),
                (2, 2, 22.0),
                (0, 0, 11.0),
            ],
        },
    ]
}

/// Inputs for the demonstration run: `(rights, valuations, y)`.
pub fn demo_instance() -> (Vec<f64>, Vec<Vec<f64>>, f64) {
    (
        vec![1.0, 2.0, 4.0],
        vec![
            vec![11.0, 11.0, 22.0, 33.0, 44.0],
            vec![11.0, 22.0, 44.0, 55.0, 66.0],
            vec![11.0, 33.0, 22.0, 11.0, 66.0],
        ],
        1.0,
    )
}
