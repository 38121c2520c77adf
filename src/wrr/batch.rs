//! Owned allocation instances and batch evaluation.

use super::config::WrrConfig;
use super::runner::{validate_input, WrrRunner};
use super::types::Allocation;
use crate::error::AllocResult;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A validated fair-division instance owning its data.
///
/// Every instance carries its own valuation matrix, so instances can be
/// allocated independently of one another.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInstance"))]
pub struct AllocInstance {
    rights: Vec<f64>,
    valuations: Vec<Vec<f64>>,
}

/// Unvalidated wire form of [`AllocInstance`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstance {
    rights: Vec<f64>,
    valuations: Vec<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstance> for AllocInstance {
    type Error = crate::error::AllocError;

    fn try_from(raw: RawInstance) -> AllocResult<Self> {
        Self::new(raw.rights, raw.valuations)
    }
}

impl AllocInstance {
    /// Creates an instance, rejecting malformed dimensions or values.
    pub fn new(rights: Vec<f64>, valuations: Vec<Vec<f64>>) -> AllocResult<Self> {
        validate_input(&rights, &valuations)?;
        Ok(Self { rights, valuations })
    }

    pub fn rights(&self) -> &[f64] {
        &self.rights
    }

    pub fn valuations(&self) -> &[Vec<f64>] {
        &self.valuations
    }

    pub fn num_players(&self) -> usize {
        self.rights.len()
    }

    pub fn num_items(&self) -> usize {
        self.valuations.first().map_or(0, Vec::len)
    }

    /// Allocates this instance.
    pub fn allocate(&self, config: &WrrConfig) -> AllocResult<Allocation> {
        WrrRunner::run(&self.rights, &self.valuations, config)
    }
}

/// Allocates each instance independently with the same configuration.
///
/// Results are returned in input order. With the `parallel` feature the
/// instances are evaluated on the rayon thread pool.
pub fn allocate_batch(
    instances: &[AllocInstance],
    config: &WrrConfig,
) -> Vec<AllocResult<Allocation>> {
    #[cfg(feature = "parallel")]
    {
        instances.par_iter().map(|inst| inst.allocate(config)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        instances.iter().map(|inst| inst.allocate(config)).collect()
    }
}
