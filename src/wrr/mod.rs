//! Weighted round-robin (WRR) allocation.
//!
//! A sequential fair-division procedure for indivisible items. Every
//! round, each player's priority is recomputed as
//! `right / (allocated + y)`; the player with the highest priority picks
//! its most-valued remaining item, and that item disappears for everyone.
//! The procedure is deterministic: ties between players and between items
//! both resolve to the lowest index.
//!
//! It is a greedy picking sequence, not an optimizer. No envy-freeness or
//! other fairness guarantee is implied beyond what the divisor rule
//! produces.
//!
//! # Key Types
//!
//! - [`WrrConfig`]: Decay constant `y` and zero-denominator policy
//! - [`WrrRunner`]: Executes the allocation loop
//! - [`Allocation`]: Ordered [`AllocationEvent`]s and per-player counts
//! - [`AllocInstance`]: Owned, validated instance for batch runs
//!
//! # References
//!
//! - Chakraborty, Igarashi, Suksompong & Zick (2021), "Weighted Envy-Freeness
//!   in Indivisible Item Allocation"
//! - Balinski & Young (2001), *Fair Representation* (divisor methods)

mod batch;
mod config;
mod runner;
mod selection;
mod types;

pub use batch::{allocate_batch, AllocInstance};
pub use config::{WrrConfig, ZeroDenominatorPolicy};
pub use runner::{allocate, allocate_in_place, WrrRunner};
pub use selection::{priority, select_item, select_player};
pub use types::{Allocation, AllocationEvent};
