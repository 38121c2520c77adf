//! Weighted round-robin fair-division allocation.
//!
//! Assigns indivisible items to players with unequal entitlements
//! ("rights"). Each round the player with the highest
//! `right / (allocated + y)` picks its favourite remaining item.
//!
//! - [`wrr`]: the allocator, its configuration, and batch evaluation
//! - [`scenarios`]: reference inputs with known outputs
//! - [`error`]: the [`AllocError`] taxonomy
//!
//! # Example
//!
//! ```
//! let rights = [1.0, 2.0, 4.0];
//! let valuations = vec![
//!     vec![11.0, 11.0, 22.0, 33.0, 44.0],
//!     vec![11.0, 22.0, 44.0, 55.0, 66.0],
//!     vec![11.0, 33.0, 22.0, 11.0, 66.0],
//! ];
//!
//! let alloc = u_fairdiv::allocate(&rights, &valuations, 1.0).unwrap();
//! assert_eq!(alloc.events[0].to_string(), "player 2 takes item 4 with value 66");
//! assert_eq!(alloc.allocated_counts, vec![1, 1, 3]);
//! ```

pub mod error;
pub mod scenarios;
pub mod wrr;

pub use error::{AllocError, AllocResult};
pub use wrr::{allocate, allocate_in_place, Allocation, AllocationEvent};
