//! Puzzle realizations of the solver contract.
//!
//! Each puzzle is an immutable value type implementing
//! [`Configuration`](crate::configuration::Configuration), so the same
//! breadth-first solver runs all of them unchanged.

pub mod crossing;
pub mod hoppers;
pub mod slide;
pub mod strings;
