//! Candidate catalog.
//!
//! The catalog is a fixed, ordered table compiled into the binary. The first
//! entry is the default selection.

pub mod candidates;

pub use candidates::{all, default_candidate, find, Candidate};
