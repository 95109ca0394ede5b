// Sampling module

pub mod reachable_set;

pub use reachable_set::*;
