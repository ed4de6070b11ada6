//! Combinatorics primitives
//!
//! Binomial coefficients without factorial overflow and lazy k-subset
//! enumeration. Everything downstream (coverage evaluation, all three
//! generators) is built on these two operations.

mod binomial;
mod subsets;

pub use binomial::binomial;
pub use subsets::{k_subsets, KSubsets};
