//! Wheel generators
//!
//! Three strategies over the same pool: exhaustive enumeration, greedy
//! set-cover optimization, and pairwise-balanced sampling.

pub mod balanced;
pub mod full;
pub mod greedy;

pub use balanced::{balance_score, BalancedWheel};
pub use greedy::GreedyWheel;
