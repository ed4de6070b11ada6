//! wheelgen core
//!
//! Covering-design ("lottery wheel") generation: full, abbreviated (greedy
//! set-cover with a verifiable coverage guarantee), and pair-balanced wheels

pub mod comb;     // Combinatorics primitives (binomial, k-subsets)
pub mod model;    // Data model (pool, tickets, guarantees, config, results)
pub mod coverage; // Coverage evaluation against (t, m) guarantees
pub mod generate; // Wheel generators (full, greedy, balanced)
pub mod engine;   // Guarantee parsing and generator dispatch

pub use comb::{binomial, k_subsets, KSubsets};
pub use engine::generate_wheel;
pub use model::{
    CoverageResult, DesignError, DesignResult, GameShape, GuaranteeLevel, GuaranteeSpec, Limits,
    Pool, Ticket, WheelConfig, WheelResult, WheelType,
};
