//! Generation configuration
//!
//! Strategy selection, guarantee levels, the outer game's shape, and the
//! resource ceilings. Ceilings are configuration rather than constants so
//! they can be tuned per deployment without touching algorithm logic.

use super::guarantee::GuaranteeSpec;
use serde::{Deserialize, Serialize};

/// Generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelType {
    /// Every K-subset of the pool (maximal guarantee, maximal ticket count)
    Full,

    /// Greedy covering design satisfying an explicit guarantee
    Abbreviated,

    /// Heuristic design spreading pairwise co-occurrence evenly
    Balanced,
}

/// Guarantee selection: a preset in `"m-if-t"` notation or explicit
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuaranteeLevel {
    /// Named preset, e.g. `"3-if-4"`
    Preset(String),

    /// Explicit custom parameters
    Custom(GuaranteeSpec),
}

/// Shape of the outer game the wheel is played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameShape {
    /// Numbers per ticket (K)
    pub game_size: usize,

    /// Highest playable number; pool numbers must lie in 1..=total_numbers
    pub total_numbers: u32,
}

/// Resource ceilings applied before any enumeration is allocated.
///
/// Naive enumeration grows binomially, so every entry point estimates
/// `binomial(n, k)` against these limits first and rejects the request with
/// a descriptive error when it would blow past them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum t-subsets tracked by the coverage universe
    pub max_universe: u64,

    /// Maximum candidate tickets enumerated for selection
    pub max_candidates: u64,

    /// Ticket size at which the far smaller wide-ticket cap applies
    pub wide_ticket_size: usize,

    /// Candidate cap for wide tickets, where each ticket carries
    /// proportionally more enumeration weight
    pub wide_max_candidates: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_universe: 100_000,
            max_candidates: 50_000,
            wide_ticket_size: 50,
            wide_max_candidates: 500,
        }
    }
}

impl Limits {
    /// Candidate-ticket ceiling for a given ticket size.
    pub fn candidate_cap(&self, game_size: usize) -> u64 {
        if game_size >= self.wide_ticket_size {
            self.wide_max_candidates
        } else {
            self.max_candidates
        }
    }
}

/// Complete configuration for one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Which generator to run
    pub wheel_type: WheelType,

    /// Guarantee level (abbreviated wheels)
    pub guarantee: GuaranteeLevel,

    /// Number of tickets to produce (balanced wheels)
    pub target_count: usize,

    /// Ticket budget for the greedy optimizer
    pub max_tickets: usize,

    /// RNG seed for the balanced generator; None seeds from entropy
    pub seed: Option<u64>,

    /// Resource ceilings
    pub limits: Limits,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            wheel_type: WheelType::Full,
            guarantee: GuaranteeLevel::Preset("3-if-4".to_string()),
            target_count: 50,
            max_tickets: 5000,
            seed: None,
            limits: Limits::default(),
        }
    }
}

impl WheelConfig {
    /// Configuration for a full (exhaustive) wheel.
    pub fn full() -> Self {
        Self {
            wheel_type: WheelType::Full,
            ..Self::default()
        }
    }

    /// Configuration for an abbreviated wheel with the given guarantee.
    pub fn abbreviated(guarantee: GuaranteeLevel) -> Self {
        Self {
            wheel_type: WheelType::Abbreviated,
            guarantee,
            ..Self::default()
        }
    }

    /// Configuration for a balanced wheel of `target_count` tickets.
    pub fn balanced(target_count: usize) -> Self {
        Self {
            wheel_type: WheelType::Balanced,
            target_count,
            ..Self::default()
        }
    }

    /// Set the RNG seed for reproducible balanced designs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the greedy ticket budget.
    pub fn with_max_tickets(mut self, max_tickets: usize) -> Self {
        self.max_tickets = max_tickets;
        self
    }

    /// Override the resource ceilings.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}
