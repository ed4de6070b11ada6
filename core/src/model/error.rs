//! Error taxonomy for wheel generation
//!
//! Validation errors abort before any enumeration; resource-limit errors
//! carry the offending estimate so the caller can suggest a smaller pool or
//! a simpler guarantee. Heuristic non-convergence is NOT an error: it is
//! surfaced as a score below 100 in the result.

use thiserror::Error;

/// Errors raised by wheel generation
#[derive(Error, Debug)]
pub enum DesignError {
    #[error("pool must contain at least one number")]
    EmptyPool,

    #[error("game size must be at least 1")]
    ZeroGameSize,

    #[error("pool number {number} is outside the game range 1..={total_numbers}")]
    NumberOutOfRange { number: u32, total_numbers: u32 },

    #[error("pool has {pool_size} numbers but every ticket needs {game_size}")]
    PoolTooSmall { pool_size: usize, game_size: usize },

    #[error("guarantee expects {must_match} drawn numbers inside a pool of only {pool_size}")]
    MustMatchExceedsPool { must_match: usize, pool_size: usize },

    #[error("guarantee promises {guaranteed} matches but a ticket only holds {game_size} numbers")]
    GuaranteedExceedsTicket { guaranteed: usize, game_size: usize },

    #[error("guarantee promises {guaranteed} matches from only {must_match} qualifying numbers")]
    GuaranteedExceedsMustMatch { guaranteed: usize, must_match: usize },

    #[error("unrecognized guarantee level '{0}' (expected m-if-t notation, e.g. \"3-if-4\")")]
    InvalidGuaranteeLevel(String),

    #[error(
        "{what} would need ~{estimated} combinations, over the limit of {limit}; \
         use a smaller pool or a simpler guarantee"
    )]
    CombinationExplosion {
        what: &'static str,
        estimated: u64,
        limit: u64,
    },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wheel generation operations
pub type DesignResult<T> = Result<T, DesignError>;
