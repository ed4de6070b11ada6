//! Coverage guarantees
//!
//! A guarantee `(guaranteed: m, must_match: t)` reads: "if t of the drawn
//! numbers fall inside the pool, at least one ticket shares at least m of
//! them with the draw". The string notation is `"m-if-t"`.

use super::error::{DesignError, DesignResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(guaranteed, must_match)` coverage guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuaranteeSpec {
    /// Minimum matches at least one ticket must deliver (m)
    pub guaranteed: usize,

    /// How many drawn numbers must fall inside the pool for the guarantee to
    /// apply (t)
    pub must_match: usize,
}

impl GuaranteeSpec {
    /// Create a guarantee spec.
    pub fn new(guaranteed: usize, must_match: usize) -> Self {
        Self {
            guaranteed,
            must_match,
        }
    }

    /// Parse `"m-if-t"` notation, e.g. `"3-if-4"`.
    pub fn parse(level: &str) -> DesignResult<Self> {
        let invalid = || DesignError::InvalidGuaranteeLevel(level.to_string());

        let (m, t) = level.split_once("-if-").ok_or_else(invalid)?;
        let guaranteed: usize = m.trim().parse().map_err(|_| invalid())?;
        let must_match: usize = t.trim().parse().map_err(|_| invalid())?;

        if guaranteed == 0 || must_match == 0 {
            return Err(invalid());
        }

        Ok(Self {
            guaranteed,
            must_match,
        })
    }

    /// Validate the guarantee against a ticket size and pool size.
    ///
    /// Checked before any enumeration: m ≤ K, m ≤ t, t ≤ n.
    pub fn validate(&self, game_size: usize, pool_size: usize) -> DesignResult<()> {
        if self.guaranteed > game_size {
            return Err(DesignError::GuaranteedExceedsTicket {
                guaranteed: self.guaranteed,
                game_size,
            });
        }

        if self.guaranteed > self.must_match {
            return Err(DesignError::GuaranteedExceedsMustMatch {
                guaranteed: self.guaranteed,
                must_match: self.must_match,
            });
        }

        if self.must_match > pool_size {
            return Err(DesignError::MustMatchExceedsPool {
                must_match: self.must_match,
                pool_size,
            });
        }

        Ok(())
    }

    /// Human-readable description for result display.
    pub fn describe(&self) -> String {
        format!(
            "at least {} winning numbers whenever {} of the drawn numbers fall in the pool",
            self.guaranteed, self.must_match
        )
    }
}

impl fmt::Display for GuaranteeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-if-{}", self.guaranteed, self.must_match)
    }
}
