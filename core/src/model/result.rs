//! Generation results
//!
//! The uniform result structure every strategy returns, plus the derived
//! coverage measurement. Results are created once per generation call,
//! immutable, and serializable for export.

use super::error::DesignResult;
use super::ticket::Ticket;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Coverage measurement for a ticket set against a `(t, m)` guarantee.
///
/// Derived and recomputed on demand, never persisted. 100 percent is a
/// mathematically verifiable guarantee over every possible draw outcome, not
/// a probabilistic estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageResult {
    /// t-subsets covered by at least one ticket
    pub covered: u64,

    /// Total t-subsets of the pool
    pub total: u64,

    /// Rounded integer percentage covered
    pub percent: u8,
}

/// Result of one wheel generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelResult {
    /// The generated tickets, each ascending-sorted, pairwise distinct
    pub tickets: Vec<Ticket>,

    /// Size of the exhaustive wheel, binomial(n, K)
    pub full_wheel_count: u64,

    /// Number of tickets generated
    pub ticket_count: usize,

    /// Rounded savings versus the full wheel, in [0, 100)
    pub savings_percent: u8,

    /// Human-readable description of the guarantee this wheel carries
    pub guarantee: String,

    /// Coverage percentage (full/abbreviated) or balance score (balanced)
    pub score: u8,
}

impl WheelResult {
    /// Export the result as pretty-printed JSON.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> DesignResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a previously exported result.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> DesignResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_roundtrip_in_memory() {
        let result = WheelResult {
            tickets: vec![Ticket::new(vec![1, 2]), Ticket::new(vec![3, 4])],
            full_wheel_count: 6,
            ticket_count: 2,
            savings_percent: 67,
            guarantee: "at least 1 winning number whenever 2 drawn numbers fall in the pool"
                .to_string(),
            score: 100,
        };

        let json = serde_json::to_string(&result).unwrap();
        let reloaded: WheelResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, reloaded);
    }
}
