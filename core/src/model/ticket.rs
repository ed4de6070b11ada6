//! Playable tickets
//!
//! A ticket is one K-sized combination drawn from the pool. Tickets are kept
//! ascending-sorted so intersection tests against draw subsets (also sorted)
//! run as a single merge pass.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A K-sized subset of the pool, ascending-sorted, distinct numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket(Vec<u32>);

impl Ticket {
    /// Create a ticket from numbers in any order.
    pub fn new(mut numbers: Vec<u32>) -> Self {
        numbers.sort_unstable();
        Self(numbers)
    }

    /// Create a ticket from numbers already sorted ascending.
    pub fn from_sorted(numbers: Vec<u32>) -> Self {
        debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        Self(numbers)
    }

    /// The ticket numbers, ascending.
    pub fn numbers(&self) -> &[u32] {
        &self.0
    }

    /// Ticket size K.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the ticket is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count how many of `draw`'s numbers this ticket contains.
    ///
    /// `draw` must be sorted ascending.
    pub fn overlap_count(&self, draw: &[u32]) -> usize {
        let mut count = 0;
        let (mut i, mut j) = (0, 0);

        while i < self.0.len() && j < draw.len() {
            match self.0[i].cmp(&draw[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    count += 1;
                    i += 1;
                    j += 1;
                }
            }
        }

        count
    }

    /// Check whether this ticket shares at least `m` numbers with `draw`.
    ///
    /// Same merge pass as [`overlap_count`](Self::overlap_count) but exits as
    /// soon as the threshold is reached or becomes unreachable.
    pub fn overlap_at_least(&self, draw: &[u32], m: usize) -> bool {
        if m == 0 {
            return true;
        }

        let mut found = 0;
        let (mut i, mut j) = (0, 0);

        while i < self.0.len() && j < draw.len() {
            // Not enough elements left on either side to reach m
            if found + (self.0.len() - i).min(draw.len() - j) < m {
                return false;
            }

            match self.0[i].cmp(&draw[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    found += 1;
                    if found >= m {
                        return true;
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        false
    }

    /// All unordered pairs of numbers inside this ticket.
    pub fn pairs(&self) -> Vec<(u32, u32)> {
        let n = self.0.len();
        let mut pairs = Vec::with_capacity(n.saturating_sub(1) * n / 2);

        for i in 0..n {
            for j in i + 1..n {
                pairs.push((self.0[i], self.0[j]));
            }
        }

        pairs
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:>2}", n)?;
        }
        Ok(())
    }
}
