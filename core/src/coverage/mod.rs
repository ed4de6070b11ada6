//! Coverage evaluation
//!
//! Formalizes the wheeling guarantee: enumerate every t-subset of the pool
//! (every possible partial-draw outcome) and check whether some ticket
//! intersects it in at least m numbers. A pure function over immutable
//! inputs; no state survives the call.

use crate::comb::k_subsets;
use crate::model::{CoverageResult, GuaranteeSpec, Pool, Ticket};

/// Measure what fraction of all t-subsets of the pool a ticket set covers.
///
/// A t-subset is covered when at least one ticket shares ≥ m numbers with
/// it. Cost is O(|t-subsets| × |tickets| × t); callers bound it with the
/// explosion guards before enumerating.
///
/// Zero t-subsets (t > n) is vacuously full coverage.
pub fn evaluate(tickets: &[Ticket], pool: &Pool, guarantee: &GuaranteeSpec) -> CoverageResult {
    let t = guarantee.must_match;
    let m = guarantee.guaranteed;

    let mut covered = 0u64;
    let mut total = 0u64;

    for draw in k_subsets(pool.numbers(), t) {
        total += 1;
        if tickets.iter().any(|ticket| ticket.overlap_at_least(&draw, m)) {
            covered += 1;
        }
    }

    let percent = if total == 0 {
        100
    } else {
        ((covered as f64 / total as f64) * 100.0).round() as u8
    };

    CoverageResult {
        covered,
        total,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tickets(raw: &[&[u32]]) -> Vec<Ticket> {
        raw.iter().map(|t| Ticket::new(t.to_vec())).collect()
    }

    #[test]
    fn test_full_coverage_of_small_pool() {
        let pool = Pool::new(&[1, 2, 3, 4]);
        let set = tickets(&[&[1, 2], &[3, 4]]);
        let guarantee = GuaranteeSpec::new(1, 2);

        let result = evaluate(&set, &pool, &guarantee);
        assert_eq!(result.total, 6);
        assert_eq!(result.covered, 6);
        assert_eq!(result.percent, 100);
    }

    #[test]
    fn test_partial_coverage() {
        let pool = Pool::new(&[1, 2, 3, 4]);
        // A single ticket leaves the pair {3, 4} uncovered at m = 1
        let set = tickets(&[&[1, 2]]);
        let guarantee = GuaranteeSpec::new(1, 2);

        let result = evaluate(&set, &pool, &guarantee);
        assert_eq!(result.total, 6);
        assert_eq!(result.covered, 5);
        assert_eq!(result.percent, 83);
    }

    #[test]
    fn test_no_tickets_covers_nothing() {
        let pool = Pool::new(&[1, 2, 3, 4, 5]);
        let result = evaluate(&[], &pool, &GuaranteeSpec::new(2, 3));

        assert_eq!(result.covered, 0);
        assert_eq!(result.percent, 0);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let pool = Pool::new(&[2, 4, 6, 8, 10, 12]);
        let set = tickets(&[&[2, 4, 6], &[8, 10, 12], &[2, 8, 12]]);
        let guarantee = GuaranteeSpec::new(2, 3);

        let first = evaluate(&set, &pool, &guarantee);
        let second = evaluate(&set, &pool, &guarantee);
        assert_eq!(first, second);
    }

    #[test]
    fn test_vacuous_coverage_when_no_t_subsets() {
        let pool = Pool::new(&[1, 2]);
        let result = evaluate(&[], &pool, &GuaranteeSpec::new(1, 3));

        assert_eq!(result.total, 0);
        assert_eq!(result.percent, 100);
    }
}
