//! Greedy covering optimization (abbreviated wheel)
//!
//! Classic greedy set-cover: the universe is every t-subset of the pool,
//! candidates are every K-subset, and each round picks the unused candidate
//! covering the most still-uncovered universe elements. Near-minimal, not
//! optimal; minimum covering designs are an open problem.

use crate::comb::{binomial, k_subsets};
use crate::coverage;
use crate::model::{
    CoverageResult, DesignError, DesignResult, GuaranteeSpec, Limits, Pool, Ticket,
};
use tracing::{debug, warn};

/// Outcome of a greedy covering run.
#[derive(Debug, Clone)]
pub struct GreedyWheel {
    /// Selected tickets, in selection order
    pub tickets: Vec<Ticket>,

    /// Final coverage, recomputed by the evaluator
    pub coverage: CoverageResult,
}

/// Build a near-minimal ticket set for the `(t, m)` guarantee.
///
/// Stops when the universe is exhausted (coverage 100), when the
/// `max_tickets` budget is reached, or when no candidate covers anything new.
/// Budget exhaustion is surfaced as coverage below 100, not as an error.
///
/// Ties on cover count keep the first candidate in enumeration order
/// (lexicographic over the sorted pool). Deterministic, but an arbitrary
/// choice as far as design quality goes.
pub fn generate(
    pool: &Pool,
    game_size: usize,
    guarantee: &GuaranteeSpec,
    max_tickets: usize,
    limits: &Limits,
) -> DesignResult<GreedyWheel> {
    let n = pool.len();
    let t = guarantee.must_match;
    let m = guarantee.guaranteed;

    // Estimate both enumerations before allocating either
    let universe_size = binomial(n, t);
    if universe_size > limits.max_universe {
        return Err(DesignError::CombinationExplosion {
            what: "guarantee t-subsets",
            estimated: universe_size,
            limit: limits.max_universe,
        });
    }

    let candidate_size = binomial(n, game_size);
    let candidate_limit = limits.candidate_cap(game_size);
    if candidate_size > candidate_limit {
        return Err(DesignError::CombinationExplosion {
            what: "candidate tickets",
            estimated: candidate_size,
            limit: candidate_limit,
        });
    }

    let mut uncovered: Vec<Vec<u32>> = k_subsets(pool.numbers(), t).collect();
    let candidates: Vec<Ticket> = k_subsets(pool.numbers(), game_size)
        .map(Ticket::from_sorted)
        .collect();

    let mut used = vec![false; candidates.len()];
    let mut tickets = Vec::new();

    while !uncovered.is_empty() && tickets.len() < max_tickets {
        // Strictly-highest cover count; ties keep the earliest candidate
        let mut best: Option<(usize, usize)> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            if used[i] {
                continue;
            }
            let count = uncovered
                .iter()
                .filter(|draw| candidate.overlap_at_least(draw, m))
                .count();
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((i, count));
            }
        }

        // No candidate covers anything new
        let Some((index, count)) = best else {
            break;
        };

        used[index] = true;
        let chosen = candidates[index].clone();
        uncovered.retain(|draw| !chosen.overlap_at_least(draw, m));

        debug!(
            ticket = %chosen,
            newly_covered = count,
            remaining = uncovered.len(),
            "selected covering ticket"
        );

        tickets.push(chosen);
    }

    if !uncovered.is_empty() {
        warn!(
            uncovered = uncovered.len(),
            budget = max_tickets,
            "ticket budget exhausted before full coverage"
        );
    }

    let coverage = coverage::evaluate(&tickets, pool, guarantee);

    Ok(GreedyWheel { tickets, coverage })
}
