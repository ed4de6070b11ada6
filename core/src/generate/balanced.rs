//! Balanced design generation
//!
//! Approximates a Balanced Incomplete Block Design: a fixed number of
//! tickets chosen so pairwise co-occurrence spreads as evenly as possible
//! across all number pairs in the pool. Sampling-based for tractability;
//! the only generator that uses randomness, always through an injected
//! seedable source.

use crate::model::{Pool, Ticket};
use rand::seq::index;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Candidates sampled per ticket slot.
const SAMPLE_BATCH: usize = 1000;

/// Sampling attempts allowed per slot before concluding the unused candidate
/// space is exhausted.
const SAMPLE_ATTEMPTS: usize = 4 * SAMPLE_BATCH;

/// Outcome of a balanced design run.
#[derive(Debug, Clone)]
pub struct BalancedWheel {
    /// Selected tickets, in selection order
    pub tickets: Vec<Ticket>,

    /// Pair-distribution quality, 0..=100 (lower deviation scores higher)
    pub balance_score: u8,
}

/// Build `target_count` tickets with evenly spread pair co-occurrence.
///
/// Each slot samples up to 1000 unused candidate K-subsets and keeps the one
/// scoring highest under `Σ 1/(pair_count + 1)` over its internal pairs,
/// which favors under-represented pairs. Stops early once sampling can no
/// longer find an unused candidate. The caller is responsible for falling
/// back to the full wheel when `target_count` reaches the full wheel size.
pub fn generate<R: Rng + ?Sized>(
    pool: &Pool,
    game_size: usize,
    target_count: usize,
    rng: &mut R,
) -> BalancedWheel {
    // Function-local pair accumulator, one per unordered pool pair
    let mut pair_counts = zeroed_pair_counts(pool);

    let mut used: FxHashSet<Ticket> = FxHashSet::default();
    let mut tickets = Vec::with_capacity(target_count);

    for slot in 0..target_count {
        let mut best: Option<(Ticket, f64)> = None;
        let mut seen: FxHashSet<Ticket> = FxHashSet::default();
        let mut sampled = 0;
        let mut attempts = 0;

        while sampled < SAMPLE_BATCH && attempts < SAMPLE_ATTEMPTS {
            attempts += 1;

            let candidate = sample_ticket(pool, game_size, rng);
            if used.contains(&candidate) || !seen.insert(candidate.clone()) {
                continue;
            }
            sampled += 1;

            let score = pair_score(&candidate, &pair_counts);
            if best.as_ref().map_or(true, |(_, s)| score > *s) {
                best = Some((candidate, score));
            }
        }

        // Sampling found no unused candidate: the K-subset space is
        // (effectively) exhausted
        let Some((chosen, score)) = best else {
            debug!(slot, "no unused candidates remain, stopping early");
            break;
        };

        for pair in chosen.pairs() {
            *pair_counts.entry(pair).or_insert(0) += 1;
        }

        debug!(ticket = %chosen, score, "selected balanced ticket");
        used.insert(chosen.clone());
        tickets.push(chosen);
    }

    let balance_score = score_from_counts(&pair_counts);

    BalancedWheel {
        tickets,
        balance_score,
    }
}

/// Balance score of an arbitrary ticket set over a pool.
///
/// Used when the engine falls back to the full wheel for a balanced request
/// but still wants the balance metric in the result.
pub fn balance_score(tickets: &[Ticket], pool: &Pool) -> u8 {
    let mut pair_counts = zeroed_pair_counts(pool);

    for ticket in tickets {
        for pair in ticket.pairs() {
            *pair_counts.entry(pair).or_insert(0) += 1;
        }
    }

    score_from_counts(&pair_counts)
}

fn zeroed_pair_counts(pool: &Pool) -> FxHashMap<(u32, u32), u32> {
    let numbers = pool.numbers();
    let mut counts = FxHashMap::default();

    for (i, &a) in numbers.iter().enumerate() {
        for &b in &numbers[i + 1..] {
            counts.insert((a, b), 0);
        }
    }

    counts
}

/// Score a candidate: under-represented pairs contribute the most.
fn pair_score(candidate: &Ticket, pair_counts: &FxHashMap<(u32, u32), u32>) -> f64 {
    candidate
        .pairs()
        .iter()
        .map(|pair| {
            let count = pair_counts.get(pair).copied().unwrap_or(0);
            1.0 / (count as f64 + 1.0)
        })
        .sum()
}

/// Map the standard deviation of pair counts onto a 0..=100 score.
///
/// A heuristic quality signal, not a formal guarantee.
fn score_from_counts(pair_counts: &FxHashMap<(u32, u32), u32>) -> u8 {
    if pair_counts.is_empty() {
        return 100;
    }

    let n = pair_counts.len() as f64;
    let mean = pair_counts.values().map(|&c| c as f64).sum::<f64>() / n;
    let variance = pair_counts
        .values()
        .map(|&c| (c as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    (100.0 - std_dev * 20.0).round().clamp(0.0, 100.0) as u8
}

fn sample_ticket<R: Rng + ?Sized>(pool: &Pool, game_size: usize, rng: &mut R) -> Ticket {
    let mut numbers: Vec<u32> = index::sample(rng, pool.len(), game_size)
        .into_iter()
        .map(|i| pool.numbers()[i])
        .collect();
    numbers.sort_unstable();
    Ticket::from_sorted(numbers)
}
