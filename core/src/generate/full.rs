//! Full wheel generation
//!
//! The trivial, maximal-guarantee design: every K-subset of the pool. This
//! is the baseline against which the other strategies report savings.

use crate::comb::{binomial, k_subsets};
use crate::model::{DesignError, DesignResult, Limits, Pool, Ticket};

/// Enumerate every K-subset of the pool.
///
/// Guarded by the candidate ceiling before any allocation: a full wheel over
/// a large pool explodes binomially and must be rejected, not attempted.
/// The pool is sorted, so every ticket comes out ascending.
pub fn generate(pool: &Pool, game_size: usize, limits: &Limits) -> DesignResult<Vec<Ticket>> {
    let estimated = binomial(pool.len(), game_size);
    let limit = limits.candidate_cap(game_size);

    if estimated > limit {
        return Err(DesignError::CombinationExplosion {
            what: "full wheel tickets",
            estimated,
            limit,
        });
    }

    Ok(k_subsets(pool.numbers(), game_size)
        .map(Ticket::from_sorted)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_wheel_of_four_choose_two() {
        let pool = Pool::new(&[1, 2, 3, 4]);
        let tickets = generate(&pool, 2, &Limits::default()).unwrap();

        let expected: Vec<Ticket> = [[1, 2], [1, 3], [1, 4], [2, 3], [2, 4], [3, 4]]
            .iter()
            .map(|t| Ticket::new(t.to_vec()))
            .collect();
        assert_eq!(tickets, expected);
    }

    #[test]
    fn test_cardinality_matches_binomial() {
        let pool = Pool::new(&(1..=9).collect::<Vec<u32>>());
        let tickets = generate(&pool, 4, &Limits::default()).unwrap();

        assert_eq!(tickets.len() as u64, binomial(9, 4));

        // All tickets distinct
        let mut seen = tickets.clone();
        seen.dedup();
        assert_eq!(seen.len(), tickets.len());
    }

    #[test]
    fn test_pool_equal_to_game_size() {
        let pool = Pool::new(&[4, 8, 15]);
        let tickets = generate(&pool, 3, &Limits::default()).unwrap();

        assert_eq!(tickets, vec![Ticket::new(vec![4, 8, 15])]);
    }

    #[test]
    fn test_explosion_guard_rejects_large_pool() {
        let pool = Pool::new(&(1..=60).collect::<Vec<u32>>());
        let err = generate(&pool, 6, &Limits::default()).unwrap_err();

        match err {
            DesignError::CombinationExplosion {
                estimated, limit, ..
            } => {
                assert_eq!(estimated, 50_063_860);
                assert_eq!(limit, 50_000);
            }
            other => panic!("expected CombinationExplosion, got {:?}", other),
        }
    }
}
