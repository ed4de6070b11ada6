//! Guarantee resolution and generator dispatch
//!
//! The sole entry point external callers use: validates the request, parses
//! the guarantee level, routes to the full / abbreviated / balanced
//! generator, and assembles the uniform result structure.

use crate::comb::binomial;
use crate::generate::{balanced, full, greedy};
use crate::model::{
    DesignError, DesignResult, GameShape, GuaranteeLevel, GuaranteeSpec, Pool, Ticket,
    WheelConfig, WheelResult, WheelType,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Generate a wheel from a number pool.
///
/// Validates the pool against the game shape, resolves the configured
/// guarantee, dispatches on `config.wheel_type`, and returns the ticket list
/// with its descriptive statistics. Synchronous and CPU-bound; all state is
/// local to the call.
pub fn generate_wheel(
    numbers: &[u32],
    shape: GameShape,
    config: &WheelConfig,
) -> DesignResult<WheelResult> {
    if shape.game_size == 0 {
        return Err(DesignError::ZeroGameSize);
    }

    for &number in numbers {
        if number == 0 || number > shape.total_numbers {
            return Err(DesignError::NumberOutOfRange {
                number,
                total_numbers: shape.total_numbers,
            });
        }
    }

    let pool = Pool::new(numbers);
    if pool.is_empty() {
        return Err(DesignError::EmptyPool);
    }
    if pool.len() < shape.game_size {
        return Err(DesignError::PoolTooSmall {
            pool_size: pool.len(),
            game_size: shape.game_size,
        });
    }

    let game_size = shape.game_size;
    let full_wheel_count = binomial(pool.len(), game_size);

    let result = match config.wheel_type {
        WheelType::Full => {
            let tickets = full::generate(&pool, game_size, &config.limits)?;
            assemble(
                tickets,
                full_wheel_count,
                format!("{0} if {0}: every possible combination of the pool is played", game_size),
                100,
            )
        }

        WheelType::Abbreviated => {
            let guarantee = resolve_guarantee(config)?;
            guarantee.validate(game_size, pool.len())?;

            let wheel = greedy::generate(
                &pool,
                game_size,
                &guarantee,
                config.max_tickets,
                &config.limits,
            )?;

            assemble(
                wheel.tickets,
                full_wheel_count,
                guarantee.describe(),
                wheel.coverage.percent,
            )
        }

        WheelType::Balanced => {
            if config.target_count as u64 >= full_wheel_count {
                // Requesting at least the whole subset space: the full wheel
                // is the balanced design
                let tickets = full::generate(&pool, game_size, &config.limits)?;
                let score = balanced::balance_score(&tickets, &pool);
                assemble(
                    tickets,
                    full_wheel_count,
                    "pair-balanced design (no match guarantee)".to_string(),
                    score,
                )
            } else {
                let mut rng = match config.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                let wheel = balanced::generate(&pool, game_size, config.target_count, &mut rng);
                assemble(
                    wheel.tickets,
                    full_wheel_count,
                    "pair-balanced design (no match guarantee)".to_string(),
                    wheel.balance_score,
                )
            }
        }
    };

    info!(
        pool_size = pool.len(),
        game_size,
        tickets = result.ticket_count,
        full_wheel = result.full_wheel_count,
        savings = result.savings_percent,
        score = result.score,
        "wheel generated"
    );

    Ok(result)
}

/// Resolve the configured guarantee level into concrete parameters.
fn resolve_guarantee(config: &WheelConfig) -> DesignResult<GuaranteeSpec> {
    match &config.guarantee {
        GuaranteeLevel::Preset(level) => GuaranteeSpec::parse(level),
        GuaranteeLevel::Custom(spec) => Ok(*spec),
    }
}

fn assemble(
    tickets: Vec<Ticket>,
    full_wheel_count: u64,
    guarantee: String,
    score: u8,
) -> WheelResult {
    let ticket_count = tickets.len();

    WheelResult {
        tickets,
        full_wheel_count,
        ticket_count,
        savings_percent: savings_percent(ticket_count, full_wheel_count),
        guarantee,
        score,
    }
}

/// Rounded savings versus the full wheel, held inside [0, 100).
///
/// Rounding alone can report 100 for a tiny-but-nonempty wheel over a huge
/// full wheel, so a nonempty reduced wheel caps at 99.
fn savings_percent(ticket_count: usize, full_wheel_count: u64) -> u8 {
    if full_wheel_count == 0 || ticket_count as u64 >= full_wheel_count {
        return 0;
    }

    let ratio = ticket_count as f64 / full_wheel_count as f64;
    let rounded = ((1.0 - ratio) * 100.0).round() as u8;
    rounded.min(99)
}
