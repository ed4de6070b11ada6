//! End-to-end generation tests
//!
//! Drives the dispatcher through every strategy the way an orchestration
//! layer would, checking the covering guarantees hold on the returned
//! ticket sets.

use wheelgen_core::*;

fn shape(game_size: usize, total_numbers: u32) -> GameShape {
    GameShape {
        game_size,
        total_numbers,
    }
}

#[test]
fn test_full_wheel_exact_enumeration() {
    let result = generate_wheel(&[1, 2, 3, 4], shape(2, 10), &WheelConfig::full())
        .expect("full wheel over 4 numbers should generate");

    assert_eq!(result.full_wheel_count, 6);
    assert_eq!(result.ticket_count, 6);
    assert_eq!(result.savings_percent, 0);
    assert_eq!(result.score, 100);

    let expected: Vec<Ticket> = [[1, 2], [1, 3], [1, 4], [2, 3], [2, 4], [3, 4]]
        .iter()
        .map(|t| Ticket::new(t.to_vec()))
        .collect();
    assert_eq!(result.tickets, expected);
}

#[test]
fn test_full_wheel_coverage_is_always_total() {
    let numbers: Vec<u32> = (1..=8).collect();
    let result = generate_wheel(&numbers, shape(4, 49), &WheelConfig::full()).unwrap();

    let pool = Pool::new(&numbers);
    for (m, t) in [(1, 2), (2, 3), (3, 4), (4, 4)] {
        let coverage = coverage::evaluate(&result.tickets, &pool, &GuaranteeSpec::new(m, t));
        assert_eq!(coverage.percent, 100, "full wheel must cover {}-if-{}", m, t);
    }
}

#[test]
fn test_abbreviated_wheel_beats_full_wheel() {
    // "if any 2 pool numbers are drawn, some ticket shares at least 1"
    let config = WheelConfig::abbreviated(GuaranteeLevel::Custom(GuaranteeSpec::new(1, 2)));
    let result = generate_wheel(&[1, 2, 3, 4], shape(2, 10), &config).unwrap();

    assert_eq!(result.ticket_count, 2);
    assert_eq!(result.full_wheel_count, 6);
    assert_eq!(result.savings_percent, 67);
    assert_eq!(result.score, 100);

    // The guarantee is verifiable, not probabilistic: re-evaluate it
    let pool = Pool::new(&[1, 2, 3, 4]);
    let coverage = coverage::evaluate(&result.tickets, &pool, &GuaranteeSpec::new(1, 2));
    assert_eq!(coverage.covered, coverage.total);
}

#[test]
fn test_abbreviated_wheel_with_preset_notation() {
    let numbers: Vec<u32> = (1..=9).collect();
    let config = WheelConfig::abbreviated(GuaranteeLevel::Preset("2-if-3".to_string()));

    let result = generate_wheel(&numbers, shape(4, 49), &config).unwrap();

    assert!(result.ticket_count > 0);
    assert!((result.ticket_count as u64) < result.full_wheel_count);
    assert_eq!(result.score, 100);
    assert!(result.guarantee.contains("at least 2"));
}

#[test]
fn test_pool_smaller_than_ticket_is_a_validation_error() {
    let err = generate_wheel(&[1, 2, 3], shape(5, 10), &WheelConfig::full())
        .expect_err("3 numbers cannot fill a 5-number ticket");

    assert!(matches!(err, DesignError::PoolTooSmall { .. }));
}

#[test]
fn test_oversized_full_wheel_is_a_resource_error() {
    // C(60, 6) ≈ 50 million: must be rejected before enumeration
    let numbers: Vec<u32> = (1..=60).collect();
    let err = generate_wheel(&numbers, shape(6, 60), &WheelConfig::full()).unwrap_err();

    match err {
        DesignError::CombinationExplosion { estimated, .. } => {
            assert_eq!(estimated, 50_063_860);
        }
        other => panic!("expected CombinationExplosion, got {:?}", other),
    }
}

#[test]
fn test_balanced_wheel_tickets_are_unique() {
    let numbers: Vec<u32> = (1..=14).collect();
    let config = WheelConfig::balanced(25).with_seed(11);

    let result = generate_wheel(&numbers, shape(6, 49), &config).unwrap();

    assert_eq!(result.ticket_count, 25);
    for (i, a) in result.tickets.iter().enumerate() {
        for b in &result.tickets[i + 1..] {
            assert_ne!(a, b, "balanced wheel produced a duplicate ticket");
        }
    }
}

#[test]
fn test_balanced_wheel_is_reproducible_with_seed() {
    let numbers: Vec<u32> = (1..=10).collect();
    let config = WheelConfig::balanced(12).with_seed(2024);

    let a = generate_wheel(&numbers, shape(5, 49), &config).unwrap();
    let b = generate_wheel(&numbers, shape(5, 49), &config).unwrap();

    assert_eq!(a.tickets, b.tickets);
    assert_eq!(a.score, b.score);
}

#[test]
fn test_greedy_budget_surfaces_as_score_not_error() {
    let numbers: Vec<u32> = (1..=10).collect();
    let config = WheelConfig::abbreviated(GuaranteeLevel::Custom(GuaranteeSpec::new(3, 4)))
        .with_max_tickets(2);

    let result = generate_wheel(&numbers, shape(5, 49), &config).unwrap();

    assert_eq!(result.ticket_count, 2);
    assert!(result.score < 100, "budget-limited wheel cannot reach 100");
}
