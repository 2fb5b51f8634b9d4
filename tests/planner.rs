//! Tests for closed-form loop planning.
use deskcheck::classifier::{Comparison, LoopCondition, LoopIncrement};
use deskcheck::planner::{MAX_SAFE_ITERATIONS, plan_iterations, true_iterations};

fn condition(operator: Comparison, limit: i64) -> LoopCondition {
    LoopCondition {
        variable: "x".to_string(),
        operator,
        limit,
    }
}

fn step(delta: i64) -> LoopIncrement {
    LoopIncrement {
        variable: "x".to_string(),
        delta,
    }
}

#[test]
fn test_increasing_inclusive_bound() {
    let cond = condition(Comparison::LessOrEqual, 5);
    assert_eq!(true_iterations(&cond, &step(1), 1), 5);
    assert_eq!(plan_iterations(&cond, &step(1), 1), 6);
    // 1, 3, 5
    assert_eq!(true_iterations(&cond, &step(2), 1), 3);
}

#[test]
fn test_increasing_exclusive_bound() {
    let cond = condition(Comparison::Less, 5);
    assert_eq!(true_iterations(&cond, &step(1), 1), 4);
    // 0, 3
    assert_eq!(true_iterations(&cond, &step(3), 0), 2);
}

#[test]
fn test_decreasing_bounds() {
    let cond = condition(Comparison::GreaterOrEqual, 0);
    assert_eq!(true_iterations(&cond, &step(-2), 10), 6);
    assert_eq!(plan_iterations(&cond, &step(-2), 10), 7);

    let cond = condition(Comparison::Greater, 0);
    // 10, 8, 6, 4, 2
    assert_eq!(true_iterations(&cond, &step(-2), 10), 5);
}

#[test]
fn test_condition_false_from_the_start() {
    let cond = condition(Comparison::LessOrEqual, 5);
    assert_eq!(true_iterations(&cond, &step(1), 9), 0);
    assert_eq!(plan_iterations(&cond, &step(1), 9), 1);

    let cond = condition(Comparison::GreaterOrEqual, 5);
    assert_eq!(true_iterations(&cond, &step(-1), 2), 0);
}

#[test]
fn test_step_away_from_bound() {
    // A rising counter against a lower bound runs once if it starts inside it.
    assert_eq!(
        true_iterations(&condition(Comparison::GreaterOrEqual, 0), &step(1), 3),
        1
    );
    assert_eq!(
        true_iterations(&condition(Comparison::Greater, 5), &step(1), 3),
        0
    );
    assert_eq!(
        true_iterations(&condition(Comparison::Less, 10), &step(-1), 3),
        1
    );
}

#[test]
fn test_equality_operators_count_once() {
    for operator in [Comparison::Equal, Comparison::NotEqual] {
        assert_eq!(true_iterations(&condition(operator, 3), &step(1), 0), 1);
        assert_eq!(true_iterations(&condition(operator, 3), &step(-1), 0), 1);
    }
}

#[test]
fn test_zero_step_plans_only_the_check() {
    let cond = condition(Comparison::LessOrEqual, 5);
    assert_eq!(true_iterations(&cond, &step(0), 1), 0);
    assert_eq!(plan_iterations(&cond, &step(0), 1), 1);
}

#[test]
fn test_plan_is_clamped() {
    let cond = condition(Comparison::LessOrEqual, i64::MAX);
    assert_eq!(
        plan_iterations(&cond, &step(1), i64::MIN),
        MAX_SAFE_ITERATIONS + 1
    );
}
