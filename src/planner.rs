//! Closed-form loop iteration counting.
//!
//! The number of times a counted loop body runs follows directly from the
//! initial value, the bound and the step, so the planner never executes the
//! loop to find out.

use crate::classifier::{Comparison, LoopCondition, LoopIncrement};

/// Upper bound on the number of true iterations a plan may report.
pub const MAX_SAFE_ITERATIONS: u64 = 10_000;

/// Counts the integers `init, init+step, ...` that satisfy a bound moving in
/// the step's direction: `max(0, floor(span / step) + 1)`.
fn count_steps(span: i128, step: i128) -> u64 {
    let count = span.div_euclid(step) + 1;
    count.clamp(0, u64::MAX as i128) as u64
}

/// Number of iterations for which the loop condition holds, before clamping.
pub fn true_iterations(condition: &LoopCondition, increment: &LoopIncrement, init: i64) -> u64 {
    let init = init as i128;
    let limit = condition.limit as i128;
    let delta = increment.delta as i128;
    let satisfied_once = || u64::from(condition.holds_for(init));

    match delta.signum() {
        1 => match condition.operator {
            Comparison::LessOrEqual => count_steps(limit - init, delta),
            Comparison::Less => count_steps(limit - init - 1, delta),
            // A rising counter can never newly satisfy a lower bound.
            Comparison::GreaterOrEqual | Comparison::Greater => satisfied_once(),
            Comparison::Equal | Comparison::NotEqual => 1,
        },
        -1 => {
            let step = delta.abs();
            match condition.operator {
                Comparison::GreaterOrEqual => count_steps(init - limit, step),
                Comparison::Greater => count_steps(init - limit - 1, step),
                Comparison::LessOrEqual | Comparison::Less => satisfied_once(),
                Comparison::Equal | Comparison::NotEqual => 1,
            }
        }
        _ => 0,
    }
}

/// Planned row count for a loop: the true iterations, clamped to
/// [`MAX_SAFE_ITERATIONS`], plus one row for the final failing check.
pub fn plan_iterations(condition: &LoopCondition, increment: &LoopIncrement, init: i64) -> u64 {
    true_iterations(condition, increment, init).min(MAX_SAFE_ITERATIONS) + 1
}
