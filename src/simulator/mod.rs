//! Row generation strategies: the counted-loop simulator, the straight-line
//! executor for input/process/output programs, and the all-empty fallback.

pub mod linear;
pub mod looping;
pub mod placeholder;

pub use linear::{INPUT_RANGE, LinearExecutor, evaluate_or_zero};
pub use looping::{LoopSimulator, SUMMARY_SPLIT_THRESHOLD};
pub use placeholder::{MAX_PLACEHOLDER_ROWS, placeholder_rows};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which generation path produced a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SimulationStrategy {
    /// A counted loop; `planned_iterations` includes the final failing check.
    Loop {
        #[serde(rename = "plannedIterations")]
        planned_iterations: u64,
        /// The head and tail were simulated separately.
        split: bool,
    },
    Linear,
    Placeholder,
}

impl fmt::Display for SimulationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationStrategy::Loop {
                planned_iterations,
                split,
            } => {
                write!(f, "loop ({} planned rows", planned_iterations)?;
                if *split {
                    write!(f, ", head and tail only")?;
                }
                write!(f, ")")
            }
            SimulationStrategy::Linear => write!(f, "linear"),
            SimulationStrategy::Placeholder => write!(f, "placeholder"),
        }
    }
}
