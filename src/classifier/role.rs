use serde::{Deserialize, Serialize};
use std::fmt;

/// A loop-condition comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
}

impl Comparison {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<=" => Some(Comparison::LessOrEqual),
            ">=" => Some(Comparison::GreaterOrEqual),
            "<" => Some(Comparison::Less),
            ">" => Some(Comparison::Greater),
            "==" => Some(Comparison::Equal),
            "!=" => Some(Comparison::NotEqual),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::LessOrEqual => "<=",
            Comparison::GreaterOrEqual => ">=",
            Comparison::Less => "<",
            Comparison::Greater => ">",
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
        }
    }

    /// Whether `value <op> limit` holds.
    pub fn holds(&self, value: i128, limit: i128) -> bool {
        match self {
            Comparison::LessOrEqual => value <= limit,
            Comparison::GreaterOrEqual => value >= limit,
            Comparison::Less => value < limit,
            Comparison::Greater => value > limit,
            Comparison::Equal => value == limit,
            Comparison::NotEqual => value != limit,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// `name = value` from an initialization node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitVar {
    pub name: String,
    pub value: i64,
}

impl fmt::Display for InitVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// `variable <op> limit` from a decision node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopCondition {
    pub variable: String,
    pub operator: Comparison,
    pub limit: i64,
}

impl LoopCondition {
    /// Takes `i128` so a counter stepped past the `i64` range still compares.
    pub fn holds_for(&self, value: i128) -> bool {
        self.operator.holds(value, i128::from(self.limit))
    }
}

/// `variable = variable ± delta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopIncrement {
    pub variable: String,
    pub delta: i64,
}

/// The inferred semantic category of a column's label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "camelCase")]
pub enum ColumnRole {
    Init { assignments: Vec<InitVar> },
    Condition(LoopCondition),
    Increment(LoopIncrement),
    Input { names: Vec<String> },
    Output { names: Vec<String> },
    Process { variable: String, expression: String },
    Connector,
    Display,
    Unknown,
}

impl ColumnRole {
    /// A short lowercase name for logs and debugging output.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnRole::Init { .. } => "init",
            ColumnRole::Condition(_) => "condition",
            ColumnRole::Increment(_) => "increment",
            ColumnRole::Input { .. } => "input",
            ColumnRole::Output { .. } => "output",
            ColumnRole::Process { .. } => "process",
            ColumnRole::Connector => "connector",
            ColumnRole::Display => "display",
            ColumnRole::Unknown => "unknown",
        }
    }
}
