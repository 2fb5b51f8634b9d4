use super::role::{ColumnRole, Comparison, InitVar, LoopCondition, LoopIncrement};
use crate::diagram::NodeKind;
use regex::Regex;
use std::sync::LazyLock;

// `\w` and `\d` are spelled out as ASCII classes: labels are matched with
// ASCII word semantics, so `año = 1` is not an identifier assignment.
static CONDITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\s*(<=|>=|<|>|==|!=)\s*([0-9]+)$").unwrap()
});

static INCREMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\s*=\s*([A-Za-z0-9_]+)\s*\+\s*([0-9]+)$").unwrap()
});

static DECREMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\s*=\s*([A-Za-z0-9_]+)\s*-\s*([0-9]+)$").unwrap()
});

static ASSIGNMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)\s*=\s*(.+)$").unwrap());

static INIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_]+)\s*=\s*([0-9]+)").unwrap());

static SELF_UPDATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_]+)\s*=\s*([A-Za-z0-9_]+)\s*[+-]").unwrap());

static WORD_LIST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\s,]+$").unwrap());

/// Defines the contract for recognizing one label shape.
///
/// Matchers are consulted in registry order and the first one returning
/// `Some` decides the role, so a matcher may assume every earlier matcher
/// declined the label.
pub trait LabelMatcher: Send + Sync {
    fn name(&self) -> &str;
    fn matches(&self, kind: NodeKind, label: &str) -> Option<ColumnRole>;
}

fn split_names(label: &str) -> Vec<String> {
    label
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

struct ConnectorMatcher;
impl LabelMatcher for ConnectorMatcher {
    fn name(&self) -> &str {
        "connector"
    }
    fn matches(&self, kind: NodeKind, _label: &str) -> Option<ColumnRole> {
        (kind == NodeKind::Connector).then_some(ColumnRole::Connector)
    }
}

struct InputMatcher;
impl LabelMatcher for InputMatcher {
    fn name(&self) -> &str {
        "input"
    }
    fn matches(&self, kind: NodeKind, label: &str) -> Option<ColumnRole> {
        (kind == NodeKind::Data && !label.contains('=')).then(|| ColumnRole::Input {
            names: split_names(label),
        })
    }
}

struct OutputMatcher;
impl LabelMatcher for OutputMatcher {
    fn name(&self) -> &str {
        "output"
    }
    fn matches(&self, kind: NodeKind, label: &str) -> Option<ColumnRole> {
        (kind.is_output() && !label.contains('=')).then(|| ColumnRole::Output {
            names: split_names(label),
        })
    }
}

struct ConditionMatcher;
impl LabelMatcher for ConditionMatcher {
    fn name(&self) -> &str {
        "condition"
    }
    fn matches(&self, kind: NodeKind, label: &str) -> Option<ColumnRole> {
        if kind != NodeKind::Decision {
            return None;
        }
        let caps = CONDITION_REGEX.captures(label)?;
        Some(ColumnRole::Condition(LoopCondition {
            variable: caps[1].to_string(),
            operator: Comparison::from_symbol(&caps[2])?,
            limit: caps[3].parse().ok()?,
        }))
    }
}

/// `i = i + n` (or `i = i - n` when `sign` is negative).
struct StepMatcher {
    name: &'static str,
    regex: &'static LazyLock<Regex>,
    sign: i64,
}
impl LabelMatcher for StepMatcher {
    fn name(&self) -> &str {
        self.name
    }
    fn matches(&self, _kind: NodeKind, label: &str) -> Option<ColumnRole> {
        let caps = self.regex.captures(label)?;
        if caps[1] != caps[2] {
            return None;
        }
        let magnitude: i64 = caps[3].parse().ok()?;
        Some(ColumnRole::Increment(LoopIncrement {
            variable: caps[1].to_string(),
            delta: self.sign * magnitude,
        }))
    }
}

struct ProcessMatcher;
impl LabelMatcher for ProcessMatcher {
    fn name(&self) -> &str {
        "process"
    }
    fn matches(&self, kind: NodeKind, label: &str) -> Option<ColumnRole> {
        if kind != NodeKind::Process {
            return None;
        }
        let caps = ASSIGNMENT_REGEX.captures(label)?;
        Some(ColumnRole::Process {
            variable: caps[1].to_string(),
            expression: caps[2].to_string(),
        })
    }
}

struct InitMatcher;
impl InitMatcher {
    /// True when the label updates some variable from itself, e.g. `i = i + 1, j = 0`.
    /// The left-hand match may begin mid-word, so `ab = b - 1` counts as well.
    fn has_self_update(label: &str) -> bool {
        SELF_UPDATE_REGEX
            .captures_iter(label)
            .any(|caps| caps[1].ends_with(&caps[2]))
    }
}
impl LabelMatcher for InitMatcher {
    fn name(&self) -> &str {
        "init"
    }
    fn matches(&self, kind: NodeKind, label: &str) -> Option<ColumnRole> {
        if kind == NodeKind::Decision || Self::has_self_update(label) {
            return None;
        }
        let assignments = INIT_REGEX
            .captures_iter(label)
            .map(|caps| {
                Some(InitVar {
                    name: caps[1].to_string(),
                    value: caps[2].parse().ok()?,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        (!assignments.is_empty()).then_some(ColumnRole::Init { assignments })
    }
}

struct DisplayMatcher;
impl LabelMatcher for DisplayMatcher {
    fn name(&self) -> &str {
        "display"
    }
    fn matches(&self, _kind: NodeKind, label: &str) -> Option<ColumnRole> {
        WORD_LIST_REGEX
            .is_match(label)
            .then_some(ColumnRole::Display)
    }
}

/// The built-in matchers in priority order. Several shapes overlap (an
/// increment is also an assignment), so the order is part of the contract.
pub(super) fn default_matchers() -> Vec<Box<dyn LabelMatcher>> {
    vec![
        Box::new(ConnectorMatcher),
        Box::new(InputMatcher),
        Box::new(OutputMatcher),
        Box::new(ConditionMatcher),
        Box::new(StepMatcher {
            name: "increment",
            regex: &INCREMENT_REGEX,
            sign: 1,
        }),
        Box::new(StepMatcher {
            name: "decrement",
            regex: &DECREMENT_REGEX,
            sign: -1,
        }),
        Box::new(ProcessMatcher),
        Box::new(InitMatcher),
        Box::new(DisplayMatcher),
    ]
}
