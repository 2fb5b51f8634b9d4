use crate::table::TraceRow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user-selected projection over a generated row sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    All,
    Summary,
    Start,
    End,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::All => "all",
            ViewMode::Summary => "summary",
            ViewMode::Start => "start",
            ViewMode::End => "end",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ViewMode::All),
            "summary" => Ok(ViewMode::Summary),
            "start" | "head" => Ok(ViewMode::Start),
            "end" | "tail" => Ok(ViewMode::End),
            other => Err(format!("unknown view mode '{}'", other)),
        }
    }
}

/// The rows to render plus where, if anywhere, an ellipsis marker goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewWindow {
    pub rows: Vec<TraceRow>,
    pub show_ellipsis: bool,
    /// Index into `rows` before which the marker is drawn.
    pub ellipsis_index: Option<usize>,
    pub hidden_count: u64,
}

impl ViewWindow {
    fn full(rows: Vec<TraceRow>) -> Self {
        Self {
            rows,
            show_ellipsis: false,
            ellipsis_index: None,
            hidden_count: 0,
        }
    }

    fn with_gap(rows: Vec<TraceRow>, index: usize, hidden_count: u64) -> Self {
        Self {
            rows,
            show_ellipsis: true,
            ellipsis_index: Some(index),
            hidden_count,
        }
    }
}

/// Projects an already generated row sequence; never re-runs simulation.
pub fn select_window(rows: &[TraceRow], mode: ViewMode) -> ViewWindow {
    let total = rows.len();
    let third = total.div_ceil(3).max(1).min(total);

    match mode {
        ViewMode::All => ViewWindow::full(rows.to_vec()),
        ViewMode::Start => ViewWindow::full(rows[..third].to_vec()),
        ViewMode::End => ViewWindow::full(rows[total - third..].to_vec()),
        ViewMode::Summary => {
            if let Some(index) = first_gap(rows) {
                let hidden = rows[index].iteration - rows[index - 1].iteration - 1;
                return ViewWindow::with_gap(rows.to_vec(), index, hidden);
            }

            if total <= 2 * third {
                return ViewWindow::full(rows.to_vec());
            }
            let hidden = (total - 2 * third) as u64;
            let mut shown = rows[..third].to_vec();
            shown.extend_from_slice(&rows[total - third..]);
            ViewWindow::with_gap(shown, third, hidden)
        }
    }
}

/// Index of the first row whose iteration does not follow its predecessor's.
fn first_gap(rows: &[TraceRow]) -> Option<usize> {
    rows.windows(2)
        .position(|pair| pair[1].iteration > pair[0].iteration + 1)
        .map(|i| i + 1)
}
