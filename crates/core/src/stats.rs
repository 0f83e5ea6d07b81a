//! Aggregate project statistics.

use serde::Serialize;

use crate::status::ProjectStatus;

/// Shown for every status when there are no projects at all.
pub const ZERO_PERCENT: &str = "0%";

/// Count and share of one project status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub count: usize,
    /// Two-decimal percentage with a trailing `%`, e.g. `"25.00%"`.
    pub percentage: String,
}

/// Project totals grouped by status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total: usize,
    pub completed: StatusBreakdown,
    pub hold: StatusBreakdown,
    pub new: StatusBreakdown,
    pub revision: StatusBreakdown,
}

/// Format `count / total` as a percentage string.
///
/// Returns [`ZERO_PERCENT`] when `total` is zero instead of dividing.
/// Half-cent ties round up (`1/800` is `"0.13%"`).
pub fn format_percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return ZERO_PERCENT.to_string();
    }
    let pct = count as f64 / total as f64 * 100.0;
    let rounded = (pct * 100.0).round() / 100.0;
    format!("{rounded:.2}%")
}

impl ProjectStats {
    /// Tally the given project statuses.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ProjectStatus>,
    {
        let (mut total, mut completed, mut hold, mut new, mut revision) = (0, 0, 0, 0, 0);
        for status in statuses {
            total += 1;
            match status {
                ProjectStatus::Completed => completed += 1,
                ProjectStatus::Hold => hold += 1,
                ProjectStatus::New => new += 1,
                ProjectStatus::Revision => revision += 1,
            }
        }

        let breakdown = |count| StatusBreakdown {
            count,
            percentage: format_percentage(count, total),
        };

        Self {
            total,
            completed: breakdown(completed),
            hold: breakdown(hold),
            new: breakdown(new),
            revision: breakdown(revision),
        }
    }
}
