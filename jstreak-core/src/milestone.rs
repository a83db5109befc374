use serde::Serialize;

/// Streak lengths worth celebrating, ascending.
pub const MILESTONES: [u32; 9] = [5, 10, 25, 50, 100, 200, 365, 500, 1000];

/// The next milestone ahead of a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub days_until: u32,
    pub milestone: u32,
}

/// Projects the first milestone strictly above `current_streak`.
///
/// A streak sitting exactly on a milestone looks ahead to the following one.
/// Past the last fixed milestone, the target is the next hundred strictly
/// above the streak (1000 → 1100, 1050 → 1100).
pub fn next_milestone(current_streak: u32) -> Milestone {
    let milestone = MILESTONES
        .iter()
        .copied()
        .find(|&m| current_streak < m)
        .unwrap_or_else(|| (current_streak / 100 + 1).saturating_mul(100));
    Milestone {
        days_until: milestone.saturating_sub(current_streak),
        milestone,
    }
}
