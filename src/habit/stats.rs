use crate::api::Habit;

/// Aggregates shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Number of habits tracked.
    pub total: usize,
    /// Sum of `history_count` over all habits.
    pub completions: u64,
    /// Sum of `today_completions` over all habits.
    pub completed_today: u64,
}

impl DashboardStats {
    pub fn from_habits(habits: &[Habit]) -> Self {
        habits.iter().fold(
            Self {
                total: habits.len(),
                ..Self::default()
            },
            |mut stats, habit| {
                stats.completions += u64::from(habit.history_count);
                stats.completed_today += u64::from(habit.today_completions);
                stats
            },
        )
    }
}
