use crate::api::Habit;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    /// A fresh `list()` was issued.
    Reload,
    Loaded { habits: Vec<Habit> },
    LoadFailed { message: String },
    MoveUp,
    MoveDown,
}

impl Intent for DashboardIntent {}
