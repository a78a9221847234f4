//! Values derived from habits for display.

mod history;
mod stats;

pub use history::{CompletionHistory, HISTORY_SLOTS};
pub use stats::DashboardStats;
