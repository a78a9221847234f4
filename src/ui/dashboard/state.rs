use crate::api::Habit;
use crate::habit::DashboardStats;
use crate::ui::mvi::UiState;

/// Dashboard screen state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    /// `list()` is in flight.
    #[default]
    Loading,

    /// Habits in server order.
    Ready { habits: Vec<Habit>, selected: usize },

    /// The list could not be loaded. The store stays empty.
    Failed { message: String },
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn habits(&self) -> &[Habit] {
        match self {
            Self::Ready { habits, .. } => habits,
            _ => &[],
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_habits(self.habits())
    }

    pub fn selected_habit(&self) -> Option<&Habit> {
        match self {
            Self::Ready { habits, selected } => habits.get(*selected),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
