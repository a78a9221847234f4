use crate::api::Habit;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    // Loading
    Loaded { habit: Habit },
    LoadFailed { message: String },
    Reload,

    // Complete (optimistic)
    CompletePressed,
    CompleteSucceeded { habit: Habit },
    CompleteFailed { message: String },

    // Re-fetch after a failed mutation
    Refreshed { habit: Habit },
    RefreshFailed { message: String },

    // Edit
    BeginEdit,
    CancelEdit,
    ToggleField,
    Input(char),
    Backspace,
    SavePressed,
    SaveSucceeded { habit: Habit },
    SaveFailed { message: String },

    // Delete
    DeletePressed,
    DeleteCancelled,
    DeleteConfirmed,
    DeleteSucceeded,
    DeleteFailed { message: String },
}

impl Intent for DetailIntent {}
