use crate::api::{Frequency, NewHabit};
use crate::ui::mvi::UiState;

/// Longest title the service accepts.
pub const MAX_TITLE_LEN: usize = 150;

/// Status every new habit starts with.
pub const INITIAL_STATUS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateField {
    #[default]
    Title,
    Description,
    Frequency,
}

impl CreateField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Frequency,
            Self::Frequency => Self::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Title => Self::Frequency,
            Self::Description => Self::Title,
            Self::Frequency => Self::Description,
        }
    }
}

/// An un-persisted habit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HabitDraft {
    pub title: String,
    pub description: String,
    pub frequency: Frequency,
}

impl HabitDraft {
    /// Checks the draft before it is sent.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err("Title must be at most 150 characters");
        }
        Ok(())
    }

    /// Create payload. Frequency goes out lower-case, status is always
    /// [`INITIAL_STATUS`].
    pub fn to_payload(&self) -> NewHabit {
        NewHabit {
            title: self.title.clone(),
            description: self.description.clone(),
            frequency: self.frequency,
            status: INITIAL_STATUS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateState {
    pub draft: HabitDraft,
    pub focus: CreateField,
    /// A `create()` request is in flight. Submission is disabled meanwhile.
    pub submitting: bool,
    pub error: Option<String>,
}

impl UiState for CreateState {}
