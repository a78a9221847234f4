use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CreateIntent {
    /// Typed character for the focused text field.
    Input(char),
    Backspace,
    FocusNext,
    FocusPrevious,
    FrequencyNext,
    FrequencyPrevious,
    /// User asked to save the draft.
    Submit,
    /// The service accepted the draft.
    SubmitSucceeded,
    SubmitFailed { message: String },
}

impl Intent for CreateIntent {}
