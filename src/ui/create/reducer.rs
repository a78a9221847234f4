use crate::ui::create::intent::CreateIntent;
use crate::ui::create::state::{CreateField, CreateState};
use crate::ui::mvi::Reducer;

pub struct CreateReducer;

impl Reducer for CreateReducer {
    type State = CreateState;
    type Intent = CreateIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CreateIntent::FocusNext => state.focus = state.focus.next(),
            CreateIntent::FocusPrevious => state.focus = state.focus.previous(),
            // The draft is frozen while it is being sent
            _ if state.submitting && !is_response(&intent) => {}
            CreateIntent::Input(ch) => match state.focus {
                CreateField::Title => state.draft.title.push(ch),
                CreateField::Description => state.draft.description.push(ch),
                CreateField::Frequency => {}
            },
            CreateIntent::Backspace => match state.focus {
                CreateField::Title => {
                    state.draft.title.pop();
                }
                CreateField::Description => {
                    state.draft.description.pop();
                }
                CreateField::Frequency => {}
            },
            CreateIntent::FrequencyNext if state.focus == CreateField::Frequency => {
                state.draft.frequency = state.draft.frequency.next()
            }
            CreateIntent::FrequencyPrevious if state.focus == CreateField::Frequency => {
                state.draft.frequency = state.draft.frequency.previous()
            }
            CreateIntent::FrequencyNext | CreateIntent::FrequencyPrevious => {}
            CreateIntent::Submit => match state.draft.validate() {
                Ok(()) => {
                    state.submitting = true;
                    state.error = None;
                }
                Err(message) => state.error = Some(message.to_string()),
            },
            CreateIntent::SubmitSucceeded => {
                state.submitting = false;
                state.error = None;
            }
            CreateIntent::SubmitFailed { message } => {
                state.submitting = false;
                state.error = Some(message);
            }
        }
        state
    }
}

fn is_response(intent: &CreateIntent) -> bool {
    matches!(
        intent,
        CreateIntent::SubmitSucceeded | CreateIntent::SubmitFailed { .. }
    )
}
