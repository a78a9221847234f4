mod common;

use common::habit;
use habitdeck::api::Habit;
use habitdeck::habit::HISTORY_SLOTS;
use habitdeck::ui::detail::{DetailIntent, DetailMode, DetailReducer, DetailState};
use habitdeck::ui::mvi::Reducer;

fn ready(habit: Habit) -> DetailState {
    DetailReducer::reduce(DetailState::loading(habit.id.clone()), DetailIntent::Loaded { habit })
}

fn apply(state: DetailState, intents: impl IntoIterator<Item = DetailIntent>) -> DetailState {
    intents.into_iter().fold(state, DetailReducer::reduce)
}

fn typed(text: &str) -> Vec<DetailIntent> {
    text.chars().map(DetailIntent::Input).collect()
}

fn filled_indices(state: &DetailState) -> Vec<usize> {
    state
        .view()
        .unwrap()
        .history
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, done)| **done)
        .map(|(index, _)| index)
        .collect()
}

// -- Loading ------------------------------------------------------------------

#[test]
fn get_failure_is_terminal_error() {
    let state = DetailReducer::reduce(
        DetailState::loading("missing"),
        DetailIntent::LoadFailed {
            message: "Habit not found".into(),
        },
    );
    let state = apply(state, [DetailIntent::CompletePressed, DetailIntent::BeginEdit]);
    assert_eq!(
        state,
        DetailState::Error {
            message: "Habit not found".into()
        }
    );
}

#[test]
fn history_fills_prefix_and_clamps() {
    for count in [0u32, 1, 7, 21, 40] {
        let state = ready(habit("h1", "Read", count));
        let expected: Vec<usize> = (0..(count as usize).min(HISTORY_SLOTS)).collect();
        assert_eq!(filled_indices(&state), expected, "history_count = {}", count);
    }
}

// -- Complete -----------------------------------------------------------------

#[test]
fn complete_is_optimistic() {
    let state = apply(ready(habit("h1", "Read", 2)), [DetailIntent::CompletePressed]);
    let shown = state.habit().unwrap();
    assert_eq!(shown.history_count, 3);
    assert_eq!(shown.today_completions, 1);
    assert!(state.is_completing());
    assert_eq!(filled_indices(&state), vec![0, 1, 2]);
}

#[test]
fn complete_success_does_not_double_count() {
    let state = apply(
        ready(habit("h1", "Read", 5)),
        [
            DetailIntent::CompletePressed,
            DetailIntent::CompleteSucceeded {
                habit: habit("h1", "Read", 6),
            },
        ],
    );
    assert_eq!(state.habit().unwrap().history_count, 6);
    assert!(!state.is_completing());
}

#[test]
fn complete_failure_rolls_back_counts() {
    let state = apply(
        ready(habit("h1", "Read", 5)),
        [
            DetailIntent::CompletePressed,
            DetailIntent::CompleteFailed {
                message: "Could not complete habit".into(),
            },
        ],
    );
    let shown = state.habit().unwrap();
    assert_eq!(shown.history_count, 5);
    assert_eq!(shown.today_completions, 0);
    assert_eq!(state.notice(), Some("Could not complete habit"));
    assert_eq!(filled_indices(&state).len(), 5);
}

#[test]
fn refresh_replaces_with_server_value() {
    let state = apply(
        ready(habit("h1", "Read", 5)),
        [DetailIntent::Refreshed {
            habit: habit("h1", "Read", 9),
        }],
    );
    assert_eq!(state.habit().unwrap().history_count, 9);
}

// -- Edit ---------------------------------------------------------------------

#[test]
fn save_applies_optimistically() {
    let mut intents = vec![DetailIntent::BeginEdit];
    intents.extend(typed(" more"));
    intents.push(DetailIntent::SavePressed);
    let state = apply(ready(habit("h1", "Read", 0)), intents);

    assert!(state.is_saving());
    assert_eq!(state.habit().unwrap().title, "Read more");
}

#[test]
fn save_success_leaves_edit_mode() {
    let mut intents = vec![DetailIntent::BeginEdit];
    intents.extend(typed(" more"));
    intents.push(DetailIntent::SavePressed);
    intents.push(DetailIntent::SaveSucceeded {
        habit: habit("h1", "Read more", 0),
    });
    let state = apply(ready(habit("h1", "Read", 0)), intents);

    assert_eq!(state.mode(), Some(&DetailMode::Viewing));
    assert_eq!(state.habit().unwrap().title, "Read more");
    assert_eq!(state.view().unwrap().confirmed.title, "Read more");
}

#[test]
fn failed_update_restores_pre_edit_fields() {
    let mut original = habit("h1", "Read", 0);
    original.description = "ten pages".into();

    let mut intents = vec![DetailIntent::BeginEdit];
    intents.extend(typed("!"));
    intents.push(DetailIntent::ToggleField);
    intents.push(DetailIntent::Backspace);
    intents.push(DetailIntent::SavePressed);
    intents.push(DetailIntent::SaveFailed {
        message: "Could not update habit".into(),
    });
    let state = apply(ready(original), intents);

    let form = state.edit_form().expect("still editing");
    assert_eq!(form.title, "Read");
    assert_eq!(form.description, "ten pages");
    assert_eq!(state.habit().unwrap().title, "Read");
    assert_eq!(state.habit().unwrap().description, "ten pages");
    assert!(!state.is_saving());
    assert_eq!(state.notice(), Some("Could not update habit"));
}

#[test]
fn empty_title_is_not_saved() {
    let mut intents = vec![DetailIntent::BeginEdit];
    intents.extend((0..4).map(|_| DetailIntent::Backspace));
    intents.push(DetailIntent::SavePressed);
    let state = apply(ready(habit("h1", "Read", 0)), intents);

    assert!(!state.is_saving());
    assert!(state.is_editing());
    assert_eq!(state.notice(), Some("Title is required"));
    assert_eq!(state.habit().unwrap().title, "Read");
}

#[test]
fn cancel_edit_discards_form() {
    let mut intents = vec![DetailIntent::BeginEdit];
    intents.extend(typed("xyz"));
    intents.push(DetailIntent::CancelEdit);
    let state = apply(ready(habit("h1", "Read", 0)), intents);

    assert_eq!(state.mode(), Some(&DetailMode::Viewing));
    assert_eq!(state.habit().unwrap().title, "Read");
}

// -- Delete -------------------------------------------------------------------

#[test]
fn delete_prompt_opens_and_cancels() {
    let state = apply(ready(habit("h1", "Read", 0)), [DetailIntent::DeletePressed]);
    assert!(state.is_confirming_delete());

    let state = DetailReducer::reduce(state, DetailIntent::DeleteCancelled);
    assert_eq!(state.mode(), Some(&DetailMode::Viewing));
}

#[test]
fn confirmed_delete_cannot_be_cancelled() {
    let state = apply(
        ready(habit("h1", "Read", 0)),
        [
            DetailIntent::DeletePressed,
            DetailIntent::DeleteConfirmed,
            DetailIntent::DeleteCancelled,
        ],
    );
    assert!(state.is_deleting());
}

#[test]
fn delete_failure_closes_prompt_with_notice() {
    let state = apply(
        ready(habit("h1", "Read", 0)),
        [
            DetailIntent::DeletePressed,
            DetailIntent::DeleteConfirmed,
            DetailIntent::DeleteFailed {
                message: "Could not delete habit".into(),
            },
        ],
    );
    assert_eq!(state.mode(), Some(&DetailMode::Viewing));
    assert_eq!(state.notice(), Some("Could not delete habit"));
}

#[test]
fn complete_is_ignored_while_prompt_is_open() {
    let state = apply(
        ready(habit("h1", "Read", 2)),
        [DetailIntent::DeletePressed, DetailIntent::CompletePressed],
    );
    assert_eq!(state.habit().unwrap().history_count, 2);
    assert!(!state.is_completing());
}
