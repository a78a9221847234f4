mod common;

use common::habit;
use habitdeck::api::Habit;
use habitdeck::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use habitdeck::ui::mvi::Reducer;

fn loaded(habits: Vec<Habit>) -> DashboardState {
    DashboardReducer::reduce(DashboardState::default(), DashboardIntent::Loaded { habits })
}

#[test]
fn starts_loading() {
    let state = DashboardState::default();
    assert!(state.is_loading());
    assert!(state.habits().is_empty());
}

#[test]
fn loaded_keeps_order_and_selects_first() {
    let state = loaded(vec![habit("b", "Run", 1), habit("a", "Read", 4)]);
    let ids: Vec<&str> = state.habits().iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
    assert_eq!(state.selected_habit().map(|h| h.id.as_str()), Some("b"));
}

#[test]
fn stats_sum_completions() {
    let mut read = habit("a", "Read", 4);
    read.today_completions = 1;
    let state = loaded(vec![read, habit("b", "Run", 1), habit("c", "Nap", 0)]);
    let stats = state.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completions, 5);
    assert_eq!(stats.completed_today, 1);
}

#[test]
fn empty_list_has_zero_stats_and_no_selection() {
    let state = loaded(Vec::new());
    assert_eq!(state.stats().total, 0);
    assert_eq!(state.stats().completions, 0);
    assert!(state.selected_habit().is_none());
}

#[test]
fn selection_wraps() {
    let state = loaded(vec![habit("a", "Read", 0), habit("b", "Run", 0)]);
    let state = DashboardReducer::reduce(state, DashboardIntent::MoveUp);
    assert_eq!(state.selected_habit().map(|h| h.id.as_str()), Some("b"));
    let state = DashboardReducer::reduce(state, DashboardIntent::MoveDown);
    assert_eq!(state.selected_habit().map(|h| h.id.as_str()), Some("a"));
}

#[test]
fn load_failure_shows_message() {
    let state = DashboardReducer::reduce(
        DashboardState::default(),
        DashboardIntent::LoadFailed {
            message: "Could not load habits".into(),
        },
    );
    assert_eq!(state.error_message(), Some("Could not load habits"));
    assert!(state.habits().is_empty());
}

#[test]
fn reload_returns_to_loading() {
    let state = loaded(vec![habit("a", "Read", 0)]);
    let state = DashboardReducer::reduce(state, DashboardIntent::Reload);
    assert!(state.is_loading());
}
