use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::{DetailMode, DetailState, DetailView, EditField, EditForm};
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Loaded { habit } => DetailState::Ready(DetailView::new(habit)),
            DetailIntent::LoadFailed { message } => DetailState::Error { message },
            DetailIntent::Reload => match state {
                DetailState::Ready(view) => DetailState::Loading { id: view.habit.id },
                other => other,
            },
            intent => match state {
                DetailState::Ready(mut view) => {
                    reduce_ready(&mut view, intent);
                    DetailState::Ready(view)
                }
                // Nothing is offered before the habit is loaded or after an error
                other => other,
            },
        }
    }
}

fn reduce_ready(view: &mut DetailView, intent: DetailIntent) {
    match intent {
        DetailIntent::CompletePressed => {
            if view.completing || matches!(view.mode, DetailMode::ConfirmDelete { .. }) {
                return;
            }
            let mut optimistic = view.habit.clone();
            optimistic.history_count = optimistic.history_count.saturating_add(1);
            optimistic.today_completions = optimistic.today_completions.saturating_add(1);
            view.set_habit(optimistic);
            view.completing = true;
            view.notice = None;
        }
        DetailIntent::CompleteSucceeded { habit } => {
            view.completing = false;
            view.accept_server_habit(habit);
        }
        DetailIntent::CompleteFailed { message } => {
            view.completing = false;
            let mut rolled_back = view.habit.clone();
            rolled_back.history_count = view.confirmed.history_count;
            rolled_back.today_completions = view.confirmed.today_completions;
            view.set_habit(rolled_back);
            view.notice = Some(message);
        }

        DetailIntent::Refreshed { habit } => view.accept_server_habit(habit),
        DetailIntent::RefreshFailed { message } => view.notice = Some(message),

        DetailIntent::BeginEdit => {
            if view.mode == DetailMode::Viewing {
                view.mode = DetailMode::Editing {
                    form: EditForm::from_habit(&view.habit),
                    saving: false,
                };
                view.notice = None;
            }
        }
        DetailIntent::CancelEdit => {
            if matches!(view.mode, DetailMode::Editing { saving: false, .. }) {
                view.mode = DetailMode::Viewing;
                view.notice = None;
            }
        }
        DetailIntent::ToggleField => {
            if let DetailMode::Editing { form, saving: false } = &mut view.mode {
                form.focus = form.focus.toggle();
            }
        }
        DetailIntent::Input(ch) => {
            if let DetailMode::Editing { form, saving: false } = &mut view.mode {
                match form.focus {
                    EditField::Title => form.title.push(ch),
                    EditField::Description => form.description.push(ch),
                }
            }
        }
        DetailIntent::Backspace => {
            if let DetailMode::Editing { form, saving: false } = &mut view.mode {
                match form.focus {
                    EditField::Title => form.title.pop(),
                    EditField::Description => form.description.pop(),
                };
            }
        }
        DetailIntent::SavePressed => {
            let DetailMode::Editing { form, saving } = &mut view.mode else {
                return;
            };
            if *saving {
                return;
            }
            if form.title.trim().is_empty() {
                view.notice = Some("Title is required".to_string());
                return;
            }
            *saving = true;
            view.habit.title = form.title.clone();
            view.habit.description = form.description.clone();
            view.notice = None;
        }
        DetailIntent::SaveSucceeded { habit } => {
            if view.is_saving() {
                view.mode = DetailMode::Viewing;
            }
            view.accept_server_habit(habit);
        }
        DetailIntent::SaveFailed { message } => {
            if let DetailMode::Editing { form, saving } = &mut view.mode {
                *saving = false;
                form.title = view.confirmed.title.clone();
                form.description = view.confirmed.description.clone();
                view.habit.title = view.confirmed.title.clone();
                view.habit.description = view.confirmed.description.clone();
                view.notice = Some(message);
            }
        }

        DetailIntent::DeletePressed => {
            if view.mode == DetailMode::Viewing {
                view.mode = DetailMode::ConfirmDelete { deleting: false };
            }
        }
        DetailIntent::DeleteCancelled => {
            if view.mode == (DetailMode::ConfirmDelete { deleting: false }) {
                view.mode = DetailMode::Viewing;
            }
        }
        DetailIntent::DeleteConfirmed => {
            if view.mode == (DetailMode::ConfirmDelete { deleting: false }) {
                view.mode = DetailMode::ConfirmDelete { deleting: true };
            }
        }
        DetailIntent::DeleteSucceeded => {
            if matches!(view.mode, DetailMode::ConfirmDelete { .. }) {
                view.mode = DetailMode::Viewing;
            }
        }
        DetailIntent::DeleteFailed { message } => {
            if matches!(view.mode, DetailMode::ConfirmDelete { .. }) {
                view.mode = DetailMode::Viewing;
            }
            view.notice = Some(message);
        }

        DetailIntent::Loaded { .. } | DetailIntent::LoadFailed { .. } | DetailIntent::Reload => {}
    }
}
