use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::mvi::Reducer;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::Reload => DashboardState::Loading,
            DashboardIntent::Loaded { habits } => DashboardState::Ready {
                habits,
                selected: 0,
            },
            DashboardIntent::LoadFailed { message } => DashboardState::Failed { message },
            DashboardIntent::MoveUp => match state {
                DashboardState::Ready { habits, selected } => {
                    let selected = if selected == 0 {
                        habits.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    DashboardState::Ready { habits, selected }
                }
                other => other,
            },
            DashboardIntent::MoveDown => match state {
                DashboardState::Ready { habits, selected } => {
                    let selected = if selected + 1 >= habits.len() {
                        0
                    } else {
                        selected + 1
                    };
                    DashboardState::Ready { habits, selected }
                }
                other => other,
            },
        }
    }
}
