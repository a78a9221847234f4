//! Create screen: a single habit draft and its submission.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CreateIntent;
pub use reducer::CreateReducer;
pub use state::{CreateField, CreateState, HabitDraft, INITIAL_STATUS, MAX_TITLE_LEN};
pub use view::render_create;
