//! Habit detail screen.
//!
//! # States
//!
//! ```text
//! Loading ──get ok──→ Ready ──(Viewing | Editing | ConfirmDelete)
//!    │
//!    └──get err──→ Error (terminal)
//! ```
//!
//! Mutations in `Ready` are optimistic: the screen changes first, the
//! service answer then either replaces the value or rolls it back.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::{DetailMode, DetailState, DetailView, EditField, EditForm};
pub use view::render_detail;
