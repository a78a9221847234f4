//! Model-View-Intent (MVI) primitives shared by every screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a screen needs to render
//! - **Intent**: a key press or an API result
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Side effects (API calls, navigation) live in `App`, never in reducers.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
