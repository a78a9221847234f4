//! Client for the remote habit-tracking HTTP service.
//!
//! | Method | Path                    | Result        |
//! |--------|-------------------------|---------------|
//! | GET    | `/habits`               | `Vec<Habit>`  |
//! | GET    | `/habits/{id}`          | `Habit`       |
//! | POST   | `/habits`               | `Habit`       |
//! | PATCH  | `/habits/{id}`          | `Habit`       |
//! | DELETE | `/habits/{id}`          | nothing (204) |
//! | POST   | `/habits/{id}/complete` | `Habit`       |

mod client;
mod error;
mod types;

pub use client::HabitClient;
pub use error::ApiError;
pub use types::{Frequency, Habit, HabitPatch, NewHabit};
