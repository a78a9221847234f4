//! Base trait for screen state.

/// Marker trait for UI state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and hold all data needed to render the screen.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
