//! # UI State
//!
//! The render state machine observed by the result list, the score badge
//! and the search button.
//!
//! Exactly one state is active at any instant. Transitions are driven by
//! the controller: a valid submission enters `Loading`; a settlement whose
//! token is still current leaves it for `Success`, `Empty` or `Error`; a
//! stale settlement changes nothing. There is no terminal state.

/// Render state for the search UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    /// No search performed yet
    #[default]
    Idle,
    /// A submission is awaiting its settlement
    Loading,
    /// The latest settlement produced at least one hit
    Success,
    /// The latest settlement was valid but produced zero hits
    Empty,
    /// The latest settlement failed; previous results stay visible
    Error,
}

impl UiState {
    /// Whether a submission is currently in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Short lowercase label for badges and logs
    pub fn label(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::Success => "success",
            UiState::Empty => "empty",
            UiState::Error => "error",
        }
    }
}

impl std::fmt::Display for UiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
