//! Top-level application state store
//!
//! Components access state via lensing: `app.board().filters()`

use super::job_board::JobBoardState;
use super::ui::UiState;
use dioxus::prelude::*;

/// Top-level application state combining all sub-states
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Postings, filters and modal state
    pub board: JobBoardState,
    /// Theme and sign-in state
    pub ui: UiState,
}
