//! General UI state store (theme, sign-in)

use dioxus::prelude::*;
use fitjobs_common::{SignInStatus, Theme};

/// Combined UI state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct UiState {
    /// Light / dark theme, kept in memory only
    pub theme: Theme,
    /// Progress of the OAuth sign-in task
    pub sign_in: SignInStatus,
}
