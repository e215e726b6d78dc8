//! AppService - owns the reactive state and coordinates the backend calls
//!
//! AppService owns the Store<AppState> and is responsible for:
//! - Loading postings into the Store
//! - Applying filter edits and modal transitions
//! - Running the sign-in task and publishing its status
//!
//! Pages access AppService via `use_app()`, read state from `app.state` and
//! call action methods like `app.dispatch()`.

use crate::api;
use crate::auth::{AuthError, SupabaseAuth};
use crate::config::Config;
use crate::demo_data;
use dioxus::prelude::*;
use fitjobs_common::{DetailAction, FilterState, OAuthProvider, SignInStatus};
use fitjobs_ui::stores::{AppState, AppStateStoreExt, JobBoardStateStoreExt, UiStateStoreExt};
use tracing::{debug, error, info, warn};

/// Main application service.
///
/// Created inside the Dioxus component tree because Store<AppState> is not Send-safe.
/// Access via `use_app()` from any component.
#[derive(Clone)]
pub struct AppService {
    /// Reactive application state (Store for fine-grained reactivity)
    pub state: Store<AppState>,
    /// Build-time configuration
    pub config: Config,
    /// Identity provider client
    pub auth: SupabaseAuth,
}

impl AppService {
    pub fn new(config: Config) -> Self {
        let auth = SupabaseAuth::new(config.supabase_url.clone(), config.oauth_redirect.clone());
        Self {
            state: Store::new(AppState::default()),
            config,
            auth,
        }
    }

    // =========================================================================
    // Job Board
    // =========================================================================

    /// Load postings into the Store. Call this once after creating AppService.
    pub fn load_jobs(&self) {
        let state = self.state;
        state.board().loading().set(true);
        let url = self.config.jobs_url.clone();

        spawn(async move {
            load_jobs(&state, url.as_deref()).await;
        });
    }

    /// Replace the active filters
    pub fn set_filters(&self, filters: FilterState) {
        debug!("Filters changed: {:?}", filters);
        self.state.board().filters().set(filters);
    }

    /// Apply a detail / application modal action
    pub fn dispatch(&self, action: DetailAction) {
        let next = self.state.board().read().with_action(action);
        self.state.board().flow().set(next);
    }

    /// "Post Job" from the header. Posting has no backend yet.
    pub fn post_job(&self) {
        info!("Post job requested");
    }

    // =========================================================================
    // UI
    // =========================================================================

    pub fn toggle_theme(&self) {
        let theme = *self.state.ui().theme().read();
        self.state.ui().theme().set(theme.toggled());
    }

    /// Start the OAuth flow; the outcome is published as `SignInStatus`
    pub fn sign_in(&self, provider: OAuthProvider) {
        if self.state.ui().sign_in().read().is_pending() {
            debug!("Sign-in already in progress");
            return;
        }

        let state = self.state;
        let auth = self.auth.clone();
        state.ui().sign_in().set(SignInStatus::Redirecting(provider));

        spawn(async move {
            let result = auth.sign_in_with_oauth(provider).await;
            if let Err(e) = &result {
                warn!("Sign-in with {} failed: {}", provider, e);
            }
            state.ui().sign_in().set(sign_in_outcome(result));
        });
    }
}

/// Status to publish once the sign-in call has returned
fn sign_in_outcome(result: Result<(), AuthError>) -> SignInStatus {
    SignInStatus::finished(result.map_err(|e| e.to_string()))
}

/// Hook to access the AppService from any component
pub fn use_app() -> AppService {
    use_context::<AppService>()
}

// =============================================================================
// Async helpers
// =============================================================================

/// Fetch postings (or use the built-in set) and write them to the Store
async fn load_jobs(state: &Store<AppState>, url: Option<&str>) {
    state.board().loading().set(true);
    state.board().error().set(None);

    match url {
        Some(url) => match api::fetch_jobs(url).await {
            Ok(jobs) => {
                info!("Loaded {} jobs", jobs.len());
                state.board().jobs().set(jobs);
            }
            Err(e) => {
                error!("Failed to load jobs: {}", e);
                state
                    .board()
                    .error()
                    .set(Some(format!("Failed to load jobs: {}", e)));
            }
        },
        None => {
            let jobs = demo_data::jobs();
            info!("Using {} built-in jobs", jobs.len());
            state.board().jobs().set(jobs);
        }
    }

    state.board().loading().set(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_sign_in_is_reported() {
        assert_eq!(
            sign_in_outcome(Err(AuthError::NotConfigured)),
            SignInStatus::Failed("Sign-in is not configured".to_string())
        );
    }

    #[test]
    fn test_successful_redirect_does_not_lock_retries() {
        let status = sign_in_outcome(Ok(()));
        assert_eq!(status, SignInStatus::Idle);
        assert!(!status.is_pending());
    }
}
