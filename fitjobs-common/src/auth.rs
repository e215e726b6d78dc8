//! Sign-in types shared by the UI and the identity provider client

use std::fmt;

/// OAuth providers the board can sign in with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    /// Provider id understood by the identity service
    pub fn id(self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
        }
    }

    /// Human-readable name for buttons
    pub fn display_name(self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Observable result of the sign-in task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SignInStatus {
    #[default]
    Idle,
    /// The sign-in call is running and the browser is about to leave the page
    Redirecting(OAuthProvider),
    /// The sign-in call failed before leaving the page
    Failed(String),
}

impl SignInStatus {
    /// Status once the sign-in call has returned.
    ///
    /// A successful call only means the navigation was handed to the browser,
    /// so the status goes back to `Idle`. A page restored from history, or a
    /// navigation the browser dropped, can then be retried.
    pub fn finished(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => SignInStatus::Idle,
            Err(message) => SignInStatus::Failed(message),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SignInStatus::Redirecting(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SignInStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        assert_eq!(OAuthProvider::Google.id(), "google");
        assert_eq!(OAuthProvider::Google.to_string(), "Google");
    }

    #[test]
    fn test_redirect_then_success_returns_to_idle() {
        let status = SignInStatus::Redirecting(OAuthProvider::Google);
        assert!(status.is_pending());

        let status = SignInStatus::finished(Ok(()));
        assert_eq!(status, SignInStatus::Idle);
        assert!(!status.is_pending());
        assert_eq!(status.error(), None);
    }

    #[test]
    fn test_redirect_then_failure_keeps_message() {
        let status = SignInStatus::finished(Err("Sign-in is not configured".to_string()));
        assert!(!status.is_pending());
        assert_eq!(status.error(), Some("Sign-in is not configured"));
    }
}
