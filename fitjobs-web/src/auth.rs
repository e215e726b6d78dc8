//! OAuth sign-in through Supabase
//!
//! Mirrors `supabase.auth.signInWithOAuth({ provider })` in the browser: build
//! the project's authorize URL and send the window there. Whatever happens at
//! the provider is outside this app; failures we can see (missing config,
//! navigation refused) come back as `AuthError`.

use fitjobs_common::OAuthProvider;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Sign-in is not configured")]
    NotConfigured,
    #[error("Failed to encode sign-in parameters: {0}")]
    Encode(String),
    #[error("Could not open the sign-in page: {0}")]
    Navigation(String),
}

/// Identity provider client for a Supabase project
#[derive(Clone, Debug, PartialEq)]
pub struct SupabaseAuth {
    base_url: Option<String>,
    redirect_to: Option<String>,
}

impl SupabaseAuth {
    pub fn new(base_url: Option<String>, redirect_to: Option<String>) -> Self {
        Self {
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
            redirect_to,
        }
    }

    /// `{base}/auth/v1/authorize?provider=...[&redirect_to=...]`
    pub fn authorize_url(&self, provider: OAuthProvider) -> Result<String, AuthError> {
        let base = self.base_url.as_deref().ok_or(AuthError::NotConfigured)?;

        let mut params = vec![("provider", provider.id().to_string())];
        if let Some(redirect) = &self.redirect_to {
            params.push(("redirect_to", redirect.clone()));
        }

        let query =
            serde_urlencoded::to_string(&params).map_err(|e| AuthError::Encode(e.to_string()))?;
        Ok(format!("{base}/auth/v1/authorize?{query}"))
    }

    /// Start the provider's sign-in flow by navigating the current window
    pub async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<(), AuthError> {
        let url = self.authorize_url(provider)?;
        info!("Redirecting to {} sign-in", provider);
        navigate(&url)
    }
}

fn navigate(url: &str) -> Result<(), AuthError> {
    let window =
        web_sys::window().ok_or_else(|| AuthError::Navigation("no browser window".to_string()))?;
    window
        .location()
        .set_href(url)
        .map_err(|e| AuthError::Navigation(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url() {
        let auth = SupabaseAuth::new(Some("https://abc.supabase.co/".to_string()), None);
        assert_eq!(
            auth.authorize_url(OAuthProvider::Google).unwrap(),
            "https://abc.supabase.co/auth/v1/authorize?provider=google"
        );
    }

    #[test]
    fn test_authorize_url_encodes_redirect() {
        let auth = SupabaseAuth::new(
            Some("https://abc.supabase.co".to_string()),
            Some("https://fitjobs.dev/?signed_in=1".to_string()),
        );
        assert_eq!(
            auth.authorize_url(OAuthProvider::Google).unwrap(),
            "https://abc.supabase.co/auth/v1/authorize?provider=google&redirect_to=https%3A%2F%2Ffitjobs.dev%2F%3Fsigned_in%3D1"
        );
    }

    #[test]
    fn test_unconfigured() {
        let auth = SupabaseAuth::new(None, None);
        assert!(matches!(
            auth.authorize_url(OAuthProvider::Google),
            Err(AuthError::NotConfigured)
        ));
    }
}
