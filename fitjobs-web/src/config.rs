//! Build-time configuration
//!
//! The web build has no process environment at runtime, so values are baked
//! in from environment variables when the crate is compiled:
//!
//! - `FITJOBS_JOBS_URL` - job listing endpoint; unset means built-in postings
//! - `FITJOBS_SUPABASE_URL` - identity service base URL; unset disables sign-in
//! - `FITJOBS_OAUTH_REDIRECT` - where the provider sends the user back to

use tracing::info;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Endpoint returning the job postings as JSON
    pub jobs_url: Option<String>,
    /// Base URL of the Supabase project handling OAuth
    pub supabase_url: Option<String>,
    /// Redirect target after sign-in. None lets the provider use its default.
    pub oauth_redirect: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        let config = Self::from_values(
            option_env!("FITJOBS_JOBS_URL"),
            option_env!("FITJOBS_SUPABASE_URL"),
            option_env!("FITJOBS_OAUTH_REDIRECT"),
        );
        info!(
            "Config loaded (jobs: {}, sign-in: {})",
            config.jobs_url.as_deref().unwrap_or("built-in"),
            if config.supabase_url.is_some() {
                "configured"
            } else {
                "disabled"
            }
        );
        config
    }

    fn from_values(
        jobs_url: Option<&str>,
        supabase_url: Option<&str>,
        oauth_redirect: Option<&str>,
    ) -> Self {
        Self {
            jobs_url: non_empty(jobs_url),
            supabase_url: non_empty(supabase_url),
            oauth_redirect: non_empty(oauth_redirect),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_values(Some("  "), None, Some(""));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_values_are_trimmed() {
        let config = Config::from_values(
            Some(" https://api.fitjobs.dev/jobs "),
            Some("https://abc.supabase.co"),
            None,
        );
        assert_eq!(
            config.jobs_url.as_deref(),
            Some("https://api.fitjobs.dev/jobs")
        );
        assert_eq!(
            config.supabase_url.as_deref(),
            Some("https://abc.supabase.co")
        );
        assert!(config.oauth_redirect.is_none());
    }
}
