//! Utility functions for UI components

use fitjobs_common::SignInStatus;

/// "1 job" / "12 jobs"
pub fn format_job_count(count: usize) -> String {
    if count == 1 {
        "1 job".to_string()
    } else {
        format!("{} jobs", count)
    }
}

/// Results line above the grid, e.g. "3 jobs (2 filters active)"
pub fn format_results_summary(count: usize, active_filters: usize) -> String {
    match active_filters {
        0 => format_job_count(count),
        1 => format!("{} (1 filter active)", format_job_count(count)),
        n => format!("{} ({} filters active)", format_job_count(count), n),
    }
}

/// Text of the header's sign-in button
pub fn sign_in_label(status: &SignInStatus) -> &'static str {
    if status.is_pending() {
        "Signing in..."
    } else {
        "Sign In"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitjobs_common::OAuthProvider;

    #[test]
    fn test_job_count() {
        assert_eq!(format_job_count(0), "0 jobs");
        assert_eq!(format_job_count(1), "1 job");
        assert_eq!(format_job_count(12), "12 jobs");
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(format_results_summary(4, 0), "4 jobs");
        assert_eq!(format_results_summary(1, 1), "1 job (1 filter active)");
        assert_eq!(format_results_summary(0, 3), "0 jobs (3 filters active)");
    }

    #[test]
    fn test_sign_in_label_follows_status() {
        assert_eq!(sign_in_label(&SignInStatus::Idle), "Sign In");
        assert_eq!(
            sign_in_label(&SignInStatus::Redirecting(OAuthProvider::Google)),
            "Signing in..."
        );
        let failed = SignInStatus::Failed("Sign-in is not configured".to_string());
        assert_eq!(sign_in_label(&failed), "Sign In");
        assert_eq!(failed.error(), Some("Sign-in is not configured"));
    }
}
