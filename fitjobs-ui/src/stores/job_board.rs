//! Job board state store

use dioxus::prelude::*;
use fitjobs_common::{filter_jobs, DetailAction, DetailFlow, FilterState, Job};

/// State for the job board: the loaded postings, the active filters and
/// which modals are open.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct JobBoardState {
    /// All postings, in backend order
    pub jobs: Vec<Job>,
    /// Current filter values; replaced wholesale on every edit
    pub filters: FilterState,
    /// Detail / application modal state
    pub flow: DetailFlow,
    /// Whether the postings are loading; true until the first load finishes
    pub loading: bool,
    /// Error message if loading failed
    pub error: Option<String>,
}

impl Default for JobBoardState {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            filters: FilterState::default(),
            flow: DetailFlow::default(),
            loading: true,
            error: None,
        }
    }
}

impl JobBoardState {
    /// Postings matching the current filters
    pub fn visible_jobs(&self) -> Vec<Job> {
        filter_jobs(&self.jobs, &self.filters)
    }

    /// State after a detail / application modal action
    pub fn with_action(&self, action: DetailAction) -> DetailFlow {
        self.flow.clone().apply(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitjobs_common::{ExperienceLevel, FilterField, JobType, SportCategory};

    fn job(id: &str, title: &str) -> Job {
        Job {
            id: id.into(),
            title: title.into(),
            company: "Core Pilates".into(),
            description: String::new(),
            sport_type: SportCategory::Pilates,
            location: "Denver, CO".into(),
            salary: String::new(),
            job_type: JobType::PartTime,
            experience: ExperienceLevel::Entry,
            posted_date: "2024-02-01".into(),
            requirements: vec![],
            remote: true,
        }
    }

    #[test]
    fn test_visible_jobs_follow_filters() {
        let mut state = JobBoardState {
            jobs: vec![job("1", "Reformer Instructor"), job("2", "Front Desk")],
            ..Default::default()
        };
        assert_eq!(state.visible_jobs().len(), 2);

        state.filters = state.filters.with_field(FilterField::Search, "reformer");
        let visible = state.visible_jobs();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_starts_loading_with_nothing_to_show() {
        let state = JobBoardState::default();
        assert!(state.loading);
        assert!(state.jobs.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_with_action_does_not_mutate() {
        let state = JobBoardState::default();
        let next = state.with_action(DetailAction::Select(job("1", "Coach")));
        assert!(next.is_detail_open());
        assert_eq!(state.flow, DetailFlow::Closed);
    }
}
