use tracing::debug;

use crate::job::Job;

/// User actions that drive the job detail / application modals
#[derive(Clone, Debug, PartialEq)]
pub enum DetailAction {
    /// A job card was clicked
    Select(Job),
    /// The detail modal's close button (or Escape)
    CloseDetail,
    /// "Apply for this position"
    Apply,
    /// The application modal was dismissed
    CloseApplication,
}

/// Which modals are open, and for which job.
///
/// Pure state machine without any I/O; the UI store holds one of these and
/// replaces it on every action.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailFlow {
    #[default]
    Closed,
    /// Detail modal showing `job`
    DetailOpen { job: Job },
    /// Application modal stacked on top of the detail modal for `job`
    ApplicationOpen { job: Job },
}

impl DetailFlow {
    /// Compute the next state for `action`.
    ///
    /// Actions that make no sense in the current state (applying with nothing
    /// open, closing a modal that isn't shown) leave the state unchanged.
    pub fn apply(self, action: DetailAction) -> DetailFlow {
        match (self, action) {
            (_, DetailAction::Select(job)) => DetailFlow::DetailOpen { job },
            (DetailFlow::DetailOpen { .. }, DetailAction::CloseDetail) => DetailFlow::Closed,
            // Closing the detail view takes the stacked application modal with it
            (DetailFlow::ApplicationOpen { .. }, DetailAction::CloseDetail) => DetailFlow::Closed,
            (DetailFlow::DetailOpen { job }, DetailAction::Apply) => {
                DetailFlow::ApplicationOpen { job }
            }
            (DetailFlow::ApplicationOpen { job }, DetailAction::CloseApplication) => {
                DetailFlow::DetailOpen { job }
            }
            (state, action) => {
                debug!("Ignoring {:?} in state {}", action, state.name());
                state
            }
        }
    }

    /// The job whose detail is showing, if any
    pub fn active_job(&self) -> Option<&Job> {
        match self {
            DetailFlow::Closed => None,
            DetailFlow::DetailOpen { job } | DetailFlow::ApplicationOpen { job } => Some(job),
        }
    }

    pub fn is_detail_open(&self) -> bool {
        !matches!(self, DetailFlow::Closed)
    }

    pub fn is_application_open(&self) -> bool {
        matches!(self, DetailFlow::ApplicationOpen { .. })
    }

    fn name(&self) -> &'static str {
        match self {
            DetailFlow::Closed => "Closed",
            DetailFlow::DetailOpen { .. } => "DetailOpen",
            DetailFlow::ApplicationOpen { .. } => "ApplicationOpen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{ExperienceLevel, JobType, SportCategory};

    fn job(id: &str) -> Job {
        Job {
            id: id.into(),
            title: format!("Job {id}"),
            company: "Iron Gym".into(),
            description: String::new(),
            sport_type: SportCategory::FitnessTraining,
            location: "Austin, TX".into(),
            salary: String::new(),
            job_type: JobType::FullTime,
            experience: ExperienceLevel::Mid,
            posted_date: "2024-01-01".into(),
            requirements: vec![],
            remote: true,
        }
    }

    #[test]
    fn test_select_then_close() {
        let flow = DetailFlow::Closed.apply(DetailAction::Select(job("a")));
        assert_eq!(flow.active_job().map(|j| j.id.as_str()), Some("a"));

        let flow = flow.apply(DetailAction::CloseDetail);
        assert_eq!(flow, DetailFlow::Closed);
        assert!(flow.active_job().is_none());
    }

    #[test]
    fn test_apply_then_close_application_keeps_job() {
        let flow = DetailFlow::Closed
            .apply(DetailAction::Select(job("a")))
            .apply(DetailAction::Apply);
        assert!(flow.is_application_open());
        assert!(flow.is_detail_open());

        let flow = flow.apply(DetailAction::CloseApplication);
        assert_eq!(flow, DetailFlow::DetailOpen { job: job("a") });
    }

    #[test]
    fn test_apply_requires_open_detail() {
        assert_eq!(DetailFlow::Closed.apply(DetailAction::Apply), DetailFlow::Closed);
        assert_eq!(
            DetailFlow::Closed.apply(DetailAction::CloseApplication),
            DetailFlow::Closed
        );
    }

    #[test]
    fn test_apply_twice_is_noop() {
        let open = DetailFlow::Closed
            .apply(DetailAction::Select(job("a")))
            .apply(DetailAction::Apply);
        assert_eq!(open.clone().apply(DetailAction::Apply), open);
    }

    #[test]
    fn test_close_detail_with_application_open_closes_both() {
        let flow = DetailFlow::Closed
            .apply(DetailAction::Select(job("a")))
            .apply(DetailAction::Apply)
            .apply(DetailAction::CloseDetail);
        assert_eq!(flow, DetailFlow::Closed);
    }

    #[test]
    fn test_select_while_open_switches_job() {
        let flow = DetailFlow::Closed
            .apply(DetailAction::Select(job("a")))
            .apply(DetailAction::Apply)
            .apply(DetailAction::Select(job("b")));
        assert_eq!(flow, DetailFlow::DetailOpen { job: job("b") });
    }
}
