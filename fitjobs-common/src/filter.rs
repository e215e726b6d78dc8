//! Job filtering
//!
//! `FilterState` is an immutable value: the UI builds a new one for every
//! edit via [`FilterState::with_field`] and derives the visible jobs with
//! [`filter_jobs`] on each render.

use crate::job::Job;

/// Which filter field an edit applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Location,
    JobType,
    Experience,
}

/// User-entered search constraints. An empty string means "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Matched against title or company, case-insensitive substring
    pub search: String,
    /// Matched against location, case-insensitive substring
    pub location: String,
    /// Exact job type label, e.g. "Full-time"
    pub job_type: String,
    /// Exact experience label, e.g. "Senior"
    pub experience: String,
}

impl FilterState {
    /// Return a copy of this state with one field replaced
    pub fn with_field(&self, field: FilterField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FilterField::Search => next.search = value,
            FilterField::Location => next.location = value,
            FilterField::JobType => next.job_type = value,
            FilterField::Experience => next.experience = value,
        }
        next
    }

    /// True when no field constrains the result
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of non-empty fields
    pub fn active_count(&self) -> usize {
        [
            &self.search,
            &self.location,
            &self.job_type,
            &self.experience,
        ]
        .iter()
        .filter(|v| !v.is_empty())
        .count()
    }

    /// A state with every field cleared
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Whether a single job satisfies every non-empty field
    pub fn matches(&self, job: &Job) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !contains_lowercase(&job.title, &needle) && !contains_lowercase(&job.company, &needle)
            {
                return false;
            }
        }

        if !self.location.is_empty()
            && !contains_lowercase(&job.location, &self.location.to_lowercase())
        {
            return false;
        }

        if !self.job_type.is_empty() && job.job_type.label() != self.job_type {
            return false;
        }

        if !self.experience.is_empty() && job.experience.label() != self.experience {
            return false;
        }

        true
    }
}

fn contains_lowercase(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Jobs satisfying `filters`, in their original order
pub fn filter_jobs(jobs: &[Job], filters: &FilterState) -> Vec<Job> {
    if filters.is_empty() {
        return jobs.to_vec();
    }
    jobs.iter().filter(|job| filters.matches(job)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{ExperienceLevel, JobType, SportCategory};

    fn job(id: &str, title: &str, company: &str, location: &str, ty: &str, exp: &str) -> Job {
        Job {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            description: String::new(),
            sport_type: SportCategory::FitnessTraining,
            location: location.into(),
            salary: String::new(),
            job_type: JobType::from_label(ty),
            experience: ExperienceLevel::from_label(exp),
            posted_date: "2024-01-01".into(),
            requirements: vec![],
            remote: true,
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job("1", "Personal Trainer", "Iron Gym", "Austin, TX", "Full-time", "Mid-level"),
            job("2", "Yoga Instructor", "Zen Studio", "Portland, OR", "Part-time", "Entry-level"),
            job("3", "Head Swim Coach", "Aqua Club", "Austin, TX", "Full-time", "Senior"),
            job("4", "Nutritionist", "Fuel Labs", "Remote", "Contract", "Senior"),
        ]
    }

    fn ids(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let jobs = sample();
        let result = filter_jobs(&jobs, &FilterState::default());
        assert_eq!(result, jobs);
    }

    #[test]
    fn test_search_matches_title_or_company_case_insensitive() {
        let jobs = sample();
        let f = FilterState::default().with_field(FilterField::Search, "COACH");
        assert_eq!(ids(&filter_jobs(&jobs, &f)), vec!["3"]);

        let f = FilterState::default().with_field(FilterField::Search, "zen");
        assert_eq!(ids(&filter_jobs(&jobs, &f)), vec!["2"]);
    }

    #[test]
    fn test_location_is_substring() {
        let jobs = sample();
        let f = FilterState::default().with_field(FilterField::Location, "austin");
        assert_eq!(ids(&filter_jobs(&jobs, &f)), vec!["1", "3"]);
    }

    #[test]
    fn test_job_type_is_exact_match() {
        let jobs = sample();
        let f = FilterState::default().with_field(FilterField::JobType, "Full-time");
        assert_eq!(ids(&filter_jobs(&jobs, &f)), vec!["1", "3"]);

        let f = FilterState::default().with_field(FilterField::JobType, "Full");
        assert!(filter_jobs(&jobs, &f).is_empty());

        let f = FilterState::default().with_field(FilterField::JobType, "full-time");
        assert!(filter_jobs(&jobs, &f).is_empty());
    }

    #[test]
    fn test_experience_is_exact_match() {
        let jobs = sample();
        let f = FilterState::default().with_field(FilterField::Experience, "Senior");
        assert_eq!(ids(&filter_jobs(&jobs, &f)), vec!["3", "4"]);

        let f = FilterState::default().with_field(FilterField::Experience, "level");
        assert!(filter_jobs(&jobs, &f).is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let jobs = sample();
        let f = FilterState::default()
            .with_field(FilterField::Location, "Austin")
            .with_field(FilterField::Experience, "Senior");
        assert_eq!(ids(&filter_jobs(&jobs, &f)), vec!["3"]);

        let f = f.with_field(FilterField::JobType, "Contract");
        assert!(filter_jobs(&jobs, &f).is_empty());
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let original = FilterState::default().with_field(FilterField::Search, "gym");
        let edited = original.with_field(FilterField::Location, "Austin");
        assert_eq!(original.location, "");
        assert_eq!(edited.search, "gym");
        assert_eq!(edited.location, "Austin");
        assert_eq!(edited.active_count(), 2);
    }

    #[test]
    fn test_cleared() {
        let f = FilterState::default().with_field(FilterField::JobType, "Contract");
        assert!(!f.is_empty());
        assert!(FilterState::cleared().is_empty());
    }
}
