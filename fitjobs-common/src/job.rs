//! Job posting model
//!
//! Jobs are supplied by the backend (or the built-in fixture) and are never
//! mutated by the UI. The labelled fields (category, type, experience) keep
//! unknown labels verbatim in an `Other` variant so that any payload the
//! backend sends can be displayed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single job posting
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    /// Activity / sport classification, e.g. "Yoga"
    pub sport_type: SportCategory,
    pub location: String,
    /// Free-form salary range, e.g. "$45,000 - $60,000"
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub experience: ExperienceLevel,
    /// Posting date as sent by the backend (ISO 8601 date or timestamp)
    pub posted_date: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default = "default_remote")]
    pub remote: bool,
}

fn default_remote() -> bool {
    true
}

impl Job {
    /// Website label derived from the company name.
    ///
    /// "Peak Performance Gym" -> "peakperformancegym.com"
    pub fn company_website(&self) -> String {
        let slug: String = self
            .company
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();
        format!("{slug}.com")
    }

    /// First character of the company name, used for the avatar bubble
    pub fn company_initial(&self) -> String {
        self.company.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Category of a job posting
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SportCategory {
    FitnessTraining,
    Yoga,
    Swimming,
    Pilates,
    CrossFit,
    Nutrition,
    Other(String),
}

impl SportCategory {
    pub const ALL: [SportCategory; 6] = [
        SportCategory::FitnessTraining,
        SportCategory::Yoga,
        SportCategory::Swimming,
        SportCategory::Pilates,
        SportCategory::CrossFit,
        SportCategory::Nutrition,
    ];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Fitness Training" => SportCategory::FitnessTraining,
            "Yoga" => SportCategory::Yoga,
            "Swimming" => SportCategory::Swimming,
            "Pilates" => SportCategory::Pilates,
            "CrossFit" => SportCategory::CrossFit,
            "Nutrition" => SportCategory::Nutrition,
            other => SportCategory::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SportCategory::FitnessTraining => "Fitness Training",
            SportCategory::Yoga => "Yoga",
            SportCategory::Swimming => "Swimming",
            SportCategory::Pilates => "Pilates",
            SportCategory::CrossFit => "CrossFit",
            SportCategory::Nutrition => "Nutrition",
            SportCategory::Other(label) => label,
        }
    }
}

/// Employment type
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Other(String),
}

impl JobType {
    /// Options offered by the job type filter, in display order
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Freelance,
    ];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Full-time" => JobType::FullTime,
            "Part-time" => JobType::PartTime,
            "Contract" => JobType::Contract,
            "Freelance" => JobType::Freelance,
            other => JobType::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
            JobType::Other(label) => label,
        }
    }
}

/// Required experience level
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Other(String),
}

impl ExperienceLevel {
    /// Options offered by the experience filter, in display order
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
    ];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Entry-level" => ExperienceLevel::Entry,
            "Mid-level" => ExperienceLevel::Mid,
            "Senior" => ExperienceLevel::Senior,
            other => ExperienceLevel::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ExperienceLevel::Entry => "Entry-level",
            ExperienceLevel::Mid => "Mid-level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Other(label) => label,
        }
    }
}

impl From<String> for SportCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<SportCategory> for String {
    fn from(category: SportCategory) -> Self {
        category.label().to_string()
    }
}

impl From<String> for JobType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<JobType> for String {
    fn from(job_type: JobType) -> Self {
        job_type.label().to_string()
    }
}

impl From<String> for ExperienceLevel {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        level.label().to_string()
    }
}

impl fmt::Display for SportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_at(company: &str) -> Job {
        Job {
            id: "1".into(),
            title: "Coach".into(),
            company: company.into(),
            description: String::new(),
            sport_type: SportCategory::Yoga,
            location: "Remote".into(),
            salary: String::new(),
            job_type: JobType::FullTime,
            experience: ExperienceLevel::Entry,
            posted_date: "2024-01-01".into(),
            requirements: vec![],
            remote: true,
        }
    }

    #[test]
    fn test_company_website_strips_spaces_and_punctuation() {
        assert_eq!(
            job_at("Peak Performance Gym").company_website(),
            "peakperformancegym.com"
        );
        assert_eq!(job_at("Zen & Flow Co.").company_website(), "zenflowco.com");
        assert_eq!(job_at("24 Hour Fit").company_website(), "24hourfit.com");
    }

    #[test]
    fn test_company_initial() {
        assert_eq!(job_at("Aqua Club").company_initial(), "A");
        assert_eq!(job_at("").company_initial(), "");
    }

    #[test]
    fn test_unknown_labels_are_kept_verbatim() {
        assert_eq!(
            SportCategory::from_label("Aquatics"),
            SportCategory::Other("Aquatics".into())
        );
        assert_eq!(SportCategory::from_label("Aquatics").label(), "Aquatics");
        assert_eq!(JobType::from_label("Internship").label(), "Internship");
        assert_eq!(ExperienceLevel::from_label("Lead").label(), "Lead");
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(
            JobType::from_label("full-time"),
            JobType::Other("full-time".into())
        );
        assert_eq!(
            ExperienceLevel::from_label("senior"),
            ExperienceLevel::Other("senior".into())
        );
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": "7",
            "title": "Swim Coach",
            "company": "Aqua Club",
            "description": "Coach juniors",
            "sportType": "Swimming",
            "location": "Miami, FL",
            "salary": "$40k",
            "type": "Part-time",
            "experience": "Mid-level",
            "postedDate": "2024-03-01"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.sport_type, SportCategory::Swimming);
        assert_eq!(job.job_type, JobType::PartTime);
        assert_eq!(job.experience, ExperienceLevel::Mid);
        assert!(job.requirements.is_empty());
        assert!(job.remote);

        let back = serde_json::to_value(&job).unwrap();
        assert_eq!(back["type"], "Part-time");
        assert_eq!(back["sportType"], "Swimming");
    }
}
