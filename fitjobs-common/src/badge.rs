//! Badge colours for job labels
//!
//! Card and detail views both go through these lookups, so a label always
//! renders with the same colour wherever it appears.

use crate::job::{ExperienceLevel, JobType, SportCategory};

/// Colour token for a label badge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BadgeStyle {
    Blue,
    Purple,
    Cyan,
    Pink,
    Orange,
    Green,
    Emerald,
    Amber,
    Indigo,
    /// Fallback for labels without a designated colour
    Neutral,
}

impl BadgeStyle {
    /// Tailwind classes for the badge background, text and border
    pub fn classes(self) -> &'static str {
        match self {
            BadgeStyle::Blue => "bg-blue-50 dark:bg-blue-900/20 text-blue-700 dark:text-blue-300 border-blue-200 dark:border-blue-800",
            BadgeStyle::Purple => "bg-purple-50 dark:bg-purple-900/20 text-purple-700 dark:text-purple-300 border-purple-200 dark:border-purple-800",
            BadgeStyle::Cyan => "bg-cyan-50 dark:bg-cyan-900/20 text-cyan-700 dark:text-cyan-300 border-cyan-200 dark:border-cyan-800",
            BadgeStyle::Pink => "bg-pink-50 dark:bg-pink-900/20 text-pink-700 dark:text-pink-300 border-pink-200 dark:border-pink-800",
            BadgeStyle::Orange => "bg-orange-50 dark:bg-orange-900/20 text-orange-700 dark:text-orange-300 border-orange-200 dark:border-orange-800",
            BadgeStyle::Green => "bg-green-50 dark:bg-green-900/20 text-green-700 dark:text-green-300 border-green-200 dark:border-green-800",
            BadgeStyle::Emerald => "bg-emerald-50 dark:bg-emerald-900/20 text-emerald-700 dark:text-emerald-300 border-emerald-200 dark:border-emerald-800",
            BadgeStyle::Amber => "bg-amber-50 dark:bg-amber-900/20 text-amber-700 dark:text-amber-300 border-amber-200 dark:border-amber-800",
            BadgeStyle::Indigo => "bg-indigo-50 dark:bg-indigo-900/20 text-indigo-700 dark:text-indigo-300 border-indigo-200 dark:border-indigo-800",
            BadgeStyle::Neutral => "bg-gray-50 dark:bg-gray-800 text-gray-700 dark:text-gray-300 border-gray-200 dark:border-gray-700",
        }
    }
}

impl SportCategory {
    pub fn badge_style(&self) -> BadgeStyle {
        match self {
            SportCategory::FitnessTraining => BadgeStyle::Blue,
            SportCategory::Yoga => BadgeStyle::Purple,
            SportCategory::Swimming => BadgeStyle::Cyan,
            SportCategory::Pilates => BadgeStyle::Pink,
            SportCategory::CrossFit => BadgeStyle::Orange,
            SportCategory::Nutrition => BadgeStyle::Green,
            SportCategory::Other(_) => BadgeStyle::Neutral,
        }
    }
}

impl JobType {
    pub fn badge_style(&self) -> BadgeStyle {
        match self {
            JobType::FullTime => BadgeStyle::Emerald,
            JobType::PartTime => BadgeStyle::Amber,
            JobType::Contract => BadgeStyle::Indigo,
            JobType::Freelance => BadgeStyle::Pink,
            JobType::Other(_) => BadgeStyle::Neutral,
        }
    }
}

impl ExperienceLevel {
    pub fn badge_style(&self) -> BadgeStyle {
        match self {
            ExperienceLevel::Entry => BadgeStyle::Green,
            ExperienceLevel::Mid => BadgeStyle::Blue,
            ExperienceLevel::Senior => BadgeStyle::Purple,
            ExperienceLevel::Other(_) => BadgeStyle::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        assert_eq!(
            SportCategory::from_label("Yoga").badge_style(),
            BadgeStyle::Purple
        );
        assert_eq!(
            SportCategory::from_label("CrossFit").badge_style(),
            BadgeStyle::Orange
        );
    }

    #[test]
    fn test_unknown_category_is_neutral() {
        assert_eq!(
            SportCategory::from_label("Aquatics").badge_style(),
            BadgeStyle::Neutral
        );
    }

    #[test]
    fn test_job_type_and_experience_fallbacks() {
        assert_eq!(JobType::from_label("Contract").badge_style(), BadgeStyle::Indigo);
        assert_eq!(JobType::from_label("Internship").badge_style(), BadgeStyle::Neutral);
        assert_eq!(
            ExperienceLevel::from_label("Senior").badge_style(),
            BadgeStyle::Purple
        );
        assert_eq!(
            ExperienceLevel::from_label("Principal").badge_style(),
            BadgeStyle::Neutral
        );
    }

    #[test]
    fn test_every_known_category_has_a_colour() {
        for category in SportCategory::ALL {
            assert_ne!(category.badge_style(), BadgeStyle::Neutral, "{category}");
        }
    }
}
