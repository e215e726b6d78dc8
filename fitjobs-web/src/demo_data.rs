//! Built-in postings used when no listing endpoint is configured

use chrono::{Duration, Utc};
use fitjobs_common::{ExperienceLevel, Job, JobType, SportCategory};

fn days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

fn job(
    id: &str,
    title: &str,
    company: &str,
    sport_type: SportCategory,
    location: &str,
    salary: &str,
    job_type: JobType,
    experience: ExperienceLevel,
    posted_days_ago: i64,
    description: &str,
    requirements: &[&str],
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        description: description.to_string(),
        sport_type,
        location: location.to_string(),
        salary: salary.to_string(),
        job_type,
        experience,
        posted_date: days_ago(posted_days_ago),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        remote: true,
    }
}

pub fn jobs() -> Vec<Job> {
    vec![
        job(
            "1",
            "Senior Personal Trainer",
            "Peak Performance Gym",
            SportCategory::FitnessTraining,
            "Austin, TX",
            "$55,000 - $70,000",
            JobType::FullTime,
            ExperienceLevel::Senior,
            1,
            "Lead one-on-one and small group strength programs for a growing client base.",
            &[
                "NASM, ACE or NSCA certification",
                "5+ years of personal training experience",
                "CPR/AED certified",
            ],
        ),
        job(
            "2",
            "Vinyasa Yoga Instructor",
            "Zen Flow Studio",
            SportCategory::Yoga,
            "Portland, OR",
            "$30 - $45 per class",
            JobType::PartTime,
            ExperienceLevel::Mid,
            3,
            "Teach morning and evening vinyasa classes in a community-focused studio.",
            &["RYT-200 certification", "2+ years teaching experience"],
        ),
        job(
            "3",
            "Head Swim Coach",
            "Aqua Elite Club",
            SportCategory::Swimming,
            "Miami, FL",
            "$60,000 - $75,000",
            JobType::FullTime,
            ExperienceLevel::Senior,
            10,
            "Run the competitive age-group program and mentor assistant coaches.",
            &[
                "ASCA Level 3 or higher",
                "Lifeguard certification",
                "Experience coaching at sectional level",
            ],
        ),
        job(
            "4",
            "Reformer Pilates Instructor",
            "Core & Balance",
            SportCategory::Pilates,
            "Denver, CO",
            "$35 - $50 per hour",
            JobType::Contract,
            ExperienceLevel::Entry,
            5,
            "Deliver beginner and intermediate reformer sessions across two locations.",
            &["Comprehensive Pilates certification", "Friendly, client-first attitude"],
        ),
        job(
            "5",
            "CrossFit Coach",
            "Ironclad Box",
            SportCategory::CrossFit,
            "Chicago, IL",
            "$40,000 - $52,000",
            JobType::FullTime,
            ExperienceLevel::Mid,
            18,
            "Coach group WODs, run on-ramp classes and help program the competition team.",
            &["CF-L2 certification", "Olympic lifting coaching experience"],
        ),
        job(
            "6",
            "Sports Nutritionist",
            "FuelRight Labs",
            SportCategory::Nutrition,
            "Remote",
            "$65,000 - $85,000",
            JobType::Freelance,
            ExperienceLevel::Senior,
            45,
            "Build nutrition plans for endurance athletes and review food logs weekly.",
            &[
                "Registered Dietitian (RD)",
                "CSSD preferred",
                "Experience with endurance athletes",
            ],
        ),
        job(
            "7",
            "Group Fitness Instructor",
            "Urban Sweat Co.",
            SportCategory::FitnessTraining,
            "New York, NY",
            "$28 - $40 per class",
            JobType::PartTime,
            ExperienceLevel::Entry,
            2,
            "High-energy HIIT and bootcamp classes, early mornings and weekends.",
            &["Group fitness certification", "Strong music and cueing skills"],
        ),
        job(
            "8",
            "Aquatics Program Director",
            "Lakeside Community Center",
            SportCategory::Other("Aquatics".to_string()),
            "Madison, WI",
            "$58,000 - $66,000",
            JobType::FullTime,
            ExperienceLevel::Senior,
            70,
            "Oversee lessons, lifeguard scheduling and pool safety for a busy community pool.",
            &["Aquatic Facility Operator certification", "3+ years supervising staff"],
        ),
    ]
}
