use chrono::{TimeZone, Utc};
use fitjobs_common::{
    filter_jobs, format_posted_date, BadgeStyle, DetailAction, DetailFlow, FilterField,
    FilterState, Job,
};

const PAYLOAD: &str = r#"[
    {"id": "1", "title": "Personal Trainer", "company": "Iron Gym", "description": "1:1 sessions",
     "sportType": "Fitness Training", "location": "Austin, TX", "salary": "$50k - $65k",
     "type": "Full-time", "experience": "Mid-level", "postedDate": "2024-06-14",
     "requirements": ["NASM certification", "2+ years experience"]},
    {"id": "2", "title": "Yoga Instructor", "company": "Zen Studio", "description": "Vinyasa classes",
     "sportType": "Yoga", "location": "Portland, OR", "salary": "$30/hr",
     "type": "Part-time", "experience": "Entry-level", "postedDate": "2024-06-05"},
    {"id": "3", "title": "Aquatics Director", "company": "Aqua Club", "description": "Run the pool",
     "sportType": "Aquatics", "location": "austin, tx", "salary": "$70k",
     "type": "Full-time", "experience": "Senior", "postedDate": "2024-04-01"}
]"#;

fn jobs() -> Vec<Job> {
    serde_json::from_str(PAYLOAD).unwrap()
}

#[test]
fn test_filter_then_open_detail() {
    let jobs = jobs();
    let filters = FilterState::default()
        .with_field(FilterField::Location, "AUSTIN")
        .with_field(FilterField::JobType, "Full-time");
    let visible = filter_jobs(&jobs, &filters);
    let ids: Vec<_> = visible.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    let flow = DetailFlow::default().apply(DetailAction::Select(visible[1].clone()));
    let active = flow.active_job().unwrap();
    assert_eq!(active.title, "Aquatics Director");
    assert_eq!(active.sport_type.badge_style(), BadgeStyle::Neutral);

    let flow = flow
        .apply(DetailAction::Apply)
        .apply(DetailAction::CloseApplication);
    assert_eq!(flow.active_job().map(|j| j.id.as_str()), Some("3"));

    let flow = flow.apply(DetailAction::CloseDetail);
    assert!(flow.active_job().is_none());
}

#[test]
fn test_card_labels_for_fixture() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
    let jobs = jobs();
    let labels: Vec<_> = jobs
        .iter()
        .map(|j| format_posted_date(&j.posted_date, now))
        .collect();
    assert_eq!(labels, vec!["1 day ago", "1 weeks ago", "2 months ago"]);
    assert_eq!(jobs[0].requirements.len(), 2);
    assert_eq!(jobs[1].sport_type.badge_style(), BadgeStyle::Purple);
}

#[test]
fn test_search_miss_yields_empty_list() {
    let filters = FilterState::default().with_field(FilterField::Search, "rowing");
    assert!(filter_jobs(&jobs(), &filters).is_empty());
}
