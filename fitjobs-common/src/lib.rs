//! fitjobs-common - domain logic for the FitJobs board
//!
//! Job model, filtering, date labels, badge colours and the detail modal
//! state machine. No UI framework code lives here.

mod auth;
mod badge;
mod detail_flow;
mod filter;
mod job;
mod posted;
mod theme;

pub use auth::{OAuthProvider, SignInStatus};
pub use badge::BadgeStyle;
pub use detail_flow::{DetailAction, DetailFlow};
pub use filter::{filter_jobs, FilterField, FilterState};
pub use job::{ExperienceLevel, Job, JobType, SportCategory};
pub use posted::{
    elapsed_days, format_posted_date, parse_posted_date, posted_ago, UNKNOWN_POSTED_LABEL,
};
pub use theme::Theme;
