//! Display types for UI components
//!
//! The job board renders the domain types directly; they are re-exported here
//! so views and callers can import everything display-related from one place.

pub use fitjobs_common::{
    BadgeStyle, ExperienceLevel, FilterField, FilterState, Job, JobType, OAuthProvider,
    SignInStatus, SportCategory, Theme,
};
