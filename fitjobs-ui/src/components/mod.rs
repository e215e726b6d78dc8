//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod header;
pub mod helpers;
pub mod icons;
pub mod job_board;
pub mod job_card;
pub mod job_detail;
pub mod label_badge;
pub mod login_button;
pub mod modal;
pub mod search_filters;
pub mod text_input;
pub mod utils;

pub use app_layout::AppLayoutView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use header::{Header, NavItem, ThemeToggle};
pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use icons::{
    AlertTriangleIcon, ArrowRightIcon, Building2Icon, BriefcaseIcon, CheckCircleIcon, ClockIcon,
    DollarSignIcon, MapPinIcon, MoonIcon, PlusIcon, SearchIcon, SunIcon, TrendingUpIcon, XIcon,
};
pub use job_board::JobBoardView;
pub use job_card::JobCard;
pub use job_detail::{ApplicationModal, JobDetailModal};
pub use label_badge::{BadgeSize, LabelBadge, RemoteTag};
pub use login_button::LoginButton;
pub use modal::Modal;
pub use search_filters::SearchFilters;
pub use text_input::{IconSelect, IconTextInput};
pub use utils::{format_job_count, format_results_summary, sign_in_label};
