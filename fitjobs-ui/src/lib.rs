//! fitjobs-ui - Shared UI types and components for the FitJobs board
//!
//! Contains display types, stores, and pure view components. Data loading and
//! the identity provider live in the web app; everything here renders props
//! and reports user actions through callbacks.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
