//! # Roster Core
//!
//! Session engine for the patient roster.
//!
//! This crate contains pure list logic and the session state that drives the
//! patient-list page:
//! - Filtering against free-text search and the family-name dropdown
//! - Pagination over the filtered subset
//! - Filter-option derivation (distinct family names)
//! - An abstract view seam so any renderer can present the session
//!
//! **No rendering or I/O concerns**: payload parsing belongs in
//! `roster-bundle`, and terminal rendering belongs in `roster-cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod index;
pub mod paginate;
pub mod session;
pub mod validation;
pub mod view;

pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use session::RosterSession;
pub use view::{PageView, RosterView, ViewEvent};
