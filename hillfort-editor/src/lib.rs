//! Hillfort Editor
//!
//! The record editor workflow: a session owns one draft hillfort, feeds it
//! from the location provider, media picker and date picker, walks to
//! sibling records, and finally commits, discards, or deletes it through
//! the store. Account-level bulk deletes live alongside.

pub mod account;
mod commit;
pub mod config;
pub mod context;
pub mod date;
pub mod draft;
pub mod location;
mod media;
pub mod nav;
mod notes;
pub mod session;

pub use account::{delete_account, delete_all_hillforts};
pub use config::{ConfigError, EditorConfig};
pub use context::SessionContext;
pub use date::{format_visit_date, PickedDate};
pub use draft::{Draft, DraftFields};
pub use location::LocationOutcome;
pub use nav::navigate;
pub use session::EditorSession;
