//! Local file storage outside the database
//!
//! Holds the login session file.

pub mod session;

pub use session::{SessionData, SessionStore};
