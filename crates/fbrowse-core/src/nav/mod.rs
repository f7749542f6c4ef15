//! Navigation logic for fbrowse.
//!
//! [`state::NavigationState`] tracks the current directory on top of a
//! back/forward [`history::History`]; [`filter`] searches and sorts a listing.

pub mod filter;
pub mod history;
pub mod state;
