//! Command handlers for the insight map
//!
//! Each handler is one user action against the board and returns the
//! message printed to the user. Each handler is in a separate file.

pub mod clear;
pub mod delete;
pub mod export;
pub mod extract;
pub mod link;
pub mod list;
pub mod tag;
pub mod update;
