//! Shared helpers.

pub mod season;
