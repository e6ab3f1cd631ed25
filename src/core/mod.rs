//! Core transformations: plan building and day grouping.

pub mod planner;
pub mod schedule;
