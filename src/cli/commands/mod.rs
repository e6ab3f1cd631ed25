//! CLI command implementations.

pub mod plan;
pub mod schedule;
pub mod trending;
