//! Aniplan Library
//!
//! A library for planning weekly anime viewing using AniList catalog and airing data.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
