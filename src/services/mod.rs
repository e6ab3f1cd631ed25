//! External service clients.

pub mod anilist;
