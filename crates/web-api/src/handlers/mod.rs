//! API routes: team season stats lookup and the admin mutation relay.

pub mod admin;
pub mod team_stats;
