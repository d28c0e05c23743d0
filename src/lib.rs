pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;

/// Seconds since the epoch at build time, or `dev` when the clock was unusable.
pub const BUILD_ID: &str = env!("ACTIVITY_SIGNUP_BUILD_ID");
