//! Platform-agnostic plumbing shared by the generator views.

pub mod config;
pub mod platform;
pub mod schedule;
pub mod timing;
