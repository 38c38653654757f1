//! Platform-agnostic helpers shared by the dashboard components.

pub mod download;
pub mod format;
