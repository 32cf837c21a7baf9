//! Octoscope - a terminal viewer for GitHub profiles
//!
//! This library provides the GitHub API gateway, the repository projections
//! (language filter and sort), and the TUI that renders a profile next to its
//! most recently updated repositories.

pub mod github;
pub mod ui;
