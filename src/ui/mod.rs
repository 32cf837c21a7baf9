//! # UI Module
//!
//! This module provides the terminal user interface components for Octoscope.
//!
//! ## Overview
//!
//! The UI is built using [`ratatui`] and [`crossterm`] and consists of:
//!
//! - **[`app`]**: Search state machine (idle, loading, success, error) and view state
//! - **[`input`]**: Key bindings for the search box and the results
//! - **[`panels`]**: Pure renderers for the profile card and repository list
//! - **[`render`]**: Frame layout (header, search, status, panels, footer)
//! - **[`theme`]**: Light/dark palettes and the theme toggle
//! - **[`languages`]**: Language swatch colours
//! - **[`config`]**: Optional user configuration file
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ Octoscope                              ☀ Ctrl+T  │
//! │ ┌ Username ────────────────────────────────────┐ │
//! │ └──────────────────────────────────────────────┘ │
//! │  ⠋ Loading… / ✗ error banner                     │
//! │ ┌ Profile ──────┐ ┌ Repositories ──────────────┐ │
//! │ │               │ │ Language: [All Languages]  │ │
//! │ │               │ │ Sort by:  [Recently Upd…]  │ │
//! │ └───────────────┘ └────────────────────────────┘ │
//! │ [l/L] Language  [s/S] Sort  ...                  │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod input;
pub mod languages;
pub mod panels;
pub mod render;
pub mod theme;

pub use app::{App, FocusPane, Phase, SearchOutcome, SearchRequest};
pub use render::render;
