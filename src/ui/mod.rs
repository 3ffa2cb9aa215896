// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! The UI follows a component-based architecture with the Elm-style
//! "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`uploader`] - Selection surface: drop zone, browse dialog, selected card
//! - [`outcome`] - Presenter for the loading, failure, and result views
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner, world map)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod outcome;
pub mod styles;
pub mod uploader;
pub mod widgets;
