// SPDX-License-Identifier: MPL-2.0
//! `geolocator` is a desktop client for pulling GPS coordinates out of JPEG
//! photos, built with the Iced GUI framework.
//!
//! The user selects one image (drag-and-drop or file dialog), previews it,
//! and submits it to a remote extraction service. The returned coordinates
//! are shown with fixed precision next to a small map view. The workflow is
//! a plain state machine in [`workflow`], kept free of UI and network
//! concerns so every transition is testable synchronously.

#![doc(html_root_url = "https://docs.rs/geolocator/0.1.0")]

pub mod app;
pub mod extraction;
pub mod geo;
pub mod media;
pub mod ui;
pub mod workflow;

#[cfg(test)]
pub mod test_utils;
