// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes window-level drag-and-drop events into selection messages and
//! runs the spinner tick while an upload is in flight.

use super::Message;
use crate::ui::uploader;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the spinner animation tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the window event subscription.
///
/// Drag-and-drop arrives as window events regardless of which widget the
/// cursor is over; the paths are handed to the selection surface, which
/// does all validation.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileHovered(_)) => {
            Some(Message::Uploader(uploader::Message::DragEntered))
        }
        event::Event::Window(iced::window::Event::FilesHoveredLeft) => {
            Some(Message::Uploader(uploader::Message::DragLeft))
        }
        event::Event::Window(iced::window::Event::FileDropped(path)) => Some(Message::Uploader(
            uploader::Message::FilesDropped(vec![path]),
        )),
        _ => None,
    })
}

/// Creates the spinner tick subscription.
///
/// Only active while an upload is in flight so the application stays
/// completely idle otherwise.
pub fn create_tick_subscription(is_submitting: bool) -> Subscription<Message> {
    if is_submitting {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
