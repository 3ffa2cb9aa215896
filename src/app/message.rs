// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages.

use crate::extraction::ExtractError;
use crate::geo::Coordinates;
use crate::ui::uploader;
use std::time::Instant;

/// Messages consumed by `App::update`.
///
/// Component messages are forwarded through their own variant so the
/// application keeps a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Selection surface events: drag, drop, browse, clear.
    Uploader(uploader::Message),
    /// The submit control was pressed.
    SubmitRequested,
    /// The upload task completed.
    SubmissionFinished(Result<Coordinates, ExtractError>),
    /// Periodic tick driving the spinner while an upload is in flight.
    Tick(Instant),
}
