// SPDX-License-Identifier: MPL-2.0
//! Message dispatch and effect handling.
//!
//! Component `handle` methods mutate their own state and return effects;
//! the handlers here translate those effects into asynchronous tasks (file
//! dialog, upload). The workflow state machine itself never touches the
//! network.

use super::Message;
use crate::extraction::{ExtractionClient, ExtractResult, UploadRequest};
use crate::media::extensions;
use crate::ui::uploader;
use crate::workflow;
use iced::Task;
use std::f32::consts::TAU;

/// Radians the spinner advances per tick.
const SPINNER_STEP: f32 = 0.5;

/// Mutable borrows of everything the update handlers need.
pub struct UpdateContext<'a> {
    pub uploader: &'a mut uploader::State,
    pub workflow: &'a mut workflow::State,
    pub client: &'a ExtractionClient,
    pub spinner_rotation: &'a mut f32,
}

/// Handles selection-surface messages and their effects.
pub fn handle_uploader_message(
    ctx: &mut UpdateContext<'_>,
    message: uploader::Message,
) -> Task<Message> {
    let locked = ctx.workflow.is_submitting();
    match ctx.uploader.handle(message, locked) {
        uploader::Effect::None => Task::none(),
        uploader::Effect::OpenFileDialog => open_file_dialog(),
        uploader::Effect::FileChosen(candidate) => {
            let _ = ctx
                .workflow
                .handle(workflow::Message::FileSelected(candidate));
            Task::none()
        }
        uploader::Effect::Cleared => {
            let _ = ctx.workflow.handle(workflow::Message::Cleared);
            Task::none()
        }
    }
}

/// Handles the submit control press.
pub fn handle_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.workflow.handle(workflow::Message::SubmitRequested) {
        workflow::Effect::StartUpload(request) => {
            *ctx.spinner_rotation = 0.0;
            start_upload(ctx.client.clone(), request)
        }
        workflow::Effect::None => Task::none(),
    }
}

/// Handles the completion of an upload task.
pub fn handle_submission_finished(
    ctx: &mut UpdateContext<'_>,
    result: ExtractResult,
) -> Task<Message> {
    if let Err(error) = &result {
        eprintln!("Upload failed: {error}");
    }
    let _ = ctx
        .workflow
        .handle(workflow::Message::SubmissionFinished(result));
    Task::none()
}

/// Advances the spinner while an upload is in flight.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.workflow.is_submitting() {
        *ctx.spinner_rotation = (*ctx.spinner_rotation + SPINNER_STEP) % TAU;
    }
    Task::none()
}

/// Opens the JPEG file picker on the executor.
fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("JPEG image", extensions::JPEG_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path| Message::Uploader(uploader::Message::BrowseResult(path)),
    )
}

/// Runs the upload on the executor and reports back as a single message.
///
/// The client folds every failure into the result, so a completion message
/// arrives no matter how the request ends and `Submitting` always exits.
fn start_upload(client: ExtractionClient, request: UploadRequest) -> Task<Message> {
    Task::perform(
        async move { client.extract(request).await },
        Message::SubmissionFinished,
    )
}
