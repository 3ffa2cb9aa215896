// SPDX-License-Identifier: MPL-2.0
//! End-to-end workflow scenarios driven through the public library API,
//! from file drop to displayed outcome, without an Iced runtime.

use geolocator::extraction::ExtractError;
use geolocator::geo::Coordinates;
use geolocator::ui::uploader;
use geolocator::workflow::{self, Phase, NO_FILE_MESSAGE};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Writes a minimal JPEG-named fixture. Selection inspects the extension,
/// not the content, so a few marker bytes are enough.
fn write_jpeg(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).expect("write jpeg fixture");
    path
}

/// Drops one file on the selection surface and feeds the result into the
/// workflow, mirroring what the application's update loop does.
fn drop_file(
    surface: &mut uploader::State,
    flow: &mut workflow::State,
    path: PathBuf,
) -> uploader::Effect {
    let effect = surface.handle(
        uploader::Message::FilesDropped(vec![path]),
        flow.is_submitting(),
    );
    if let uploader::Effect::FileChosen(candidate) = &effect {
        let _ = flow.handle(workflow::Message::FileSelected(candidate.clone()));
    }
    effect
}

#[test]
fn select_submit_and_succeed() {
    let dir = tempdir().expect("temp dir");
    let mut surface = uploader::State::default();
    let mut flow = workflow::State::default();

    // Drop a single valid file.
    let effect = drop_file(&mut surface, &mut flow, write_jpeg(dir.path(), "paris.jpg"));
    assert!(matches!(effect, uploader::Effect::FileChosen(_)));
    assert!(matches!(flow.phase(), Phase::Selected));
    assert_eq!(
        flow.candidate().map(|c| c.name().to_string()),
        Some("paris.jpg".to_string())
    );

    // Submit: the round locks until completion.
    let effect = flow.handle(workflow::Message::SubmitRequested);
    assert!(matches!(effect, workflow::Effect::StartUpload(_)));
    assert!(flow.is_submitting());
    assert!(!flow.can_submit());

    // The service answers with coordinates.
    let _ = flow.handle(workflow::Message::SubmissionFinished(Ok(Coordinates::new(
        48.8584, 2.2945,
    ))));
    let coordinates = flow.coordinates().expect("round should have succeeded");
    assert_eq!(coordinates.latitude_fixed(), "48.858400");
    assert_eq!(coordinates.longitude_fixed(), "2.294500");
    assert!(flow.can_submit(), "control is live again after completion");
}

#[test]
fn service_detail_reaches_the_failure_message() {
    let dir = tempdir().expect("temp dir");
    let mut surface = uploader::State::default();
    let mut flow = workflow::State::default();

    let _ = drop_file(&mut surface, &mut flow, write_jpeg(dir.path(), "bad.jpg"));
    let _ = flow.handle(workflow::Message::SubmitRequested);
    let _ = flow.handle(workflow::Message::SubmissionFinished(Err(
        ExtractError::Service {
            status: 422,
            detail: Some("corrupt image".to_string()),
        },
    )));

    assert_eq!(flow.error_message(), Some("corrupt image"));
}

#[test]
fn transport_failure_shows_the_generic_message() {
    let dir = tempdir().expect("temp dir");
    let mut surface = uploader::State::default();
    let mut flow = workflow::State::default();

    let _ = drop_file(&mut surface, &mut flow, write_jpeg(dir.path(), "photo.jpg"));
    let _ = flow.handle(workflow::Message::SubmitRequested);
    let _ = flow.handle(workflow::Message::SubmissionFinished(Err(
        ExtractError::Transport("dns error".to_string()),
    )));

    assert_eq!(
        flow.error_message(),
        Some("An unknown error occurred. Please try again.")
    );
}

#[test]
fn submit_with_nothing_selected_never_reaches_the_network() {
    let mut flow = workflow::State::default();

    let effect = flow.handle(workflow::Message::SubmitRequested);
    assert!(
        matches!(effect, workflow::Effect::None),
        "no upload may start"
    );
    assert_eq!(flow.error_message(), Some(NO_FILE_MESSAGE));
}

#[test]
fn invalid_drops_leave_the_current_round_alone() {
    let dir = tempdir().expect("temp dir");
    let mut surface = uploader::State::default();
    let mut flow = workflow::State::default();

    let _ = drop_file(&mut surface, &mut flow, write_jpeg(dir.path(), "photo.jpg"));
    let _ = flow.handle(workflow::Message::SubmitRequested);
    let _ = flow.handle(workflow::Message::SubmissionFinished(Ok(Coordinates::new(
        10.0, 20.0,
    ))));
    assert!(flow.coordinates().is_some());

    // A non-JPEG drop is ignored outright.
    let png = dir.path().join("picture.png");
    fs::write(&png, b"not a jpeg").expect("write png fixture");
    let effect = drop_file(&mut surface, &mut flow, png);
    assert!(matches!(effect, uploader::Effect::None));
    assert!(flow.coordinates().is_some(), "result stays on screen");

    // A multi-file drop is ignored too.
    let effect = surface.handle(
        uploader::Message::FilesDropped(vec![
            write_jpeg(dir.path(), "one.jpg"),
            write_jpeg(dir.path(), "two.jpg"),
        ]),
        flow.is_submitting(),
    );
    assert!(matches!(effect, uploader::Effect::None));
    assert!(flow.coordinates().is_some());
}

#[test]
fn clear_resets_any_outcome_to_idle() {
    let dir = tempdir().expect("temp dir");
    let mut surface = uploader::State::default();
    let mut flow = workflow::State::default();

    // From a success.
    let _ = drop_file(&mut surface, &mut flow, write_jpeg(dir.path(), "photo.jpg"));
    let _ = flow.handle(workflow::Message::SubmitRequested);
    let _ = flow.handle(workflow::Message::SubmissionFinished(Ok(Coordinates::new(
        1.0, 2.0,
    ))));
    let effect = surface.handle(uploader::Message::ClearRequested, flow.is_submitting());
    assert!(matches!(effect, uploader::Effect::Cleared));
    let _ = flow.handle(workflow::Message::Cleared);
    assert!(matches!(flow.phase(), Phase::Idle));
    assert!(!flow.has_candidate());

    // From a failure.
    let _ = flow.handle(workflow::Message::SubmitRequested);
    assert!(flow.error_message().is_some());
    let _ = flow.handle(workflow::Message::Cleared);
    assert!(matches!(flow.phase(), Phase::Idle));
}

#[test]
fn reselecting_replaces_the_previous_round() {
    let dir = tempdir().expect("temp dir");
    let mut surface = uploader::State::default();
    let mut flow = workflow::State::default();

    let _ = drop_file(&mut surface, &mut flow, write_jpeg(dir.path(), "first.jpg"));
    let _ = flow.handle(workflow::Message::SubmitRequested);
    let _ = flow.handle(workflow::Message::SubmissionFinished(Err(
        ExtractError::Service {
            status: 400,
            detail: Some("corrupt image".to_string()),
        },
    )));
    assert!(flow.error_message().is_some());

    let _ = drop_file(&mut surface, &mut flow, write_jpeg(dir.path(), "second.jpg"));
    assert!(matches!(flow.phase(), Phase::Selected));
    assert_eq!(flow.error_message(), None);
    assert_eq!(
        flow.candidate().map(|c| c.name().to_string()),
        Some("second.jpg".to_string())
    );
}

#[test]
fn drops_are_locked_while_a_round_is_in_flight() {
    let dir = tempdir().expect("temp dir");
    let mut surface = uploader::State::default();
    let mut flow = workflow::State::default();

    let _ = drop_file(&mut surface, &mut flow, write_jpeg(dir.path(), "photo.jpg"));
    let _ = flow.handle(workflow::Message::SubmitRequested);
    assert!(flow.is_submitting());

    let effect = drop_file(&mut surface, &mut flow, write_jpeg(dir.path(), "late.jpg"));
    assert!(matches!(effect, uploader::Effect::None));
    assert_eq!(
        flow.candidate().map(|c| c.name().to_string()),
        Some("photo.jpg".to_string())
    );
}
