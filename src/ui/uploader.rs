// SPDX-License-Identifier: MPL-2.0
//! Selection surface: drop zone, browse dialog, and the selected-file card.
//!
//! Owns only the cosmetic drag sub-state; the selected file itself belongs
//! to the workflow and views receive it by reference. Selection validation
//! happens here: exactly one path carrying a JPEG extension. Anything else
//! is ignored without feedback, so a stray drop never disturbs the current
//! workflow round.

use crate::media::{extensions, CandidateFile};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::PathBuf;

/// Selection surface state: just the transient drag visual.
///
/// Keeping this separate from the workflow phase means a drag hover can
/// come and go in any phase without touching the submission round.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Whether a file drag is currently hovering over the window.
    drop_hover: bool,
}

/// Messages for the selection surface.
#[derive(Debug, Clone)]
pub enum Message {
    /// A dragged file entered the window.
    DragEntered,
    /// The drag left the window without dropping.
    DragLeft,
    /// Files were dropped on the window.
    FilesDropped(Vec<PathBuf>),
    /// The browse control was pressed.
    BrowseRequested,
    /// The browse dialog closed, with a chosen path or cancelled.
    BrowseResult(Option<PathBuf>),
    /// The clear control on the selected card was pressed.
    ClearRequested,
}

/// Effects produced by selection handling.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// A validated candidate was selected.
    FileChosen(CandidateFile),
    /// The current selection was cleared.
    Cleared,
    /// The browse dialog should be opened.
    OpenFileDialog,
}

impl State {
    /// Handle a selection message.
    ///
    /// `locked` is true while an upload is in flight: the drag visual still
    /// resets on drop, but nothing can change the selection.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message)`
    /// pattern; messages are moved into the handler.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, locked: bool) -> Effect {
        match msg {
            Message::DragEntered => {
                self.drop_hover = true;
                Effect::None
            }
            Message::DragLeft => {
                self.drop_hover = false;
                Effect::None
            }
            Message::FilesDropped(paths) => {
                // The drag visual resets no matter what was dropped.
                self.drop_hover = false;
                if locked {
                    return Effect::None;
                }
                match accept_dropped(&paths) {
                    Some(candidate) => Effect::FileChosen(candidate),
                    None => Effect::None,
                }
            }
            Message::BrowseRequested => {
                if locked {
                    Effect::None
                } else {
                    Effect::OpenFileDialog
                }
            }
            Message::BrowseResult(Some(path)) => {
                if locked {
                    return Effect::None;
                }
                // The dialog filter already restricts choices to JPEG.
                match CandidateFile::from_path(&path) {
                    Ok(candidate) => Effect::FileChosen(candidate),
                    Err(error) => {
                        eprintln!("Failed to read selected file {}: {error}", path.display());
                        Effect::None
                    }
                }
            }
            Message::BrowseResult(None) => Effect::None,
            Message::ClearRequested => {
                if locked {
                    Effect::None
                } else {
                    Effect::Cleared
                }
            }
        }
    }

    /// Check if a file drag is hovering over the window.
    #[must_use]
    pub fn is_drop_hovering(&self) -> bool {
        self.drop_hover
    }
}

/// Validates a drop: exactly one path, JPEG extension, readable file.
///
/// An invalid drop yields `None` and leaves the caller untouched. This is
/// pre-selection filtering, not a workflow failure.
fn accept_dropped(paths: &[PathBuf]) -> Option<CandidateFile> {
    let [path] = paths else {
        return None;
    };
    if !extensions::path_is_jpeg(path) {
        return None;
    }
    match CandidateFile::from_path(path) {
        Ok(candidate) => Some(candidate),
        Err(error) => {
            eprintln!("Failed to read dropped file {}: {error}", path.display());
            None
        }
    }
}

// ============================================================================
// Views
// ============================================================================

/// Context needed to render the selection surface.
pub struct ViewEnv<'a> {
    /// The current candidate, owned by the workflow.
    pub candidate: Option<&'a CandidateFile>,
    /// Whether an upload is in flight (parks the clear control).
    pub locked: bool,
}

/// Renders the drop zone or the selected-file card.
pub fn view<'a>(state: &State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    match env.candidate {
        Some(candidate) => selected_card(candidate, env.locked),
        None => drop_zone(state),
    }
}

/// Renders the empty drop zone. The whole surface is a button, so clicking
/// anywhere inside it opens the browse dialog.
fn drop_zone<'a>(state: &State) -> Element<'a, Message> {
    let title = Text::new("Drag & drop your image here")
        .size(typography::BODY_LG)
        .color(palette::GRAY_100);

    let hint = Text::new("or click to browse (JPEG only)")
        .size(typography::BODY_SM)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint);

    button(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .style(styles::button::drop_zone(state.is_drop_hovering()))
    .on_press(Message::BrowseRequested)
    .into()
}

/// Renders the card for the selected file: thumbnail, name, size, and the
/// clear control.
fn selected_card(candidate: &CandidateFile, locked: bool) -> Element<'_, Message> {
    let thumbnail = Image::new(candidate.preview().clone())
        .width(Length::Fixed(sizing::PREVIEW_THUMB))
        .height(Length::Fixed(sizing::PREVIEW_THUMB))
        .content_fit(ContentFit::Cover);

    let label = Text::new("Image Selected")
        .size(typography::BODY_SM)
        .color(palette::SUCCESS_500);

    let name = Text::new(candidate.name())
        .size(typography::BODY)
        .color(palette::GRAY_100);

    let size = Text::new(candidate.size_display())
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(name)
        .push(size);

    let mut clear = button(Text::new("✕").size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::clear);
    if !locked {
        clear = clear.on_press(Message::ClearRequested);
    }

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(thumbnail)
        .push(details)
        .push(Space::new().width(Length::Fill))
        .push(clear);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
