// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` wires the selection surface, the submission workflow, and the
//! extraction client together. Components own their state and return
//! effects; the update handlers translate effects into tasks. Policy that
//! shapes user-visible behavior (window sizing, theme, when the spinner
//! ticks) lives here, next to the update loop.

pub mod config;
mod message;
mod subscription;
mod update;
mod view;

pub use message::Message;

use crate::extraction::ExtractionClient;
use crate::ui::uploader;
use crate::workflow;
use iced::{window, Element, Subscription, Task, Theme};

/// Application name shown in the window title.
pub const APP_NAME: &str = "GeoLocator";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// Root application state.
#[derive(Debug)]
pub struct App {
    /// Selection surface (drag visual only).
    uploader: uploader::State,
    /// Submission workflow: candidate file and phase.
    workflow: workflow::State,
    /// Client bound to the endpoint resolved at startup.
    client: ExtractionClient,
    /// Spinner angle in radians, advanced by the tick subscription.
    spinner_rotation: f32,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            uploader: uploader::State::default(),
            workflow: workflow::State::default(),
            client: ExtractionClient::new(config::DEFAULT_ENDPOINT.to_string()),
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Initializes the application with the endpoint resolved from the
    /// environment. Resolution happens exactly once, here.
    fn new() -> (Self, Task<Message>) {
        let config = config::Config::from_env();
        let app = Self {
            client: ExtractionClient::new(config.endpoint),
            ..Self::default()
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.workflow.candidate() {
            Some(candidate) => format!("{} - {APP_NAME}", candidate.name()),
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.workflow.is_submitting()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            uploader: &mut self.uploader,
            workflow: &mut self.workflow,
            client: &self.client,
            spinner_rotation: &mut self.spinner_rotation,
        };

        match message {
            Message::Uploader(msg) => update::handle_uploader_message(&mut ctx, msg),
            Message::SubmitRequested => update::handle_submit(&mut ctx),
            Message::SubmissionFinished(result) => {
                update::handle_submission_finished(&mut ctx, result)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            uploader: &self.uploader,
            workflow: &self.workflow,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
