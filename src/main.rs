use iced::{Element, Task, Theme};
use tracing_subscriber::{fmt, EnvFilter};

mod controller;
mod state;
mod ui;

use controller::Controller;
use state::Store;

/// Application messages (events)
type Message = controller::Event;

/// Main application state
struct CatClicker {
    /// Store, renderer and interaction state for the window
    controller: Controller,
    /// Last reported error, shown under the gallery
    status: Option<String>,
}

impl CatClicker {
    /// Create a new instance of the application
    fn new(controller: Controller) -> (Self, Task<Message>) {
        tracing::info!(cats = controller.store().len(), "cat clicker initialized");

        (
            CatClicker {
                controller,
                status: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match self.controller.handle(message) {
            Ok(()) => self.status = None,
            Err(err) => {
                tracing::error!(%err, "event rejected");
                self.status = Some(err.to_string());
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        ui::widgets::scene(self.controller.scene(), self.status.as_deref())
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cats = state::catalog::load();
    let controller = Controller::new(Store::new(cats))?;

    iced::application("Cat Clicker", CatClicker::update, CatClicker::view)
        .theme(CatClicker::theme)
        .centered()
        .run_with(move || CatClicker::new(controller))?;

    Ok(())
}
