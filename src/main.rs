use iced::keyboard::{self, key::Named, Key};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::text::Shaping;
use iced::widget::{column, container, horizontal_space, pick_list, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Pixels, Size, Subscription, Task, Theme};
use iced_aw::Wrap;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing_subscriber::EnvFilter;

mod config;
mod state;
mod ui;

use config::AppConfig;
use state::catalog::{self, Catalog, LoadError};
use state::controller::{CatalogController, Dismiss, HitRegion};
use state::data::BookId;
use state::view::{GenreFilter, SortKey};
use ui::cover::CoverIndex;
use ui::surface::{Scene, Surface};

/// Result of the startup load
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    catalog: Catalog,
    covers: CoverIndex,
}

/// Main application state
struct BookCatalog {
    /// Catalog, selectors and overlay, rendered into a `Surface`
    controller: CatalogController<Surface>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Background load finished
    CatalogLoaded(Result<LoadedCatalog, LoadError>),
    /// User picked a genre
    GenreSelected(GenreFilter),
    /// User picked a sort order
    SortSelected(SortKey),
    /// User pressed a book card
    CardActivated(BookId),
    /// User pressed the overlay's close button
    CloseDetail,
    /// User clicked somewhere on the open overlay
    OverlayClicked(HitRegion),
    /// Escape pressed while the overlay is open
    EscapePressed,
}

impl BookCatalog {
    /// Create the application and start loading the catalog
    fn new(data_path: PathBuf) -> (Self, Task<Message>) {
        tracing::info!("Loading catalog from {}", data_path.display());

        (
            BookCatalog {
                controller: CatalogController::new(Surface::default()),
            },
            Task::perform(load_catalog_async(data_path), Message::CatalogLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(result) => {
                let result = result.map(|loaded| {
                    self.controller.presenter_mut().set_covers(loaded.covers);
                    loaded.catalog
                });
                self.controller.load(result);
            }
            Message::GenreSelected(genre) => self.controller.set_genre(genre),
            Message::SortSelected(sort) => self.controller.set_sort(sort),
            Message::CardActivated(id) => self.controller.activate_card(id),
            Message::CloseDetail => self.controller.dismiss(Dismiss::CloseButton),
            Message::OverlayClicked(region) => self.controller.dismiss(Dismiss::Click(region)),
            Message::EscapePressed => self.controller.dismiss(Dismiss::Escape),
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let surface = self.controller.presenter();
        let selectors = self.controller.view_state();

        let header = row![
            text("Book Catalog").size(32),
            horizontal_space(),
            text(format!(
                "Showing {} of {} books",
                surface.count(),
                self.controller.catalog().len()
            ))
            .size(16),
            pick_list(GenreFilter::options(), Some(selectors.genre), Message::GenreSelected),
            pick_list(SortKey::OPTIONS, Some(selectors.sort), Message::SortSelected),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let body: Element<Message> = match surface.scene() {
            Scene::Loading => centered(column![text("Loading catalog…").size(18)]),
            Scene::Empty => centered(
                column![
                    text("📚").size(48).shaping(Shaping::Advanced),
                    text("No books found").size(20),
                    text("Try a different genre filter").size(14),
                ]
                .spacing(8)
                .align_x(Alignment::Center),
            ),
            Scene::Cards(cards) => {
                let grid = Wrap::with_elements(cards.iter().map(ui::card::view).collect())
                    .spacing(Pixels(20.0))
                    .line_spacing(Pixels(20.0));

                // Hide the scrollbar while the overlay holds the scroll lock
                let scrollbar = if surface.scroll_locked() {
                    Scrollbar::new().width(0.0).scroller_width(0.0)
                } else {
                    Scrollbar::new()
                };

                scrollable(grid)
                    .direction(Direction::Vertical(scrollbar))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            }
        };

        let base = column![header, body].spacing(24).padding(32);

        match surface.detail() {
            Some(detail) => ui::detail::overlay(base, detail),
            None => base.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Listen for escape only while the overlay is open
    fn subscription(&self) -> Subscription<Message> {
        if self.controller.overlay().is_open() {
            keyboard::on_key_press(|key, _modifiers| match key {
                Key::Named(Named::Escape) => Some(Message::EscapePressed),
                _ => None,
            })
        } else {
            Subscription::none()
        }
    }
}

fn centered(content: Column<Message>) -> Element<Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let config = config.with_env_overrides();

    init_logging(&config.log_filter);

    if let Some(e) = config_error {
        tracing::warn!("Using default configuration: {}", e);
    }

    tracing::info!("📚 Book Catalog starting");

    let data_path = config.data_path.clone();

    iced::application("Book Catalog", BookCatalog::update, BookCatalog::view)
        .theme(BookCatalog::theme)
        .subscription(BookCatalog::subscription)
        .window_size(Size::new(config.window_width, config.window_height))
        .centered()
        .run_with(move || BookCatalog::new(data_path))
}

/// Load the catalog file and resolve its covers.
/// Cover probing touches the disk for every book, so it runs on the blocking pool.
async fn load_catalog_async(path: PathBuf) -> Result<LoadedCatalog, LoadError> {
    let catalog = catalog::load_catalog(path.clone()).await?;

    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let probed = catalog.clone();
    let covers = task::spawn_blocking(move || CoverIndex::probe(&probed, &base_dir))
        .await
        .map_err(|e| LoadError::Join(e.to_string()))?;

    Ok(LoadedCatalog { catalog, covers })
}
