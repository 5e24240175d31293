/// The catalog view controller
///
/// Owns the catalog, the view state, the visible list and the detail
/// overlay. Every mutation goes through one of its methods; the UI only
/// sees the results through the `Presenter` it was built with.

use super::catalog::{Catalog, LoadError};
use super::data::{Book, BookId};
use super::view::{GenreFilter, SortKey, ViewState};

/// Output port the controller draws through.
///
/// The iced surface implements this for the window; tests use a recorder.
pub trait Presenter {
    /// Replace the rendered card set with `books`
    fn render(&mut self, books: &[Book]);

    /// Show `book` in the detail overlay and lock background scrolling
    fn show_detail(&mut self, book: &Book);

    /// Hide the detail overlay and unlock background scrolling
    fn hide_detail(&mut self);
}

/// Where the catalog load stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready,
    Failed,
}

/// Detail overlay state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Open(Book),
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open(_))
    }
}

/// Part of the open overlay a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The dimmed area around the detail content
    Backdrop,
    /// The detail content itself
    Content,
}

/// User actions that may close the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    CloseButton,
    Click(HitRegion),
    Escape,
}

pub struct CatalogController<P: Presenter> {
    catalog: Catalog,
    load_state: LoadState,
    view: ViewState,
    visible: Vec<Book>,
    overlay: Overlay,
    presenter: P,
}

impl<P: Presenter> CatalogController<P> {
    /// Create a controller waiting for its catalog
    pub fn new(presenter: P) -> Self {
        Self {
            catalog: Catalog::default(),
            load_state: LoadState::Pending,
            view: ViewState::default(),
            visible: Vec::new(),
            overlay: Overlay::Closed,
            presenter,
        }
    }

    /// Install the result of the startup load and render it.
    ///
    /// A failed load leaves the catalog empty so the empty state shows.
    /// Only the first call has any effect.
    pub fn load(&mut self, result: Result<Catalog, LoadError>) {
        if self.load_state != LoadState::Pending {
            tracing::warn!("Ignoring catalog load: catalog already {:?}", self.load_state);
            return;
        }

        match result {
            Ok(catalog) => {
                if catalog.is_empty() {
                    tracing::warn!("Catalog file contains no books");
                } else {
                    tracing::info!("Catalog ready with {} books", catalog.len());
                }
                self.visible = catalog.books().to_vec();
                self.catalog = catalog;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!("Catalog not loaded: {}", e);
                self.load_state = LoadState::Failed;
            }
        }

        self.refresh();
    }

    /// Change the genre selector and refresh
    pub fn set_genre(&mut self, genre: GenreFilter) {
        self.view.genre = genre;
        self.refresh();
    }

    /// Change the sort selector and refresh
    pub fn set_sort(&mut self, sort: SortKey) {
        self.view.sort = sort;
        self.refresh();
    }

    /// Recompute the visible list from the current selectors and render it.
    ///
    /// Does nothing until the load has resolved.
    pub fn refresh(&mut self) {
        if self.load_state == LoadState::Pending {
            tracing::debug!("Refresh before catalog load, selectors recorded");
            return;
        }

        self.visible = self.view.apply(self.catalog.books());

        tracing::debug!(
            "Refreshed view: genre={:?} sort={:?} visible={}",
            self.view.genre,
            self.view.sort,
            self.visible.len()
        );

        self.presenter.render(&self.visible);
    }

    /// Open the overlay for the card with `id`
    pub fn activate_card(&mut self, id: BookId) {
        match self.catalog.get(id) {
            Some(book) => {
                let book = book.clone();
                self.open(book);
            }
            None => tracing::warn!("Card activation for unknown book id {}", id),
        }
    }

    /// Show `book` in the overlay, replacing whatever it showed before
    pub fn open(&mut self, book: Book) {
        tracing::debug!("Opening detail for book {}", book.id);
        self.presenter.show_detail(&book);
        self.overlay = Overlay::Open(book);
    }

    /// Close the overlay. No-op when it is already closed.
    pub fn close(&mut self) {
        if !self.overlay.is_open() {
            return;
        }

        tracing::debug!("Closing detail overlay");
        self.overlay = Overlay::Closed;
        self.presenter.hide_detail();
    }

    /// Route a dismissal gesture; clicks inside the content never close
    pub fn dismiss(&mut self, gesture: Dismiss) {
        match gesture {
            Dismiss::CloseButton | Dismiss::Escape | Dismiss::Click(HitRegion::Backdrop) => {
                self.close()
            }
            Dismiss::Click(HitRegion::Content) => {}
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view_state(&self) -> ViewState {
        self.view
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
