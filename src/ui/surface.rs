/// The iced-side presenter
///
/// `Surface` receives the controller's output and keeps a plain-data
/// `Scene` that the view function draws on every frame.

use crate::state::controller::Presenter;
use crate::state::data::{Book, BookId, Genre};
use crate::ui::cover::{Cover, CoverIndex};
use crate::ui::style::format_price;

/// Everything a card shows
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub year: i32,
    pub pages: u32,
    pub rating: f32,
    pub price: String,
    pub cover: Cover,
}

impl CardModel {
    pub fn new(book: &Book, cover: Cover) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre,
            year: book.year,
            pages: book.pages,
            rating: book.rating,
            price: format_price(book.price),
            cover,
        }
    }
}

/// Everything the detail overlay shows
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModel {
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub year: i32,
    pub pages: u32,
    pub rating: f32,
    pub price: String,
    pub description: String,
    pub cover: Cover,
}

impl DetailModel {
    pub fn new(book: &Book, cover: Cover) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre,
            year: book.year,
            pages: book.pages,
            rating: book.rating,
            price: format_price(book.price),
            description: book.description.clone(),
            cover,
        }
    }
}

/// Content of the catalog area
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scene {
    /// Nothing rendered yet
    #[default]
    Loading,
    /// The visible list is empty
    Empty,
    Cards(Vec<CardModel>),
}

#[derive(Debug, Default)]
pub struct Surface {
    covers: CoverIndex,
    scene: Scene,
    count: usize,
    detail: Option<DetailModel>,
    scroll_locked: bool,
}

impl Surface {
    /// Install resolved covers; used by every render after this call
    pub fn set_covers(&mut self, covers: CoverIndex) {
        self.covers = covers;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number shown in the visible-count display
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn detail(&self) -> Option<&DetailModel> {
        self.detail.as_ref()
    }

    /// Whether the catalog behind the overlay should ignore scrolling
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

impl Presenter for Surface {
    fn render(&mut self, books: &[Book]) {
        self.count = books.len();
        self.scene = if books.is_empty() {
            Scene::Empty
        } else {
            Scene::Cards(
                books
                    .iter()
                    .map(|book| CardModel::new(book, self.covers.cover(book.id)))
                    .collect(),
            )
        };
    }

    fn show_detail(&mut self, book: &Book) {
        self.detail = Some(DetailModel::new(book, self.covers.cover(book.id)));
        self.scroll_locked = true;
    }

    fn hide_detail(&mut self) {
        self.detail = None;
        self.scroll_locked = false;
    }
}
