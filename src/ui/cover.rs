/// Book covers
///
/// Cover references are resolved once, right after the catalog loads:
/// relative paths are taken relative to the data file, and anything that
/// is not a readable local image falls back to a genre placeholder drawn
/// on a canvas.
use iced::widget::canvas::{self, Frame};
use iced::widget::image::Handle;
use iced::widget::{canvas as canvas_widget, image as image_widget, text::Shaping};
use iced::{alignment, mouse, Color, ContentFit, Element, Pixels, Point, Rectangle, Size};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::state::catalog::Catalog;
use crate::state::data::{BookId, Genre};
use crate::ui::style::genre_style;

/// Number of horizontal bands used to approximate the placeholder gradient
const GRADIENT_BANDS: usize = 32;

/// What to draw as a book's cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cover {
    Image(PathBuf),
    Placeholder,
}

/// Resolved covers for every book that has a usable image
#[derive(Debug, Clone, Default)]
pub struct CoverIndex {
    covers: HashMap<BookId, PathBuf>,
}

impl CoverIndex {
    /// Resolve and probe every cover in the catalog.
    ///
    /// Reads image headers from disk, so run it off the UI thread.
    pub fn probe(catalog: &Catalog, base_dir: &Path) -> Self {
        let mut covers = HashMap::new();
        let mut fallbacks = 0;

        for book in catalog.books() {
            match resolve_reference(&book.image, base_dir) {
                Some(path) if is_decodable(&path) => {
                    covers.insert(book.id, path);
                }
                _ => {
                    tracing::debug!("No usable cover for book {} ({:?})", book.id, book.image);
                    fallbacks += 1;
                }
            }
        }

        if fallbacks > 0 {
            tracing::info!("{} books use a placeholder cover", fallbacks);
        }

        Self { covers }
    }

    pub fn cover(&self, id: BookId) -> Cover {
        match self.covers.get(&id) {
            Some(path) => Cover::Image(path.clone()),
            None => Cover::Placeholder,
        }
    }
}

/// Turn a cover reference into a local path.
///
/// Returns `None` for empty references and remote URIs.
fn resolve_reference(reference: &str, base_dir: &Path) -> Option<PathBuf> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    let local = match reference.strip_prefix("file://") {
        Some(path) => path,
        None if reference.contains("://") => return None,
        None => reference,
    };

    let path = Path::new(local);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(base_dir.join(path))
    }
}

/// Check the file is an image we can decode (reads the header only)
fn is_decodable(path: &Path) -> bool {
    image::image_dimensions(path).is_ok()
}

/// Draw a cover at a fixed size
pub fn view<'a, Message: 'a>(
    cover: &Cover,
    genre: Genre,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    match cover {
        Cover::Image(path) => image_widget(Handle::from_path(path))
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        Cover::Placeholder => canvas_widget(CoverPlaceholder { genre })
            .width(width)
            .height(height)
            .into(),
    }
}

/// Genre gradient with the genre icon in the middle
#[derive(Debug, Clone, Copy)]
pub struct CoverPlaceholder {
    pub genre: Genre,
}

impl<Message> canvas::Program<Message> for CoverPlaceholder {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let style = genre_style(self.genre);

        let band_height = bounds.height / GRADIENT_BANDS as f32;
        for band in 0..GRADIENT_BANDS {
            let t = band as f32 / (GRADIENT_BANDS - 1) as f32;
            frame.fill_rectangle(
                Point::new(0.0, band as f32 * band_height),
                // Overlap by half a pixel to avoid seams between bands
                Size::new(bounds.width, band_height + 0.5),
                mix(style.from, style.to, t),
            );
        }

        frame.fill_text(canvas::Text {
            content: style.icon.to_string(),
            position: frame.center(),
            size: Pixels(bounds.width.min(bounds.height) * 0.3),
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            shaping: Shaping::Advanced,
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}

/// Linear interpolation between two colors
fn mix(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}
