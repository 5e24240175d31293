use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use super::data::{Book, BookId};

/// Errors that can occur while loading the catalog.
///
/// Sources are wrapped in `Arc` so the error can be cloned into a `Message`.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("catalog file {path} is not a valid book list: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Arc<serde_json::Error>,
    },

    #[error("catalog contains book id {id} more than once")]
    DuplicateId { id: BookId },

    #[error("catalog load task failed: {0}")]
    Join(String),
}

/// The full, immutable book list loaded at startup.
///
/// Cloning is cheap: the books live behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    books: Arc<[Book]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers
    pub fn from_books(books: Vec<Book>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id) {
                return Err(LoadError::DuplicateId { id: book.id });
            }
        }

        Ok(Catalog {
            books: books.into(),
        })
    }

    /// All books in load order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by ID
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Parse the contents of a catalog file.
///
/// `path` is only used for error messages.
pub fn parse_catalog(path: &Path, bytes: &[u8]) -> Result<Catalog, LoadError> {
    let books: Vec<Book> = serde_json::from_slice(bytes).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: Arc::new(e),
    })?;

    Catalog::from_books(books)
}

/// Read and parse the catalog file at `path`
pub async fn load_catalog(path: PathBuf) -> Result<Catalog, LoadError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| LoadError::Read {
        path: path.clone(),
        source: Arc::new(e),
    })?;

    let catalog = parse_catalog(&path, &bytes)?;

    tracing::info!("Loaded {} books from {}", catalog.len(), path.display());

    Ok(catalog)
}
