/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog loader, the view pipeline and the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a book within the loaded catalog
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of genres a book can belong to.
///
/// Any genre string the data file uses that is not listed here
/// deserializes to `Other`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    Science,
    History,
    Biography,
    Business,
    Technology,
    #[serde(other)]
    Other,
}

impl Genre {
    /// Every genre, in the order the genre selector lists them
    pub const ALL: [Genre; 9] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::SelfHelp,
        Genre::Science,
        Genre::History,
        Genre::Biography,
        Genre::Business,
        Genre::Technology,
        Genre::Other,
    ];

    /// Label as it appears in the data file and on genre badges
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::SelfHelp => "Self-Help",
            Genre::Science => "Science",
            Genre::History => "History",
            Genre::Biography => "Biography",
            Genre::Business => "Business",
            Genre::Technology => "Technology",
            Genre::Other => "Other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single book in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    /// Unique ID within the catalog
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    /// Publication year
    pub year: i32,
    /// Page count
    pub pages: u32,
    /// Reader rating (e.g. 4.5)
    pub rating: f32,
    /// Price in the smallest currency unit (whole Rupiah)
    pub price: i64,
    /// Synopsis shown in the detail overlay
    pub description: String,
    /// Cover image reference: a path relative to the data file, an absolute path or a URI
    pub image: String,
}
