/// View state and the filter/sort stages of the view pipeline
///
/// Both stages are pure functions over borrowed slices: they return a new
/// `Vec` and never touch the catalog they were given.

use std::fmt;

use super::collate::CollationKey;
use super::data::{Book, Genre};

/// Genre selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreFilter {
    /// Sentinel: every genre
    #[default]
    All,
    Only(Genre),
}

impl GenreFilter {
    /// Selector options: "all" followed by every genre
    pub fn options() -> Vec<GenreFilter> {
        std::iter::once(GenreFilter::All)
            .chain(Genre::ALL.into_iter().map(GenreFilter::Only))
            .collect()
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(genre) => book.genre == *genre,
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => f.write_str("All genres"),
            GenreFilter::Only(genre) => genre.fmt(f),
        }
    }
}

/// Sort selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep the filtered order
    #[default]
    None,
    /// Title, A-Z under locale collation
    Title,
    /// Publication year, newest first
    Year,
    /// Page count, longest first
    Pages,
}

impl SortKey {
    pub const OPTIONS: [SortKey; 4] =
        [SortKey::None, SortKey::Title, SortKey::Year, SortKey::Pages];
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::None => "Default order",
            SortKey::Title => "Title (A-Z)",
            SortKey::Year => "Newest first",
            SortKey::Pages => "Most pages",
        })
    }
}

/// Current selector values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub genre: GenreFilter,
    pub sort: SortKey,
}

impl ViewState {
    /// Compute the visible list: filter first, then sort the filtered subset
    pub fn apply(&self, catalog: &[Book]) -> Vec<Book> {
        sort(&filter(catalog, self.genre), self.sort)
    }
}

/// Keep only the books matching `genre`, in catalog order
pub fn filter(catalog: &[Book], genre: GenreFilter) -> Vec<Book> {
    catalog
        .iter()
        .filter(|book| genre.matches(book))
        .cloned()
        .collect()
}

/// Sort a copy of `books` by `key`. All orderings are stable.
pub fn sort(books: &[Book], key: SortKey) -> Vec<Book> {
    let mut sorted = books.to_vec();

    match key {
        SortKey::Title => sorted.sort_by_cached_key(|book| CollationKey::new(&book.title)),
        SortKey::Year => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Pages => sorted.sort_by(|a, b| b.pages.cmp(&a.pages)),
        SortKey::None => {}
    }

    sorted
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::data::BookId;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    pub(crate) fn book(id: u64, genre: Genre, year: i32, pages: u32, title: &str) -> Book {
        Book {
            id: BookId(id),
            title: title.to_string(),
            author: format!("Author {}", id),
            genre,
            year,
            pages,
            rating: 4.5,
            price: 100_000,
            description: format!("Synopsis of {}", title),
            image: format!("covers/{}.jpg", id),
        }
    }

    /// Catalog from the reference scenario
    pub(crate) fn scenario_catalog() -> Vec<Book> {
        vec![
            book(1, Genre::Fiction, 2020, 300, "Bumi"),
            book(2, Genre::Fiction, 2022, 150, "Anak"),
            book(3, Genre::History, 2019, 400, "Zaman"),
        ]
    }

    fn ids(books: &[Book]) -> Vec<u64> {
        books.iter().map(|b| b.id.0).collect()
    }

    #[test]
    fn test_scenario_filter_then_sort() {
        let catalog = scenario_catalog();

        let fiction = filter(&catalog, GenreFilter::Only(Genre::Fiction));
        assert_eq!(ids(&fiction), vec![1, 2]);

        assert_eq!(ids(&sort(&fiction, SortKey::Year)), vec![2, 1]);

        let all = filter(&catalog, GenreFilter::All);
        assert_eq!(ids(&sort(&all, SortKey::Pages)), vec![3, 1, 2]);
    }

    #[test]
    fn test_filter_all_is_catalog() {
        let catalog = scenario_catalog();
        assert_eq!(filter(&catalog, GenreFilter::All), catalog);
    }

    #[test]
    fn test_sort_by_title_uses_collation() {
        let catalog = vec![
            book(1, Genre::Fiction, 2000, 100, "Zaman"),
            book(2, Genre::Fiction, 2000, 100, "Ándalas"),
            book(3, Genre::Fiction, 2000, 100, "bumi"),
        ];
        assert_eq!(ids(&sort(&catalog, SortKey::Title)), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_title_matches_indonesian_locale_order() {
        let titles = [
            "Zaman",
            "Łódź",
            "Øre",
            "Đoàn",
            "Æsop",
            "Bumi",
            "cinta",
            "Cantik",
            "zaman",
            "9 Summers",
            "_Catatan",
            "Straße",
            "Strasse",
            "Odyssey",
        ];
        let catalog: Vec<Book> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| book(i as u64, Genre::Fiction, 2000, 100, title))
            .collect();

        let sorted: Vec<String> = sort(&catalog, SortKey::Title)
            .into_iter()
            .map(|b| b.title)
            .collect();

        // Order produced by `localeCompare(_, 'id')`
        assert_eq!(
            sorted,
            vec![
                "_Catatan",
                "9 Summers",
                "Æsop",
                "Bumi",
                "Cantik",
                "cinta",
                "Đoàn",
                "Łódź",
                "Odyssey",
                "Øre",
                "Strasse",
                "Straße",
                "zaman",
                "Zaman",
            ]
        );
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let catalog = vec![
            book(1, Genre::Fiction, 2020, 200, "A"),
            book(2, Genre::History, 2021, 200, "B"),
            book(3, Genre::Science, 2020, 300, "C"),
            book(4, Genre::Fiction, 2020, 200, "D"),
        ];
        assert_eq!(ids(&sort(&catalog, SortKey::Year)), vec![2, 1, 3, 4]);
        assert_eq!(ids(&sort(&catalog, SortKey::Pages)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_none_is_identity() {
        let catalog = scenario_catalog();
        assert_eq!(sort(&catalog, SortKey::None), catalog);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let catalog = scenario_catalog();
        let before = catalog.clone();
        let _ = sort(&catalog, SortKey::Pages);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter(&[], GenreFilter::All).is_empty());
        assert!(filter(&[], GenreFilter::Only(Genre::Fiction)).is_empty());
        for key in SortKey::OPTIONS {
            assert!(sort(&[], key).is_empty());
        }
    }

    #[test]
    fn test_genre_options_start_with_all() {
        let options = GenreFilter::options();
        assert_eq!(options[0], GenreFilter::All);
        assert_eq!(options.len(), Genre::ALL.len() + 1);
        assert_eq!(options[1..].iter().filter(|o| **o == GenreFilter::All).count(), 0);
    }

    #[test]
    fn test_view_state_applies_filter_before_sort() {
        let catalog = scenario_catalog();
        let state = ViewState {
            genre: GenreFilter::Only(Genre::Fiction),
            sort: SortKey::Pages,
        };
        assert_eq!(ids(&state.apply(&catalog)), vec![1, 2]);
        assert_eq!(ids(&ViewState::default().apply(&catalog)), vec![1, 2, 3]);
    }

    fn arb_genre() -> impl Strategy<Value = Genre> {
        prop::sample::select(Genre::ALL.to_vec())
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<Book>> {
        prop::collection::vec(
            (arb_genre(), 1990..2025i32, 50..900u32, "[A-Za-z0-9ÁÉéØøŁłĐđÆæŒœß_ ]{0,8}"),
            0..24,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (genre, year, pages, title))| book(i as u64, genre, year, pages, &title))
                .collect()
        })
    }

    /// Base letters of a generated title, written so that plain byte order
    /// puts spaces, then `_`, then digits, then letters
    fn base_letters(title: &str) -> String {
        title
            .chars()
            .map(|c| match c {
                '_' => "!".to_string(),
                'Á' => "a".to_string(),
                'É' | 'é' => "e".to_string(),
                'Ø' | 'ø' => "o".to_string(),
                'Ł' | 'ł' => "l".to_string(),
                'Đ' | 'đ' => "d".to_string(),
                'Æ' | 'æ' => "ae".to_string(),
                'Œ' | 'œ' => "oe".to_string(),
                'ß' => "ss".to_string(),
                c => c.to_ascii_lowercase().to_string(),
            })
            .collect()
    }

    fn arb_sort_key() -> impl Strategy<Value = SortKey> {
        prop::sample::select(SortKey::OPTIONS.to_vec())
    }

    proptest! {
        #[test]
        fn prop_genre_partitions_catalog(catalog in arb_catalog()) {
            let mut total = 0;
            for genre in Genre::ALL {
                let part = filter(&catalog, GenreFilter::Only(genre));
                prop_assert!(part.iter().all(|b| b.genre == genre));

                // Relative order is the catalog's
                let positions: Vec<usize> = part
                    .iter()
                    .map(|b| catalog.iter().position(|c| c.id == b.id).unwrap())
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

                total += part.len();
            }
            prop_assert_eq!(total, catalog.len());
        }

        #[test]
        fn prop_sorted_output_is_ordered(catalog in arb_catalog()) {
            let by_year = sort(&catalog, SortKey::Year);
            prop_assert!(by_year.windows(2).all(|w| w[0].year >= w[1].year));

            let by_pages = sort(&catalog, SortKey::Pages);
            prop_assert!(by_pages.windows(2).all(|w| w[0].pages >= w[1].pages));

            let by_title = sort(&catalog, SortKey::Title);
            prop_assert!(by_title
                .windows(2)
                .all(|w| base_letters(&w[0].title) <= base_letters(&w[1].title)));
        }

        #[test]
        fn prop_equal_keys_keep_relative_order(catalog in arb_catalog()) {
            // Ids are assigned in catalog order, so stability means ids ascend within a tie
            let by_year = sort(&catalog, SortKey::Year);
            prop_assert!(by_year
                .windows(2)
                .filter(|w| w[0].year == w[1].year)
                .all(|w| w[0].id < w[1].id));

            let by_pages = sort(&catalog, SortKey::Pages);
            prop_assert!(by_pages
                .windows(2)
                .filter(|w| w[0].pages == w[1].pages)
                .all(|w| w[0].id < w[1].id));
        }

        #[test]
        fn prop_sort_is_idempotent(catalog in arb_catalog(), key in arb_sort_key()) {
            let once = sort(&catalog, key);
            prop_assert_eq!(sort(&once, key), once);
        }

        #[test]
        fn prop_sort_is_a_permutation(catalog in arb_catalog(), key in arb_sort_key()) {
            let mut sorted_ids = ids(&sort(&catalog, key));
            sorted_ids.sort_unstable();
            prop_assert_eq!(sorted_ids, ids(&catalog));
        }
    }
}
