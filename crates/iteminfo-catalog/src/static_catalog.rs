//! Suffix-classified catalogue with fixed display values.

use crate::lookup::CatalogLookup;

const BOOK_SUFFIX: &str = "BK";
const MOVIE_SUFFIX: &str = "MV";

const BOOK_TITLE: &str = "JAVA Blackbook";
const MOVIE_TITLE: &str = "Star War";
const BOOK_ISBN: &str = "1234567890";
const MOVIE_RATING: &str = "PG-13";
const PRICE: &str = "13.99";
const LIST_PRICE: &str = "15.97";

/// Catalogue that classifies identifiers by suffix.
///
/// Identifiers ending in `BK` are books and identifiers ending in `MV` are
/// movies. Display fields are fixed regardless of the identifier, so prices
/// are reported even for identifiers the catalogue does not recognise.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    /// Creates the catalogue.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CatalogLookup for StaticCatalog {
    fn is_book(&self, id: &str) -> bool {
        id.ends_with(BOOK_SUFFIX)
    }

    fn is_movie(&self, id: &str) -> bool {
        id.ends_with(MOVIE_SUFFIX)
    }

    fn title(&self, id: &str) -> String {
        if self.is_movie(id) {
            MOVIE_TITLE.to_owned()
        } else {
            BOOK_TITLE.to_owned()
        }
    }

    fn isbn(&self, _id: &str) -> String {
        BOOK_ISBN.to_owned()
    }

    fn rating(&self, _id: &str) -> String {
        MOVIE_RATING.to_owned()
    }

    fn price(&self, _id: &str) -> String {
        PRICE.to_owned()
    }

    fn list_price(&self, _id: &str) -> String {
        LIST_PRICE.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::lookup::ItemCategory;

    #[rstest]
    #[case::book("1234BK", ItemCategory::Book)]
    #[case::movie("5678MV", ItemCategory::Movie)]
    #[case::digits("013579", ItemCategory::Unknown)]
    #[case::lowercase_suffix("1234bk", ItemCategory::Unknown)]
    #[case::suffix_only("BK", ItemCategory::Book)]
    fn classifies_by_suffix(#[case] id: &str, #[case] expected: ItemCategory) {
        assert_eq!(StaticCatalog::new().category(id), expected);
    }

    #[test]
    fn titles_depend_on_category() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.title("1234BK"), "JAVA Blackbook");
        assert_eq!(catalog.title("5678MV"), "Star War");
    }

    #[test]
    fn prices_are_fixed() {
        let catalog = StaticCatalog::new();
        for id in ["1234BK", "5678MV", "013579"] {
            assert_eq!(catalog.price(id), "13.99");
            assert_eq!(catalog.list_price(id), "15.97");
        }
    }

    #[test]
    fn book_and_movie_fields() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.isbn("1234BK"), "1234567890");
        assert_eq!(catalog.rating("5678MV"), "PG-13");
    }
}
