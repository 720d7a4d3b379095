//! The read-only lookup contract queried by request handlers.

use serde::{Deserialize, Serialize};

/// Classification of a catalogue identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// A printed book with an ISBN.
    Book,
    /// A movie with a content rating.
    Movie,
    /// Anything the catalogue does not recognise.
    #[default]
    Unknown,
}

/// Read-only catalogue queried by request handlers.
///
/// Every method is total: implementations must answer for any identifier,
/// including identifiers they have never seen. Unrecognised identifiers
/// classify as neither a book nor a movie.
///
/// The predicates are not required to be mutually exclusive. Callers that
/// need a single answer use [`CatalogLookup::category`], which prefers
/// [`ItemCategory::Book`] over [`ItemCategory::Movie`].
pub trait CatalogLookup {
    /// Returns `true` when the identifier names a book.
    fn is_book(&self, id: &str) -> bool;

    /// Returns `true` when the identifier names a movie.
    fn is_movie(&self, id: &str) -> bool;

    /// Display title for the identifier.
    fn title(&self, id: &str) -> String;

    /// ISBN for a book identifier.
    fn isbn(&self, id: &str) -> String;

    /// Content rating for a movie identifier.
    fn rating(&self, id: &str) -> String;

    /// Current selling price.
    fn price(&self, id: &str) -> String;

    /// Listed (catalogue) price.
    fn list_price(&self, id: &str) -> String;

    /// Resolves the identifier to a single category.
    fn category(&self, id: &str) -> ItemCategory {
        if self.is_book(id) {
            ItemCategory::Book
        } else if self.is_movie(id) {
            ItemCategory::Movie
        } else {
            ItemCategory::Unknown
        }
    }
}

impl<L: CatalogLookup + ?Sized> CatalogLookup for &L {
    fn is_book(&self, id: &str) -> bool {
        (**self).is_book(id)
    }

    fn is_movie(&self, id: &str) -> bool {
        (**self).is_movie(id)
    }

    fn title(&self, id: &str) -> String {
        (**self).title(id)
    }

    fn isbn(&self, id: &str) -> String {
        (**self).isbn(id)
    }

    fn rating(&self, id: &str) -> String {
        (**self).rating(id)
    }

    fn price(&self, id: &str) -> String {
        (**self).price(id)
    }

    fn list_price(&self, id: &str) -> String {
        (**self).list_price(id)
    }

    fn category(&self, id: &str) -> ItemCategory {
        (**self).category(id)
    }
}

impl<L: CatalogLookup + ?Sized> CatalogLookup for Box<L> {
    fn is_book(&self, id: &str) -> bool {
        (**self).is_book(id)
    }

    fn is_movie(&self, id: &str) -> bool {
        (**self).is_movie(id)
    }

    fn title(&self, id: &str) -> String {
        (**self).title(id)
    }

    fn isbn(&self, id: &str) -> String {
        (**self).isbn(id)
    }

    fn rating(&self, id: &str) -> String {
        (**self).rating(id)
    }

    fn price(&self, id: &str) -> String {
        (**self).price(id)
    }

    fn list_price(&self, id: &str) -> String {
        (**self).list_price(id)
    }

    fn category(&self, id: &str) -> ItemCategory {
        (**self).category(id)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    struct Flags {
        book: bool,
        movie: bool,
    }

    impl CatalogLookup for Flags {
        fn is_book(&self, _id: &str) -> bool {
            self.book
        }

        fn is_movie(&self, _id: &str) -> bool {
            self.movie
        }

        fn title(&self, _id: &str) -> String {
            String::new()
        }

        fn isbn(&self, _id: &str) -> String {
            String::new()
        }

        fn rating(&self, _id: &str) -> String {
            String::new()
        }

        fn price(&self, _id: &str) -> String {
            String::new()
        }

        fn list_price(&self, _id: &str) -> String {
            String::new()
        }
    }

    #[rstest]
    #[case::book(true, false, ItemCategory::Book)]
    #[case::movie(false, true, ItemCategory::Movie)]
    #[case::neither(false, false, ItemCategory::Unknown)]
    #[case::both_prefers_book(true, true, ItemCategory::Book)]
    fn category_follows_predicates(
        #[case] book: bool,
        #[case] movie: bool,
        #[case] expected: ItemCategory,
    ) {
        let lookup = Flags { book, movie };
        assert_eq!(lookup.category("any"), expected);
    }

    #[test]
    fn boxed_lookup_delegates() {
        let lookup: Box<dyn CatalogLookup> = Box::new(Flags {
            book: false,
            movie: true,
        });
        assert!(lookup.is_movie("x"));
        assert_eq!(lookup.category("x"), ItemCategory::Movie);
    }
}
