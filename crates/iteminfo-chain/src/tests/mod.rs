//! Crate-level behaviour tests.

use iteminfo_catalog::{CatalogRecord, ItemCategory, StaticCatalog, TableCatalog};

use crate::dispatcher::RequestDispatcher;
use crate::request::ItemRequest;


#[test]
fn table_catalogue_prices_unknown_items_at_zero() {
    let catalog = TableCatalog::from_records([CatalogRecord::new("0596007124", ItemCategory::Book)
        .with_title("Head First Design Patterns")
        .with_isbn("0596007124")
        .with_prices("39.99", "44.99")])
    .expect("catalogue");
    let dispatcher = RequestDispatcher::new(catalog).expect("chain");

    let known = dispatcher.handle(&ItemRequest::new("0596007124").expect("request"));
    assert_eq!(
        known,
        "ASIN:0596007124|ListedPrice:44.99|Price:39.99|BookTitle:Head First Design Patterns|ISBN:0596007124|EOF"
    );

    let unknown = dispatcher.handle(&ItemRequest::new("013579").expect("request"));
    assert_eq!(unknown, "ASIN:013579|ListedPrice:0.00|Price:0.00|UNKNOWN|EOF");
}

#[test]
fn borrowed_lookup_backs_a_dispatcher() {
    let catalog = StaticCatalog::new();
    let dispatcher = RequestDispatcher::new(&catalog).expect("chain");
    let reply = dispatcher.handle(&ItemRequest::new("5678MV").expect("request"));
    assert!(reply.contains("MovieRating:PG-13"));
}
