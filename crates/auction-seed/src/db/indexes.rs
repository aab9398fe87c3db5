//! Secondary index declarations.
//!
//! - `auctions`: `{ "status": 1, "category": 1 }` for listing by state and category
//! - `auctions`: `{ "product_name": "text" }` for keyword search
//! - `bids`: `{ "auction_id": 1, "amount": -1 }` for the highest bid per auction
//!
//! Names are left to the server (`status_1_category_1`, `product_name_text`,
//! `auction_id_1_amount_-1`), so creating the same model twice is a no-op.

use mongodb::{IndexModel, bson::doc};

use crate::models::Collection;

pub fn declared_indexes() -> Vec<(Collection, IndexModel)> {
    vec![
        (
            Collection::Auctions,
            IndexModel::builder().keys(doc! { "status": 1, "category": 1 }).build(),
        ),
        (
            Collection::Auctions,
            IndexModel::builder().keys(doc! { "product_name": "text" }).build(),
        ),
        (
            Collection::Bids,
            IndexModel::builder().keys(doc! { "auction_id": 1, "amount": -1 }).build(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_index_keys() {
        let indexes = declared_indexes();
        assert_eq!(indexes.len(), 3);

        let (collection, model) = &indexes[0];
        assert_eq!(*collection, Collection::Auctions);
        assert_eq!(model.keys, doc! { "status": 1, "category": 1 });

        let (collection, model) = &indexes[1];
        assert_eq!(*collection, Collection::Auctions);
        assert_eq!(model.keys, doc! { "product_name": "text" });

        let (collection, model) = &indexes[2];
        assert_eq!(*collection, Collection::Bids);
        assert_eq!(model.keys, doc! { "auction_id": 1, "amount": -1 });
    }

    #[test]
    fn test_compound_key_order_preserved() {
        let indexes = declared_indexes();
        let fields: Vec<_> = indexes[2].1.keys.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["auction_id", "amount"]);
    }

    #[test]
    fn test_users_has_no_secondary_index() {
        assert!(
            declared_indexes()
                .iter()
                .all(|(collection, _)| *collection != Collection::Users)
        );
    }
}
