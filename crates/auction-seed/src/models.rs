//! Collection names and the document shapes stored in them.

use serde::{Deserialize, Serialize};

/// Collections owned by the auction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Auctions,
    Bids,
}

impl Collection {
    /// All collections, in creation order.
    pub const ALL: [Collection; 3] = [Collection::Users, Collection::Auctions, Collection::Bids];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Auctions => "auctions",
            Collection::Bids => "bids",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document in the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Physical condition of an auctioned product. Stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCondition {
    New = 1,
    Used = 2,
    Refurbished = 3,
}

/// Lifecycle state of an auction. Stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionStatus {
    Active = 0,
    Completed = 1,
}

impl TryFrom<i32> for ProductCondition {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ProductCondition::New),
            2 => Ok(ProductCondition::Used),
            3 => Ok(ProductCondition::Refurbished),
            other => Err(other),
        }
    }
}

impl TryFrom<i32> for AuctionStatus {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AuctionStatus::Active),
            1 => Ok(AuctionStatus::Completed),
            other => Err(other),
        }
    }
}

macro_rules! int_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i32(*self as i32)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = i32::deserialize(deserializer)?;
                <$ty>::try_from(raw).map_err(|v| {
                    serde::de::Error::custom(format!(
                        "invalid {} value: {v}",
                        stringify!($ty)
                    ))
                })
            }
        }
    };
}

int_serde!(ProductCondition);
int_serde!(AuctionStatus);

/// A document in the `auctions` collection, as the auction service writes it.
///
/// The seeder never inserts auctions; this type gives the indexed fields
/// (`status`, `category`, `product_name`) a typed home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
    pub status: AuctionStatus,
    /// Unix seconds.
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_collection_names() {
        let names: Vec<_> = Collection::ALL.iter().map(Collection::as_str).collect();
        assert_eq!(names, vec!["users", "auctions", "bids"]);
        assert_eq!(Collection::Bids.to_string(), "bids");
    }

    #[test]
    fn test_user_document_uses_mongo_id() {
        let user = UserDocument {
            id: "abc".to_string(),
            name: "Someone".to_string(),
        };
        let doc = bson::to_document(&user).unwrap();
        assert_eq!(doc, doc! { "_id": "abc", "name": "Someone" });
    }

    #[test]
    fn test_auction_enums_stored_as_integers() {
        let auction = AuctionDocument {
            id: "a-1".to_string(),
            product_name: "Vintage Camera".to_string(),
            category: "Electronics".to_string(),
            description: "Working condition".to_string(),
            condition: ProductCondition::Used,
            status: AuctionStatus::Active,
            timestamp: 1_700_000_000,
        };
        let doc = bson::to_document(&auction).unwrap();
        assert_eq!(doc.get_i32("condition").unwrap(), 2);
        assert_eq!(doc.get_i32("status").unwrap(), 0);
        assert_eq!(doc.get_str("_id").unwrap(), "a-1");

        let back: AuctionDocument = bson::from_document(doc).unwrap();
        assert_eq!(back, auction);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let doc = doc! {
            "_id": "a-2",
            "product_name": "Lamp",
            "category": "Home",
            "description": "",
            "condition": 1,
            "status": 7,
            "timestamp": 0_i64,
        };
        assert!(bson::from_document::<AuctionDocument>(doc).is_err());
    }
}
