//! Document models for the storage layer.
//!
//! These types map directly to stored documents. They are separate from the
//! domain types in contacts-core because only the storage layer knows about
//! store-generated identifiers.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use contacts_core::Contact;

/// Stored document in the `contacts` collection.
///
/// The identifier is assigned by the store on insert and immutable
/// afterwards. Field names on disk match the wire names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub favorite_color: String,
    pub birthday: String,
}

impl ContactDocument {
    /// The contact fields without the identifier.
    pub fn contact(&self) -> Contact {
        Contact {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            favorite_color: self.favorite_color.clone(),
            birthday: self.birthday.clone(),
        }
    }
}

/// Snapshot of connection and collection state for the debug endpoint.
#[derive(Debug, Clone)]
pub struct DbDiagnostics {
    /// Names of all collections in the database.
    pub collections: Vec<String>,
    /// Whether the contacts collection exists.
    pub contacts_collection: bool,
    /// Number of documents in the contacts collection (0 when absent).
    pub contact_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_contact_document_from_bson() {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "firstName": "Joan",
            "lastName": "Nakibuule",
            "email": "joanruth@gmail.com",
            "favoriteColor": "White",
            "birthday": "1970-03-22",
        };

        let parsed: ContactDocument = mongodb::bson::from_document(document).unwrap();
        assert_eq!(parsed.id, id);
        assert_eq!(parsed.first_name, "Joan");
        assert_eq!(parsed.favorite_color, "White");
    }

    #[test]
    fn test_contact_document_serializes_wire_names() {
        let document = ContactDocument {
            id: ObjectId::new(),
            first_name: "Tom".to_string(),
            last_name: "Seguja".to_string(),
            email: "tomseguja@gmail.com".to_string(),
            favorite_color: "Green".to_string(),
            birthday: "1965-06-15".to_string(),
        };

        let bson = mongodb::bson::to_document(&document).unwrap();
        assert!(bson.contains_key("_id"));
        assert!(bson.contains_key("firstName"));
        assert!(bson.contains_key("favoriteColor"));
        assert!(!bson.contains_key("first_name"));
    }

    #[test]
    fn test_contact_extraction_drops_id() {
        let document = ContactDocument {
            id: ObjectId::new(),
            first_name: "Tom".to_string(),
            last_name: "Seguja".to_string(),
            email: "tomseguja@gmail.com".to_string(),
            favorite_color: "Green".to_string(),
            birthday: "1965-06-15".to_string(),
        };

        let contact = document.contact();
        assert_eq!(contact.first_name, "Tom");
        assert_eq!(contact.birthday, "1965-06-15");
    }
}
