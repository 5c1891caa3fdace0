//! Contact record and request-body validation.
//!
//! A contact always carries all five fields. That invariant is enforced at
//! this boundary, not by the document store, which imposes no schema.
//! Wire field names are camelCase (`firstName`, `favoriteColor`, ...).

use serde::{Deserialize, Serialize};

/// A validated contact record.
///
/// All fields are required and non-empty. The store-generated identifier is
/// not part of this type; the storage layer attaches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub favorite_color: String,
    /// Date string, e.g. "1965-06-15". Stored as submitted.
    pub birthday: String,
}

impl Contact {
    /// Wire names of the required fields, in request-body order.
    pub const REQUIRED_FIELDS: [&'static str; 5] = [
        "firstName",
        "lastName",
        "email",
        "favoriteColor",
        "birthday",
    ];
}

/// Client-supplied contact body before validation.
///
/// Every field is optional at the deserialization stage so that a partial
/// body can be reported as a validation failure instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub favorite_color: Option<String>,
    pub birthday: Option<String>,
}

impl ContactInput {
    /// Validate that all five fields are present and non-empty.
    ///
    /// Returns the validated [`Contact`], or the wire names of the fields
    /// that were missing or empty.
    pub fn validate(self) -> Result<Contact, Vec<&'static str>> {
        fn required(
            value: Option<String>,
            name: &'static str,
            missing: &mut Vec<&'static str>,
        ) -> String {
            match value {
                Some(value) if !value.is_empty() => value,
                _ => {
                    missing.push(name);
                    String::new()
                }
            }
        }

        let mut missing = Vec::new();
        let contact = Contact {
            first_name: required(self.first_name, "firstName", &mut missing),
            last_name: required(self.last_name, "lastName", &mut missing),
            email: required(self.email, "email", &mut missing),
            favorite_color: required(self.favorite_color, "favoriteColor", &mut missing),
            birthday: required(self.birthday, "birthday", &mut missing),
        };

        if missing.is_empty() {
            Ok(contact)
        } else {
            Err(missing)
        }
    }
}
