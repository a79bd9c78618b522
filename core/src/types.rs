//! Domain record for the todo listing.
//!
//! # Design
//! `Todo` mirrors the remote endpoint's schema but is defined
//! independently; the integration tests catch drift against the
//! mock server. The endpoint serves numeric ids (and a `userId`
//! field this application does not model), while local seed data and
//! removal work with opaque strings — so `id` deserializes from either
//! a JSON string or an integer and is normalized to its decimal string
//! form. Unknown fields are ignored.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// A single todo item in the collection.
///
/// `id` is an opaque, source-assigned identifier, unique within the
/// collection at any instant. Items are immutable once loaded; removal
/// is the only mutation path.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Accept `"9"` or `9` for the id field; reject anything else.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or integer id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
