//! Wire format of the portal backend
//!
//! Collections come back as `{"<field>": [ ...documents ]}`. Documents are
//! loosely shaped: keys vary between collections, populated references may be
//! bare ids, and numbers show up where text is expected. Decoding is lenient
//! per field; only a document that is not an object at all is dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::domain::entities::{Author, Collection, FeedItem};
use crate::error::FeedError;

/// Decode the named array of a collection response into feed items
pub fn decode_collection(collection: Collection, body: Value) -> Result<Vec<FeedItem>, FeedError> {
    let field = collection.array_field();
    let entries = match body {
        Value::Object(mut map) => map.remove(field),
        _ => None,
    };

    let entries = match entries {
        Some(Value::Array(entries)) => entries,
        // null is treated as an empty collection
        Some(Value::Null) => Vec::new(),
        _ => {
            return Err(FeedError::MissingField {
                collection: collection.to_string(),
                field,
            })
        }
    };

    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        // Derived struct deserializers also accept sequences; only documents count
        if !entry.is_object() {
            warn!(%collection, index, "Skipping non-object feed entry");
            continue;
        }

        match serde_json::from_value::<RawFeedItem>(entry) {
            Ok(raw) => items.push(raw.into_feed_item(collection, index)),
            Err(e) => {
                warn!(%collection, index, error = %e, "Skipping malformed feed item");
            }
        }
    }

    Ok(items)
}

/// A document as the backend stores it
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFeedItem {
    #[serde(rename = "_id", deserialize_with = "lenient_text")]
    object_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    id: Option<String>,

    #[serde(deserialize_with = "lenient_author")]
    author: Option<Author>,
    #[serde(rename = "postedBy", deserialize_with = "lenient_author")]
    posted_by: Option<Author>,

    #[serde(deserialize_with = "lenient_text")]
    description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    message: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    body: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    experience: Option<String>,

    #[serde(deserialize_with = "lenient_text")]
    position: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    company: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    salary: Option<String>,

    #[serde(deserialize_with = "lenient_text")]
    year: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    category: Option<String>,

    #[serde(rename = "createdAt", deserialize_with = "lenient_timestamp")]
    created_at_camel: Option<DateTime<Utc>>,
    #[serde(rename = "created_at", deserialize_with = "lenient_timestamp")]
    created_at_snake: Option<DateTime<Utc>>,
}

impl RawFeedItem {
    fn into_feed_item(self, collection: Collection, index: usize) -> FeedItem {
        FeedItem {
            id: non_blank(self.object_id.or(self.id))
                .unwrap_or_else(|| format!("{}-{}", collection, index)),
            author: self.author.or(self.posted_by),
            body: non_blank(
                self.description
                    .or(self.message)
                    .or(self.body)
                    .or(self.experience),
            )
            .unwrap_or_default(),
            title: non_blank(self.position.or(self.title)),
            company: non_blank(self.company),
            salary: non_blank(self.salary),
            tag: non_blank(self.year.or(self.category)).unwrap_or_default(),
            created_at: self.created_at_camel.or(self.created_at_snake),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text_from_value))
}

fn lenient_author<'de, D>(deserializer: D) -> Result<Option<Author>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(author_from_value))
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(timestamp_from_value))
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Extended JSON object id: {"$oid": "..."}
        Value::Object(map) => map.get("$oid").and_then(Value::as_str).map(str::to_string),
        Value::Null | Value::Array(_) => None,
    }
}

fn author_from_value(value: Value) -> Option<Author> {
    match value {
        // Reference that was not populated
        Value::String(id) => Some(Author {
            id,
            name: String::new(),
            image: None,
        }),
        Value::Object(mut map) => {
            let id = map
                .remove("_id")
                .or_else(|| map.remove("id"))
                .and_then(text_from_value)
                .unwrap_or_default();
            let name = map
                .remove("name")
                .and_then(text_from_value)
                .unwrap_or_default();
            let image = map.remove("image").and_then(text_from_value);
            Some(Author { id, name, image })
        }
        _ => None,
    }
}

fn timestamp_from_value(value: Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        // Epoch milliseconds
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        // Extended JSON date: {"$date": ...}
        Value::Object(mut map) => map.remove("$date").and_then(timestamp_from_value),
        _ => None,
    }
}
