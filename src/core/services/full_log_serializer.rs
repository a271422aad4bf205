use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::core::errors::Result;
use crate::core::models::query_event::QueryCompletedEvent;
use crate::core::traits::field_encoder::FieldEncoder;

/// Serializes a whole completed-query event for the full audit log.
///
/// The document is assembled from a registry of `FieldEncoder`s, one
/// per top-level key. Groups never see each other's output, so adding
/// or replacing one encoder leaves every other group byte-for-byte the
/// same.
pub struct FullLogSerializer {
    encoders: BTreeMap<&'static str, Box<dyn FieldEncoder>>,
}

impl FullLogSerializer {
    /// A serializer with no encoders; produces `{}`.
    pub fn empty() -> Self {
        Self {
            encoders: BTreeMap::new(),
        }
    }

    /// Add an encoder, replacing any existing one for the same key.
    pub fn register<E: FieldEncoder + 'static>(&mut self, encoder: E) {
        self.encoders.insert(encoder.key(), Box::new(encoder));
    }

    /// Builder-style `register`.
    pub fn with<E: FieldEncoder + 'static>(mut self, encoder: E) -> Self {
        self.register(encoder);
        self
    }

    /// Remove the encoder for `key`, dropping that group from the output.
    pub fn unregister(&mut self, key: &str) -> bool {
        self.encoders.remove(key).is_some()
    }

    /// Registered group keys, in output order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.encoders.keys().copied()
    }

    /// Encode every group into one JSON object.
    ///
    /// # Errors
    ///
    /// The first encoder error aborts the document; no partial output is
    /// returned.
    pub fn to_value(&self, event: &QueryCompletedEvent) -> Result<Value> {
        let mut document = Map::new();
        for (key, encoder) in &self.encoders {
            if let Some(value) = encoder.encode(event)? {
                document.insert((*key).to_string(), value);
            }
        }
        Ok(Value::Object(document))
    }

    /// Encode the event as a single line of JSON.
    pub fn serialize(&self, event: &QueryCompletedEvent) -> Result<String> {
        let document = self.to_value(event)?;
        Ok(serde_json::to_string(&document)?)
    }
}
