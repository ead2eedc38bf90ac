//! Canonical record lists out of inconsistently wrapped listing responses.
//!
//! The listing endpoints answer with a bare array or with an object wrapping
//! the array under one of several keys. Each known wrapping is an
//! [`EnvelopeShape`] with a pure extractor; the extractors are tried in a
//! fixed order and the first that matches supplies the records. A payload no
//! extractor recognizes yields an empty list.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::Endpoint;

/// The three record families shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Partners,
    Associates,
    Consumers,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Partners,
        EntityKind::Associates,
        EntityKind::Consumers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Partners => "partners",
            EntityKind::Associates => "associates",
            EntityKind::Consumers => "consumers",
        }
    }

    /// Envelope key that is specific to this family.
    pub fn entity_key(self) -> &'static str {
        self.as_str()
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            EntityKind::Partners => Endpoint::AdminPartners,
            EntityKind::Associates => Endpoint::AdminAssociates,
            EntityKind::Consumers => Endpoint::AdminConsumers,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Partners => "Partners",
            EntityKind::Associates => "Associates",
            EntityKind::Consumers => "Consumers",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known wrappings of a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `[ ... ]`
    BareList,
    /// `{ "data": [ ... ] }`
    Data,
    /// `{ "<entity key>": [ ... ] }`, e.g. `{ "associates": [ ... ] }`
    EntityKey,
    /// `{ "message": .., "count": .., "result": [ ... ] }`
    Counted,
    /// `{ "result": [ ... ] }`
    Result,
    /// `{ "users": [ ... ] }`
    Users,
    /// Nothing matched.
    Unrecognized,
}

type Extract = for<'a> fn(&'a Value, EntityKind) -> Option<&'a Vec<Value>>;

struct Extractor {
    shape: EnvelopeShape,
    extract: Extract,
}

const EXTRACTORS: &[Extractor] = &[
    Extractor { shape: EnvelopeShape::BareList, extract: bare_list },
    Extractor { shape: EnvelopeShape::Data, extract: data_list },
    Extractor { shape: EnvelopeShape::EntityKey, extract: entity_list },
    Extractor { shape: EnvelopeShape::Counted, extract: counted_list },
    Extractor { shape: EnvelopeShape::Result, extract: result_list },
    Extractor { shape: EnvelopeShape::Users, extract: users_list },
];

fn bare_list(payload: &Value, _: EntityKind) -> Option<&Vec<Value>> {
    payload.as_array()
}

fn data_list(payload: &Value, _: EntityKind) -> Option<&Vec<Value>> {
    keyed_list(payload, "data")
}

fn entity_list(payload: &Value, kind: EntityKind) -> Option<&Vec<Value>> {
    keyed_list(payload, kind.entity_key())
}

fn counted_list(payload: &Value, _: EntityKind) -> Option<&Vec<Value>> {
    let counted = truthy(payload.get("message")) && truthy(payload.get("count"));
    if counted {
        keyed_list(payload, "result")
    } else {
        None
    }
}

fn result_list(payload: &Value, _: EntityKind) -> Option<&Vec<Value>> {
    keyed_list(payload, "result")
}

fn users_list(payload: &Value, _: EntityKind) -> Option<&Vec<Value>> {
    keyed_list(payload, "users")
}

fn keyed_list<'a>(payload: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    payload.get(key).and_then(Value::as_array)
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// The canonical, shape-independent record list of one entity family.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecordList {
    kind: EntityKind,
    shape: EnvelopeShape,
    records: Vec<Value>,
}

impl NormalizedRecordList {
    /// Extracts the records of `payload`; never fails.
    pub fn from_payload(kind: EntityKind, payload: &Value) -> Self {
        for extractor in EXTRACTORS {
            if let Some(records) = (extractor.extract)(payload, kind) {
                return Self {
                    kind,
                    shape: extractor.shape,
                    records: records.clone(),
                };
            }
        }

        log::warn!(
            "{} listing matched no known envelope shape; treating it as empty",
            kind
        );
        Self::empty(kind)
    }

    pub fn empty(kind: EntityKind) -> Self {
        Self {
            kind,
            shape: EnvelopeShape::Unrecognized,
            records: Vec::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn shape(&self) -> EnvelopeShape {
        self.shape
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(kind: EntityKind, payload: Value) -> NormalizedRecordList {
        NormalizedRecordList::from_payload(kind, &payload)
    }

    #[test]
    fn counted_envelope_yields_its_result() {
        let list = normalize(
            EntityKind::Consumers,
            json!({"message": "ok", "count": 2, "result": [{"id": "a"}, {"id": "b"}]}),
        );
        assert_eq!(list.records(), [json!({"id": "a"}), json!({"id": "b"})]);
        assert_eq!(list.shape(), EnvelopeShape::Counted);
    }

    #[test]
    fn bare_arrays_are_used_as_is() {
        let list = normalize(EntityKind::Partners, json!([{"id": "a"}, {"id": "b"}]));
        assert_eq!(list.len(), 2);
        assert_eq!(list.shape(), EnvelopeShape::BareList);
    }

    #[test]
    fn unknown_shapes_become_empty() {
        let list = normalize(EntityKind::Partners, json!({}));
        assert!(list.is_empty());
        assert_eq!(list.shape(), EnvelopeShape::Unrecognized);

        assert!(normalize(EntityKind::Partners, json!(null)).is_empty());
        assert!(normalize(EntityKind::Partners, json!({"data": {"id": 1}})).is_empty());
    }

    #[test]
    fn data_wins_over_later_keys() {
        let list = normalize(
            EntityKind::Associates,
            json!({"data": [1], "associates": [1, 2], "result": [1, 2, 3]}),
        );
        assert_eq!(list.shape(), EnvelopeShape::Data);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn entity_key_is_specific_to_the_family() {
        let payload = json!({"associates": [{"name": "x"}]});
        assert_eq!(
            normalize(EntityKind::Associates, payload.clone()).shape(),
            EnvelopeShape::EntityKey
        );
        assert!(normalize(EntityKind::Consumers, payload).is_empty());
    }

    #[test]
    fn result_without_counters_and_users_are_recognized() {
        let result = normalize(EntityKind::Consumers, json!({"result": [1], "count": 0}));
        assert_eq!(result.shape(), EnvelopeShape::Result);

        let users = normalize(EntityKind::Consumers, json!({"users": [1, 2]}));
        assert_eq!(users.shape(), EnvelopeShape::Users);
        assert_eq!(users.len(), 2);
    }
}
