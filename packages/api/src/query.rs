//! # Query filter engine
//!
//! Translates a declarative filter object into a predicate over a collection.
//! A filter is a JSON object whose keys are field names and whose values are
//! either a scalar (exact equality) or a `{"$in": [values]}` set-membership
//! spec. All constraints are ANDed; there is no OR and no negation.
//!
//! The same engine runs behind the server's `/filter` endpoints and in client
//! tests, so both sides agree on the semantics:
//!
//! - Keys outside the collection's allow-list are silently ignored — an
//!   optional filter a caller forgot to strip never narrows the result.
//! - Comparison is exact [`serde_json::Value`] equality. No case folding, no
//!   partial match, no numeric coercion: a flag persisted as the integer `1`
//!   only matches a filter carrying the integer `1`.
//! - An operator object other than a well-formed `$in` falls through to
//!   strict equality against the object itself, which never matches a scalar
//!   field. Unknown operators therefore fail closed rather than erroring.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A declarative filter: field name → scalar or `{"$in": [values]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Filter(pub Map<String, Value>);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain `field` to exactly `value`.
    pub fn field(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    /// Constrain `field` to any of `values`.
    pub fn any_of(mut self, field: &str, values: Vec<Value>) -> Self {
        let mut spec = Map::new();
        spec.insert("$in".to_string(), Value::Array(values));
        self.0.insert(field.to_string(), Value::Object(spec));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Whether one field value satisfies one constraint spec.
fn value_matches(actual: Option<&Value>, spec: &Value) -> bool {
    if let Some(obj) = spec.as_object() {
        if let Some(Value::Array(candidates)) = obj.get("$in") {
            return match actual {
                Some(value) => candidates.contains(value),
                None => false,
            };
        }
        // Any other operator object falls through to strict equality against
        // the object itself, which never matches a scalar field.
    }
    actual == Some(spec)
}

/// Whether a record satisfies every allow-listed constraint in the filter.
pub fn record_matches(record: &Value, filter: &Filter, allowed: &[&str]) -> bool {
    let Some(fields) = record.as_object() else {
        return false;
    };
    filter.0.iter().all(|(key, spec)| {
        if !allowed.contains(&key.as_str()) {
            return true;
        }
        value_matches(fields.get(key), spec)
    })
}

/// The sub-collection of `records` matching the filter, in input order.
///
/// A record that fails to serialize is excluded rather than erroring; the
/// models this runs over are plain data and serialize unconditionally.
pub fn apply_filter<T: Serialize + Clone>(
    records: &[T],
    filter: &Filter,
    allowed: &[&str],
) -> Vec<T> {
    records
        .iter()
        .filter(|record| {
            serde_json::to_value(record)
                .map(|value| record_matches(&value, filter, allowed))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Serialize)]
    struct Row {
        id: i64,
        is_sensitive: i32,
        style: String,
    }

    const ALLOWED: &[&str] = &["id", "is_sensitive", "style"];

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                is_sensitive: 0,
                style: "portrait".to_string(),
            },
            Row {
                id: 2,
                is_sensitive: 1,
                style: "boudoir".to_string(),
            },
            Row {
                id: 3,
                is_sensitive: 0,
                style: "street".to_string(),
            },
        ]
    }

    #[test]
    fn test_integer_flag_equality() {
        let filter = Filter::new().field("is_sensitive", 1);
        let hits = apply_filter(&rows(), &filter, ALLOWED);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_equality_is_exact() {
        // No case folding, no partial match.
        let filter = Filter::new().field("style", "Portrait");
        assert!(apply_filter(&rows(), &filter, ALLOWED).is_empty());

        // No numeric coercion across representations.
        let filter = Filter::new().field("is_sensitive", "1");
        assert!(apply_filter(&rows(), &filter, ALLOWED).is_empty());
    }

    #[test]
    fn test_in_membership() {
        let filter = Filter::new().any_of("id", vec![json!(1), json!(3), json!(99)]);
        let hits = apply_filter(&rows(), &filter, ALLOWED);
        let ids: Vec<i64> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_constraints_are_anded() {
        let filter = Filter::new()
            .field("is_sensitive", 0)
            .any_of("id", vec![json!(1), json!(2)]);
        let hits = apply_filter(&rows(), &filter, ALLOWED);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_unknown_keys_never_narrow() {
        let filter = Filter::new()
            .field("not_a_field", "whatever")
            .field("is_sensitive", 0);
        let hits = apply_filter(&rows(), &filter, ALLOWED);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_empty_filter_matches_all() {
        assert_eq!(apply_filter(&rows(), &Filter::new(), ALLOWED).len(), 3);
    }

    #[test]
    fn test_unknown_operator_fails_closed() {
        let mut spec = Map::new();
        spec.insert("$gt".to_string(), json!(1));
        let mut filter = Filter::new();
        filter.0.insert("id".to_string(), Value::Object(spec));

        // Falls through to equality against the operator object: no match.
        assert!(apply_filter(&rows(), &filter, ALLOWED).is_empty());
    }

    #[test]
    fn test_malformed_in_fails_closed() {
        let mut spec = Map::new();
        spec.insert("$in".to_string(), json!(2));
        let mut filter = Filter::new();
        filter.0.insert("id".to_string(), Value::Object(spec));

        assert!(apply_filter(&rows(), &filter, ALLOWED).is_empty());
    }
}
