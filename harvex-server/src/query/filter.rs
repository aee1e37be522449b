use serde_json::Value;

use harvex_types::records::Record;
use harvex_types::registry::MetadataFormatId;

/// Criterion key which is evaluated against the record's metadata format
/// instead of its metadata document.
pub const METADATA_FORMAT_KEY: &str = "harvester_metadata_format";

#[derive(thiserror::Error, Debug)]
pub enum FilterParseError {
    #[error("Query filter is not valid JSON: {source}")]
    InvalidJson { #[from] source: serde_json::Error },
    #[error("Query filter must be a JSON object, got: {value}")]
    NotAnObject { value: Value },
}

/// Declarative filter over harvested records.
///
/// A filter is a JSON object whose entries are AND-ed together. Keys are
/// dotted paths into the record's metadata document, `$and`/`$or` combinators,
/// or [`METADATA_FORMAT_KEY`]. Values are either matched for equality or hold
/// an operator object with `$eq` or `$in`.
#[derive(Clone, Debug)]
pub struct RecordFilter {
    criteria: serde_json::Map<String, Value>,
}

impl RecordFilter {

    pub fn parse(raw: &str) -> Result<Self, FilterParseError> {
        let value = serde_json::from_str::<Value>(raw)?;
        match value {
            Value::Object(criteria) => Ok(Self { criteria }),
            other => Err(FilterParseError::NotAnObject { value: other }),
        }
    }

    /// Narrows the filter to records stored in one of the given metadata formats.
    pub fn restrict_to_metadata_formats(&mut self, format_ids: Vec<MetadataFormatId>) {
        let ids = format_ids.into_iter()
            .map(|format_id| Value::String(format_id.to_string()))
            .collect::<Vec<_>>();

        let mut condition = serde_json::Map::new();
        condition.insert(String::from("$in"), Value::Array(ids));

        self.criteria.insert(String::from(METADATA_FORMAT_KEY), Value::Object(condition));
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.criteria.iter()
            .all(|(key, condition)| Self::matches_criterion(record, key, condition))
    }

    fn matches_criterion(record: &Record, key: &str, condition: &Value) -> bool {
        match key {
            "$and" => match condition {
                Value::Array(conditions) => conditions.iter()
                    .all(|nested| Self::matches_nested(record, nested)),
                _ => false,
            },
            "$or" => match condition {
                Value::Array(conditions) => conditions.iter()
                    .any(|nested| Self::matches_nested(record, nested)),
                _ => false,
            },
            METADATA_FORMAT_KEY => {
                let actual = Value::String(record.metadata_format_id.to_string());
                Self::value_matches(&actual, condition)
            }
            path => {
                Self::lookup(&record.metadata, path).iter()
                    .any(|actual| Self::value_matches(actual, condition))
            }
        }
    }

    fn matches_nested(record: &Record, nested: &Value) -> bool {
        match nested {
            Value::Object(criteria) => criteria.iter()
                .all(|(key, condition)| Self::matches_criterion(record, key, condition)),
            _ => false,
        }
    }

    fn value_matches(actual: &Value, condition: &Value) -> bool {
        match condition {
            Value::Object(operators) if operators.keys().any(|key| key.starts_with('$')) => {
                operators.iter().all(|(operator, operand)| match operator.as_str() {
                    "$eq" => actual == operand,
                    "$in" => match operand {
                        Value::Array(candidates) => candidates.contains(actual),
                        _ => false,
                    },
                    _ => false,
                })
            }
            expected => actual == expected,
        }
    }

    /// Resolves a dotted path in the metadata document. Arrays along the path
    /// are stepped into, so a path may yield several candidate values.
    fn lookup<'a>(document: &'a Value, path: &str) -> Vec<&'a Value> {
        let mut current = vec![document];

        for segment in path.split('.') {
            let mut next = Vec::new();
            for value in current {
                match value {
                    Value::Object(fields) => {
                        if let Some(value) = fields.get(segment) {
                            next.push(value);
                        }
                    }
                    Value::Array(items) => {
                        for item in items {
                            if let Value::Object(fields) = item {
                                if let Some(value) = fields.get(segment) {
                                    next.push(value);
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
            current = next;
        }

        current.into_iter()
            .flat_map(|value| match value {
                Value::Array(items) => items.iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .collect()
    }
}
