/*!
 * Process Table
 * Caller-ordered raw process rows and their decoding from JSON-shaped input
 */

use super::types::ProcessSpec;
use super::validation::field;
use crate::core::errors::{SchedError, SchedResult};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Raw process table in caller order
///
/// Deserializes from either a JSON object keyed by process id or an array of
/// `{"id", "arrival", "burst", "priority"}` rows. Object keys are kept in
/// document order and duplicates are preserved so validation can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessTable {
    entries: Vec<(String, ProcessSpec)>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, keeping insertion order
    pub fn insert(&mut self, id: impl Into<String>, spec: ProcessSpec) -> &mut Self {
        self.entries.push((id.into(), spec));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProcessSpec)> {
        self.entries.iter().map(|(id, spec)| (id.as_str(), spec))
    }
}

impl<S: Into<String>> FromIterator<(S, ProcessSpec)> for ProcessTable {
    fn from_iter<I: IntoIterator<Item = (S, ProcessSpec)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(id, spec)| (id.into(), spec)).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for ProcessTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawTable::deserialize(deserializer)?
            .decode()
            .map_err(de::Error::custom)
    }
}

impl Serialize for ProcessTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, spec) in &self.entries {
            map.serialize_entry(id, spec)?;
        }
        map.end()
    }
}

#[derive(Debug)]
enum RawRow {
    Keyed(String, Value),
    Listed(Value),
}

/// Process rows whose fields have not been type-checked yet
///
/// Decoding is deferred so a wrongly typed field is reported by its path
/// rather than by a parser position.
#[derive(Debug)]
pub(crate) struct RawTable {
    rows: Vec<RawRow>,
}

impl RawTable {
    pub(crate) fn decode(self) -> SchedResult<ProcessTable> {
        self.rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| match row {
                RawRow::Keyed(id, value) => decode_spec(&id, value).map(|spec| (id, spec)),
                RawRow::Listed(value) => decode_row(index, value),
            })
            .collect()
    }
}

struct RawTableVisitor;

impl<'de> Visitor<'de> for RawTableVisitor {
    type Value = RawTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of process id to {arrival, burst, priority} or a list of process rows")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut rows = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((id, value)) = map.next_entry::<String, Value>()? {
            rows.push(RawRow::Keyed(id, value));
        }
        Ok(RawTable { rows })
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut rows = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<Value>()? {
            rows.push(RawRow::Listed(value));
        }
        Ok(RawTable { rows })
    }
}

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawTableVisitor)
    }
}

/// Signed integer at `path`; floats, strings and out-of-range numbers are rejected
pub(crate) fn decode_integer(path: &str, value: &Value) -> SchedResult<i64> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| {
            let reason = if n.is_f64() {
                format!("expected an integer, got {}", n)
            } else {
                format!("{} does not fit in a signed 64-bit integer", n)
            };
            SchedError::invalid(path, reason)
        }),
        other => Err(SchedError::invalid(
            path,
            format!("expected an integer, got {}", other),
        )),
    }
}

fn decode_row(index: usize, value: Value) -> SchedResult<(String, ProcessSpec)> {
    let path = format!("processes[{}]", index);
    let Value::Object(mut fields) = value else {
        return Err(SchedError::invalid(path, "expected a process row object"));
    };

    let id = match fields.remove("id") {
        Some(Value::String(id)) => id,
        Some(other) => {
            return Err(SchedError::invalid(
                format!("{}.id", path),
                format!("expected a string, got {}", other),
            ))
        }
        None => return Err(SchedError::invalid(format!("{}.id", path), "missing")),
    };

    let spec = decode_spec(&id, Value::Object(fields))?;
    Ok((id, spec))
}

fn decode_spec(id: &str, value: Value) -> SchedResult<ProcessSpec> {
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(SchedError::invalid(
                format!("processes.{}", id),
                format!("expected an object with arrival and burst, got {}", other),
            ))
        }
    };

    let mut arrival = None;
    let mut burst = None;
    let mut priority = None;

    for (name, value) in &fields {
        let path = field(id, name);
        match name.as_str() {
            "arrival" => arrival = Some(decode_integer(&path, value)?),
            "burst" => burst = Some(decode_integer(&path, value)?),
            "priority" if value.is_null() => {}
            "priority" => priority = Some(decode_integer(&path, value)?),
            _ => return Err(SchedError::invalid(path, "unknown field")),
        }
    }

    let arrival = arrival.ok_or_else(|| SchedError::invalid(field(id, "arrival"), "missing"))?;
    let burst = burst.ok_or_else(|| SchedError::invalid(field(id, "burst"), "missing"))?;

    Ok(ProcessSpec {
        arrival,
        burst,
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(json: &str) -> SchedResult<ProcessTable> {
        serde_json::from_str::<RawTable>(json).unwrap().decode()
    }

    #[test]
    fn test_table_keeps_document_order() {
        let json = r#"{"P3": {"arrival": 2, "burst": 8},
                       "P1": {"arrival": 0, "burst": 5},
                       "P2": {"arrival": 1, "burst": 3, "priority": 2}}"#;
        let table: ProcessTable = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["P3", "P1", "P2"]);
        assert_eq!(table.iter().nth(2).unwrap().1.priority, Some(2));
    }

    #[test]
    fn test_table_from_value_keeps_insertion_order() {
        let value = json!({"late": {"arrival": 3, "burst": 1}, "early": {"arrival": 0, "burst": 2}});
        let table: ProcessTable = serde_json::from_value(value).unwrap();
        let ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["late", "early"]);
    }

    #[test]
    fn test_table_keeps_duplicate_keys() {
        let json = r#"{"A": {"arrival": 0, "burst": 1}, "A": {"arrival": 1, "burst": 1}}"#;
        let table = decode(json).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_table_from_rows() {
        let json = r#"[{"id": "x", "arrival": 4, "burst": 1},
                       {"id": "y", "arrival": 0, "burst": 2, "priority": -3}]"#;
        let table = decode(json).unwrap();
        let rows: Vec<(&str, &ProcessSpec)> = table.iter().collect();
        assert_eq!(rows[0], ("x", &ProcessSpec::new(4, 1)));
        assert_eq!(rows[1], ("y", &ProcessSpec::new(0, 2).with_priority(-3)));
    }

    #[test]
    fn test_wrongly_typed_fields_name_their_path() {
        let cases = [
            (r#"{"A": {"arrival": 0.5, "burst": 1}}"#, "processes.A.arrival"),
            (r#"{"A": {"arrival": 0, "burst": "3"}}"#, "processes.A.burst"),
            (r#"{"A": {"arrival": 0, "burst": 1, "priority": 1.5}}"#, "processes.A.priority"),
            (r#"{"A": {"arrival": 18446744073709551615, "burst": 1}}"#, "processes.A.arrival"),
            (r#"{"A": {"burst": 1}}"#, "processes.A.arrival"),
            (r#"{"A": {"arrival": 0, "burst": 1, "nice": 2}}"#, "processes.A.nice"),
            (r#"{"A": 7}"#, "processes.A"),
            (r#"[{"arrival": 0, "burst": 1}]"#, "processes[0].id"),
            (r#"[{"id": "B", "arrival": 0, "burst": 1}, 4]"#, "processes[1]"),
        ];

        for (json, path) in cases {
            let err = decode(json).unwrap_err();
            assert_eq!(err.field(), Some(path), "input: {}", json);
        }
    }

    #[test]
    fn test_null_priority_is_absent() {
        let table = decode(r#"{"A": {"arrival": 0, "burst": 1, "priority": null}}"#).unwrap();
        assert_eq!(table.iter().next().unwrap().1.priority, None);
    }

    #[test]
    fn test_table_built_in_code() {
        let mut table: ProcessTable = [("A", ProcessSpec::new(0, 2))].into_iter().collect();
        table.insert("B", ProcessSpec::new(1, 1).with_priority(4));

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"A":{"arrival":0,"burst":2},"B":{"arrival":1,"burst":1,"priority":4}}"#
        );
        assert_eq!(serde_json::from_str::<ProcessTable>(&json).unwrap(), table);
    }
}
