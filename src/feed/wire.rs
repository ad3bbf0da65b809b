use serde_json::Value;

use crate::core::FeedError;
use crate::csv::RawRow;

/// Map a JSON feed body onto the same row shape the CSV parser produces.
///
/// The latest revision of the publishing script returns a top-level array
/// of objects keyed by the spreadsheet's header names. Scalar values are
/// stringified; `null` becomes the empty string, which the normalizer
/// already treats as absent. Non-object array entries are dropped the same
/// way malformed CSV rows are.
pub(crate) fn rows_from_json(body: &str) -> Result<Vec<RawRow>, FeedError> {
    let values: Vec<Value> = serde_json::from_str(body)?;

    let mut rows = Vec::with_capacity(values.len());
    for value in values {
        let Value::Object(map) = value else {
            #[cfg(feature = "tracing")]
            tracing::warn!("dropping non-object feed entry");
            continue;
        };
        let mut row = RawRow::new();
        for (header, v) in map {
            row.insert(header, scalar_to_string(&v));
        }
        rows.push(row);
    }

    Ok(rows)
}

fn scalar_to_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
