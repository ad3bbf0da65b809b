use std::collections::HashMap;

use crate::csv::tokenize;

/// One CSV data line, mapped from header name to field value.
///
/// Keys are the trimmed header names from the first non-empty line of the
/// document, used verbatim — including names with embedded spaces such as
/// `"Published Time"`. Every row produced by [`parse`] has exactly as many
/// entries as there are headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow(HashMap<String, String>);

impl RawRow {
    /// An empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one header/value pair, replacing any previous value.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.0.insert(header.into(), value.into());
    }

    /// Look up a field by header name.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&str> {
        self.0.get(header).map(String::as_str)
    }

    /// Number of columns in this row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parse a full CSV document into rows keyed by its header line.
///
/// Lines are split on `\n`; lines blank after trimming are dropped. The
/// first surviving line is the header. Each later line is kept only when
/// its tokenized field count equals the header count; anything else is
/// dropped whole — a row is never padded or partially kept. Output order
/// matches input order.
///
/// Quoted fields containing embedded newlines are outside the accepted
/// dialect and will be misread as two lines.
#[must_use]
pub fn parse(document: &str) -> Vec<RawRow> {
    let mut lines = document.lines().filter(|l| !l.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = tokenize(header_line)
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for line in lines {
        let fields = tokenize(line);
        if fields.len() != headers.len() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                expected = headers.len(),
                got = fields.len(),
                "dropping malformed csv row"
            );
            continue;
        }
        rows.push(headers.iter().cloned().zip(fields).collect());
    }

    rows
}
