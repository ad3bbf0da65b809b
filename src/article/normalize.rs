use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use url::Url;

use crate::article::model::{Article, Timestamp};
use crate::csv::RawRow;

/// Recognized header names. Case- and space-sensitive, order-independent;
/// any other columns in the row are ignored.
const COL_HEADLINE: &str = "Headline";
const COL_SUMMARY: &str = "Summary";
const COL_URL: &str = "URL";
const COL_PUBLISHED: &str = "Published Time";
const COL_TICKERS: &str = "Tickers";
const COL_IMAGE: &str = "Image URL";

/// Naive spreadsheet date/time shapes accepted after RFC 3339/2822 fail.
const NAIVE_DATETIME_FMTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];
const NAIVE_DATE_FMTS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Convert one raw row into an [`Article`].
///
/// Total by design: no field can fail the row. Bad URLs degrade to "no
/// link", bad dates to [`Timestamp::Invalid`], missing optional fields to
/// their absent sentinels. A spreadsheet full of dirty data still renders
/// everything it can.
///
/// The headline may come back blank; excluding such rows is the pipeline's
/// job, not the normalizer's.
#[must_use]
pub fn normalize(row: &RawRow) -> Article {
    Article {
        headline: field(row, COL_HEADLINE).unwrap_or_default(),
        summary: field(row, COL_SUMMARY),
        link: field(row, COL_URL).and_then(|s| normalize_link(&s)),
        published: normalize_published(row.get(COL_PUBLISHED)),
        tickers: field(row, COL_TICKERS),
        image: field(row, COL_IMAGE).and_then(|s| normalize_link(&s)),
    }
}

/// Trimmed field value; empty and absent collapse to `None`.
fn field(row: &RawRow, header: &str) -> Option<String> {
    let value = row.get(header)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Repair and validate a link field.
///
/// Strips one leading and one trailing literal `"` (defensive against
/// unstripped CSV quoting), prepends `https://` when no scheme prefix is
/// present, then parses as an absolute URL. Any failure degrades to `None`.
fn normalize_link(raw: &str) -> Option<Url> {
    let mut s = raw.trim();
    s = s.strip_prefix('"').unwrap_or(s);
    s = s.strip_suffix('"').unwrap_or(s);
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let candidate = if s.starts_with("http://") || s.starts_with("https://") {
        s.to_string()
    } else {
        format!("https://{s}")
    };

    Url::parse(&candidate).ok()
}

/// Parse a published-time field into a [`Timestamp`].
///
/// Empty/absent is `Unknown`; present but unparsable is `Invalid` with the
/// raw text retained. Naive values (no offset) are taken as UTC.
fn normalize_published(raw: Option<&str>) -> Timestamp {
    let Some(raw) = raw else {
        return Timestamp::Unknown;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Timestamp::Unknown;
    }

    match parse_instant(trimmed) {
        Some(dt) => Timestamp::Valid(dt),
        None => Timestamp::Invalid(trimmed.to_string()),
    }
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FMTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    for fmt in NAIVE_DATE_FMTS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}
