use chrono::{TimeZone, Utc};
use sheetfeed::{RawRow, Timestamp, normalize};

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs.iter().copied().collect()
}

#[test]
fn bare_domain_gets_https_scheme() {
    let article = normalize(&row(&[("Headline", "A"), ("URL", "example.com")]));
    assert_eq!(article.link.unwrap().as_str(), "https://example.com/");
}

#[test]
fn existing_scheme_is_left_alone() {
    let article = normalize(&row(&[("Headline", "A"), ("URL", "http://example.com/x")]));
    assert_eq!(article.link.unwrap().as_str(), "http://example.com/x");
}

#[test]
fn stray_csv_quotes_are_stripped_from_links() {
    let article = normalize(&row(&[("Headline", "A"), ("URL", "\"example.com/story\"")]));
    assert_eq!(
        article.link.unwrap().as_str(),
        "https://example.com/story"
    );
}

#[test]
fn empty_or_unparsable_url_degrades_to_no_link() {
    let empty = normalize(&row(&[("Headline", "A"), ("URL", "")]));
    assert!(empty.link.is_none());

    let junk = normalize(&row(&[("Headline", "A"), ("URL", "not a url")]));
    assert!(junk.link.is_none());

    let absent = normalize(&row(&[("Headline", "A")]));
    assert!(absent.link.is_none());
}

#[test]
fn image_url_is_normalized_like_the_link() {
    let article = normalize(&row(&[
        ("Headline", "A"),
        ("Image URL", "example.com/img/a.jpg"),
    ]));
    assert_eq!(
        article.image.unwrap().as_str(),
        "https://example.com/img/a.jpg"
    );
}

#[test]
fn rfc3339_published_time_parses_to_an_instant() {
    let article = normalize(&row(&[
        ("Headline", "A"),
        ("Published Time", "2025-06-05T15:42:00Z"),
    ]));
    assert_eq!(
        article.published,
        Timestamp::Valid(Utc.with_ymd_and_hms(2025, 6, 5, 15, 42, 0).unwrap())
    );
}

#[test]
fn naive_spreadsheet_datetime_is_taken_as_utc() {
    let article = normalize(&row(&[
        ("Headline", "A"),
        ("Published Time", "2025-06-05 15:42:00"),
    ]));
    assert_eq!(
        article.published,
        Timestamp::Valid(Utc.with_ymd_and_hms(2025, 6, 5, 15, 42, 0).unwrap())
    );
}

#[test]
fn date_only_value_parses_to_midnight() {
    let article = normalize(&row(&[("Headline", "A"), ("Published Time", "2025-06-05")]));
    assert_eq!(
        article.published,
        Timestamp::Valid(Utc.with_ymd_and_hms(2025, 6, 5, 0, 0, 0).unwrap())
    );
}

#[test]
fn unparsable_published_time_is_invalid_and_keeps_the_raw_text() {
    let article = normalize(&row(&[
        ("Headline", "A"),
        ("Published Time", "next Tuesday"),
    ]));
    assert_eq!(article.published, Timestamp::Invalid("next Tuesday".into()));
}

#[test]
fn absent_published_time_is_unknown_not_invalid() {
    let absent = normalize(&row(&[("Headline", "A")]));
    assert_eq!(absent.published, Timestamp::Unknown);

    let blank = normalize(&row(&[("Headline", "A"), ("Published Time", "   ")]));
    assert_eq!(blank.published, Timestamp::Unknown);
}

#[test]
fn optional_text_fields_collapse_blank_to_absent() {
    let article = normalize(&row(&[
        ("Headline", "  Spaced headline  "),
        ("Summary", "   "),
        ("Tickers", ""),
    ]));
    assert_eq!(article.headline, "Spaced headline");
    assert!(article.summary.is_none());
    assert!(article.tickers.is_none());
}

#[test]
fn unrecognized_columns_are_dropped_silently() {
    let article = normalize(&row(&[("Headline", "A"), ("Mood", "bullish")]));
    assert_eq!(article.headline, "A");
}
