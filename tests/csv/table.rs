use sheetfeed::csv::parse;

const DOC: &str = "\
Headline,Summary,Published Time
First,Something happened,2025-01-01T00:00:00Z
Short row,only two
Second,\"More, with a comma\",2025-01-02T00:00:00Z
";

#[test]
fn header_only_document_yields_no_rows() {
    assert!(parse("Headline,Summary,URL\n").is_empty());
}

#[test]
fn empty_document_yields_no_rows() {
    assert!(parse("").is_empty());
    assert!(parse("\n  \n\n").is_empty());
}

#[test]
fn mismatched_field_count_drops_only_that_row() {
    let rows = parse(DOC);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("Headline"), Some("First"));
    assert_eq!(rows[1].get("Headline"), Some("Second"));
    assert_eq!(rows[1].get("Summary"), Some("More, with a comma"));
}

#[test]
fn rows_keep_input_order() {
    let rows = parse("H\nb\na\nc\n");
    let names: Vec<_> = rows.iter().map(|r| r.get("H").unwrap()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn header_names_with_spaces_are_verbatim_keys() {
    let rows = parse("Published Time,Image URL\n2025-01-01,pic.example.com\n");
    assert_eq!(rows[0].get("Published Time"), Some("2025-01-01"));
    assert_eq!(rows[0].get("Image URL"), Some("pic.example.com"));
    assert_eq!(rows[0].get("published time"), None);
}

#[test]
fn blank_lines_are_skipped_anywhere() {
    let rows = parse("H,V\n\na,1\n   \nb,2\n");
    assert_eq!(rows.len(), 2);
}

#[test]
fn every_row_has_exactly_the_header_columns() {
    for row in parse(DOC) {
        assert_eq!(row.len(), 3);
    }
}

#[test]
fn unrecognized_columns_are_preserved_in_the_row() {
    let rows = parse("Headline,Mystery Column\nA,42\n");
    assert_eq!(rows[0].get("Mystery Column"), Some("42"));
}
