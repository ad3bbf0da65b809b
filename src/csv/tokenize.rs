/// Split one CSV line into trimmed field strings.
///
/// A left-to-right scan with an in-quotes flag, toggled on every `"`. A `,`
/// outside quotes ends the current field; everything else, including `,`
/// inside quotes, is accumulated. Quote characters themselves are not
/// emitted. There is no escaped-quote convention: two adjacent quotes are
/// two toggles, not a literal quote. Total: every input yields at least one
/// field, and the final field is emitted even when empty.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
