//! Quote-aware tokenization of a single CSV line
//!
//! The tokenizer scans one line character by character, maintaining a
//! quote-state flag and an accumulator. Commas inside quotes are literal;
//! a doubled quote inside quotes emits one literal quote.

/// Split a single CSV line into its fields
///
/// Always yields at least one field: the trailing accumulator is pushed
/// even when empty, so `""` tokenizes to one empty field and `"a,"` to
/// two fields. An unterminated quote is silently closed at end of line;
/// quotes never span lines because the caller splits on line boundaries
/// first.
pub fn tokenize_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote: emit one literal quote, consume both
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    // The final accumulator is always a field, even if empty
    fields.push(current);
    fields
}
