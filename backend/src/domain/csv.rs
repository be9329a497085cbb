//! Minimal quote-aware CSV line splitting.
//!
//! The airports dataset is plain RFC-4180-ish CSV: fields may be wrapped in
//! double quotes to protect embedded commas, and a literal double quote
//! inside a quoted field is encoded as two consecutive double quotes. The
//! exact splitting policy (including the absence of any trimming) is part of
//! the loader contract.

/// Split one CSV line into its fields.
///
/// Quotes toggle "inside quotes" state; a doubled quote while inside quotes
/// decodes to one literal quote. Commas outside quotes delimit fields. No
/// whitespace trimming is performed here; callers trim where their own
/// policy requires it. The accumulated buffer is always appended as the
/// final field, so every line yields at least one field.
///
/// # Examples
/// ```
/// use flightscore::domain::csv::parse_line;
///
/// let fields = parse_line("1,\"Foo, \"\"Bar\"\"\",10.0");
/// assert_eq!(fields, vec!["1", "Foo, \"Bar\"", "10.0"]);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                field.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == ',' && !in_quotes {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(ch);
        }
    }

    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    //! Unit tests for CSV line splitting.

    use rstest::rstest;

    use super::parse_line;

    #[rstest]
    #[case::plain("a,b,c", vec!["a", "b", "c"])]
    #[case::quoted_comma("1,\"Foo, \"\"Bar\"\"\",10.0", vec!["1", "Foo, \"Bar\"", "10.0"])]
    #[case::empty_fields("a,,c", vec!["a", "", "c"])]
    #[case::trailing_delimiter("a,b,", vec!["a", "b", ""])]
    #[case::single_field("alone", vec!["alone"])]
    #[case::empty_line("", vec![""])]
    #[case::whitespace_kept(" a , b ", vec![" a ", " b "])]
    #[case::quoted_only("\"quoted\"", vec!["quoted"])]
    #[case::doubled_quote_is_literal("\"he said \"\"hi\"\"\"", vec!["he said \"hi\""])]
    fn splits_fields(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_line(line), expected);
    }

    #[test]
    fn unterminated_quote_consumes_rest_of_line() {
        assert_eq!(parse_line("a,\"b,c"), vec!["a", "b,c"]);
    }
}
