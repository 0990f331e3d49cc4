// Query-string value encoding. Free-text search terms reach the wire
// verbatim otherwise, and a value containing `&`, `=` or `#` would split
// into bogus parameters or truncate the query.

/// Percent-encode one query-string value, matching `encodeURIComponent`
/// semantics (unreserved: alphanumerics and `- _ . ! ~ * ' ( )`).
#[cfg(target_arch = "wasm32")]
pub fn encode_query_value(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(encode_query_value("Congress-2024_v1.0"), "Congress-2024_v1.0");
    }

    #[test]
    fn separators_and_spaces_are_escaped() {
        assert_eq!(
            encode_query_value("ear, nose & throat"),
            "ear%2C%20nose%20%26%20throat"
        );
        assert_eq!(encode_query_value("a=b#c"), "a%3Db%23c");
    }

    #[test]
    fn multibyte_input_encodes_every_byte() {
        assert_eq!(encode_query_value("café"), "caf%C3%A9");
    }
}
