//! Escaping of the five reserved markup characters.

/// Replacement table; `&` comes first so later replacements are not escaped twice.
const ESCAPES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

/// Escape text for use as XML character data or an attribute value.
pub fn escape(text: &str) -> String {
    ESCAPES
        .iter()
        .fold(text.to_string(), |acc, (raw, entity)| acc.replace(*raw, entity))
}

/// Reverse [`escape`].
///
/// Only the five references produced by `escape` are recognised; any other
/// `&` sequence is left as is.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match ESCAPES.iter().find(|(_, entity)| rest.starts_with(entity)) {
            Some((raw, entity)) => {
                out.push(*raw);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
