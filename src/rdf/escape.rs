//! N-Triples escaping for IRIs, blank node labels, and literal strings

use std::fmt::{self, Write};

/// Write an IRI body, escaping characters IRIREF does not allow as `\uXXXX`
pub(crate) fn write_iri(f: &mut impl Write, iri: &str) -> fmt::Result {
    for c in iri.chars() {
        match c {
            '\u{00}'..='\u{20}' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                write!(f, "\\u{:04X}", c as u32)?
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Write a literal's lexical form inside double quotes
pub(crate) fn write_quoted(f: &mut impl Write, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0C}' => f.write_str("\\f")?,
            '\u{00}'..='\u{1F}' | '\u{7F}' => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Marker of hex-encoded blank node labels
const ENCODED_MARKER: &str = "x-";

/// Labels written as-is: an ASCII subset of N-Triples `BLANK_NODE_LABEL`
/// that never starts with the encoding marker.
fn is_plain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last)) => {
            (first.is_ascii_alphanumeric() || first == b'_')
                && last != b'.'
                && bytes
                    .iter()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
                && !label.starts_with(ENCODED_MARKER)
        }
        _ => false,
    }
}

/// Write a blank node label after `_:`
///
/// Anything that is not a plain label is hex-encoded behind the `x-`
/// marker. Plain labels never start with the marker, so two identifiers
/// never render the same label and [`decode_blank_label`] inverts this.
pub(crate) fn write_blank_label(f: &mut impl Write, label: &str) -> fmt::Result {
    if is_plain_label(label) {
        return f.write_str(label);
    }
    f.write_str(ENCODED_MARKER)?;
    for b in label.bytes() {
        write!(f, "{:02x}", b)?;
    }
    Ok(())
}

struct BlankLabel<'a>(&'a str);

impl fmt::Display for BlankLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_blank_label(f, self.0)
    }
}

/// Blank node label as a standalone string
pub(crate) fn blank_label(label: &str) -> String {
    BlankLabel(label).to_string()
}

/// Identifier behind a label written by [`write_blank_label`]
///
/// Labels without the marker, or whose payload is not hex-encoded UTF-8,
/// are foreign and kept verbatim.
pub(crate) fn decode_blank_label(label: &str) -> String {
    label
        .strip_prefix(ENCODED_MARKER)
        .and_then(decode_hex)
        .unwrap_or_else(|| label.to_string())
}

fn decode_hex(hex: &str) -> Option<String> {
    if hex.len() % 2 != 0 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect::<Option<Vec<u8>>>()?;
    String::from_utf8(bytes).ok()
}
