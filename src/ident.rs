//! Identifier and literal helpers
//!
//! Slugs for resource IRIs, IRI construction from a base, and escaping of
//! text for Turtle string literals.

/// Reduce free text to a lower-case slug.
///
/// Keeps word characters (Unicode letters, digits, underscore), whitespace and
/// hyphens; trims; collapses each whitespace run to one underscore.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

/// `base` + `/` + slug of `identifier`, or `base` itself for an empty identifier.
pub fn build_uri(base: &str, identifier: &str) -> String {
    if identifier.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), slugify(identifier))
}

/// `base` + `/` + `local_id` kept verbatim, for identifiers taken from the
/// document itself. Characters Turtle forbids inside `<...>` are
/// percent-encoded; nothing else changes, so distinct ids stay distinct.
pub fn local_uri(base: &str, local_id: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), encode_iri_segment(local_id))
}

fn encode_iri_segment(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for c in id.chars() {
        match c {
            '%' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                out.push_str(&format!("%{:02X}", c as u32));
            }
            c if (c as u32) <= 0x20 => out.push_str(&format!("%{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Escape text for use inside a double-quoted Turtle literal.
///
/// Backslashes go first so the escapes added afterwards are not doubled.
pub fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// The id of a local fragment reference (`#id`), if `value` is one.
pub fn fragment_ref(value: &str) -> Option<&str> {
    value.strip_prefix('#').filter(|id| !id.is_empty())
}
