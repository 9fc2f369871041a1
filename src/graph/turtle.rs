//! Turtle serialization of statement lists

use super::statement::{Literal, LiteralTag, Object, Predicate, Statement};
use super::vocab::{Namespace, PREFIXES};
use crate::ident::escape_literal;

/// Writes statements as Turtle with a fixed prefix preamble.
///
/// Consecutive statements sharing a subject are grouped into one block.
/// Every literal goes through [`escape_literal`].
#[derive(Debug, Clone)]
pub struct TurtleWriter {
    prefixes: Vec<Namespace>,
}

impl Default for TurtleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurtleWriter {
    pub fn new() -> Self {
        Self {
            prefixes: PREFIXES.to_vec(),
        }
    }

    /// The `@prefix` lines
    pub fn preamble(&self) -> String {
        self.prefixes
            .iter()
            .map(|ns| format!("@prefix {}: <{}> .\n", ns.prefix, ns.iri))
            .collect()
    }

    /// Serialize a full document: preamble, blank line, statements
    pub fn write(&self, statements: &[Statement]) -> String {
        let mut out = self.preamble();
        out.push('\n');
        out.push_str(&self.write_statements(statements));
        out
    }

    /// Serialize statements only, without the preamble
    pub fn write_statements(&self, statements: &[Statement]) -> String {
        let mut out = String::new();
        let mut current: Option<&str> = None;

        for st in statements {
            match current {
                Some(subject) if subject == st.subject() => out.push_str(" ;\n    "),
                Some(_) => {
                    out.push_str(" .\n");
                    out.push_str(&format_resource(st.subject()));
                    out.push(' ');
                }
                None => {
                    out.push_str(&format_resource(st.subject()));
                    out.push(' ');
                }
            }
            out.push_str(&format_predicate(st.predicate()));
            out.push(' ');
            out.push_str(&format_object(st.object()));
            current = Some(st.subject());
        }

        if current.is_some() {
            out.push_str(" .\n");
        }
        out
    }
}

fn format_resource(iri: &str) -> String {
    format!("<{}>", iri)
}

fn format_predicate(predicate: Predicate) -> String {
    match predicate.term() {
        Some((ns, local)) => ns.compact(local),
        None => "a".to_string(),
    }
}

fn format_object(object: &Object) -> String {
    match object {
        Object::Iri(iri) => format_resource(iri),
        Object::Class(class) => {
            let (ns, local) = class.term();
            ns.compact(local)
        }
        Object::Literal(lit) => format_literal(lit),
    }
}

fn format_literal(lit: &Literal) -> String {
    let quoted = format!("\"{}\"", escape_literal(&lit.value));
    match &lit.tag {
        LiteralTag::Plain => quoted,
        LiteralTag::Lang(lang) => match language_tag(lang) {
            Some(tag) => format!("{}@{}", quoted, tag),
            None => quoted,
        },
        LiteralTag::Typed(datatype) => {
            let (ns, local) = datatype.term();
            format!("{}^^{}", quoted, ns.compact(local))
        }
    }
}

/// A tag usable after `@`: letters first, then `-`-separated alphanumeric
/// subtags. Runs of other characters become a single `-`; `None` when
/// nothing valid is left.
fn language_tag(raw: &str) -> Option<String> {
    let subtags: Vec<&str> = raw
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect();
    let first = subtags.first()?;
    if !first.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(subtags.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Class, Datatype};

    #[test]
    fn test_preamble_has_six_prefixes_then_blank_line() {
        let out = TurtleWriter::new().write(&[]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[..6].iter().all(|l| l.starts_with("@prefix ")));
        assert_eq!(lines[0], "@prefix prov: <http://www.w3.org/ns/prov#> .");
        assert_eq!(lines[5], "@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .");
        assert_eq!(lines[6], "");
    }

    #[test]
    fn test_groups_consecutive_subjects() {
        let statements = vec![
            Statement::typed_as("mei:agent/a", Class::Person),
            Statement::literal("mei:agent/a", Predicate::GivenName, Literal::plain("Johann")),
            Statement::link("mei:work/w", Predicate::Creator, "mei:agent/a"),
        ];
        let out = TurtleWriter::new().write_statements(&statements);
        assert_eq!(
            out,
            "<mei:agent/a> a foaf:Person ;\n    foaf:givenName \"Johann\" .\n\
             <mei:work/w> dcterms:creator <mei:agent/a> .\n"
        );
    }

    #[test]
    fn test_literal_forms() {
        let statements = vec![
            Statement::literal("s", Predicate::Title, Literal::lang("Mass", "main")),
            Statement::literal("s", Predicate::Issued, Literal::typed("1733", Datatype::GYear)),
            Statement::literal("s", Predicate::Description, Literal::plain("a \"b\"\nc")),
        ];
        let out = TurtleWriter::new().write_statements(&statements);
        assert!(out.contains("dcterms:title \"Mass\"@main"));
        assert!(out.contains("dcterms:issued \"1733\"^^xsd:gYear"));
        assert!(out.contains("dcterms:description \"a \\\"b\\\"\\nc\""));
    }

    #[test]
    fn test_language_tag_sanitized() {
        let statements = vec![
            Statement::literal("s", Predicate::Title, Literal::lang("A", "uniform title")),
            Statement::literal("s", Predicate::Title, Literal::lang("B", "alt_2")),
            Statement::literal("s", Predicate::Title, Literal::lang("C", "2nd")),
            Statement::literal("s", Predicate::Title, Literal::lang("D", "???")),
        ];
        let out = TurtleWriter::new().write_statements(&statements);
        assert!(out.contains("dcterms:title \"A\"@uniform-title"));
        assert!(out.contains("dcterms:title \"B\"@alt-2"));
        assert!(out.contains("dcterms:title \"C\" ;"));
        assert!(out.contains("dcterms:title \"D\" ."));
    }

    #[test]
    fn test_subject_revisited_opens_new_block() {
        let statements = vec![
            Statement::typed_as("a", Class::Entity),
            Statement::typed_as("b", Class::Entity),
            Statement::literal("a", Predicate::Name, Literal::plain("x")),
        ];
        let out = TurtleWriter::new().write_statements(&statements);
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|l| l.ends_with(" .")));
    }
}
