//! Typed graph statements

use super::vocab::{Namespace, BIBO, DCTERMS, FOAF, PROV, RDF_TYPE, XSD};

/// Predicates the provenance mapper can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `rdf:type`
    Type,
    /// `dcterms:type`
    DcType,
    Title,
    Creator,
    Contributor,
    Publisher,
    Issued,
    Identifier,
    IdentifierType,
    Description,
    /// `bibo:edition`, links a work to its edition
    Edition,
    /// `dcterms:edition`, the edition number literal
    EditionNumber,
    Source,
    HadRole,
    WasAssociatedWith,
    Used,
    Generated,
    StartedAtTime,
    EndedAtTime,
    IsPartOf,
    Created,
    Spatial,
    GivenName,
    FamilyName,
    Name,
    Version,
}

impl Predicate {
    /// Namespace and local name; `None` for `rdf:type`
    pub fn term(&self) -> Option<(Namespace, &'static str)> {
        let term = match self {
            Predicate::Type => return None,
            Predicate::DcType => (DCTERMS, "type"),
            Predicate::Title => (DCTERMS, "title"),
            Predicate::Creator => (DCTERMS, "creator"),
            Predicate::Contributor => (DCTERMS, "contributor"),
            Predicate::Publisher => (DCTERMS, "publisher"),
            Predicate::Issued => (DCTERMS, "issued"),
            Predicate::Identifier => (DCTERMS, "identifier"),
            Predicate::IdentifierType => (DCTERMS, "identifierType"),
            Predicate::Description => (DCTERMS, "description"),
            Predicate::Edition => (BIBO, "edition"),
            Predicate::EditionNumber => (DCTERMS, "edition"),
            Predicate::Source => (DCTERMS, "source"),
            Predicate::HadRole => (PROV, "hadRole"),
            Predicate::WasAssociatedWith => (PROV, "wasAssociatedWith"),
            Predicate::Used => (PROV, "used"),
            Predicate::Generated => (PROV, "generated"),
            Predicate::StartedAtTime => (PROV, "startedAtTime"),
            Predicate::EndedAtTime => (PROV, "endedAtTime"),
            Predicate::IsPartOf => (DCTERMS, "isPartOf"),
            Predicate::Created => (DCTERMS, "created"),
            Predicate::Spatial => (DCTERMS, "spatial"),
            Predicate::GivenName => (FOAF, "givenName"),
            Predicate::FamilyName => (FOAF, "familyName"),
            Predicate::Name => (FOAF, "name"),
            Predicate::Version => (DCTERMS, "version"),
        };
        Some(term)
    }

    /// Full predicate IRI
    pub fn iri(&self) -> String {
        match self.term() {
            Some((ns, local)) => ns.term(local),
            None => RDF_TYPE.to_string(),
        }
    }
}

/// Classes used as `rdf:type` objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Entity,
    Activity,
    SoftwareAgent,
    Person,
    Organization,
    Document,
}

impl Class {
    pub fn term(&self) -> (Namespace, &'static str) {
        match self {
            Class::Entity => (PROV, "Entity"),
            Class::Activity => (PROV, "Activity"),
            Class::SoftwareAgent => (PROV, "SoftwareAgent"),
            Class::Person => (FOAF, "Person"),
            Class::Organization => (FOAF, "Organization"),
            Class::Document => (BIBO, "Document"),
        }
    }
}

/// XSD datatypes for typed literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datatype {
    Date,
    DateTime,
    GYear,
}

impl Datatype {
    pub fn term(&self) -> (Namespace, &'static str) {
        match self {
            Datatype::Date => (XSD, "date"),
            Datatype::DateTime => (XSD, "dateTime"),
            Datatype::GYear => (XSD, "gYear"),
        }
    }
}

/// Language tag or datatype carried by a literal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralTag {
    Plain,
    Lang(String),
    Typed(Datatype),
}

/// A literal object. The value is stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub value: String,
    pub tag: LiteralTag,
}

impl Literal {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tag: LiteralTag::Plain,
        }
    }

    pub fn lang(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tag: LiteralTag::Lang(lang.into()),
        }
    }

    pub fn typed(value: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            value: value.into(),
            tag: LiteralTag::Typed(datatype),
        }
    }
}

/// Statement object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    /// A resource IRI
    Iri(String),
    /// A vocabulary class
    Class(Class),
    Literal(Literal),
}

/// One subject-predicate-object assertion
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    subject: String,
    predicate: Predicate,
    object: Object,
}

impl Statement {
    pub fn new(subject: impl Into<String>, predicate: Predicate, object: Object) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object,
        }
    }

    /// `subject a class`
    pub fn typed_as(subject: impl Into<String>, class: Class) -> Self {
        Self::new(subject, Predicate::Type, Object::Class(class))
    }

    /// Link between two resources
    pub fn link(subject: impl Into<String>, predicate: Predicate, target: impl Into<String>) -> Self {
        Self::new(subject, predicate, Object::Iri(target.into()))
    }

    pub fn literal(subject: impl Into<String>, predicate: Predicate, literal: Literal) -> Self {
        Self::new(subject, predicate, Object::Literal(literal))
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn predicate(&self) -> Predicate {
        self.predicate
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    /// The literal value, if the object is a literal
    pub fn literal_value(&self) -> Option<&str> {
        match &self.object {
            Object::Literal(lit) => Some(&lit.value),
            _ => None,
        }
    }

    /// The target IRI, if the object is a resource
    pub fn target(&self) -> Option<&str> {
        match &self.object {
            Object::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}
