//! Namespaces used by the provenance graph

/// A vocabulary namespace with its Turtle prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: &'static str,
    pub iri: &'static str,
}

impl Namespace {
    /// Full IRI of a term in this namespace
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.iri, local)
    }

    /// Prefixed name of a term in this namespace
    pub fn compact(&self, local: &str) -> String {
        format!("{}:{}", self.prefix, local)
    }
}

pub const PROV: Namespace = Namespace {
    prefix: "prov",
    iri: "http://www.w3.org/ns/prov#",
};

pub const FOAF: Namespace = Namespace {
    prefix: "foaf",
    iri: "http://xmlns.com/foaf/0.1/",
};

pub const DCTERMS: Namespace = Namespace {
    prefix: "dcterms",
    iri: "http://purl.org/dc/terms/",
};

pub const BIBO: Namespace = Namespace {
    prefix: "bibo",
    iri: "http://purl.org/ontology/bibo/",
};

pub const MEI: Namespace = Namespace {
    prefix: "mei",
    iri: "http://www.music-encoding.org/ns/mei#",
};

pub const XSD: Namespace = Namespace {
    prefix: "xsd",
    iri: "http://www.w3.org/2001/XMLSchema#",
};

/// `rdf:type`, written as `a` in Turtle
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// The preamble prefixes, in output order
pub const PREFIXES: [Namespace; 6] = [PROV, FOAF, DCTERMS, BIBO, MEI, XSD];
