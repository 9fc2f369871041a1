//! Tree normalizer: markup element to a generic structured value
//!
//! The value mirrors the element tree the way a JSON document would:
//! text-only elements collapse to strings, everything else becomes an object
//! with reserved `@attributes` and `#text` keys next to the child groups.
//!
//! Only an element's leading text is captured. Text between children (the
//! children's tails) is not reattached, so the conversion is lossy for mixed
//! content.

use crate::tree::TreeNode;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Reserved key for an element's attributes
pub const ATTRIBUTES_KEY: &str = "@attributes";

/// Reserved key for text appearing next to attributes or children
pub const TEXT_KEY: &str = "#text";

/// A normalized element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredValue {
    /// Text-only element
    String(String),
    /// Element with attributes, children or both (possibly empty)
    Node(NodeValue),
}

/// Object form of a normalized element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeValue {
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Child groups keyed by tag, in first-seen order
    pub children: Vec<(String, Member)>,
    pub text: Option<String>,
}

/// The value stored under one child tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// The tag occurs once among the siblings
    One(StructuredValue),
    /// The tag recurs; all occurrences in document order
    Many(Vec<StructuredValue>),
}

impl NodeValue {
    /// True for the present-but-empty element `{}`
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty() && self.text.is_none()
    }

    /// Look up a child group by tag
    pub fn get(&self, tag: &str) -> Option<&Member> {
        self.children.iter().find(|(t, _)| t == tag).map(|(_, m)| m)
    }
}

impl StructuredValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StructuredValue::String(s) => Some(s),
            StructuredValue::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&NodeValue> {
        match self {
            StructuredValue::Node(n) => Some(n),
            StructuredValue::String(_) => None,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Member {
    pub fn len(&self) -> usize {
        match self {
            Member::One(_) => 1,
            Member::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the occurrences in document order
    pub fn iter(&self) -> impl Iterator<Item = &StructuredValue> {
        let values: &[StructuredValue] = match self {
            Member::One(value) => std::slice::from_ref(value),
            Member::Many(values) => values,
        };
        values.iter()
    }
}

/// Convert an element into its structured value. Never fails.
pub fn normalize(node: &TreeNode) -> StructuredValue {
    let text = node.text.trim();

    if node.is_leaf() {
        if text.is_empty() {
            return StructuredValue::Node(NodeValue::default());
        }
        return StructuredValue::String(text.to_string());
    }

    let mut value = NodeValue {
        attributes: node.attributes.clone(),
        ..Default::default()
    };

    let mut groups: Vec<(String, Vec<StructuredValue>)> = Vec::new();
    for child in &node.children {
        let normalized = normalize(child);
        match groups.iter_mut().find(|(tag, _)| *tag == child.tag) {
            Some((_, members)) => members.push(normalized),
            None => groups.push((child.tag.clone(), vec![normalized])),
        }
    }

    value.children = groups
        .into_iter()
        .map(|(tag, mut members)| {
            let member = if members.len() == 1 {
                Member::One(members.remove(0))
            } else {
                Member::Many(members)
            };
            (tag, member)
        })
        .collect();

    if !text.is_empty() {
        value.text = Some(text.to_string());
    }

    StructuredValue::Node(value)
}

impl Serialize for StructuredValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StructuredValue::String(s) => serializer.serialize_str(s),
            StructuredValue::Node(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for NodeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = usize::from(!self.attributes.is_empty())
            + self.children.len()
            + usize::from(self.text.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if !self.attributes.is_empty() {
            map.serialize_entry(ATTRIBUTES_KEY, &AttributeMap(&self.attributes))?;
        }
        for (tag, member) in &self.children {
            map.serialize_entry(tag, member)?;
        }
        if let Some(text) = &self.text {
            map.serialize_entry(TEXT_KEY, text)?;
        }
        map.end()
    }
}

/// Ordered attribute pairs written as a JSON object
struct AttributeMap<'a>(&'a [(String, String)]);

impl Serialize for AttributeMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Member {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Member::One(value) => value.serialize(serializer),
            Member::Many(values) => values.serialize(serializer),
        }
    }
}
