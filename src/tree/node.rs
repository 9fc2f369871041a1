//! Element representation of a parsed markup document

/// Attribute carrying an element's document-scoped identifier
pub const XML_ID: &str = "xml:id";

/// A markup element
///
/// Text is split the way the markup carries it: `text` is what appears before
/// the first child, `tail` is what follows this element inside its parent,
/// up to the next sibling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Local tag name (namespace prefix stripped)
    pub tag: String,
    /// Attributes by qualified name (e.g. `xml:id`, `resp`), in document order
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<TreeNode>,
    /// Leading text
    pub text: String,
    /// Trailing text after this element's end tag
    pub tail: String,
}

impl TreeNode {
    /// Create an empty element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute in place
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Append a child element
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the leading text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the trailing text
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = tail.into();
        self
    }

    /// Attribute value by qualified name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Non-empty attribute value by qualified name
    pub fn attr_non_empty(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    /// The element's `xml:id`, if set and non-empty
    pub fn xml_id(&self) -> Option<&str> {
        self.attr_non_empty(XML_ID)
    }

    /// First child with the given local name
    pub fn child(&self, tag: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// All children with the given local name, in document order
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a TreeNode> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// True when the element has neither attributes nor children
    pub fn is_leaf(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }

    /// Readable text of an element with mixed content.
    ///
    /// Looks one level deep: the leading text, then each child's leading text
    /// and tail. Parts are trimmed, empty parts dropped, the rest joined with
    /// single spaces.
    pub fn text_content(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.push(self.text.trim());
        for child in &self.children {
            parts.push(child.text.trim());
            parts.push(child.tail.trim());
        }
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
