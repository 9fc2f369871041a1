//! XML text to `TreeNode` using quick-xml's pull reader

use super::node::TreeNode;
use crate::error::{ProvError, ProvResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse a complete XML document and return its root element.
///
/// Entity references are resolved and CDATA sections become plain text.
/// Comments, processing instructions and the DOCTYPE are dropped.
pub fn parse_document(xml: &str) -> ProvResult<TreeNode> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<TreeNode> = Vec::new();
    let mut root: Option<TreeNode> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(ProvError::Malformed("multiple root elements".into()));
                }
                stack.push(start_element(&e)?);
            }
            Event::Empty(e) => {
                let node = start_element(&e)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(e) => {
                let node = stack.pop().ok_or_else(|| {
                    ProvError::Malformed(format!(
                        "unexpected end tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    ))
                })?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                push_text(&mut stack, &String::from_utf8_lossy(&bytes))?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ProvError::Malformed(format!("unclosed element <{}>", open.tag)));
    }
    root.ok_or_else(|| ProvError::Malformed("no root element".into()))
}

/// Build an element from its start tag. Namespace declarations are skipped.
fn start_element(e: &BytesStart<'_>) -> ProvResult<TreeNode> {
    let mut node = TreeNode::new(String::from_utf8_lossy(e.local_name().as_ref()));

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attr.unescape_value()?.into_owned();
        node.set_attr(key, value);
    }

    Ok(node)
}

/// Hang a finished element under the open parent, or make it the root.
fn attach(stack: &mut [TreeNode], root: &mut Option<TreeNode>, node: TreeNode) -> ProvResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(ProvError::Malformed("multiple root elements".into()));
    }
    *root = Some(node);
    Ok(())
}

/// Text goes to the parent's leading text until it has a child, then to the
/// last child's tail.
fn push_text(stack: &mut [TreeNode], text: &str) -> ProvResult<()> {
    let Some(parent) = stack.last_mut() else {
        if text.trim().is_empty() {
            return Ok(());
        }
        return Err(ProvError::Malformed("text outside the root element".into()));
    };

    match parent.children.last_mut() {
        Some(last) => last.tail.push_str(text),
        None => parent.text.push_str(text),
    }
    Ok(())
}
