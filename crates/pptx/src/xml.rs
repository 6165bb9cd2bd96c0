//! Generic XML node tree built from `quick-xml` events.
//!
//! Lookups match on local names, so `p:sp` and `sp` are the same element.
//! A child may be absent, appear once, or repeat; `child`, `children`
//! and `count` keep those cases apart.

use pptmd_core::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// One element with its attributes, child elements and text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
    text: String,
}

impl XmlNode {
    /// Element name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    /// Check the element's local name.
    pub fn is(&self, name: &str) -> bool {
        self.local_name() == name
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.is(name))
    }

    /// All child elements with the given local name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.is(name))
    }

    /// Number of child elements with the given local name.
    pub fn count(&self, name: &str) -> usize {
        self.children(name).count()
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Follow first-occurrence children along a path of local names.
    pub fn descend(&self, path: &[&str]) -> Option<&XmlNode> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Attribute value by local name (`r:embed` matches `embed`).
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| local_name(key) == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text directly inside this element, unescaped, whitespace kept.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse an XML document into its root element.
    ///
    /// `part` names the document in error messages.
    pub fn parse(part: &str, xml: &str) -> Result<XmlNode> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(XmlNode::from_start(part, e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let node = XmlNode::from_start(part, e)?;
                    attach(part, &mut stack, &mut root, node)?;
                }
                Ok(Event::End(_)) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| Error::xml(part, "unexpected closing tag"))?;
                    attach(part, &mut stack, &mut root, node)?;
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(node) = stack.last_mut() {
                        let text = e.unescape().map_err(|err| Error::xml(part, err))?;
                        node.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::xml(
                        part,
                        format!("at position {}: {}", reader.buffer_position(), e),
                    ));
                }
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(Error::xml(part, format!("unclosed element '{}'", open.name)));
        }

        root.ok_or_else(|| Error::xml(part, "document has no root element"))
    }

    fn from_start(part: &str, e: &BytesStart) -> Result<XmlNode> {
        let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
        let mut attributes = Vec::new();

        for attr in e.attributes() {
            let attr = attr.map_err(|err| Error::xml(part, err))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| Error::xml(part, err))?
                .to_string();
            attributes.push((key, value));
        }

        Ok(XmlNode {
            name,
            attributes,
            ..Default::default()
        })
    }
}

/// Hand a finished element to its parent, or make it the root.
fn attach(
    part: &str,
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
    node: XmlNode,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_none() {
        *root = Some(node);
    } else {
        return Err(Error::xml(part, "multiple root elements"));
    }
    Ok(())
}

/// Extract the local name from a potentially namespaced XML name.
fn local_name(name: &str) -> &str {
    match name.find(':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}
