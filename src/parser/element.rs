//! Read-only markup tree consumed by the scene builder.
//!
//! The builder only needs a tag name, an attribute map and ordered child
//! elements. [`Element::parse_xml`] produces that view from an SVG
//! document; tests and other front ends can build it directly.

use std::collections::HashMap;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{RgbError, Result};

/// A markup element: tag, attributes and child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Parse an XML document and return its root element.
    ///
    /// Attributes are keyed by local name, so `xlink:href` is stored as
    /// `href`. Text, comments and processing instructions are dropped.
    pub fn parse_xml(source: &str) -> Result<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(source, options).map_err(|e| RgbError::Parse {
            message: format!("Invalid markup: {}", e),
            help: None,
        })?;

        Ok(Self::from_node(doc.root_element()))
    }

    /// Read and parse an XML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| RgbError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read file: {}", e),
        })?;
        Self::parse_xml(&source)
    }

    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            tag: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
            children: node
                .children()
                .filter(|n| n.is_element())
                .map(Self::from_node)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_xml_tree() {
        let source = r##"<svg width="10" height="20" xmlns="http://www.w3.org/2000/svg">
  <!-- comment -->
  <circle cx="1" cy="2" r="3" fill="red"/>
  <g id="grp">
    <rect x="0" y="0" width="2" height="2"/>
  </g>
</svg>"##;
        let root = Element::parse_xml(source).unwrap();

        assert_eq!(root.tag, "svg");
        assert_eq!(root.attr("width"), Some("10"));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].tag, "circle");
        assert_eq!(root.children[0].attr("fill"), Some("red"));
        assert_eq!(root.children[1].attr("id"), Some("grp"));
        assert_eq!(root.children[1].children[0].tag, "rect");
    }

    #[test]
    fn test_xlink_href_uses_local_name() {
        let source = r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink">
  <use xlink:href="#a"/>
</svg>"##;
        let root = Element::parse_xml(source).unwrap();
        assert_eq!(root.children[0].attr("href"), Some("#a"));
    }

    #[test]
    fn test_parse_invalid_xml() {
        let err = Element::parse_xml("<svg><circle></svg>").unwrap_err();
        assert!(matches!(err, RgbError::Parse { .. }));
    }

    #[test]
    fn test_builder() {
        let e = Element::new("g").with_child(Element::new("circle").with_attr("r", "2"));
        assert_eq!(e.children[0].attr("r"), Some("2"));
        assert_eq!(e.attr("r"), None);
    }
}
