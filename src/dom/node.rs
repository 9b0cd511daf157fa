//! DOM node data
//!
//! Plain data types stored in the document arena. Attributes keep their
//! source order so serialized output stays close to the input.

/// Kind of a document node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The synthetic document node holding the prologue and root element
    Document,
    /// An element like `<g>` or `<rect>`
    Element {
        /// Tag name, including any namespace prefix
        tag: String,
    },
    /// A text node
    Text {
        /// Text content, already unescaped
        text: String,
    },
    /// A CDATA section
    CData {
        /// Raw CDATA content
        text: String,
    },
    /// A comment
    Comment {
        /// Comment content, without the delimiters
        text: String,
    },
    /// A doctype declaration
    Doctype {
        /// Declaration content, without `<!DOCTYPE` and `>`
        text: String,
    },
}

/// A node with its attributes
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub kind: NodeKind,
    /// Attribute name/value pairs in source order (empty for non-elements)
    pub attributes: Vec<(String, String)>,
}

impl NodeData {
    /// Create an element node with no attributes
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Element { tag: tag.into() },
            attributes: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text { text: text.into() },
            attributes: Vec::new(),
        }
    }

    /// Tag name, if this is an element
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag),
            _ => None,
        }
    }

    /// Text content, if this is a text node
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Whether this node is an element with the given tag
    pub fn is_element_named(&self, name: &str) -> bool {
        self.tag() == Some(name)
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value and keeping its position
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Remove an attribute if present
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(k, _)| k != name);
    }

    /// Append declarations to the `style` attribute, creating it if absent.
    ///
    /// A `;` separator is inserted when the existing value does not already
    /// end with one.
    pub fn append_style(&mut self, declarations: &str) {
        let merged = match self.attribute("style") {
            Some(existing) if !existing.trim().is_empty() => {
                let mut merged = existing.trim_end().to_string();
                if !merged.ends_with(';') {
                    merged.push(';');
                }
                merged.push(' ');
                merged.push_str(declarations);
                merged
            }
            _ => declarations.to_string(),
        };
        self.set_attribute("style", merged);
    }
}
