//! Mutable SVG document tree
//!
//! An arena-backed DOM: nodes live in an [`indextree::Arena`] and are
//! addressed by [`NodeId`], which keeps relocation (detach/append/insert)
//! cheap and safe while several parts of the tree are being rearranged.
//!
//! The tree is built from SVG text by [`parser`] and written back out by
//! [`writer`]. A synthetic document node sits above the root element and
//! holds prologue items (comments, doctype).

pub mod node;
pub mod parser;
pub mod writer;

pub use indextree::NodeId;
pub use node::{NodeData, NodeKind};

use indextree::Arena;

use crate::error::Result;

/// A parsed SVG document
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) arena: Arena<NodeData>,
    /// Synthetic top node; its children are the prologue plus the root element
    pub(crate) document: NodeId,
    /// The root `<svg>` element
    pub(crate) root: NodeId,
    /// Raw XML declaration content, when the input had one
    pub(crate) xml_decl: Option<String>,
}

impl Document {
    /// Parse an SVG document from text
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse(input)
    }

    /// Serialize back to SVG text
    ///
    /// `indent` selects two-space indented output; pass `false` for
    /// byte-lean single-line output. Elements with text content are always
    /// written inline so their text round-trips exactly.
    pub fn to_svg_string(&self, indent: bool) -> String {
        writer::serialize(self, indent)
    }

    /// The root element
    pub fn root_element(&self) -> NodeId {
        self.root
    }

    /// Node data by id
    pub fn node(&self, id: NodeId) -> &NodeData {
        self.arena[id].get()
    }

    /// Mutable node data by id
    pub fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        self.arena[id].get_mut()
    }

    /// Children of a node, snapshotted in order
    ///
    /// Returns an owned list so callers can mutate the tree while walking.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        id.children(&self.arena).collect()
    }

    /// First child of a node
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].first_child()
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent()
    }

    /// All nodes under (and including) `id` in document order, snapshotted
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        id.descendants(&self.arena).collect()
    }

    /// Elements in document order carrying the given attribute
    pub fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.root
            .descendants(&self.arena)
            .filter(|&id| {
                let data = self.arena[id].get();
                data.tag().is_some() && data.attribute(name).is_some()
            })
            .collect()
    }

    /// Elements in document order carrying the given `id` attribute value
    pub fn element_by_id(&self, value: &str) -> Option<NodeId> {
        self.root
            .descendants(&self.arena)
            .find(|&id| self.arena[id].get().attribute("id") == Some(value))
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.arena.new_node(NodeData::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.arena.new_node(NodeData::text(text))
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous position first
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        child.detach(&mut self.arena);
        parent.append(child, &mut self.arena);
    }

    /// Insert `new` as a sibling immediately before `existing`, detaching it
    /// from any previous position first
    pub fn insert_before(&mut self, existing: NodeId, new: NodeId) {
        new.detach(&mut self.arena);
        existing.insert_before(new, &mut self.arena);
    }

    /// Detach a node (and its subtree) from the tree
    pub fn detach(&mut self, id: NodeId) {
        id.detach(&mut self.arena);
    }

    /// Detach every child of a node
    pub fn clear_children(&mut self, id: NodeId) {
        for child in self.children(id) {
            child.detach(&mut self.arena);
        }
    }

    /// Tag name of a node, if it is an element
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).tag()
    }
}
