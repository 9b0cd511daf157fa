//! SVG text to document tree
//!
//! Builds the arena from quick-xml events with a stack of open elements.
//! Text is trimmed and whitespace-only runs are dropped, so child counts
//! reflect meaningful nodes only; the export writer emits no inter-element
//! whitespace, but hand-written test fixtures usually do.

use indextree::{Arena, NodeId};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::dom::{Document, NodeData, NodeKind};
use crate::error::{Error, Result};

/// Parse an SVG document from text
pub fn parse(input: &str) -> Result<Document> {
    let mut arena: Arena<NodeData> = Arena::new();
    let document = arena.new_node(NodeData {
        kind: NodeKind::Document,
        attributes: Vec::new(),
    });

    let mut reader = Reader::from_str(input);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut xml_decl: Option<String> = None;
    let mut root: Option<NodeId> = None;
    // Innermost open element; the document node is the outermost parent.
    let mut stack: Vec<NodeId> = vec![document];

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Decl(e) => {
                xml_decl = Some(String::from_utf8_lossy(&e).into_owned());
            }
            Event::Start(e) => {
                let node = open_element(&mut arena, &e)?;
                attach(&mut arena, &stack, document, &mut root, node)?;
                stack.push(node);
            }
            Event::Empty(e) => {
                let node = open_element(&mut arena, &e)?;
                attach(&mut arena, &stack, document, &mut root, node)?;
            }
            Event::End(_) => {
                // Balance is checked by the reader; never pop the document node.
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                if !text.is_empty() {
                    let node = arena.new_node(NodeData::text(text.into_owned()));
                    attach(&mut arena, &stack, document, &mut root, node)?;
                }
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                let node = arena.new_node(NodeData {
                    kind: NodeKind::CData { text },
                    attributes: Vec::new(),
                });
                attach(&mut arena, &stack, document, &mut root, node)?;
            }
            Event::Comment(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                let node = arena.new_node(NodeData {
                    kind: NodeKind::Comment { text },
                    attributes: Vec::new(),
                });
                attach(&mut arena, &stack, document, &mut root, node)?;
            }
            Event::DocType(e) => {
                let text = String::from_utf8_lossy(&e).trim().to_string();
                let node = arena.new_node(NodeData {
                    kind: NodeKind::Doctype { text },
                    attributes: Vec::new(),
                });
                attach(&mut arena, &stack, document, &mut root, node)?;
            }
            Event::PI(_) => {}
            Event::Eof => break,
        }
        buf.clear();
    }

    let root = root.ok_or(Error::MissingRoot)?;
    Ok(Document {
        arena,
        document,
        root,
        xml_decl,
    })
}

/// Create an element node from a start (or empty) tag
fn open_element(arena: &mut Arena<NodeData>, e: &BytesStart<'_>) -> Result<NodeId> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(arena.new_node(NodeData {
        kind: NodeKind::Element { tag },
        attributes,
    }))
}

/// Append a node under the innermost open element, tracking the root
fn attach(
    arena: &mut Arena<NodeData>,
    stack: &[NodeId],
    document: NodeId,
    root: &mut Option<NodeId>,
    node: NodeId,
) -> Result<()> {
    let parent = stack.last().copied().unwrap_or(document);
    if parent == document && arena[node].get().tag().is_some() {
        if root.is_some() {
            return Err(Error::MultipleRoots);
        }
        *root = Some(node);
    }
    parent.append(node, arena);
    Ok(())
}
