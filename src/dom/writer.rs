//! Document tree to SVG text
//!
//! A recursive pre-order walk. Elements whose children include text or
//! CDATA are written inline, everything else gets two-space indentation
//! when `indent` is on; escaping is delegated to quick-xml.

use indextree::NodeId;
use quick_xml::escape::{escape, partial_escape};

use crate::dom::{Document, NodeKind};

/// Serialize the whole document
pub fn serialize(doc: &Document, indent: bool) -> String {
    let mut out = String::new();
    if let Some(decl) = &doc.xml_decl {
        out.push_str("<?");
        out.push_str(decl);
        out.push_str("?>");
        if indent {
            out.push('\n');
        }
    }
    for child in doc.document.children(&doc.arena) {
        write_node(doc, child, &mut out, 0, indent);
    }
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String, depth: usize, indent: bool) {
    if indent {
        for _ in 0..depth {
            out.push_str("  ");
        }
    }
    match &doc.arena[id].get().kind {
        NodeKind::Document => {
            for child in id.children(&doc.arena) {
                write_node(doc, child, out, depth, indent);
            }
            return;
        }
        NodeKind::Element { tag } => {
            write_open_tag(doc, id, tag, out);
            let children: Vec<NodeId> = id.children(&doc.arena).collect();
            if children.is_empty() {
                out.push_str("/>");
            } else if has_inline_content(doc, id) {
                out.push('>');
                for child in children {
                    write_inline(doc, child, out);
                }
                write_close_tag(tag, out);
            } else {
                out.push('>');
                if indent {
                    out.push('\n');
                }
                for child in children {
                    write_node(doc, child, out, depth + 1, indent);
                }
                if indent {
                    for _ in 0..depth {
                        out.push_str("  ");
                    }
                }
                write_close_tag(tag, out);
            }
        }
        NodeKind::Text { text } => out.push_str(&partial_escape(text)),
        NodeKind::CData { text } => {
            out.push_str("<![CDATA[");
            out.push_str(text);
            out.push_str("]]>");
        }
        NodeKind::Comment { text } => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        NodeKind::Doctype { text } => {
            out.push_str("<!DOCTYPE ");
            out.push_str(text);
            out.push('>');
        }
    }
    if indent {
        out.push('\n');
    }
}

/// Serialize a subtree with no inserted whitespace at all
fn write_inline(doc: &Document, id: NodeId, out: &mut String) {
    match &doc.arena[id].get().kind {
        NodeKind::Document => {}
        NodeKind::Element { tag } => {
            write_open_tag(doc, id, tag, out);
            let children: Vec<NodeId> = id.children(&doc.arena).collect();
            if children.is_empty() {
                out.push_str("/>");
            } else {
                out.push('>');
                for child in children {
                    write_inline(doc, child, out);
                }
                write_close_tag(tag, out);
            }
        }
        NodeKind::Text { text } => out.push_str(&partial_escape(text)),
        NodeKind::CData { text } => {
            out.push_str("<![CDATA[");
            out.push_str(text);
            out.push_str("]]>");
        }
        NodeKind::Comment { text } => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        NodeKind::Doctype { .. } => {}
    }
}

fn write_open_tag(doc: &Document, id: NodeId, tag: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in &doc.arena[id].get().attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
}

fn write_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Whether any direct child is text or CDATA
fn has_inline_content(doc: &Document, id: NodeId) -> bool {
    id.children(&doc.arena).any(|child| {
        matches!(
            doc.arena[child].get().kind,
            NodeKind::Text { .. } | NodeKind::CData { .. }
        )
    })
}
