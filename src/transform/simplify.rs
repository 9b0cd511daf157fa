//! Top-level document cleanup
//!
//! The export wraps everything in a single `<g>` and appends a `<switch>`
//! with viewer-compatibility fallback text. Neither belongs in the
//! template, and the fixed width/height must go so the template scales to
//! its container.

use log::debug;

use crate::dom::{Document, NodeId};
use crate::error::{Error, Result};

/// Normalize the export's top-level structure.
///
/// Expects the root to have exactly three children: an ignorable leading
/// node, the content `<g>` wrapper, and the fallback `<switch>`. All three
/// assertions are checked before the first mutation, so a shape mismatch
/// leaves the tree untouched.
pub fn simplify(doc: &mut Document) -> Result<()> {
    let root = doc.root_element();
    let children = doc.children(root);

    if children.len() != 3 {
        return Err(Error::RootShape(format!(
            "expected 3 top-level nodes, found {}",
            children.len()
        )));
    }
    let wrapper = children[1];
    let fallback = children[2];
    if !doc.node(wrapper).is_element_named("g") {
        return Err(Error::RootShape(format!(
            "expected a <g> content wrapper, found {}",
            describe(doc, wrapper)
        )));
    }
    if !doc.node(fallback).is_element_named("switch") {
        return Err(Error::RootShape(format!(
            "expected a <switch> fallback, found {}",
            describe(doc, fallback)
        )));
    }

    doc.detach(fallback);

    let content = doc.children(wrapper);
    debug!("unwrapping {} content nodes", content.len());
    for child in content {
        doc.append(root, child);
    }
    doc.detach(wrapper);

    doc.node_mut(root).remove_attribute("width");
    doc.node_mut(root).remove_attribute("height");

    Ok(())
}

fn describe(doc: &Document, id: NodeId) -> String {
    match doc.tag(id) {
        Some(tag) => format!("<{tag}>"),
        None => "a non-element node".to_string(),
    }
}
