//! Group construction
//!
//! Elements sharing a group marker are collected into one hidden `<g>` per
//! marker value so the runtime can toggle them together. The container is
//! inserted where the first member's top-level ancestor sits, which keeps
//! paint order stable relative to untouched siblings; within a container,
//! members are in encounter order.

use log::debug;

use crate::config::Dialect;
use crate::dom::{Document, NodeId};
use crate::error::{Error, Result};
use crate::transform::shape::is_group_sketch_box;

/// Collect every group-marked element into its marker's hidden container.
///
/// Returns the group markers in encounter order.
pub fn build_groups(doc: &mut Document, dialect: &Dialect) -> Result<Vec<String>> {
    let marked = doc.elements_with_attribute(&dialect.group_attribute);
    let mut containers: Vec<(String, NodeId)> = Vec::new();

    for element in marked {
        let marker = match doc.node(element).attribute(&dialect.group_attribute) {
            Some(value) => value.to_string(),
            None => continue,
        };

        let existing = containers
            .iter()
            .find(|(name, _)| *name == marker)
            .map(|&(_, container)| container);
        let container = match existing {
            Some(container) => container,
            None => {
                if doc.element_by_id(&marker).is_some() {
                    return Err(Error::DuplicateId { id: marker });
                }
                let container = doc.create_element("g");
                doc.node_mut(container).set_attribute("style", "display: none");
                doc.node_mut(container).set_attribute("id", marker.clone());

                // Relocating members must not change what paints over what,
                // so the container takes the document position of the first
                // member's existing top-level ancestor.
                let anchor = top_level_ancestor(doc, element);
                doc.insert_before(anchor, container);
                debug!("group '{marker}': container created");
                containers.push((marker.clone(), container));
                container
            }
        };

        if is_group_sketch_box(doc, element) {
            let second = doc.children(element)[1];
            let node = doc.node_mut(second);
            node.set_attribute("id", format!("{marker}_FILL"));
            node.set_attribute("style", "display: none");
        }

        doc.append(container, element);
    }

    Ok(containers.into_iter().map(|(name, _)| name).collect())
}

/// The root element's direct child containing (or equal to) `node`
fn top_level_ancestor(doc: &Document, mut node: NodeId) -> NodeId {
    let root = doc.root_element();
    while let Some(parent) = doc.parent(node) {
        if parent == root {
            break;
        }
        node = parent;
    }
    node
}
