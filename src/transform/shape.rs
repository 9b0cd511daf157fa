//! Box-shape classification
//!
//! The export draws marked elements in one of a few box styles, recognized
//! purely by child count and first-child tag. The predicates here are
//! separated from tree mutation so the fragile matching stays testable on
//! its own.

use crate::dom::{Document, NodeId};

/// Recognized child structure of a slot-marked element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    /// No recognized indicator structure
    Plain,
    /// Two children with a leading rectangle: the rectangle is a
    /// selectable-state indicator
    SelectBox,
    /// Four children with a leading rectangle: the sketch style, with a
    /// separate fill layer and outline rectangle
    SketchBox,
}

/// Classify a slot-marked element by its immediate children
pub fn classify_slot(doc: &Document, element: NodeId) -> BoxKind {
    let children = doc.children(element);
    if !leading_rect(doc, &children) {
        return BoxKind::Plain;
    }
    match children.len() {
        2 => BoxKind::SelectBox,
        4 => BoxKind::SketchBox,
        _ => BoxKind::Plain,
    }
}

/// Group-variant sketch box: a `g` with exactly three children whose first
/// is a rectangle
pub fn is_group_sketch_box(doc: &Document, element: NodeId) -> bool {
    if !doc.node(element).is_element_named("g") {
        return false;
    }
    let children = doc.children(element);
    children.len() == 3 && leading_rect(doc, &children)
}

fn leading_rect(doc: &Document, children: &[NodeId]) -> bool {
    children
        .first()
        .is_some_and(|&first| doc.node(first).is_element_named("rect"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_marked(doc: &Document) -> NodeId {
        doc.elements_with_attribute("data-slot")[0]
    }

    #[test]
    fn test_select_box() {
        let doc = Document::parse(
            r#"<svg><g data-slot="M"><rect/><text>M</text></g></svg>"#,
        )
        .expect("parse");
        assert_eq!(classify_slot(&doc, first_marked(&doc)), BoxKind::SelectBox);
    }

    #[test]
    fn test_sketch_box() {
        let doc = Document::parse(
            r#"<svg><g data-slot="M"><rect/><path/><rect/><text>M</text></g></svg>"#,
        )
        .expect("parse");
        assert_eq!(classify_slot(&doc, first_marked(&doc)), BoxKind::SketchBox);
    }

    #[test]
    fn test_plain_when_first_child_not_rect() {
        let doc = Document::parse(
            r#"<svg><g data-slot="M"><path/><text>M</text></g></svg>"#,
        )
        .expect("parse");
        assert_eq!(classify_slot(&doc, first_marked(&doc)), BoxKind::Plain);
    }

    #[test]
    fn test_plain_on_unrecognized_child_count() {
        let doc = Document::parse(
            r#"<svg><g data-slot="M"><rect/><path/><text>M</text></g></svg>"#,
        )
        .expect("parse");
        assert_eq!(classify_slot(&doc, first_marked(&doc)), BoxKind::Plain);
    }

    #[test]
    fn test_group_sketch_box() {
        let doc = Document::parse(
            r#"<svg><g data-group="G"><rect/><path/><ellipse/></g></svg>"#,
        )
        .expect("parse");
        let element = doc.elements_with_attribute("data-group")[0];
        assert!(is_group_sketch_box(&doc, element));
    }

    #[test]
    fn test_group_sketch_box_requires_g_tag() {
        let doc = Document::parse(
            r#"<svg><a data-group="G"><rect/><path/><ellipse/></a></svg>"#,
        )
        .expect("parse");
        let element = doc.elements_with_attribute("data-group")[0];
        assert!(!is_group_sketch_box(&doc, element));
    }

    #[test]
    fn test_group_sketch_box_requires_three_children() {
        let doc = Document::parse(r#"<svg><g data-group="G"><rect/><path/></g></svg>"#)
            .expect("parse");
        let element = doc.elements_with_attribute("data-group")[0];
        assert!(!is_group_sketch_box(&doc, element));
    }
}
