//! Slot construction
//!
//! Every element carrying the slot marker attribute becomes a named content
//! slot: the element gets the marker as its id, recognized selection
//! indicators are hidden and tagged, and the marker text inside the
//! element's embedded HTML is replaced by a `<slot>` placeholder.
//!
//! This leans on the exact shape of the export's foreignObject content and
//! is the most fragile part of the conversion; every deviation from the
//! expected shape is a fatal error naming the offending marker.

use log::debug;

use crate::config::Dialect;
use crate::dom::{Document, NodeId, NodeKind};
use crate::error::{Error, Result};
use crate::transform::shape::{classify_slot, BoxKind};

/// Keeps the wrapper from collapsing to its content width.
const SKETCH_WRAPPER_STYLE: &str = "width: inherit;";

/// Bounds runaway generated text inside a sketch box: single line with an
/// ellipsis, capped at three lines of height. `display: block` stops the
/// parent from expanding around rendered whitespace.
const SKETCH_CONTAINER_STYLE: &str = "display: block; overflow: hidden; width: inherit; \
     white-space: nowrap; text-overflow: ellipsis; line-height: 1.2; max-height: 3.6em;";

/// Convert every slot-marked element, in document order.
///
/// Returns the slot markers in encounter order.
pub fn build_slots(doc: &mut Document, dialect: &Dialect) -> Result<Vec<String>> {
    let marked = doc.elements_with_attribute(&dialect.slot_attribute);
    let mut markers = Vec::with_capacity(marked.len());

    for element in marked {
        let marker = match doc.node(element).attribute(&dialect.slot_attribute) {
            Some(value) => value.to_string(),
            None => continue,
        };

        if doc
            .element_by_id(&marker)
            .filter(|&other| other != element)
            .is_some()
        {
            return Err(Error::DuplicateId { id: marker });
        }
        doc.node_mut(element).set_attribute("id", marker.clone());

        let kind = classify_slot(doc, element);
        debug!("slot '{marker}': {kind:?}");

        let children = doc.children(element);
        match kind {
            BoxKind::SelectBox => {
                hide_with_id(doc, children[0], format!("{marker}_SELECT"));
            }
            BoxKind::SketchBox => {
                hide_with_id(doc, children[1], format!("{marker}_SELECT_FILL"));
                hide_with_id(doc, children[2], format!("{marker}_SELECT"));
            }
            BoxKind::Plain => {}
        }

        for fragment in doc.descendants(element) {
            if !doc.node(fragment).is_element_named("foreignObject") {
                continue;
            }
            place_slot(doc, fragment, &marker, kind == BoxKind::SketchBox)?;
        }

        markers.push(marker);
    }

    Ok(markers)
}

/// Hide an indicator node and tag it with a derived identifier
fn hide_with_id(doc: &mut Document, id: NodeId, identifier: String) {
    let node = doc.node_mut(id);
    node.set_attribute("style", "display: none");
    node.set_attribute("id", identifier);
}

/// Replace the marker text inside one foreignObject with a `<slot>`.
///
/// The fragment is expected to open with the export's fixed wrapper chain:
/// the fragment's first child holds a wrapper `<div>`, whose first child is
/// the container `<div>` the text layout hangs off.
fn place_slot(doc: &mut Document, fragment: NodeId, marker: &str, sketch: bool) -> Result<()> {
    let wrapper = doc
        .first_child(fragment)
        .and_then(|outer| doc.first_child(outer))
        .filter(|&div| doc.node(div).is_element_named("div"))
        .ok_or_else(|| Error::EmbeddedShape {
            slot: marker.to_string(),
        })?;
    let container = doc
        .first_child(wrapper)
        .filter(|&div| doc.node(div).is_element_named("div"))
        .ok_or_else(|| Error::EmbeddedShape {
            slot: marker.to_string(),
        })?;

    if sketch {
        doc.node_mut(wrapper).append_style(SKETCH_WRAPPER_STYLE);
        doc.node_mut(container).append_style(SKETCH_CONTAINER_STYLE);
    }

    let holder = find_text_holder(doc, container, marker)?;
    doc.clear_children(holder);
    let slot = doc.create_element("slot");
    doc.node_mut(slot).set_attribute("name", marker);
    doc.append(holder, slot);
    Ok(())
}

/// Descend through first children until a text node equal to the marker is
/// found, returning the node holding it.
///
/// The diagram author may have wrapped the text in formatting elements, so
/// the marker text can sit at any depth; requiring an exact match also
/// guarantees the marker attribute and the visible text are in sync.
fn find_text_holder(doc: &Document, container: NodeId, marker: &str) -> Result<NodeId> {
    let mut current = container;
    loop {
        let first = match doc.first_child(current) {
            Some(first) => first,
            None => {
                return Err(Error::SlotTextMissing {
                    slot: marker.to_string(),
                })
            }
        };
        match &doc.node(first).kind {
            NodeKind::Text { text } if text == marker => return Ok(current),
            NodeKind::Element { .. } => current = first,
            // A text dead end: descending further cannot reach a match.
            _ => {
                return Err(Error::SlotTextMissing {
                    slot: marker.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> Result<(Document, Vec<String>)> {
        let mut doc = Document::parse(input).expect("parse");
        let markers = build_slots(&mut doc, &Dialect::default())?;
        Ok((doc, markers))
    }

    const FOREIGN: &str =
        "<foreignObject><div><div style=\"padding: 1px\"><div style=\"color: #000\">NAME</div></div></div></foreignObject>";

    fn with_marker(template: &str, marker: &str) -> String {
        template.replace("NAME", marker)
    }

    #[test]
    fn test_plain_slot_gets_id_and_placeholder() {
        let input = format!(
            r#"<svg><g data-slot="AP_IP">{}</g></svg>"#,
            with_marker(FOREIGN, "AP_IP")
        );
        let (doc, markers) = convert(&input).expect("convert");

        assert_eq!(markers, vec!["AP_IP".to_string()]);
        let out = doc.to_svg_string(false);
        assert!(out.contains(r#"<g data-slot="AP_IP" id="AP_IP">"#));
        assert!(out.contains(r#"<slot name="AP_IP"/>"#));
        assert!(!out.contains(">AP_IP<"));
    }

    #[test]
    fn test_select_box_rect_hidden() {
        let input = format!(
            r#"<svg><g data-slot="AP_IP"><rect x="1"/><g>{}</g></g></svg>"#,
            with_marker(FOREIGN, "AP_IP")
        );
        let (doc, _) = convert(&input).expect("convert");

        let rect = doc.element_by_id("AP_IP_SELECT").expect("tagged rect");
        assert_eq!(doc.tag(rect), Some("rect"));
        assert_eq!(doc.node(rect).attribute("style"), Some("display: none"));
    }

    #[test]
    fn test_sketch_box_fill_and_rect_hidden() {
        let input = format!(
            r#"<svg><g data-slot="AP_IP"><rect/><path d="fill"/><rect x="2"/><g>{}</g></g></svg>"#,
            with_marker(FOREIGN, "AP_IP")
        );
        let (doc, _) = convert(&input).expect("convert");

        let fill = doc.element_by_id("AP_IP_SELECT_FILL").expect("fill");
        assert_eq!(doc.tag(fill), Some("path"));
        assert_eq!(doc.node(fill).attribute("style"), Some("display: none"));

        let rect = doc.element_by_id("AP_IP_SELECT").expect("rect");
        assert_eq!(doc.node(rect).attribute("x"), Some("2"));
    }

    #[test]
    fn test_sketch_box_overflow_clamps() {
        let input = format!(
            r#"<svg><g data-slot="AP_IP"><rect/><path/><rect/><g>{}</g></g></svg>"#,
            with_marker(FOREIGN, "AP_IP")
        );
        let (doc, _) = convert(&input).expect("convert");
        let out = doc.to_svg_string(false);

        // The wrapper keeps its own style and gains the width constraint.
        assert!(out.contains("padding: 1px; width: inherit;"));
        // The container gains the overflow clamp.
        assert!(out.contains("text-overflow: ellipsis"));
        assert!(out.contains("max-height: 3.6em;"));
    }

    #[test]
    fn test_plain_slot_has_no_clamps() {
        let input = format!(
            r#"<svg><g data-slot="AP_IP">{}</g></svg>"#,
            with_marker(FOREIGN, "AP_IP")
        );
        let (doc, _) = convert(&input).expect("convert");
        let out = doc.to_svg_string(false);
        assert!(!out.contains("text-overflow"));
        assert!(!out.contains("width: inherit"));
    }

    #[test]
    fn test_text_found_through_formatting() {
        let foreign = "<foreignObject><div><div><div><b><i>AP_IP</i></b></div></div></div></foreignObject>";
        let input = format!(r#"<svg><g data-slot="AP_IP">{foreign}</g></svg>"#);
        let (doc, _) = convert(&input).expect("convert");

        // The placeholder lands inside the innermost formatting element.
        assert!(doc
            .to_svg_string(false)
            .contains(r#"<b><i><slot name="AP_IP"/></i></b>"#));
    }

    #[test]
    fn test_mismatched_text_fails() {
        let input = format!(
            r#"<svg><g data-slot="AP_IP">{}</g></svg>"#,
            with_marker(FOREIGN, "AP_UP")
        );
        let err = convert(&input).expect_err("must fail");
        assert!(matches!(err, Error::SlotTextMissing { slot } if slot == "AP_IP"));
    }

    #[test]
    fn test_missing_wrapper_fails() {
        let input = r#"<svg><g data-slot="AP_IP"><foreignObject><span><div>AP_IP</div></span></foreignObject></g></svg>"#;
        let err = convert(input).expect_err("must fail");
        assert!(matches!(err, Error::EmbeddedShape { slot } if slot == "AP_IP"));
    }

    #[test]
    fn test_duplicate_marker_fails() {
        let foreign = with_marker(FOREIGN, "AP_IP");
        let input =
            format!(r#"<svg><g data-slot="AP_IP">{foreign}</g><g data-slot="AP_IP">{foreign}</g></svg>"#);
        let err = convert(&input).expect_err("must fail");
        assert!(matches!(err, Error::DuplicateId { id } if id == "AP_IP"));
    }

    #[test]
    fn test_slot_without_foreign_object_is_left_plain() {
        let input = r#"<svg><g data-slot="AP_IP"><rect/><text>AP_IP</text></g></svg>"#;
        let (doc, markers) = convert(input).expect("convert");

        // Recognized as a select box, but with no embedded HTML there is no
        // placeholder to insert.
        assert_eq!(markers.len(), 1);
        assert!(doc.element_by_id("AP_IP_SELECT").is_some());
        assert!(!doc.to_svg_string(false).contains("<slot"));
    }
}
