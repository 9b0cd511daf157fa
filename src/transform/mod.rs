//! Template conversion pipeline
//!
//! Three passes over one document, in strict order: top-level cleanup,
//! slot construction, group construction. Each pass is a plain function on
//! `&mut Document` so the stages stay independently testable.

pub mod groups;
pub mod shape;
pub mod simplify;
pub mod slots;

pub use shape::BoxKind;

use crate::config::Dialect;
use crate::dom::Document;
use crate::error::Result;

/// What a conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Slot markers in encounter order
    pub slots: Vec<String>,
    /// Group markers in encounter order
    pub groups: Vec<String>,
}

/// Run the full conversion on a parsed export.
///
/// The document is mutated in place. On error it may be left partially
/// converted and should be discarded.
pub fn convert(doc: &mut Document, dialect: &Dialect) -> Result<Report> {
    simplify::simplify(doc)?;
    let slots = slots::build_slots(doc, dialect)?;
    let groups = groups::build_groups(doc, dialect)?;
    Ok(Report { slots, groups })
}
