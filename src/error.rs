//! Error types for template conversion.
//!
//! Every failure is a fatal precondition violation: a mismatch between the
//! export tool's output and the structural assumptions this converter makes.
//! There is no partial output or recovery; the run is expected to be
//! discarded and retried after the source diagram is fixed.

use thiserror::Error;

/// Conversion errors
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not well-formed XML
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document contains no root element
    #[error("document has no root element")]
    MissingRoot,

    /// The document contains more than one top-level element
    #[error("document has multiple root elements")]
    MultipleRoots,

    /// The export's top-level structure is not the expected
    /// ignorable/content-group/switch triple
    #[error("unexpected root shape: {0}")]
    RootShape(String),

    /// Two marker attributes produced the same identifier
    #[error("duplicate identifier '{id}' produced by marker attributes")]
    DuplicateId {
        /// The colliding identifier
        id: String,
    },

    /// A foreignObject inside a slot did not start with the expected
    /// wrapper/container chain
    #[error("slot '{slot}': embedded content does not match the expected wrapper shape")]
    EmbeddedShape {
        /// The slot marker being processed
        slot: String,
    },

    /// The first-child descent inside a slot never reached a text node
    /// equal to the marker value
    #[error("slot '{slot}': no text equal to the marker value was found")]
    SlotTextMissing {
        /// The slot marker being processed
        slot: String,
    },
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;
