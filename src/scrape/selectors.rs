//! Class-name fragments for the McMaster-Carr spec table.
//!
//! Cells are matched by substring against the `class` attribute, so these
//! stay valid across the hashed suffixes the catalog appends to its class
//! names. Update this file when the catalog changes its HTML structure.

/// Left-hand cells of the spec table (attribute names).
pub const SPEC_LABEL_CLASS: &str = "attr-cell--table divider--spec-tbl";

/// Right-hand cells of the spec table (attribute values).
pub const SPEC_VALUE_CLASS: &str = "divider--spec-tbl value-cell--table";
