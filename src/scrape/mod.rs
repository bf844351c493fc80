//! Spec-table extraction: class fragments and positional pairing of
//! label/value cell text.

pub mod extractor;
pub mod selectors;

pub use extractor::{pair_specs, SpecPair};
