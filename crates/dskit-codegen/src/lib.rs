//! # dskit Codegen
//!
//! Generates the distributable artifacts of the design system from the
//! scanned component tree: the aggregated rules document read by coding
//! assistants, and the combined stylesheet consumers import once.

pub mod component_doc;
pub mod rules_md;
pub mod stylesheet;
pub mod write;

pub use component_doc::render_component_block;
pub use rules_md::{GeneratedRules, generate_rules_md, render_rules_md, write_rules_md};
pub use stylesheet::{GeneratedStylesheet, aggregate_stylesheet, generate_stylesheet, write_stylesheet};
pub use write::write_atomic;
