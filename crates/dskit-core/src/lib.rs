//! dskit Core Library
//!
//! Configuration, component tree scanning and props extraction for the
//! design-system rule generator.

pub mod component;
pub mod config;
pub mod error;

pub use component::model::{
    ComponentGroup, ExtractedGroup, ModuleScan, PropField, PropSchema, ScanReport, VariantField,
};
pub use component::ComponentScanner;
pub use config::DskitConfig;
pub use error::{DskitError, DskitResult};
