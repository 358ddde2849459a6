//! Display-layer helpers for MlsDB: the field catalog (labels, admin notes,
//! visibility) and value display formatting.
//!
//! Nothing in this crate touches the filtering engine; `mlsdb-core` consumes
//! only `FieldCatalog` labels for amenity facet output.

mod catalog;
mod display;

pub use catalog::FieldCatalog;
pub use display::{decode_json, format_display_value};
