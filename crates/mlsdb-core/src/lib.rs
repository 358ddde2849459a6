//! Core engine for MlsDB: filter specifications, the predicate AST and
//! its evaluation, the data-source boundary, and the faceted/geo-aware
//! query components built on top of them.
#![warn(unreachable_pub)]

pub mod error;
pub mod filter;
pub mod geo;
pub mod obs;
pub mod predicate;
pub mod query;
pub mod schema;
pub mod source;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Domain vocabulary only. No errors, sources, or helpers are re-exported
/// here.
///

pub mod prelude {
    pub use crate::{
        filter::{FilterKey, FilterSpec, FilterValue},
        geo::{Bounds, GeoPoint},
        predicate::Predicate,
        query::LoadMode,
        schema::{Field, Listing},
        value::Value,
    };
}

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
