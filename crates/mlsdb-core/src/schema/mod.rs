//! Listing schema: the queryable field set, the row type, and the shared
//! decode for legacy multi-value columns.

mod decode;
mod field;
mod listing;

#[cfg(test)]
mod tests;

pub use decode::{decode_multi_value, unescape_slashes};
pub use field::Field;
pub use listing::Listing;
