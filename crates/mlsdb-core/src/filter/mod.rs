//! Filter specifications and their compilation into predicate fragments.

mod compile;
mod key;
mod spec;

#[cfg(test)]
mod tests;

pub use compile::{AMENITY_FIELDS, compile};
pub use key::{FilterKey, ValueShape};
pub use spec::{FilterSpec, FilterValue};
