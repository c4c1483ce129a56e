//! Static ISO 3779 reference tables.
//!
//! Three read-only datasets consumed by the decoder: WMI region and country
//! assignments, manufacturer prefixes, and the model-year code cycle. The
//! data is versioned reference material and carries no logic of its own, so
//! it can be updated independently of the decoding rules in
//! [`crate::decode`].

pub mod manufacturers;
pub mod regions;
pub mod years;
