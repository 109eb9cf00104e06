//! Leaf value types: IRIs, scalar codecs, and per-language string tables.

pub mod iri;
pub mod langmap;
pub mod scalar;
