//! The generic polymorphic property engine.
//!
//! Layering, leaves first: [`slot`] resolves one raw value into exactly one
//! declared alternative (or the lossless unknown fallback); [`container`]
//! wraps slots in the functional / non-functional multiplicity contract;
//! [`object`] is the aggregate; [`de`] and [`ser`] are the document-level
//! drivers walking a schema against a document and back.

pub mod container;
pub mod de;
pub mod object;
pub mod ser;
pub mod slot;

pub use container::PropertyContainer;
pub use de::deserialize_into;
pub use object::VocabObject;
pub use slot::Slot;
