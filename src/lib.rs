//! Lossless codec for ActivityStreams-flavored JSON vocabularies.
//!
//! Vocabulary documents are JSON objects whose properties may legally hold
//! values of several unrelated shapes: a nested typed object, a link, a bare
//! IRI, a plain or language-tagged string, a timestamp, a duration, a
//! number, a media-type string -- or something the vocabulary has never heard
//! of. This crate reads such documents into strongly-shaped objects, lets
//! callers manipulate them through a uniform API, and writes them back out,
//! preserving everything it does not understand so round trips never
//! silently drop data.
//!
//! Design notes:
//! - One generic engine, parameterized by a declarative per-type schema
//!   ([`schema`]), replaces the per-type accessor boilerplate such
//!   vocabularies usually generate. Concrete types are table rows
//!   ([`vocab`]), not code.
//! - Resolution of an ambiguous raw value is deterministic: the property's
//!   declared alternative order is the trial order, first match wins, and
//!   total failure degrades to a verbatim unknown value rather than an
//!   error.
//! - The engine is a pure, synchronous transformation: no I/O, no shared
//!   state across calls. Distinct object graphs may be processed on
//!   distinct threads freely.
//!
//! ```
//! use astreams::vocab;
//!
//! let registry = vocab::core_registry();
//! let note = registry
//!     .from_json_str(r#"{"type": "Note", "content": "hello"}"#)
//!     .unwrap();
//! assert_eq!(note.prop("content").unwrap().at(0).unwrap().as_str(), Some("hello"));
//! assert_eq!(
//!     note.to_json_string(),
//!     r#"{"type":"Note","content":"hello"}"#
//! );
//! ```

pub mod codec;
pub mod error;
pub mod model;
pub mod schema;
pub mod vocab;

pub use codec::container::PropertyContainer;
pub use codec::object::VocabObject;
pub use codec::slot::Slot;
pub use codec::de::deserialize_into;
pub use error::CodecError;
pub use model::iri::Iri;
pub use model::langmap::LanguageMap;
pub use model::scalar::{DecodeError, LangString, MediaType, XsdDuration};
pub use schema::registry::TypeRegistry;
pub use schema::{Alternative, Capabilities, PropertySpec, TypeSchema};
