//! Crate-level error type.

/// Errors surfaced by the codec.
///
/// The engine is deliberately lenient: unrecognized keys, undiscriminated
/// nested objects, and unclassifiable scalar values all degrade to lossless
/// passthrough rather than erroring. What remains here is the small closed
/// set of conditions that genuinely have no recovery.
#[derive(Debug)]
pub enum CodecError {
    /// A property whose declared alternatives are all scalar received a
    /// map-shaped value. There is no declared way to interpret it.
    ShapeMismatch { property: String },
    /// An indexed container operation was given an out-of-bounds index.
    IndexOutOfRange { index: usize, len: usize },
    /// A top-level document's discriminator named no registered type.
    UnknownType(Vec<String>),
    /// A top-level document was not a JSON object.
    NotAnObject,
    /// The input was not valid JSON at all.
    Json(serde_json::Error),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::ShapeMismatch { property } => {
                write!(f, "property '{property}' has no object alternative but received an object value")
            }
            CodecError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for container of length {len}")
            }
            CodecError::UnknownType(tags) if tags.is_empty() => {
                write!(f, "document carries no type discriminator")
            }
            CodecError::UnknownType(tags) => {
                write!(f, "no registered type matches tags: {}", tags.join(", "))
            }
            CodecError::NotAnObject => write!(f, "top-level document is not a JSON object"),
            CodecError::Json(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::Json(e)
    }
}
