//! Errors raised while building a dynamic lens.

use crate::path::Path;

use super::shape::Shape;

/// A dynamic lens could not be extended.
///
/// These are programmer errors in the navigation itself (a key the focus can
/// never have, an index into something that is not a list, a malformed path
/// string). Data that happens to be absent at `get`/`set` time is never an
/// error.
///
/// # Examples
///
/// ```
/// use lenspath::dynamic::{DynLens, PathError, Shape};
///
/// let person = Shape::record([("name", Shape::Text)]);
/// let error = DynLens::root(person).field("hoge").unwrap_err();
///
/// assert!(matches!(error, PathError::UnknownField { .. }));
/// assert_eq!(error.to_string(), "no field `hoge` on { name: text } at `<root>`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The focused record shape does not declare the field.
    #[error("no field `{field}` on {focus} at `{path}`")]
    UnknownField {
        /// The requested field.
        field: String,
        /// The shape of the focus the field was requested on.
        focus: Shape,
        /// Where the lens stood when the field was requested.
        path: Path,
    },
    /// A field was requested on a focus that is not a record.
    #[error("cannot read field `{field}` of non-record {focus} at `{path}`")]
    NotARecord {
        /// The requested field.
        field: String,
        /// The shape of the focus the field was requested on.
        focus: Shape,
        /// Where the lens stood when the field was requested.
        path: Path,
    },
    /// An index was requested on a focus that is not a list.
    #[error("cannot index [{index}] into non-list {focus} at `{path}`")]
    NotAList {
        /// The requested index.
        index: usize,
        /// The shape of the focus the index was requested on.
        focus: Shape,
        /// Where the lens stood when the index was requested.
        path: Path,
    },
    /// A textual path could not be parsed.
    #[error("invalid path `{input}` at byte {position}: {reason}")]
    Syntax {
        /// The complete path text.
        input: String,
        /// Byte offset of the problem.
        position: usize,
        /// What was wrong.
        reason: &'static str,
    },
}
