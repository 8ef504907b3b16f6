//! Printable navigation paths.
//!
//! Every [`Lens`](crate::Lens) and [`Optional`](crate::Optional) remembers the
//! steps it takes from its root. The path is purely descriptive: it shows up in
//! `Debug` output, in diagnostics and in the errors of the dynamic layer, and
//! never influences `get` or `set`.
//!
//! # Examples
//!
//! ```
//! use lenspath::path::{Path, Segment};
//!
//! let path = Path::root()
//!     .push(Segment::field("accounts"))
//!     .push(Segment::Index(1))
//!     .push(Segment::field("handle"));
//!
//! assert_eq!(path.to_string(), "accounts[1].handle");
//! assert_eq!(Path::root().to_string(), "<root>");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// One step of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A named record field.
    Field(Cow<'static, str>),
    /// A position in a sequence.
    Index(usize),
    /// The inside of an `Option`, present only when the option is `Some`.
    Present,
    /// A step built from user-supplied getter and setter functions.
    Custom,
}

impl Segment {
    /// Creates a [`Segment::Field`] from a static or owned name.
    #[must_use]
    pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Field(name.into())
    }
}

/// An immutable, cheaply clonable list of [`Segment`]s.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Arc<[Segment]>,
}

impl Path {
    /// The empty path of an identity lens.
    #[must_use]
    pub fn root() -> Self {
        Self {
            segments: Arc::from(Vec::new()),
        }
    }

    /// A path made of a single segment.
    #[must_use]
    pub fn single(segment: Segment) -> Self {
        Self {
            segments: Arc::from(vec![segment]),
        }
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn push(&self, segment: Segment) -> Self {
        let mut segments = self.segments.to_vec();
        segments.push(segment);
        Self {
            segments: segments.into(),
        }
    }

    /// Returns the concatenation of `self` followed by `other`.
    ///
    /// Joining with the root path shares the other side instead of copying it.
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Self {
            segments: segments.into(),
        }
    }

    /// The steps of this path, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the path of an identity lens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("<root>");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if position == 0 => formatter.write_str(name)?,
                Segment::Field(name) => write!(formatter, ".{name}")?,
                Segment::Index(index) => write!(formatter, "[{index}]")?,
                Segment::Present => formatter.write_str("?")?,
                Segment::Custom if position == 0 => formatter.write_str("<fn>")?,
                Segment::Custom => formatter.write_str(".<fn>")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Path({self})")
    }
}
