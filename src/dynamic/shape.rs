//! Shapes: what a dynamic [`Value`] is expected to contain.

use std::collections::BTreeMap;
use std::fmt;

use super::value::Value;

/// The expected structure of a [`Value`].
///
/// A [`DynLens`](super::DynLens) carries the shape of its focus and consults
/// it when it is extended, so that a key or index the focus can never contain
/// is rejected while the lens is being built rather than silently reading as
/// absent later.
///
/// # Examples
///
/// ```
/// use lenspath::dynamic::{Shape, Value};
///
/// let account = Shape::record([("type", Shape::Text), ("handle", Shape::Text)]);
/// let person = Shape::record([
///     ("name", Shape::Text),
///     ("age", Shape::Int),
///     ("accounts", Shape::list(account)),
///     ("nickname", Shape::optional(Shape::Text)),
/// ]);
///
/// assert_eq!(
///     person.to_string(),
///     "{ accounts: [{ handle: text, type: text }], age: int, name: text, nickname: text? }"
/// );
///
/// let azusa = Value::record([
///     ("name", Value::from("Nakano Azusa")),
///     ("age", Value::from(15)),
///     ("accounts", Value::list([])),
/// ]);
/// assert!(person.admits(&azusa));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Anything; navigation below it is unchecked.
    Any,
    /// Only [`Value::Null`].
    Null,
    /// A boolean.
    Bool,
    /// An integer.
    Int,
    /// A number; integers are accepted too.
    Float,
    /// A string.
    Text,
    /// A list whose elements all have the given shape.
    List(Box<Shape>),
    /// A record with exactly the given fields.
    Record(BTreeMap<String, Shape>),
    /// The given shape, or null / missing.
    Optional(Box<Shape>),
}

impl Shape {
    /// A record shape from `(name, shape)` pairs.
    #[must_use]
    pub fn record<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Self)>,
        K: Into<String>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, shape)| (name.into(), shape))
                .collect(),
        )
    }

    /// A list shape.
    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::List(Box::new(element))
    }

    /// An optional shape. Optional and `Any` shapes are not wrapped twice.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        match inner {
            Self::Optional(_) | Self::Any => inner,
            other => Self::Optional(Box::new(other)),
        }
    }

    /// Returns `true` if a value of this shape may be null or missing.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_) | Self::Any | Self::Null)
    }

    /// Checks that `value` conforms to this shape, recursively.
    ///
    /// Record fields with an optional shape may be missing; fields the shape
    /// does not declare are rejected.
    #[must_use]
    pub fn admits(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Any, _)
            | (Self::Null, Value::Null)
            | (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Float, Value::Float(_) | Value::Int(_))
            | (Self::Text, Value::Text(_))
            | (Self::Optional(_), Value::Null) => true,
            (Self::Optional(inner), value) => inner.admits(value),
            (Self::List(element), Value::List(elements)) => {
                elements.iter().all(|value| element.admits(value))
            }
            (Self::Record(shapes), Value::Record(fields)) => {
                fields.keys().all(|name| shapes.contains_key(name))
                    && shapes.iter().all(|(name, shape)| {
                        fields
                            .get(name)
                            .map_or_else(|| shape.is_optional(), |value| shape.admits(value))
                    })
            }
            _ => false,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => formatter.write_str("any"),
            Self::Null => formatter.write_str("null"),
            Self::Bool => formatter.write_str("bool"),
            Self::Int => formatter.write_str("int"),
            Self::Float => formatter.write_str("float"),
            Self::Text => formatter.write_str("text"),
            Self::List(element) => write!(formatter, "[{element}]"),
            Self::Optional(inner) => write!(formatter, "{inner}?"),
            Self::Record(fields) => {
                formatter.write_str("{")?;
                for (position, (name, shape)) in fields.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(",")?;
                    }
                    write!(formatter, " {name}: {shape}")?;
                }
                formatter.write_str(if fields.is_empty() { "}" } else { " }" })
            }
        }
    }
}
