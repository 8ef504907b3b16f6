//! Dynamically-typed values with shared children.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A dynamically-typed, immutable value.
///
/// Lists and records keep their children behind `Arc`, so cloning a `Value`
/// never copies more than one reference count, and rebuilding a record with
/// one field replaced shares every other field with the original.
///
/// # Examples
///
/// ```
/// use lenspath::dynamic::Value;
///
/// let azusa = Value::record([
///     ("name", Value::from("Nakano Azusa")),
///     ("age", Value::from(15)),
/// ]);
///
/// assert_eq!(azusa.field("name").and_then(Value::as_str), Some("Nakano Azusa"));
/// assert_eq!(azusa.field("height"), None);
/// assert_eq!(azusa.kind(), "record");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Text(Arc<str>),
    /// An ordered list of values.
    List(Arc<[Value]>),
    /// A record of named fields.
    Record(Arc<BTreeMap<String, Value>>),
}

impl Value {
    /// Builds a record from `(name, value)` pairs.
    #[must_use]
    pub fn record<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Self)>,
        K: Into<String>,
    {
        Self::Record(Arc::new(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        ))
    }

    /// Builds a list from values.
    #[must_use]
    pub fn list<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::List(elements.into_iter().collect())
    }

    /// A short name for the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The boolean, if this is a [`Value::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer, if this is a [`Value::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The number, if this is a [`Value::Float`] or a [`Value::Int`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// The string, if this is a [`Value::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(&**text),
            _ => None,
        }
    }

    /// The elements, if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(elements) => Some(&**elements),
            _ => None,
        }
    }

    /// The fields, if this is a [`Value::Record`].
    #[must_use]
    pub fn as_record(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Record(fields) => Some(&**fields),
            _ => None,
        }
    }

    /// The field called `name`, if this is a record that has it.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Self> {
        self.as_record()?.get(name)
    }

    /// A copy of this record with the field `name` set to `value`.
    ///
    /// The field is inserted if the record lacks it. Returns `None` if this
    /// value is not a record.
    #[must_use]
    pub fn with_field(&self, name: &str, value: Self) -> Option<Self> {
        let mut fields = self.as_record()?.clone();
        fields.insert(name.to_owned(), value);
        Some(Self::Record(Arc::new(fields)))
    }

    /// The element at `index`, if this is a list long enough to have it.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&Self> {
        self.as_list()?.get(index)
    }

    /// A copy of this list with the element at `index` replaced.
    ///
    /// Returns `None` if this value is not a list or `index` is out of range.
    #[must_use]
    pub fn with_element(&self, index: usize, value: Self) -> Option<Self> {
        let elements = self.as_list()?;
        if index >= elements.len() {
            return None;
        }
        let mut copy = elements.to_vec();
        copy[index] = value;
        Some(Self::List(copy.into()))
    }

    /// Returns `true` when both values are the same shared node.
    ///
    /// Lists, records and strings compare by pointer; scalars, which carry no
    /// shared storage, compare by value.
    #[must_use]
    pub fn same_node(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => Arc::ptr_eq(left, right),
            (Self::List(left), Self::List(right)) => Arc::ptr_eq(left, right),
            (Self::Record(left), Self::Record(right)) => Arc::ptr_eq(left, right),
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left.to_bits() == right.to_bits(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Text(text) => write!(formatter, "{text:?}"),
            Self::List(elements) => {
                formatter.write_str("[")?;
                for (position, element) in elements.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                formatter.write_str("]")
            }
            Self::Record(fields) => {
                formatter.write_str("{")?;
                for (position, (name, value)) in fields.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(",")?;
                    }
                    write!(formatter, " {name}: {value}")?;
                }
                formatter.write_str(if fields.is_empty() { "}" } else { " }" })
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(Arc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(Arc::from(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::list(iter)
    }
}
