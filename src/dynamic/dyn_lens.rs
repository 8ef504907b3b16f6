use std::fmt;
use std::sync::Arc;

use crate::optional::Optional;
use crate::path::{Path, Segment};

use super::error::PathError;
use super::parse::{Step, parse};
use super::shape::Shape;
use super::value::Value;

/// A lens over [`Value`] trees, extended by field name and index at runtime.
///
/// Every extension is checked against the [`Shape`] of the current focus, so
/// asking for a key the focus can never have fails immediately with a
/// [`PathError`]. Once built, a `DynLens` behaves like an
/// [`Optional<Value, Value>`]: reads of absent data give `None`, writes
/// through absent data leave the root unchanged.
///
/// # Examples
///
/// ```
/// use lenspath::dynamic::{DynLens, Shape, Value};
///
/// let account = Shape::record([("type", Shape::Text), ("handle", Shape::Text)]);
/// let person = Shape::record([
///     ("name", Shape::Text),
///     ("accounts", Shape::list(account)),
/// ]);
///
/// let azusa = Value::record([
///     ("name", Value::from("Nakano Azusa")),
///     ("accounts", Value::list([
///         Value::record([("type", Value::from("twitter")), ("handle", Value::from("azusa"))]),
///         Value::record([("type", Value::from("facebook")), ("handle", Value::from("nakano.azusa"))]),
///     ])),
/// ]);
///
/// let handle = DynLens::root(person).path("accounts[1].handle")?;
/// assert_eq!(handle.get(&azusa), Some(&Value::from("nakano.azusa")));
///
/// let renamed = handle.set(&azusa, Value::from("azunyan"));
/// assert_eq!(handle.get(&renamed), Some(&Value::from("azunyan")));
/// assert_eq!(handle.get(&azusa), Some(&Value::from("nakano.azusa")));
/// # Ok::<(), lenspath::dynamic::PathError>(())
/// ```
#[derive(Clone)]
pub struct DynLens {
    optic: Optional<Value, Value>,
    shape: Shape,
}

impl DynLens {
    /// The identity lens over values of the given shape.
    #[must_use]
    pub fn root(shape: Shape) -> Self {
        Self {
            optic: Optional::default(),
            shape,
        }
    }

    /// Extends this lens to the field `name` of the focused record.
    ///
    /// # Errors
    ///
    /// [`PathError::UnknownField`] if the focused record shape does not
    /// declare `name`, and [`PathError::NotARecord`] if the focus is not a
    /// record at all.
    pub fn field(&self, name: &str) -> Result<Self, PathError> {
        let shape = self.field_shape(name)?;
        let key: Arc<str> = Arc::from(name);
        let write_key = Arc::clone(&key);
        let step = Optional::with_path(
            move |value: &Value| value.field(&key),
            move |value: &Value, field: Value| value.with_field(&write_key, field),
            Path::single(Segment::field(name.to_owned())),
        );
        Ok(self.extend(step, shape))
    }

    /// Extends this lens to the element at `index` of the focused list.
    ///
    /// The index is not bounds checked here; an out of range index reads as
    /// absent.
    ///
    /// # Errors
    ///
    /// [`PathError::NotAList`] if the focus is not a list.
    pub fn index(&self, index: usize) -> Result<Self, PathError> {
        let shape = self.element_shape(index)?;
        let step = Optional::with_path(
            move |value: &Value| value.element(index),
            move |value: &Value, element: Value| value.with_element(index, element),
            Path::single(Segment::Index(index)),
        );
        Ok(self.extend(step, shape))
    }

    /// Extends this lens along a textual path such as `accounts[1].handle`.
    ///
    /// The empty string is the current focus.
    ///
    /// # Errors
    ///
    /// [`PathError::Syntax`] if `path` is malformed, otherwise the first
    /// error [`DynLens::field`] or [`DynLens::index`] reports along the way.
    pub fn path(&self, path: &str) -> Result<Self, PathError> {
        parse(path)?
            .iter()
            .try_fold(self.clone(), |lens, step| match step {
                Step::Field(name) => lens.field(name),
                Step::Index(index) => lens.index(*index),
            })
    }

    /// The focused value, if every step of the path is present.
    #[must_use]
    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.optic.get_option(root)
    }

    /// Writes `value` at the focus.
    ///
    /// Returns `None` if an intermediate container is missing.
    #[must_use]
    pub fn try_set(&self, root: &Value, value: Value) -> Option<Value> {
        self.optic.try_set(root, value)
    }

    /// Writes `value` at the focus, or returns `root` unchanged (the same
    /// shared node) if an intermediate container is missing.
    #[must_use]
    pub fn set(&self, root: &Value, value: Value) -> Value {
        self.optic.set(root, value)
    }

    /// Rewrites the focused value with `function`, if present.
    #[must_use]
    pub fn update<F>(&self, root: &Value, function: F) -> Value
    where
        F: FnOnce(&Value) -> Value,
    {
        self.optic.update(root, function)
    }

    /// The shape of the focus.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The steps taken from the root.
    #[must_use]
    pub const fn focus_path(&self) -> &Path {
        self.optic.path()
    }

    /// The underlying optional, for composing with static optics.
    #[must_use]
    pub fn as_optional(&self) -> &Optional<Value, Value> {
        &self.optic
    }

    fn extend(&self, step: Optional<Value, Value>, shape: Shape) -> Self {
        Self {
            optic: self.optic.clone().compose_optional(step),
            shape,
        }
    }

    fn field_shape(&self, name: &str) -> Result<Shape, PathError> {
        lookup_field(&self.shape, name).ok_or_else(|| {
            let error = if declares_fields(&self.shape) {
                PathError::UnknownField {
                    field: name.to_owned(),
                    focus: self.shape.clone(),
                    path: self.focus_path().clone(),
                }
            } else {
                PathError::NotARecord {
                    field: name.to_owned(),
                    focus: self.shape.clone(),
                    path: self.focus_path().clone(),
                }
            };
            reject(error)
        })
    }

    fn element_shape(&self, index: usize) -> Result<Shape, PathError> {
        lookup_element(&self.shape).ok_or_else(|| {
            reject(PathError::NotAList {
                index,
                focus: self.shape.clone(),
                path: self.focus_path().clone(),
            })
        })
    }
}

fn declares_fields(shape: &Shape) -> bool {
    match shape {
        Shape::Record(_) => true,
        Shape::Optional(inner) => declares_fields(inner),
        _ => false,
    }
}

fn lookup_field(shape: &Shape, name: &str) -> Option<Shape> {
    match shape {
        Shape::Any => Some(Shape::Any),
        Shape::Record(fields) => fields.get(name).cloned(),
        Shape::Optional(inner) => lookup_field(inner, name).map(Shape::optional),
        _ => None,
    }
}

fn lookup_element(shape: &Shape) -> Option<Shape> {
    match shape {
        Shape::Any => Some(Shape::Any),
        Shape::List(element) => Some((**element).clone()),
        Shape::Optional(inner) => lookup_element(inner).map(Shape::optional),
        _ => None,
    }
}

#[cfg_attr(not(feature = "tracing"), allow(clippy::missing_const_for_fn))]
fn reject(error: PathError) -> PathError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%error, "dynamic lens rejected");
    error
}

impl fmt::Debug for DynLens {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DynLens")
            .field("path", self.focus_path())
            .field("shape", &self.shape)
            .finish()
    }
}
