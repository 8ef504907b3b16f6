//! Lenses: total get/set access to a value nested inside a larger structure.
//!
//! A [`Lens<S, A>`] pairs a getter `&S -> &A` with a setter `(&S, A) -> S`.
//! The setter never mutates its input: it builds a new `S` in which only the
//! containers on the path to the focus are copied. Every other value is cloned
//! shallowly, so when children are held behind `Arc` they are shared by
//! reference between the old and the new root.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **`GetPut` Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(&source, lens.get(&source).clone()) == source
//!    ```
//!
//! 2. **`PutGet` Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(&source, value)) == &value
//!    ```
//!
//! 3. **`PutPut` Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(&lens.set(&source, v1), v2) == lens.set(&source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use lenspath::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = Lens::new(
//!     |point: &Point| &point.x,
//!     |point: &Point, x: i32| Point { x, ..point.clone() },
//! );
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(&point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! assert_eq!(point.x, 10);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::optional::Optional;
use crate::path::{Path, Segment};
use crate::sequence::Sequence;

type Getter<S, A> = dyn for<'a> Fn(&'a S) -> &'a A + Send + Sync;
type Setter<S, A> = dyn Fn(&S, A) -> S + Send + Sync;

/// A Lens focuses on a single value within a larger structure.
///
/// A lens holds nothing but its two functions and a descriptive [`Path`]; it
/// never captures a particular root. Cloning is a pair of reference-count
/// increments, so lenses can be built once and cached or shared across
/// threads.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused value)
pub struct Lens<S, A> {
    getter: Arc<Getter<S, A>>,
    setter: Arc<Setter<S, A>>,
    path: Path,
}

impl<S: 'static> Lens<S, S> {
    /// The identity lens, focusing on the whole structure.
    ///
    /// `get` returns the source itself and `set` replaces it entirely. It is
    /// the left and right unit of [`compose`](Lens::compose) and the usual
    /// starting point of a navigation chain.
    ///
    /// # Example
    ///
    /// ```
    /// use lenspath::Lens;
    ///
    /// let lens = Lens::<i32, i32>::identity();
    /// assert_eq!(*lens.get(&7), 7);
    /// assert_eq!(lens.set(&7, 8), 8);
    /// ```
    #[must_use]
    pub fn identity() -> Self {
        Self::with_path(|source| source, |_, value| value, Path::root())
    }
}

impl<S: 'static, A: 'static> Lens<S, A> {
    /// Creates a lens from a getter and a setter.
    ///
    /// The setter receives the current source by reference and must return a
    /// new source; it has no way to mutate the original.
    ///
    /// # Example
    ///
    /// ```
    /// use lenspath::Lens;
    ///
    /// let first = Lens::new(
    ///     |pair: &(i32, String)| &pair.0,
    ///     |pair: &(i32, String), first: i32| (first, pair.1.clone()),
    /// );
    /// assert_eq!(first.set(&(1, "one".to_string()), 2), (2, "one".to_string()));
    /// ```
    #[must_use]
    pub fn new<G, St>(getter: G, setter: St) -> Self
    where
        G: for<'a> Fn(&'a S) -> &'a A + Send + Sync + 'static,
        St: Fn(&S, A) -> S + Send + Sync + 'static,
    {
        Self::with_path(getter, setter, Path::single(Segment::Custom))
    }

    /// Creates a lens on the record field called `name`.
    ///
    /// Behaves like [`Lens::new`] but records the field name in the lens path.
    /// This is what `#[derive(Lenses)]` generates for every named field.
    #[must_use]
    pub fn named<G, St>(name: impl Into<Cow<'static, str>>, getter: G, setter: St) -> Self
    where
        G: for<'a> Fn(&'a S) -> &'a A + Send + Sync + 'static,
        St: Fn(&S, A) -> S + Send + Sync + 'static,
    {
        Self::with_path(getter, setter, Path::single(Segment::field(name)))
    }

    pub(crate) fn with_path<G, St>(getter: G, setter: St, path: Path) -> Self
    where
        G: for<'a> Fn(&'a S) -> &'a A + Send + Sync + 'static,
        St: Fn(&S, A) -> S + Send + Sync + 'static,
    {
        Self {
            getter: Arc::new(getter),
            setter: Arc::new(setter),
            path,
        }
    }

    /// Gets a reference to the focused value.
    pub fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    /// Returns a new source with the focused value replaced by `value`.
    ///
    /// `source` is only borrowed and is left untouched.
    #[must_use]
    pub fn set(&self, source: &S, value: A) -> S {
        (self.setter)(source, value)
    }

    /// Returns a new source with the focused value replaced by
    /// `function(current)`.
    ///
    /// The focus is read once and the path is rebuilt once.
    ///
    /// # Example
    ///
    /// ```
    /// use lenspath::Lens;
    ///
    /// let lens = Lens::<Vec<i32>, Vec<i32>>::identity();
    /// let longer = lens.update(&vec![1, 2], |items| items.iter().copied().chain([3]).collect());
    /// assert_eq!(longer, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn update<F>(&self, source: &S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let value = function(self.get(source));
        self.set(source, value)
    }

    /// Reads the focused value through a projection.
    pub fn view<'a, B, F>(&self, source: &'a S, projection: F) -> B
    where
        F: FnOnce(&'a A) -> B,
    {
        projection(self.get(source))
    }

    /// Returns a reusable getter pre-composed with `projection`.
    ///
    /// # Example
    ///
    /// ```
    /// use lenspath::Lens;
    ///
    /// let length = Lens::<String, String>::identity().viewer(|text: &String| text.len());
    /// assert_eq!(length(&"azusa".to_string()), 5);
    /// ```
    pub fn viewer<B, F>(&self, projection: F) -> impl Fn(&S) -> B + use<S, A, B, F>
    where
        F: Fn(&A) -> B,
    {
        let getter = Arc::clone(&self.getter);
        move |source: &S| projection(getter(source))
    }

    /// Returns a reusable setter that writes `value` at the focus.
    pub fn setter(&self, value: A) -> impl Fn(&S) -> S + use<S, A>
    where
        A: Clone,
    {
        let setter = Arc::clone(&self.setter);
        move |source: &S| setter(source, value.clone())
    }

    /// Returns a reusable setter pre-composed with a focus transform.
    ///
    /// The transform may itself be a setter produced by a lens over the focus
    /// type, which composes the two writes without a second traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use lenspath::Lens;
    ///
    /// let pair = Lens::<(i32, i32), (i32, i32)>::identity();
    /// let second = Lens::new(|p: &(i32, i32)| &p.1, |p: &(i32, i32), v: i32| (p.0, v));
    /// let write = pair.modifier(second.setter(9));
    /// assert_eq!(write(&(1, 2)), (1, 9));
    /// ```
    pub fn modifier<F>(&self, function: F) -> impl Fn(&S) -> S + use<S, A, F>
    where
        F: Fn(&A) -> A,
    {
        let getter = Arc::clone(&self.getter);
        let setter = Arc::clone(&self.setter);
        move |source: &S| {
            let value = function(getter(source));
            setter(source, value)
        }
    }

    /// Composes this lens with a lens on its focus.
    ///
    /// `get` runs the outer getter then the inner one. `set` reads the outer
    /// focus, rebuilds it with the inner setter and writes it back with the
    /// outer setter. Composition is associative and [`Lens::identity`] is a
    /// unit on both sides.
    ///
    /// # Example
    ///
    /// ```
    /// use lenspath::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Inner { value: i32 }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Outer { inner: Inner }
    ///
    /// let inner = Lens::named("inner", |o: &Outer| &o.inner, |_: &Outer, inner| Outer { inner });
    /// let value = Lens::named("value", |i: &Inner| &i.value, |_: &Inner, value| Inner { value });
    /// let nested = inner.compose(value);
    ///
    /// let data = Outer { inner: Inner { value: 42 } };
    /// assert_eq!(*nested.get(&data), 42);
    /// assert_eq!(nested.set(&data, 7).inner.value, 7);
    /// assert_eq!(nested.path().to_string(), "inner.value");
    /// ```
    #[must_use]
    pub fn compose<B: 'static>(self, inner: Lens<A, B>) -> Lens<S, B> {
        let path = self.path.join(&inner.path);
        let outer_get = self.getter;
        let outer_set = self.setter;
        let read = Arc::clone(&outer_get);
        let inner_get = inner.getter;
        let inner_set = inner.setter;
        Lens::with_path(
            move |source| inner_get(read(source)),
            move |source, value| {
                let rebuilt = inner_set(outer_get(source), value);
                outer_set(source, rebuilt)
            },
            path,
        )
    }

    /// Composes this lens with an optional accessor on its focus.
    #[must_use]
    pub fn compose_optional<B: 'static>(self, inner: Optional<A, B>) -> Optional<S, B> {
        self.to_optional().compose_optional(inner)
    }

    /// Views this lens as an [`Optional`] that is always present.
    #[must_use]
    pub fn to_optional(self) -> Optional<S, A> {
        let getter = self.getter;
        let setter = self.setter;
        Optional::with_path(
            move |source| Some(getter(source)),
            move |source, value| Some(setter(source, value)),
            self.path,
        )
    }

    /// The steps this lens takes from its root.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }
}

impl<S: 'static, A: Sequence + 'static> Lens<S, A>
where
    A::Element: 'static,
{
    /// Focuses on the element at `index` of the focused sequence.
    ///
    /// The result is an [`Optional`]: reading past the end yields `None` and
    /// writing past the end leaves the source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use lenspath::Lens;
    ///
    /// let second = Lens::<Vec<i32>, Vec<i32>>::identity().index(1);
    /// assert_eq!(second.get_option(&vec![1, 2, 3]), Some(&2));
    /// assert_eq!(second.get_option(&vec![1]), None);
    /// assert_eq!(second.set(&vec![1], 5), vec![1]);
    /// ```
    #[must_use]
    pub fn index(self, index: usize) -> Optional<S, A::Element> {
        self.compose_optional(Optional::element(index))
    }
}

impl<S: 'static, T: 'static> Lens<S, Option<T>> {
    /// Focuses on the inside of the focused `Option`.
    ///
    /// Writing through `None` is a no-op: the missing value is never created.
    #[must_use]
    pub fn some(self) -> Optional<S, T> {
        self.compose_optional(Optional::present())
    }
}

impl<S: 'static, T: 'static> Lens<S, Arc<T>> {
    /// Navigates through a shared pointer.
    ///
    /// Writing allocates one new `Arc` for the rebuilt value; siblings of the
    /// focus inside it are still shared.
    #[must_use]
    pub fn shared(self) -> Lens<S, T> {
        self.compose(Lens::through_arc())
    }
}

impl<T: 'static> Lens<Arc<T>, T> {
    fn through_arc() -> Self {
        Self::with_path(|shared: &Arc<T>| &**shared, |_, value| Arc::new(value), Path::root())
    }
}

impl<S, A> Clone for Lens<S, A> {
    fn clone(&self) -> Self {
        Self {
            getter: Arc::clone(&self.getter),
            setter: Arc::clone(&self.setter),
            path: self.path.clone(),
        }
    }
}

impl<S, A> fmt::Debug for Lens<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Lens")
            .field("path", &format_args!("{}", self.path))
            .finish_non_exhaustive()
    }
}

/// Returns the identity lens on `T`.
///
/// Shorthand for [`Lens::identity`], convenient at the head of a chain:
///
/// ```
/// use lenspath::identity;
///
/// let whole = identity::<Vec<i32>>();
/// assert_eq!(whole.get(&vec![1, 2]), &vec![1, 2]);
/// ```
#[must_use]
pub fn identity<T: 'static>() -> Lens<T, T> {
    Lens::identity()
}

/// Composes `outer` with `inner`. See [`Lens::compose`].
#[must_use]
pub fn compose<S: 'static, A: 'static, B: 'static>(outer: Lens<S, A>, inner: Lens<A, B>) -> Lens<S, B> {
    outer.compose(inner)
}

/// Reads the focus of `lens` in `source`. See [`Lens::get`].
pub fn get<'a, S: 'static, A: 'static>(lens: &Lens<S, A>, source: &'a S) -> &'a A {
    lens.get(source)
}

/// Writes `value` at the focus of `lens`, returning a new source.
/// See [`Lens::set`].
#[must_use]
pub fn set<S: 'static, A: 'static>(lens: &Lens<S, A>, value: A, source: &S) -> S {
    lens.set(source, value)
}

/// Rewrites the focus of `lens` with `function`, returning a new source.
/// See [`Lens::update`].
#[must_use]
pub fn update<S: 'static, A: 'static, F>(lens: &Lens<S, A>, function: F, source: &S) -> S
where
    F: FnOnce(&A) -> A,
{
    lens.update(source, function)
}
