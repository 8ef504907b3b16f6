//! Optional accessors for values that may be absent.
//!
//! An [`Optional<S, A>`] is the partial counterpart of a [`Lens`]: its getter
//! returns `Option<&A>` and its setter reports whether the focus exists.
//! Optionals arise from indexing into sequences and from stepping inside an
//! `Option`, and absence propagates through composition: once any step is
//! absent, every deeper read yields `None` and every write is a no-op.
//! Missing containers are never created by a write.
//!
//! # Laws
//!
//! Every Optional must satisfy two laws (when the element is present):
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    if optional.get_option(&source).is_some() then
//!        optional.set(&source, optional.get_option(&source).unwrap().clone()) == source
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    if optional.get_option(&source).is_some() then
//!        optional.get_option(&optional.set(&source, value)) == Some(&value)
//!    ```
//!
//! When the element is absent, `set` returns the source unchanged.
//!
//! # Examples
//!
//! ```
//! use lenspath::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Profile { nickname: Option<String> }
//!
//! let nickname = Lens::named(
//!     "nickname",
//!     |profile: &Profile| &profile.nickname,
//!     |_: &Profile, nickname| Profile { nickname },
//! )
//! .some();
//!
//! let named = Profile { nickname: Some("azunyan".to_string()) };
//! assert_eq!(nickname.get_option(&named).map(String::as_str), Some("azunyan"));
//!
//! let anonymous = Profile { nickname: None };
//! assert_eq!(nickname.get_option(&anonymous), None);
//! assert_eq!(nickname.set(&anonymous, "azusa".to_string()), anonymous);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::lens::Lens;
use crate::path::{Path, Segment};
use crate::sequence::Sequence;

type PartialGetter<S, A> = dyn for<'a> Fn(&'a S) -> Option<&'a A> + Send + Sync;
type PartialSetter<S, A> = dyn Fn(&S, A) -> Option<S> + Send + Sync;

/// An Optional focuses on a value that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
pub struct Optional<S, A> {
    getter: Arc<PartialGetter<S, A>>,
    setter: Arc<PartialSetter<S, A>>,
    path: Path,
}

impl<S: 'static, A: 'static> Optional<S, A> {
    /// Creates an optional from a partial getter and a partial setter.
    ///
    /// The setter returns `None` when the focus does not exist in the given
    /// source; [`Optional::set`] then hands back the source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use lenspath::Optional;
    ///
    /// let head = Optional::new(
    ///     |items: &Vec<i32>| items.first(),
    ///     |items: &Vec<i32>, head: i32| {
    ///         (!items.is_empty()).then(|| std::iter::once(head).chain(items[1..].iter().copied()).collect())
    ///     },
    /// );
    /// assert_eq!(head.get_option(&vec![3, 4]), Some(&3));
    /// assert_eq!(head.set(&vec![3, 4], 9), vec![9, 4]);
    /// assert_eq!(head.set(&vec![], 9), Vec::<i32>::new());
    /// ```
    #[must_use]
    pub fn new<G, St>(getter: G, setter: St) -> Self
    where
        G: for<'a> Fn(&'a S) -> Option<&'a A> + Send + Sync + 'static,
        St: Fn(&S, A) -> Option<S> + Send + Sync + 'static,
    {
        Self::with_path(getter, setter, Path::single(Segment::Custom))
    }

    pub(crate) fn with_path<G, St>(getter: G, setter: St, path: Path) -> Self
    where
        G: for<'a> Fn(&'a S) -> Option<&'a A> + Send + Sync + 'static,
        St: Fn(&S, A) -> Option<S> + Send + Sync + 'static,
    {
        Self {
            getter: Arc::new(getter),
            setter: Arc::new(setter),
            path,
        }
    }

    /// Attempts to get a reference to the focused element.
    pub fn get_option<'a>(&self, source: &'a S) -> Option<&'a A> {
        (self.getter)(source)
    }

    /// Checks if the focused element is present.
    pub fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Writes `value` at the focus.
    ///
    /// Returns `None` if any step of the path is absent.
    #[must_use]
    pub fn try_set(&self, source: &S, value: A) -> Option<S> {
        (self.setter)(source, value)
    }

    /// Writes `value` at the focus, or returns a clone of the unchanged
    /// source if the path is absent.
    ///
    /// Cloning a root whose children are `Arc`-shared only bumps reference
    /// counts.
    #[must_use]
    pub fn set(&self, source: &S, value: A) -> S
    where
        S: Clone,
    {
        self.try_set(source, value).unwrap_or_else(|| self.skipped(source))
    }

    /// Rewrites the focused element with `function` if it is present.
    ///
    /// Returns `None` (without calling `function`) if the path is absent.
    #[must_use]
    pub fn try_update<F>(&self, source: &S, function: F) -> Option<S>
    where
        F: FnOnce(&A) -> A,
    {
        let value = function(self.get_option(source)?);
        self.try_set(source, value)
    }

    /// Rewrites the focused element with `function`, or returns a clone of
    /// the unchanged source if the path is absent.
    #[must_use]
    pub fn update<F>(&self, source: &S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
        S: Clone,
    {
        self.try_update(source, function).unwrap_or_else(|| self.skipped(source))
    }

    fn skipped(&self, source: &S) -> S
    where
        S: Clone,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(path = %self.path, "write skipped: focus is absent");
        source.clone()
    }

    /// Reads the focused element through a projection, if present.
    pub fn view<'a, B, F>(&self, source: &'a S, projection: F) -> Option<B>
    where
        F: FnOnce(&'a A) -> B,
    {
        self.get_option(source).map(projection)
    }

    /// Returns a reusable getter pre-composed with `projection`.
    pub fn viewer<B, F>(&self, projection: F) -> impl Fn(&S) -> Option<B> + use<S, A, B, F>
    where
        F: Fn(&A) -> B,
    {
        let getter = Arc::clone(&self.getter);
        move |source: &S| getter(source).map(&projection)
    }

    /// Returns a reusable setter that writes `value` at the focus when it is
    /// present and otherwise returns the source unchanged.
    pub fn setter(&self, value: A) -> impl Fn(&S) -> S + use<S, A>
    where
        A: Clone,
        S: Clone,
    {
        let optional = self.clone();
        move |source: &S| optional.set(source, value.clone())
    }

    /// Returns a reusable setter pre-composed with a focus transform.
    pub fn modifier<F>(&self, function: F) -> impl Fn(&S) -> S + use<S, A, F>
    where
        F: Fn(&A) -> A,
        S: Clone,
    {
        let optional = self.clone();
        move |source: &S| optional.update(source, &function)
    }

    /// Composes this optional with a lens on its focus.
    #[must_use]
    pub fn compose<B: 'static>(self, inner: Lens<A, B>) -> Optional<S, B> {
        self.compose_optional(inner.to_optional())
    }

    /// Composes this optional with another optional on its focus.
    ///
    /// The result is present only when both steps are present.
    #[must_use]
    pub fn compose_optional<B: 'static>(self, inner: Optional<A, B>) -> Optional<S, B> {
        let path = self.path.join(&inner.path);
        let outer_get = self.getter;
        let outer_set = self.setter;
        let read = Arc::clone(&outer_get);
        let inner_get = inner.getter;
        let inner_set = inner.setter;
        Optional::with_path(
            move |source| read(source).and_then(|parent| inner_get(parent)),
            move |source, value| {
                let rebuilt = inner_set(outer_get(source)?, value)?;
                outer_set(source, rebuilt)
            },
            path,
        )
    }

    /// The steps this optional takes from its root.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }
}

impl<E: 'static> Optional<E, E> {
    fn identity() -> Self {
        Self::with_path(|source| Some(source), |_, value| Some(value), Path::root())
    }
}

impl<Q, E> Optional<Q, E>
where
    Q: Sequence<Element = E> + 'static,
    E: 'static,
{
    /// Focuses on the element at `index` of a sequence.
    ///
    /// `get_option` is `None` and `set` is a no-op when `index` is out of
    /// range. A successful write copies the sequence storage once.
    ///
    /// # Example
    ///
    /// ```
    /// use lenspath::Optional;
    ///
    /// let third = Optional::<Vec<char>, char>::element(2);
    /// assert_eq!(third.get_option(&vec!['a', 'b', 'c']), Some(&'c'));
    /// assert_eq!(third.try_set(&vec!['a'], 'z'), None);
    /// ```
    #[must_use]
    pub fn element(index: usize) -> Self {
        Self::with_path(
            move |sequence: &Q| sequence.element(index),
            move |sequence: &Q, value: E| sequence.with_element(index, value),
            Path::single(Segment::Index(index)),
        )
    }
}

impl<T: 'static> Optional<Option<T>, T> {
    /// Focuses on the inside of an `Option`.
    ///
    /// Writing into `None` is a no-op.
    #[must_use]
    pub fn present() -> Self {
        Self::with_path(
            |option: &Option<T>| option.as_ref(),
            |option: &Option<T>, value| option.is_some().then_some(Some(value)),
            Path::single(Segment::Present),
        )
    }
}

impl<S: 'static, A: Sequence + 'static> Optional<S, A>
where
    A::Element: 'static,
{
    /// Focuses on the element at `index` of the focused sequence.
    #[must_use]
    pub fn index(self, index: usize) -> Optional<S, A::Element> {
        self.compose_optional(Optional::element(index))
    }
}

impl<S: 'static, T: 'static> Optional<S, Option<T>> {
    /// Focuses on the inside of the focused `Option`.
    #[must_use]
    pub fn some(self) -> Optional<S, T> {
        self.compose_optional(Optional::present())
    }
}

impl<S: 'static, T: 'static> Optional<S, Arc<T>> {
    /// Navigates through a shared pointer. See [`Lens::shared`].
    #[must_use]
    pub fn shared(self) -> Optional<S, T> {
        self.compose(Lens::<Arc<T>, Arc<T>>::identity().shared())
    }
}

impl<S, A> Clone for Optional<S, A> {
    fn clone(&self) -> Self {
        Self {
            getter: Arc::clone(&self.getter),
            setter: Arc::clone(&self.setter),
            path: self.path.clone(),
        }
    }
}

impl<S, A> fmt::Debug for Optional<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Optional")
            .field("path", &format_args!("{}", self.path))
            .finish_non_exhaustive()
    }
}

impl<S: 'static> Default for Optional<S, S> {
    /// The always-present identity optional.
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_in_range() {
        let optional = Optional::<Vec<i32>, i32>::element(1);
        let source = vec![1, 2, 3];
        assert_eq!(optional.get_option(&source), Some(&2));
        assert_eq!(optional.set(&source, 20), vec![1, 20, 3]);
        assert_eq!(source, vec![1, 2, 3]);
    }

    #[test]
    fn test_element_out_of_range_is_absent() {
        let optional = Optional::<Vec<i32>, i32>::element(5);
        let source = vec![1, 2, 3];
        assert_eq!(optional.get_option(&source), None);
        assert!(!optional.is_present(&source));
        assert_eq!(optional.try_set(&source, 0), None);
        assert_eq!(optional.set(&source, 0), source);
    }

    #[test]
    fn test_present_never_materializes() {
        let optional = Optional::<Option<i32>, i32>::present();
        assert_eq!(optional.set(&None, 1), None);
        assert_eq!(optional.set(&Some(0), 1), Some(1));
    }

    #[test]
    fn test_try_update_does_not_call_function_when_absent() {
        let optional = Optional::<Option<i32>, i32>::present();
        let result = optional.try_update(&None, |_| unreachable!("focus is absent"));
        assert_eq!(result, None);
    }

    #[test]
    fn test_compose_propagates_absence() {
        let nested = Optional::<Vec<Vec<i32>>, Vec<i32>>::element(0).index(1);
        assert_eq!(nested.get_option(&vec![vec![1, 2]]), Some(&2));
        assert_eq!(nested.get_option(&vec![vec![1]]), None);
        assert_eq!(nested.get_option(&vec![]), None);
        assert_eq!(nested.set(&vec![vec![1]], 9), vec![vec![1]]);
        assert_eq!(nested.path().to_string(), "[0][1]");
    }

    #[test]
    fn test_default_is_identity() {
        let optional = Optional::<i32, i32>::default();
        assert_eq!(optional.get_option(&3), Some(&3));
        assert_eq!(optional.set(&3, 4), 4);
        assert!(optional.path().is_empty());
    }
}
