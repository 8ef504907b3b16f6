//! Navigation through generated field accessors.
//!
//! `#[derive(Lenses)]` generates, for a struct `T`, an extension trait with
//! one method per field. That trait is implemented for every value that
//! implements [`Navigate<T>`], i.e. every lens or optional whose focus is a
//! `T` or an `Arc<T>`. Navigating from a [`Lens`] yields a [`Lens`];
//! navigating from an [`Optional`] stays an [`Optional`], so absence keeps
//! propagating.

use std::sync::Arc;

use crate::lens::Lens;
use crate::optional::Optional;

/// A lens-like value whose focus is (or leads directly to) a `T`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use lenspath::{Lens, Navigate, identity};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter { hits: u32 }
///
/// let hits = Lens::named("hits", |c: &Counter| &c.hits, |_: &Counter, hits| Counter { hits });
///
/// // Through a shared pointer: the step allocates one new `Arc` on write.
/// let shared = identity::<Arc<Counter>>().then(hits);
/// let counter = Arc::new(Counter { hits: 1 });
/// assert_eq!(*shared.get(&counter), 1);
/// assert_eq!(shared.set(&counter, 2).hits, 2);
/// ```
pub trait Navigate<T>: Sized {
    /// What navigating one step further produces.
    type Output<B: 'static>;

    /// Appends `step`, a lens from `T` to one of its parts.
    fn then<B: 'static>(self, step: Lens<T, B>) -> Self::Output<B>;
}

impl<S: 'static, T: 'static> Navigate<T> for Lens<S, T> {
    type Output<B: 'static> = Lens<S, B>;

    fn then<B: 'static>(self, step: Lens<T, B>) -> Lens<S, B> {
        self.compose(step)
    }
}

impl<S: 'static, T: 'static> Navigate<T> for Lens<S, Arc<T>> {
    type Output<B: 'static> = Lens<S, B>;

    fn then<B: 'static>(self, step: Lens<T, B>) -> Lens<S, B> {
        self.shared().compose(step)
    }
}

impl<S: 'static, T: 'static> Navigate<T> for Optional<S, T> {
    type Output<B: 'static> = Optional<S, B>;

    fn then<B: 'static>(self, step: Lens<T, B>) -> Optional<S, B> {
        self.compose(step)
    }
}

impl<S: 'static, T: 'static> Navigate<T> for Optional<S, Arc<T>> {
    type Output<B: 'static> = Optional<S, B>;

    fn then<B: 'static>(self, step: Lens<T, B>) -> Optional<S, B> {
        self.shared().compose(step)
    }
}
