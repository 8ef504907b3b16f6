//! Derive macro for lenspath.
//!
//! This crate provides `#[derive(Lenses)]`, which generates, for every named
//! field of a struct, a lens constructor and a navigation method. Use it
//! through the `lenspath` crate, which re-exports it.
//!
//! # Example
//!
//! ```rust,ignore
//! use lenspath::prelude::*;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated:
//! // - Point::x_lens() -> Lens<Point, i32>
//! // - Point::y_lens() -> Lens<Point, i32>
//! // - trait PointLenses, giving `.x()` and `.y()` on any lens ending at a Point
//!
//! let point = Point { x: 10, y: 20 };
//! let x = identity::<Point>().x();
//! assert_eq!(*x.get(&point), 10);
//! assert_eq!(x.set(&point, 1).x, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating lenses for struct fields.
///
/// # Requirements
///
/// - The struct must have named fields (not a tuple or unit struct)
/// - Every field other than the one being written must implement `Clone`,
///   since a write rebuilds the struct around the new value
/// - The struct and its field types must be `'static`
///
/// # Generated Code
///
/// For a struct `Person` with a field `name: String`:
///
/// ```rust,ignore
/// impl Person {
///     pub fn name_lens() -> lenspath::Lens<Person, String> { ... }
/// }
///
/// pub trait PersonLenses: lenspath::Navigate<Person> {
///     fn name(self) -> <Self as lenspath::Navigate<Person>>::Output<String> { ... }
/// }
///
/// impl<N: lenspath::Navigate<Person>> PersonLenses for N {}
/// ```
///
/// `PersonLenses` is available on `Lens<S, Person>`, `Lens<S, Arc<Person>>`,
/// `Optional<S, Person>` and `Optional<S, Arc<Person>>`, so field access can
/// be chained: `identity::<Team>().leader().name()`.
///
/// # Attributes
///
/// - `#[lens(rename = "other")]` on a field names the navigation method
///   `other` instead of the field name. The lens constructor keeps the field
///   name.
///
/// # Name collisions
///
/// Inherent methods of `Lens` and `Optional` (`get`, `set`, `update`,
/// `index`, ...) take precedence over generated navigation methods. For a
/// field called `get`, either rename it with `#[lens(rename = "...")]` or
/// call `PersonLenses::get(lens)` / `lens.compose(Person::get_lens())`.
#[proc_macro_derive(Lenses, attributes(lens))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
