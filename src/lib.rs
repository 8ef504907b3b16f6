//! # lenspath
//!
//! Composable lenses for reading and immutably updating values nested deep
//! inside immutable data.
//!
//! ## Overview
//!
//! A [`Lens<S, A>`] pairs a getter and a setter for one focus `A` inside a
//! root `S`. Lenses compose, so a lens on a record field can be extended into
//! a lens on a field of that field, and so on down to any depth. Writing
//! through a lens never mutates the root: it returns a new root in which only
//! the containers on the path to the focus are copied, sharing everything
//! else.
//!
//! - **Lens**: total get/set access ([`Lens`], [`identity`], [`compose`])
//! - **Optional**: access through steps that may be absent, such as an
//!   out-of-range index or a `None` ([`Optional`])
//! - **Navigation**: `index`, `some` and `shared` on lenses, plus dotted field
//!   methods generated by `#[derive(Lenses)]` ([`Navigate`], [`Sequence`])
//! - **Dynamic data**: lenses over runtime-shaped [`dynamic::Value`] trees
//!
//! ## Feature Flags
//!
//! - `derive` (default): the `Lenses` derive macro
//! - `dynamic` (default): the [`dynamic`] module
//! - `tracing`: emit `tracing` events for skipped writes and rejected paths
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use lenspath::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Account {
//!     kind: String,
//!     handle: String,
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Person {
//!     name: String,
//!     age: u32,
//!     accounts: Vec<Account>,
//! }
//!
//! let azusa = Person {
//!     name: "Nakano Azusa".to_owned(),
//!     age: 15,
//!     accounts: vec![
//!         Account { kind: "twitter".to_owned(), handle: "@azusa".to_owned() },
//!         Account { kind: "facebook".to_owned(), handle: "nakano.azusa".to_owned() },
//!     ],
//! };
//!
//! let handle = identity::<Person>().accounts().index(1).handle();
//! assert_eq!(handle.get_option(&azusa).map(String::as_str), Some("nakano.azusa"));
//!
//! let renamed = handle.set(&azusa, "中野梓".to_owned());
//! assert_eq!(renamed.accounts[1].handle, "中野梓");
//! assert_eq!(azusa.accounts[1].handle, "nakano.azusa");
//! ```
//!
//! Navigation is checked by the compiler. Asking for a field the struct does
//! not have is an error:
//!
//! ```compile_fail
//! use lenspath::prelude::*;
//!
//! #[derive(Clone, Lenses)]
//! struct Person {
//!     name: String,
//! }
//!
//! let _ = identity::<Person>().hoge();
//! ```
//!
//! and so is indexing into something that is not a sequence:
//!
//! ```compile_fail
//! use lenspath::prelude::*;
//!
//! #[derive(Clone, Lenses)]
//! struct Person {
//!     name: String,
//! }
//!
//! let _ = identity::<Person>().name().index(0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use lenspath::prelude::*;
/// ```
pub mod prelude {
    pub use crate::lens::{Lens, compose, get, identity, set, update};
    pub use crate::navigate::Navigate;
    pub use crate::optional::Optional;
    pub use crate::sequence::Sequence;

    #[cfg(feature = "derive")]
    pub use lenspath_derive::Lenses;
}

mod lens;
mod navigate;
mod optional;
pub mod path;
mod sequence;

#[cfg(feature = "dynamic")]
pub mod dynamic;

pub use lens::{Lens, compose, get, identity, set, update};
pub use navigate::Navigate;
pub use optional::Optional;
pub use sequence::Sequence;

#[cfg(feature = "derive")]
pub use lenspath_derive::Lenses;

static_assertions::assert_impl_all!(Lens<Vec<String>, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Optional<Vec<String>, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(path::Path: Send, Sync, Clone);

#[cfg(feature = "dynamic")]
static_assertions::assert_impl_all!(dynamic::DynLens: Send, Sync, Clone);
#[cfg(feature = "dynamic")]
static_assertions::assert_impl_all!(dynamic::Value: Send, Sync, Clone);
#[cfg(feature = "dynamic")]
static_assertions::assert_impl_all!(dynamic::PathError: Send, Sync, std::error::Error);
