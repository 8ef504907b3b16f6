//! Lenses over dynamically-typed data.
//!
//! Statically typed lenses reject a misspelled field at compile time. For
//! data whose structure is only known at runtime (a parsed document, a
//! configuration tree), this module offers the closest equivalent: a
//! [`DynLens`] is extended by field name or index against a [`Shape`], and a
//! step the shape rules out fails immediately with a [`PathError`] instead of
//! producing a lens that always reads as absent.
//!
//! ```
//! use lenspath::dynamic::{DynLens, PathError, Shape};
//!
//! let person = Shape::record([("name", Shape::Text), ("age", Shape::Int)]);
//! let root = DynLens::root(person);
//!
//! assert!(root.field("name").is_ok());
//! assert!(matches!(root.field("hoge"), Err(PathError::UnknownField { .. })));
//! assert!(matches!(root.path("age[0]"), Err(PathError::NotAList { .. })));
//! ```

mod dyn_lens;
mod error;
mod parse;
mod shape;
mod value;

pub use dyn_lens::DynLens;
pub use error::PathError;
pub use shape::Shape;
pub use value::Value;
