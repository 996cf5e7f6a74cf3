//! Typed attributes carried by graphs, nodes and edges.
//!
//! An attribute value is one of a closed set of kinds, see [`AttributeValue`].
//! Every element owns an [`Attributes`] map and exposes it through the [`Element`] trait,
//! whose default methods give the predicates (`has_number`, `has_vector`, ...),
//! typed getters and mutation.

mod value;
pub use self::value::*;
mod map;
pub use self::map::*;
mod element;
pub use self::element::*;
