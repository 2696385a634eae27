//! Traits which, typically, may be imported without concern: `use cmdtree::prelude::*`.

/// Needs to be imported in order to implement a custom output sink.
pub use crate::parser::UserInterface;
