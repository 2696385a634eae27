//! Engine module for `cmdtree`.
//! See the `cmdtree` crate documentation for the full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
pub mod prelude;
mod raw;

pub use api::*;
pub use model::*;
pub use parser::{Cli, ConfigError, ConsoleInterface, Outcome, ParseError, UserInterface};
pub use raw::{RawArgs, RawValue};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
