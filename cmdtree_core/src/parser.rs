mod base;
mod coerce;
mod interface;
mod middleware;
mod printer;
mod resolve;

pub use self::base::*;
pub use self::interface::{ConsoleInterface, UserInterface};
pub use self::middleware::*;
pub(crate) use self::printer::*;

#[cfg(test)]
pub(crate) use self::interface::util;
