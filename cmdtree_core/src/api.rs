mod argument;
mod command;
mod core;

pub use self::argument::*;
pub use self::command::*;
pub use self::core::*;
