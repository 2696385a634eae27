pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const NEGATION_PREFIX: &str = "no-";
pub(crate) const TERMINATOR: &str = "--";
pub(crate) const LONG_PREFIX: &str = "--";
