use std::collections::HashSet;

use crate::api::{Argument, Command, Node};
use crate::constant::*;
use crate::model::ArgValue;
use crate::parser::{Cli, ConfigError, ConsoleInterface, Printer, UserInterface};

/// The command tree of a program, ready to be built into a [`Cli`].
///
/// ### Example
/// ```
/// # use cmdtree_core as cmdtree;
/// use cmdtree::{Argument, Command, CommandList, CommandTree};
///
/// let cli = CommandTree::new(
///     "program",
///     CommandList::new()
///         .command("a", Command::new().add(Argument::integer("value")))
///         .command("b", Command::new()),
/// )
/// .build();
///
/// cli.parse_tokens(&["a", "--value", "1"]).unwrap();
/// ```
pub struct CommandTree<'a> {
    program: String,
    root: Node<'a>,
    user_interface: Option<Box<dyn UserInterface + 'a>>,
}

impl<'a> CommandTree<'a> {
    /// Create a command tree for `program`, rooted at a [`Command`] or a [`CommandList`](crate::CommandList).
    pub fn new(program: impl Into<String>, root: impl Into<Node<'a>>) -> Self {
        Self {
            program: program.into(),
            root: root.into(),
            user_interface: None,
        }
    }

    /// Send help and error messages to `user_interface` instead of the console.
    /// If repeated, only the final interface will apply.
    ///
    /// ### Example
    /// ```
    /// # use cmdtree_core as cmdtree;
    /// use cmdtree::{Command, CommandTree};
    /// use std::cell::RefCell;
    ///
    /// let emitted = RefCell::new(Vec::default());
    /// let cli = CommandTree::new("program", Command::new())
    ///     .interface(|message: String, exit_code: i32| emitted.borrow_mut().push((message, exit_code)))
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// assert_eq!(cli.parse_tokens(&["oops"]), Err(1));
    /// drop(cli);
    /// assert!(emitted.take()[0].0.starts_with("error: unknown command: oops"));
    /// ```
    pub fn interface(mut self, user_interface: impl UserInterface + 'a) -> Self {
        self.user_interface.replace(Box::new(user_interface));
        self
    }

    /// Build the command line interface as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated argument name).
    pub fn build_parser(self) -> Result<Cli<'a>, ConfigError> {
        let CommandTree {
            program,
            root,
            user_interface,
        } = self;
        validate(&program, &root)?;

        Ok(Cli::new(
            program,
            root,
            Printer::terminal(),
            user_interface.unwrap_or_else(|| Box::new(ConsoleInterface::default())),
        ))
    }

    /// Build the command line interface.
    /// This finalizes the configuration and checks for errors (ex: a repeated argument name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> Cli<'a> {
        match self.build_parser() {
            Ok(cli) => cli,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

fn validate(path: &str, node: &Node) -> Result<(), ConfigError> {
    match node {
        Node::Command(command) => validate_command(path, command),
        Node::List(list) => {
            for (name, child) in list.children() {
                if name.is_empty() || name.starts_with('-') {
                    return Err(ConfigError(format!(
                        "Cannot use '{name}' as a sub-command of '{path}'."
                    )));
                }

                validate(&format!("{path} {name}"), child)?;
            }

            Ok(())
        }
    }
}

fn validate_command(path: &str, command: &Command) -> Result<(), ConfigError> {
    let mut names: HashSet<&str> = HashSet::default();

    for argument in command.arguments() {
        if is_reserved(&argument.name) {
            return Err(ConfigError(format!(
                "Cannot use the reserved name '{}' in '{path}'.",
                argument.name
            )));
        }

        if !names.insert(&argument.name) {
            return Err(ConfigError(format!(
                "Cannot duplicate the argument '{}' in '{path}'.",
                argument.name
            )));
        }
    }

    let mut aliases: HashSet<&str> = HashSet::default();

    for argument in command.arguments() {
        if let Some(alias) = &argument.alias {
            if is_reserved(alias) {
                return Err(ConfigError(format!(
                    "Cannot use the reserved name '{alias}' as an alias in '{path}'."
                )));
            }

            if names.contains(alias.as_str()) || !aliases.insert(alias) {
                return Err(ConfigError(format!(
                    "Cannot use '{alias}' as an alias of '{}' in '{path}': it is already taken.",
                    argument.name
                )));
            }
        }

        validate_values(path, argument)?;
    }

    Ok(())
}

fn validate_values(path: &str, argument: &Argument) -> Result<(), ConfigError> {
    if let Some(choices) = &argument.choices {
        if choices.is_empty() {
            return Err(ConfigError(format!(
                "Argument '{}' in '{path}' must declare at least one choice.",
                argument.name
            )));
        }

        if let Some(choice) = choices.iter().find(|c| c.kind() != argument.kind) {
            return Err(ConfigError(format!(
                "Argument '{}' in '{path}' declares the choice '{choice}', which is not of type {}.",
                argument.name, argument.kind
            )));
        }
    }

    if let Some(ArgValue::Many(_)) = &argument.default {
        if !argument.array {
            return Err(ConfigError(format!(
                "Argument '{}' in '{path}' declares a sequence default, but is not an array.",
                argument.name
            )));
        }
    }

    Ok(())
}

fn is_reserved(name: &str) -> bool {
    name == HELP_NAME || name == HELP_SHORT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CommandList;
    use crate::model::{Type, Value};
    use crate::parser::util::channel_interface;
    use rstest::rstest;

    #[test]
    fn empty_build() {
        // Setup
        let tree = CommandTree::new("program", Command::new());

        // Execute
        let cli = tree.build_parser().unwrap();

        // Verify
        assert_eq!(cli.program(), "program");
        cli.parse_tokens(&[]).unwrap();
    }

    #[test]
    fn nested_build() {
        // Setup
        let tree = CommandTree::new(
            "program",
            CommandList::new().list(
                "a",
                CommandList::new().command("b", Command::new().add(Argument::string("c"))),
            ),
        );

        // Execute
        let cli = tree.build_parser().unwrap();

        // Verify
        cli.parse_tokens(&["a", "b", "--c", "x"]).unwrap();
    }

    #[rstest]
    #[case(
        Command::new().add(Argument::string("a")).add(Argument::integer("a")),
        "Config error: Cannot duplicate the argument 'a' in 'program'."
    )]
    #[case(
        Command::new().add(Argument::boolean("help")),
        "Config error: Cannot use the reserved name 'help' in 'program'."
    )]
    #[case(
        Command::new().add(Argument::string("h")),
        "Config error: Cannot use the reserved name 'h' in 'program'."
    )]
    #[case(
        Command::new().add(Argument::string("a").alias("h")),
        "Config error: Cannot use the reserved name 'h' as an alias in 'program'."
    )]
    #[case(
        Command::new().add(Argument::string("a")).add(Argument::string("b").alias("a")),
        "Config error: Cannot use 'a' as an alias of 'b' in 'program': it is already taken."
    )]
    #[case(
        Command::new().add(Argument::string("a").alias("x")).add(Argument::string("b").alias("x")),
        "Config error: Cannot use 'x' as an alias of 'b' in 'program': it is already taken."
    )]
    #[case(
        Command::new().add(Argument::string("a").alias("a")),
        "Config error: Cannot use 'a' as an alias of 'a' in 'program': it is already taken."
    )]
    #[case(
        Command::new().add(Argument::string("a").choices(Vec::<Value>::default())),
        "Config error: Argument 'a' in 'program' must declare at least one choice."
    )]
    #[case(
        Command::new().add(Argument::integer("a").choices([1.5])),
        "Config error: Argument 'a' in 'program' declares the choice '1.5', which is not of type integer."
    )]
    #[case(
        Command::new().add(Argument::string("a").default_value(vec!["x", "y"])),
        "Config error: Argument 'a' in 'program' declares a sequence default, but is not an array."
    )]
    fn invalid_command(#[case] command: Command, #[case] expected: &str) {
        // Setup
        let tree = CommandTree::new("program", command);

        // Execute
        let error = tree.build_parser().unwrap_err();

        // Verify
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn invalid_nested_command() {
        // Setup
        let tree = CommandTree::new(
            "program",
            CommandList::new().list(
                "first",
                CommandList::new().command(
                    "second",
                    Command::new()
                        .add(Argument::string("x"))
                        .add(Argument::string("x")),
                ),
            ),
        );

        // Execute
        let error = tree.build_parser().unwrap_err();

        // Verify
        assert_matches!(error, ConfigError(message) => {
            assert_eq!(message, "Cannot duplicate the argument 'x' in 'program first second'.");
        });
    }

    #[rstest]
    #[case("")]
    #[case("-x")]
    #[case("--x")]
    fn invalid_sub_command_name(#[case] name: &str) {
        // Setup
        let tree = CommandTree::new("program", CommandList::new().command(name, Command::new()));

        // Execute
        let error = tree.build_parser().unwrap_err();

        // Verify
        assert_matches!(error, ConfigError(message) => {
            assert_eq!(message, format!("Cannot use '{name}' as a sub-command of 'program'."));
        });
    }

    #[test]
    fn boolean_array_builds() {
        // Resolution rejects this combination; the declaration is accepted.
        let tree = CommandTree::new(
            "program",
            Command::new().add(Argument::new("flags", Type::Boolean).array()),
        );

        assert!(tree.build_parser().is_ok());
    }

    #[test]
    fn build_with_interface() {
        // Setup
        let (sender, receiver) = channel_interface();
        let tree = CommandTree::new("program", Command::new().about("abc def")).interface(sender);

        // Execute
        let cli = tree.build_parser().unwrap();

        // Verify
        let exit_code = cli.parse_tokens(&["--help"]).unwrap_err();
        assert_eq!(exit_code, 0);
        drop(cli);

        let (message, exit_code) = receiver.consume();
        assert_eq!(exit_code, 0);
        assert!(message.starts_with("USAGE: program [OPTIONS]\n"));
        assert!(message.contains("abc def"));
    }
}
