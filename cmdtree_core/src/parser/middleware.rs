use std::env;

use crate::api::Node;
use crate::model::ResolvedArgs;
use crate::parser::resolve::resolve;
use crate::parser::{ParseError, Printer, UserInterface};
use crate::raw::RawArgs;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The invocation resolved, and the handler of the command was called.
    Completed,
    /// The invocation resolved (without calling the handler).
    Resolved {
        /// The sub-command names that led to the command, from the root.
        command: Vec<String>,
        /// The resolved arguments.
        args: ResolvedArgs,
    },
    /// Help was requested; this is its text.
    Help(String),
    /// The invocation could not be resolved.
    Failed {
        /// The reason.
        error: ParseError,
        /// The help of the node where routing failed, if the error is a routing error.
        help: Option<String>,
    },
}

impl Outcome {
    /// Whether the invocation succeeded (help counts as a success).
    pub fn is_ok(&self) -> bool {
        !matches!(self, Outcome::Failed { .. })
    }

    /// The exit code of the program, when it should exit: `0` for help, `1` for failures.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Outcome::Completed | Outcome::Resolved { .. } => None,
            Outcome::Help(_) => Some(0),
            Outcome::Failed { .. } => Some(1),
        }
    }

    /// The help text, or the error message.
    /// A command list invoked without a sub-command answers with its help text.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Completed | Outcome::Resolved { .. } => None,
            Outcome::Help(help)
            | Outcome::Failed {
                error: ParseError::MissingCommand,
                help: Some(help),
            } => Some(help.clone()),
            Outcome::Failed { error, .. } => Some(error.to_string()),
        }
    }

    // What the user sees.
    pub(crate) fn render(&self) -> Option<String> {
        match self {
            Outcome::Completed | Outcome::Resolved { .. } => None,
            Outcome::Help(help)
            | Outcome::Failed {
                error: ParseError::MissingCommand,
                help: Some(help),
            } => Some(help.clone()),
            Outcome::Failed { error, help: None } => Some(format!("error: {error}")),
            Outcome::Failed {
                error,
                help: Some(help),
            } => Some(format!("error: {error}\n\n{help}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    // Call the handler.
    Push,
    // Hand back the resolved arguments.
    Pull,
}

/// The command line interface: routes an invocation through the command tree, and resolves the arguments of the command it reaches.
///
/// Built via [`CommandTree::build`](crate::CommandTree::build) or [`CommandTree::build_parser`](crate::CommandTree::build_parser).
pub struct Cli<'a> {
    program: String,
    root: Node<'a>,
    printer: Printer,
    user_interface: Box<dyn UserInterface + 'a>,
}

impl<'a> std::fmt::Debug for Cli<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("program", &self.program)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl<'a> Cli<'a> {
    pub(crate) fn new(
        program: String,
        root: Node<'a>,
        printer: Printer,
        user_interface: Box<dyn UserInterface + 'a>,
    ) -> Self {
        Self {
            program,
            root,
            printer,
            user_interface,
        }
    }

    /// The program name, which leads every usage line.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Route and resolve `raw`, calling the handler of the command on success.
    /// Help and errors are sent to the configured [`UserInterface`].
    pub fn dispatch(&self, raw: &RawArgs) -> Outcome {
        self.dispatch_to(raw, &*self.user_interface)
    }

    /// Route and resolve `raw`, calling the handler of the command on success.
    /// Help and errors are sent to `user_interface`, at most once.
    ///
    /// ### Example
    /// ```
    /// # use cmdtree_core as cmdtree;
    /// use cmdtree::{Argument, Command, CommandTree, Outcome, RawArgs};
    /// use std::cell::RefCell;
    ///
    /// let cli = CommandTree::new("program", Command::new().add(Argument::integer("count")))
    ///     .build_parser()
    ///     .unwrap();
    /// let emitted = RefCell::new(None);
    /// let outcome = cli.dispatch_to(&RawArgs::new().flag("count", "x"), &|message: String, exit_code: i32| {
    ///     emitted.replace(Some((message, exit_code)));
    /// });
    ///
    /// assert_eq!(outcome.message(), Some("count: expected integer".to_string()));
    /// assert_eq!(emitted.take(), Some(("error: count: expected integer".to_string(), 1)));
    /// ```
    pub fn dispatch_to(&self, raw: &RawArgs, user_interface: &dyn UserInterface) -> Outcome {
        let outcome = self.descend(
            &self.root,
            self.program.clone(),
            Vec::default(),
            raw.tokens(),
            raw,
            Mode::Push,
        );

        if let (Some(message), Some(exit_code)) = (outcome.render(), outcome.exit_code()) {
            user_interface.emit(message, exit_code);
        }

        outcome
    }

    /// Route and resolve `raw`, handing back the resolved arguments (as [`Outcome::Resolved`]) instead of calling the handler.
    /// Nothing is sent to the [`UserInterface`].
    ///
    /// ### Example
    /// ```
    /// # use cmdtree_core as cmdtree;
    /// use cmdtree::{Argument, Command, CommandList, CommandTree, Outcome, RawArgs};
    ///
    /// let cli = CommandTree::new(
    ///     "program",
    ///     CommandList::new().command("deploy", Command::new().add(Argument::string("name"))),
    /// )
    /// .build_parser()
    /// .unwrap();
    ///
    /// match cli.resolve(&RawArgs::from_tokens(&["deploy", "--name", "web"])) {
    ///     Outcome::Resolved { command, args } => {
    ///         assert_eq!(command, vec!["deploy".to_string()]);
    ///         assert_eq!(args.string("name"), Some("web"));
    ///     }
    ///     other => panic!("{other:?}"),
    /// }
    /// ```
    pub fn resolve(&self, raw: &RawArgs) -> Outcome {
        self.descend(
            &self.root,
            self.program.clone(),
            Vec::default(),
            raw.tokens(),
            raw,
            Mode::Pull,
        )
    }

    /// Run the command line interface on `tokens` (without the program name).
    /// Returns `Ok(())` when the handler of the command was called, or `Err(exit_code)` when the program should exit.
    /// The exit code is `0` for help, and `1` for errors.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<(), i32> {
        match self.dispatch(&RawArgs::from_tokens(tokens)).exit_code() {
            None => Ok(()),
            Some(exit_code) => Err(exit_code),
        }
    }

    /// Run the command line interface on the process arguments.
    /// If help was requested, or an error is encountered, exits with the corresponding exit code (via [`std::process::exit`]).
    pub fn parse(&self) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }

    fn descend(
        &self,
        node: &Node<'a>,
        path: String,
        mut command: Vec<String>,
        tokens: &[String],
        raw: &RawArgs,
        mode: Mode,
    ) -> Outcome {
        match node {
            Node::List(list) => {
                if raw.is_help() && tokens.is_empty() {
                    return Outcome::Help(self.printer.list_help(&path, list));
                }

                let Some((token, remaining)) = tokens.split_first() else {
                    return Outcome::Failed {
                        error: ParseError::MissingCommand,
                        help: Some(self.printer.list_help(&path, list)),
                    };
                };

                match list.get(token) {
                    Some(child) => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Descending from '{path}' into '{token}'.");
                        }

                        command.push(token.clone());
                        self.descend(
                            child,
                            format!("{path} {token}"),
                            command,
                            remaining,
                            raw,
                            mode,
                        )
                    }
                    None => Outcome::Failed {
                        error: ParseError::UnknownCommand(token.clone()),
                        help: Some(self.printer.list_help(&path, list)),
                    },
                }
            }
            Node::Command(leaf) => {
                if raw.is_help() {
                    return Outcome::Help(self.printer.command_help(&path, leaf));
                }

                if let Some(token) = tokens.first() {
                    return Outcome::Failed {
                        error: ParseError::UnknownCommand(token.clone()),
                        help: Some(self.printer.command_help(&path, leaf)),
                    };
                }

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Resolving '{path}'.");
                }

                match resolve(raw, leaf.arguments()) {
                    Ok(args) => match mode {
                        Mode::Push => {
                            leaf.invoke(args);
                            Outcome::Completed
                        }
                        Mode::Pull => Outcome::Resolved { command, args },
                    },
                    Err(error) => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Failed to resolve '{path}': {error}.");
                        }

                        Outcome::Failed { error, help: None }
                    }
                }
            }
        }
    }
}
