use crate::api::Argument;
use crate::model::ResolvedArgs;

/// A leaf of the command tree: a set of arguments and the handler that receives them once resolved.
///
/// ### Example
/// ```
/// # use cmdtree_core as cmdtree;
/// use cmdtree::{Argument, Command};
///
/// let command = Command::new()
///     .about("Greet someone.")
///     .add(Argument::string("name"))
///     .add(Argument::boolean("loud"))
///     .run(|args| {
///         let name = args.string("name").unwrap_or_default();
///         println!("hello {name}");
///     });
///
/// assert_eq!(command.arguments().len(), 2);
/// ```
#[derive(Default)]
pub struct Command<'a> {
    description: Option<String>,
    arguments: Vec<Argument>,
    handler: Option<Box<dyn Fn(ResolvedArgs) + 'a>>,
}

impl<'a> std::fmt::Debug for Command<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

impl<'a> Command<'a> {
    /// Create a command with no arguments and no handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document the about message for this command.
    /// If repeated, only the final help message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Add an argument to the command.
    ///
    /// Arguments are validated, and listed in the help, in the order they are added.
    /// Argument names must be unique within a command (checked when the tree is built).
    pub fn add(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Set the handler that receives the resolved arguments.
    /// If repeated, only the final handler will apply.
    pub fn run(mut self, handler: impl Fn(ResolvedArgs) + 'a) -> Self {
        self.handler.replace(Box::new(handler));
        self
    }

    /// The declared arguments, in declaration order.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// The about message, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn invoke(&self, args: ResolvedArgs) {
        if let Some(handler) = &self.handler {
            handler(args);
        }
    }
}

/// An inner node of the command tree: named sub-commands, each a [`Command`] or another [`CommandList`].
///
/// ### Example
/// ```
/// # use cmdtree_core as cmdtree;
/// use cmdtree::{Command, CommandList};
///
/// let list = CommandList::new()
///     .about("Manage the cluster.")
///     .command("status", Command::new())
///     .list("node", CommandList::new().command("drain", Command::new()));
///
/// assert!(list.get("status").is_some());
/// assert!(list.get("drain").is_none());
/// ```
#[derive(Debug, Default)]
pub struct CommandList<'a> {
    description: Option<String>,
    commands: Vec<(String, Node<'a>)>,
}

impl<'a> CommandList<'a> {
    /// Create an empty command list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document the about message for this command list.
    /// If repeated, only the final help message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Add a sub-command.
    /// If repeated for the same `name`, only the final version will be kept (in the position of the first).
    pub fn command(self, name: impl Into<String>, command: Command<'a>) -> Self {
        self.insert(name, Node::Command(command))
    }

    /// Add a nested command list.
    /// If repeated for the same `name`, only the final version will be kept (in the position of the first).
    pub fn list(self, name: impl Into<String>, list: CommandList<'a>) -> Self {
        self.insert(name, Node::List(list))
    }

    /// Add a sub-command or nested command list.
    pub fn insert(mut self, name: impl Into<String>, node: impl Into<Node<'a>>) -> Self {
        let name = name.into();
        let node = node.into();

        match self.commands.iter_mut().find(|(n, _)| n == &name) {
            Some((_, existing)) => *existing = node,
            None => self.commands.push((name, node)),
        }

        self
    }

    /// The sub-command `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&Node<'a>> {
        self.commands
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// The sub-commands, in declaration order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node<'a>)> {
        self.commands.iter().map(|(n, node)| (n.as_str(), node))
    }

    /// The about message, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A node of the command tree.
#[derive(Debug)]
pub enum Node<'a> {
    /// A leaf that resolves arguments.
    Command(Command<'a>),
    /// A set of named sub-commands.
    List(CommandList<'a>),
}

impl<'a> Node<'a> {
    /// The about message of the node, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Node::Command(command) => command.description(),
            Node::List(list) => list.description(),
        }
    }
}

impl<'a> From<Command<'a>> for Node<'a> {
    fn from(value: Command<'a>) -> Self {
        Node::Command(value)
    }
}

impl<'a> From<CommandList<'a>> for Node<'a> {
    fn from(value: CommandList<'a>) -> Self {
        Node::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn command_invoke() {
        // Setup
        let received = RefCell::new(None);
        let command = Command::new().run(|args| {
            received.borrow_mut().replace(args);
        });

        // Execute
        command.invoke(ResolvedArgs::default());

        // Verify
        assert_eq!(received.take(), Some(ResolvedArgs::default()));
    }

    #[test]
    fn command_invoke_without_handler() {
        Command::new().invoke(ResolvedArgs::default());
    }

    #[test]
    fn command_repeated_handler() {
        // Setup
        let calls = RefCell::new(Vec::default());
        let command = Command::new()
            .run(|_| calls.borrow_mut().push("first"))
            .run(|_| calls.borrow_mut().push("second"));

        // Execute
        command.invoke(ResolvedArgs::default());

        // Verify
        assert_eq!(calls.take(), vec!["second"]);
    }

    #[test]
    fn list_repeated_name() {
        // Execute
        let list = CommandList::new()
            .command("a", Command::new().about("first"))
            .command("b", Command::new())
            .list("a", CommandList::new().about("second"));

        // Verify
        let children: Vec<(&str, Option<&str>)> = list
            .children()
            .map(|(name, node)| (name, node.description()))
            .collect();
        assert_eq!(children, vec![("a", Some("second")), ("b", None)]);
        assert_matches!(list.get("a"), Some(Node::List(_)));
    }

    #[test]
    fn list_get() {
        // Setup
        let list = CommandList::new().command("first", Command::new());

        // Verify
        assert_matches!(list.get("first"), Some(Node::Command(_)));
        assert_matches!(list.get("first_"), None);
        assert_matches!(list.get(""), None);
    }
}
