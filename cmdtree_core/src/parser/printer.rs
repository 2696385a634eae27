use terminal_size::{terminal_size, Width};

use crate::api::{Argument, Command, CommandList};
use crate::constant::*;
use crate::model::join;
use crate::parser::interface::wrap;

const INDENT: usize = 2;
const DESCRIPTION_INDENT: usize = 6;

/// Renders the help of a command or command list.
#[derive(Debug, Clone)]
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    /// A printer that wraps to the width of the attached terminal (or not at all, when there is none).
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn command_help(&self, path: &str, command: &Command) -> String {
        let mut lines = vec![format!("USAGE: {path} [OPTIONS]")];
        self.describe(&mut lines, command.description());

        if !command.arguments().is_empty() {
            lines.push(String::default());
            lines.push("OPTIONS:".to_string());

            for (i, argument) in command.arguments().iter().enumerate() {
                if i > 0 {
                    lines.push(String::default());
                }

                lines.push(format!("{}{}", " ".repeat(INDENT), synopsis(argument)));

                if let Some(description) = &argument.description {
                    self.indented(&mut lines, DESCRIPTION_INDENT, description);
                }
            }
        }

        lines.join("\n")
    }

    pub(crate) fn list_help(&self, path: &str, list: &CommandList) -> String {
        let mut lines = vec![format!("USAGE: {path} [COMMAND] [OPTIONS]")];
        self.describe(&mut lines, list.description());

        let mut children = list.children().peekable();

        if children.peek().is_some() {
            lines.push(String::default());
            lines.push("COMMANDS:".to_string());

            for (name, node) in children {
                let prefix = format!("{}{name}:", " ".repeat(INDENT));

                match node.description() {
                    Some(description) => {
                        let width = prefix.chars().count() + 1;
                        let mut pieces = self.wrap(width, description).into_iter();
                        let first = pieces.next().unwrap_or_default();
                        lines.push(format!("{prefix} {first}").trim_end().to_string());
                        lines.extend(pieces.map(|piece| format!("{}{piece}", " ".repeat(width))));
                    }
                    None => lines.push(prefix),
                }
            }
        }

        lines.join("\n")
    }

    fn describe(&self, lines: &mut Vec<String>, description: Option<&str>) {
        if let Some(description) = description {
            lines.push(String::default());
            self.indented(lines, 0, description);
        }
    }

    fn indented(&self, lines: &mut Vec<String>, indent: usize, paragraph: &str) {
        let padding = " ".repeat(indent);

        for line in paragraph.lines() {
            for piece in self.wrap(indent, line) {
                lines.push(format!("{padding}{piece}"));
            }
        }
    }

    // Wrap the text that follows `indent` columns, if there is a terminal to fit.
    fn wrap(&self, indent: usize, text: &str) -> Vec<String> {
        match self.terminal_width {
            Some(terminal_width) => wrap(text, terminal_width.saturating_sub(indent)),
            None => vec![text.to_string()],
        }
    }
}

// --name, -a: [string[]] [required] [choices: a, b] [default: x]
fn synopsis(argument: &Argument) -> String {
    let mut synopsis = format!("{LONG_PREFIX}{}", argument.name);

    if let Some(alias) = &argument.alias {
        synopsis.push_str(&format!(", -{alias}"));
    }

    synopsis.push_str(&format!(
        ": [{}{}] [{}]",
        argument.kind,
        if argument.array { "[]" } else { "" },
        if argument.has_fallback() {
            "optional"
        } else {
            "required"
        }
    ));

    if let Some(choices) = &argument.choices {
        synopsis.push_str(&format!(" [choices: {}]", join(choices)));
    }

    if let Some(default) = &argument.default {
        synopsis.push_str(&format!(" [default: {default}]"));
    }

    synopsis
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Argument::string("name"), "--name: [string] [required]")]
    #[case(Argument::integer("count").array(), "--count: [integer[]] [required]")]
    #[case(Argument::number("ratio").optional(), "--ratio: [number] [optional]")]
    #[case(Argument::boolean("verbose").alias("v"), "--verbose, -v: [boolean] [required]")]
    #[case(
        Argument::string("region").choices(["eu", "us"]),
        "--region: [string] [required] [choices: eu, us]"
    )]
    #[case(
        Argument::integer("count").default_value(0),
        "--count: [integer] [optional] [default: 0]"
    )]
    #[case(
        Argument::string("tags").array().alias("t").choices(["a", "b"]).default_value(vec!["a", "b"]),
        "--tags, -t: [string[]] [optional] [choices: a, b] [default: [a, b]]"
    )]
    fn argument_synopsis(#[case] argument: Argument, #[case] expected: &str) {
        assert_eq!(synopsis(&argument), expected);
    }

    #[test]
    fn command_help_empty() {
        // Setup
        let printer = Printer::new(None);

        // Execute
        let message = printer.command_help("program", &Command::new());

        // Verify
        assert_eq!(message, "USAGE: program [OPTIONS]");
    }

    #[test]
    fn command_help() {
        // Setup
        let printer = Printer::new(None);
        let command = Command::new()
            .about("Deploy the service.")
            .add(Argument::string("name").help("The service name."))
            .add(Argument::integer("replicas").alias("r").default_value(1));

        // Execute
        let message = printer.command_help("program deploy", &command);

        // Verify
        assert_eq!(
            message,
            r#"USAGE: program deploy [OPTIONS]

Deploy the service.

OPTIONS:
  --name: [string] [required]
      The service name.

  --replicas, -r: [integer] [optional] [default: 1]"#
        );
    }

    #[test]
    fn command_help_wrapped() {
        // Setup
        let printer = Printer::new(Some(26));
        let command = Command::new()
            .about("The quick brown fox jumps over the lazy dog.")
            .add(Argument::boolean("fox").help("The quick brown fox jumps."));

        // Execute
        let message = printer.command_help("program", &command);

        // Verify
        assert_eq!(
            message,
            r#"USAGE: program [OPTIONS]

The quick brown fox jumps
over the lazy dog.

OPTIONS:
  --fox: [boolean] [required]
      The quick brown fox
      jumps."#
        );
    }

    #[test]
    fn list_help_empty() {
        // Setup
        let printer = Printer::new(None);

        // Execute
        let message = printer.list_help("program", &CommandList::new());

        // Verify
        assert_eq!(message, "USAGE: program [COMMAND] [OPTIONS]");
    }

    #[test]
    fn list_help() {
        // Setup
        let printer = Printer::new(None);
        let list = CommandList::new()
            .about("Manage things.\nSecond line.")
            .command("start", Command::new().about("Start a thing."))
            .list("config", CommandList::new().about("Configure things."))
            .command("stop", Command::new());

        // Execute
        let message = printer.list_help("program", &list);

        // Verify
        assert_eq!(
            message,
            r#"USAGE: program [COMMAND] [OPTIONS]

Manage things.
Second line.

COMMANDS:
  start: Start a thing.
  config: Configure things.
  stop:"#
        );
    }

    #[test]
    fn list_help_wrapped() {
        // Setup
        let printer = Printer::new(Some(24));
        let list = CommandList::new().command(
            "start",
            Command::new().about("Start the quick brown fox."),
        );

        // Execute
        let message = printer.list_help("program", &list);

        // Verify
        assert_eq!(
            message,
            r#"USAGE: program [COMMAND] [OPTIONS]

COMMANDS:
  start: Start the quick
         brown fox."#
        );
    }
}
