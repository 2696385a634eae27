//! `cmdtree` declares the command tree of a program, then routes and validates process arguments against it.
//!
//! A program is either a single [`Command`], or a [`CommandList`] of named sub-commands (which may nest further lists).
//! Each command declares its named, typed [`Argument`]s.
//! An invocation is routed through the tree by its positional tokens, until it reaches a command.
//! There, every declared argument is resolved:
//! * *Typed*: values are coerced to `string`, `integer`, `number` or `boolean`.
//! * *Arrays*: an array argument collects every value given for it (a single value becomes a one-element array).
//! * *Aliases*: values given under the alias of an argument are merged after those given under its name.
//! * *Defaults & optionality*: a missing argument takes its default, is omitted when optional, and is otherwise an error.
//!   A missing `boolean` is simply `false`.
//! * *Choices*: values may be restricted to a fixed set.
//!
//! The first problem found aborts the invocation: the user sees the error (along with the help, for routing errors), and the program exits with `1`.
//! Help (`-h` or `--help`) is generated from the declaration, and exits with `0`.
//!
//! # Usage
//! A single command:
//! ```no_run
#![doc = include_str!("../demos/single.rs")]
//! ```
//!
//! ```console
//! $ single --second 2 --first a --first b
//! first: ["a", "b"], second: 2
//!
//! $ single --second x
//! error: second: expected integer
//!
//! $ single -h
//! USAGE: single [OPTIONS]
//!
//! This is a CLI with only one command.
//!
//! OPTIONS:
//!   --first: [string[]] [optional]
//!       This is the first argument.
//!
//!   --second: [integer] [required]
//! ```
//!
//! A tree of commands:
//! ```no_run
#![doc = include_str!("../demos/nested.rs")]
//! ```
//!
//! ```console
//! $ nested first second --bus 9 -b 10
//! error: bus: expected string
//!
//! $ nested first second --bus red --car 567 --train
//! bus: red, car: 567, train: true
//!
//! $ nested first fifth
//! error: unknown command: fifth
//!
//! USAGE: nested first [COMMAND] [OPTIONS]
//!
//! First command.
//!
//! COMMANDS:
//!   second: Second command.
//!   third: Third command.
//! ```
//!
//! # Tokens
//! [`Cli::parse`] tokenizes the process arguments with [`RawArgs::from_tokens`].
//! Alternatively, build the [`RawArgs`] directly and hand them to [`Cli::dispatch`] (which calls the handler), or [`Cli::resolve`] (which returns the resolved arguments).
//!
//! # Features
//! * `tracing_debug`: emit `tracing::debug!` events for routing and resolution decisions.
pub use cmdtree_core::*;
