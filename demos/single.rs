use cmdtree::{Argument, Command, CommandTree};

fn main() {
    let cli = CommandTree::new(
        "single",
        Command::new()
            .about("This is a CLI with only one command.")
            .add(
                Argument::string("first")
                    .array()
                    .optional()
                    .help("This is the first argument."),
            )
            .add(Argument::integer("second"))
            .run(|args| {
                let first = args.strings("first").unwrap_or_default();
                let second = args.integer("second").unwrap_or_default();
                println!("first: {first:?}, second: {second}");
            }),
    )
    .build();

    cli.parse();
}
