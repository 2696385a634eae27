use cmdtree::{Argument, Command, CommandList, CommandTree};

fn main() {
    let cli = CommandTree::new(
        "nested",
        CommandList::new()
            .about("This is a CLI with multiple commands.")
            .list(
                "first",
                CommandList::new()
                    .about("First command.")
                    .command(
                        "second",
                        Command::new()
                            .about("Second command.")
                            .add(Argument::string("bus").alias("b"))
                            .add(
                                Argument::integer("car")
                                    .choices([123, 567])
                                    .default_value(123),
                            )
                            .add(Argument::boolean("train"))
                            .run(|args| {
                                let bus = args.string("bus").unwrap_or_default();
                                let car = args.integer("car").unwrap_or_default();
                                let train = args.flag("train");
                                println!("bus: {bus}, car: {car}, train: {train}");
                            }),
                    )
                    .command(
                        "third",
                        Command::new()
                            .about("Third command.")
                            .add(Argument::string("b"))
                            .run(|args| println!("b: {}", args.string("b").unwrap_or_default())),
                    ),
            )
            .command(
                "fourth",
                Command::new()
                    .about("Fourth command.")
                    .add(
                        Argument::string("apple")
                            .array()
                            .default_value(vec!["abc", "def"]),
                    )
                    .run(|args| {
                        let apples = args.strings("apple").unwrap_or_default();
                        println!("apple: {}", apples.join(", "));
                    }),
            ),
    )
    .build();

    cli.parse();
}
