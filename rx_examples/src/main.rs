
extern crate rx_machine;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;
use anyhow::Context;
use clap::{arg, value_parser, Arg, ArgAction, ArgMatches, Command};
use log::info;
use rx_machine::{Machine, Syntax};

fn cli() -> Command {
    Command::new("rx-grep")
        .about("Find the matches of one or more patterns in a file or the standard input")
        .arg(
            Arg::new("PATTERN")
                .required(true)
                .help("Pattern to look for, every pattern is compiled into the same machine")
                .action(ArgAction::Append)
        )
        .arg(
            arg!(--dump)
                .help("Print the compiled automaton before scanning")
        )
        .arg(
            arg!(-f --file <FILE>)
                .required(false)
                .help("File to scan instead of the standard input")
                .value_parser(value_parser!(PathBuf))
        )
        .arg(
            arg!(--full)
                .help("Print the input lines that are fully matched instead of every match")
        )
        .arg(
            arg!(--"max-states" <COUNT>)
                .required(false)
                .help("Give up if the automaton would need more states than this")
                .value_parser(value_parser!(usize))
        )
}

fn build_machine(args: &ArgMatches) -> anyhow::Result<Machine> {
    let mut syntax = Syntax::new();
    for pattern in args.get_many::<String>("PATTERN").unwrap_or_default() {
        let name = pattern.clone();
        syntax = syntax.rule(pattern.as_str(), move |m| {
            println!("{}:{}: {:?}", name, m.offset, m.text);
            false
        });
    }
    if let Some(limit) = args.get_one::<usize>("max-states") {
        syntax = syntax.max_states(*limit);
    }
    Ok(Machine::build(syntax)?)
}

fn open_input(args: &ArgMatches) -> anyhow::Result<Box<dyn Read>> {
    match args.get_one::<PathBuf>("file") {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("can not open {}", path.display()))?;
            Ok(Box::new(file))
        },
        None => Ok(Box::new(io::stdin())),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli().get_matches();
    let machine = build_machine(&args)?;
    info!("compiled {:?} into {} states", machine.pattern(), machine.state_count());

    if args.get_flag("dump") {
        for (idx, pattern) in machine.patterns().enumerate() {
            println!("#{}: {}", idx, pattern);
        }
        print!("{}", machine);
    }

    let input = open_input(&args)?;
    if args.get_flag("full") {
        for line in BufReader::new(input).lines() {
            let line = line?;
            if machine.full_match(&line) {
                println!("{}", line);
            }
        }
    }
    else {
        machine.scan(input)?;
    }

    Ok(())
}
