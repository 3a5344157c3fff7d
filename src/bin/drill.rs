use std::env;
use std::io::Read;

use drills::harness;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("drill: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    if options.list {
        for drill in harness::all() {
            println!("{:<22}  {}", drill.name(), drill.summary());
        }
        return;
    }

    let Some(exercise) = options.exercise else {
        eprintln!("drill: missing exercise name");
        Options::print_help();
        std::process::exit(2);
    };

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("drill: failed to read standard input: {err}");
        std::process::exit(1);
    }

    match harness::run_by_name(&exercise, &input) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("drill: {err}");
            std::process::exit(1);
        }
    }
}

struct Options {
    exercise: Option<String>,
    list: bool,
}

impl Options {
    fn parse<I, T>(args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut exercise = None;
        let mut list = false;

        for arg in args {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if arg == "--list" {
                list = true;
            } else if arg.starts_with('-') {
                return Err(format!("unrecognized argument '{arg}'"));
            } else if exercise.is_none() {
                exercise = Some(arg);
            } else {
                return Err(format!("unexpected extra argument '{arg}'"));
            }
        }

        Ok(Self { exercise, list })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin drill [-- <exercise>]

Reads the exercise's input format from standard input and prints the
formatted result to standard output.

Options:
  --list                        List the available exercises
  -h, --help                    Print this help message

Examples:
  printf '4\\n2 2 3 4\\n' | cargo run --bin drill -- find-lucky
  printf '\"flower\",\"flow\",\"flight\"\\n' | cargo run --bin drill -- common-prefix
  printf '1\\n23\\n' | cargo run --bin drill -- letter-combinations
"
        );
    }
}
