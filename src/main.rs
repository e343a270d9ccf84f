use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use numline::{
    DEFAULT_SWEEP, Error, ErrorKind, Orientation, SymbolTable, evaluate_line, init_tracing,
    run_tests, sweep,
};

/// numline evaluates one arithmetic expression or assignment per line, with
/// exact integers and rationals and a float fallback.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numline to treat `contents` as a path and read lines from it.
    #[arg(short, long)]
    file: bool,

    /// Runs the built-in self-test battery and prints a summary.
    #[arg(short, long)]
    tests: bool,

    /// Samples `COEF * x + CONST` over the default range and prints the
    /// points. Both parts may use variables bound by `contents`.
    #[arg(long, num_args = 2, value_names = ["COEF", "CONST"], allow_hyphen_values = true)]
    plot: Option<Vec<String>>,

    /// Plots the sample on the y axis instead of the x axis.
    #[arg(long, requires = "plot")]
    y_first: bool,

    /// Prints every bound variable with its type after the session.
    #[arg(short, long)]
    symbols: bool,

    /// Lines to evaluate. Standard input is read when absent.
    contents: Option<String>,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if args.tests {
        let outcomes = run_tests();
        for outcome in outcomes.iter().filter(|o| !o.passed) {
            eprintln!("FAILED: {}", outcome.label);
        }

        let passed = outcomes.iter().filter(|o| o.passed).count();
        println!("{passed}/{} tests passed", outcomes.len());
        if passed != outcomes.len() {
            std::process::exit(1);
        }
        return;
    }

    let script = match (&args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(path).unwrap_or_else(|_| {
                                  eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                  std::process::exit(1);
                              }),
        (Some(contents), false) => contents.clone(),
        (None, _) => io::stdin().lock()
                                .lines()
                                .map_while(Result::ok)
                                .collect::<Vec<_>>()
                                .join("\n"),
    };

    let bindings = run_session(&script);

    if let Some(plot) = &args.plot
       && let [coefficient, constant] = plot.as_slice()
    {
        let orientation = if args.y_first { Orientation::YFirst } else { Orientation::XFirst };
        match sweep(coefficient, constant, DEFAULT_SWEEP, orientation, &bindings) {
            Ok(points) => {
                for (x, y) in points {
                    println!("{x}\t{y}");
                }
            },
            Err(e) => eprintln!("{}", describe(&e)),
        }
    }

    if args.symbols {
        for (name, value) in bindings.iter() {
            println!("{name}\t{value}\t{}", value.type_name());
        }
    }
}

/// Evaluates each line in turn, carrying the symbol table between lines.
///
/// A failing line prints its error and leaves the table as it was.
fn run_session(script: &str) -> SymbolTable {
    let mut bindings = SymbolTable::new();

    for line in script.lines() {
        match evaluate_line(line, &bindings) {
            Ok(output) => {
                if let Some(rendered) = output.rendered {
                    println!("{rendered}");
                }
                bindings = output.bindings;
            },
            Err(e) => eprintln!("{}", describe(&e)),
        }
    }

    bindings
}

fn describe(error: &Error) -> String {
    match error.kind() {
        ErrorKind::Lex | ErrorKind::Parse => {
            format!("Please make sure you have the correct symbols in the query. ({error})")
        },
        _ => error.to_string(),
    }
}
