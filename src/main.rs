use std::fs;

use clap::Parser;
use qlang::{Interpreter, run_source};

/// qlang is a small imperative programming language with French keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the argument as inline source instead of a file path.
    #[arg(short = 'e', long)]
    eval: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.eval {
        args.contents
    } else {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Impossible de lire le fichier '{}'.", &args.contents);
            std::process::exit(1);
        })
    };

    let mut interpreter = Interpreter::new();
    let result = run_source(&mut interpreter, &source);

    for line in interpreter.output().lines() {
        println!("{line}");
    }

    if result.is_err() {
        for line in interpreter.error_output().lines() {
            eprintln!("{line}");
        }
        std::process::exit(1);
    }
}
