use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use simplescript::{Environment, Lexer, eval_program, repl};

/// simplescript is a small, dynamically typed, expression oriented scripting
/// language. Run it without arguments for an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Executes a script file. The file must have the `.il` extension.
    Run {
        /// Path to the script.
        path: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    match args.command {
        Some(Command::Run { path }) => run_file(&path),
        None => {
            println!("Welcome to simplescript! Feel free to type in commands.");
            if let Err(e) = repl::start(&mut io::stdin().lock(), &mut io::stdout()) {
                eprintln!("{e}");
                process::exit(1);
            }
        },
    }
}

fn run_file(path: &Path) {
    if path.extension().is_none_or(|ext| ext != "il") {
        eprintln!("Error: file must have .il extension");
        process::exit(1);
    }

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
                                             eprintln!("Error reading file: {e}");
                                             process::exit(1);
                                         });

    let mut parser = simplescript::Parser::new(Lexer::new(&source));
    let program = parser.parse();

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            eprintln!("Parser Error: {error}");
        }
        process::exit(1);
    }

    let env = Environment::new();
    if let Err(error) = eval_program(&program, &env) {
        eprintln!("ERROR: {error}");
        process::exit(1);
    }
}
