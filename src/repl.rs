use std::io::{self, BufRead, Write};

use crate::interpreter::{
    evaluator::eval_program,
    lexer::Lexer,
    parser::Parser,
    value::environment::Environment,
};

/// The prompt written before each line is read.
pub const PROMPT: &str = ">>";

/// Runs the read-evaluate-print loop until `input` is exhausted.
///
/// One environment lives for the whole session, so `let` bindings
/// accumulate across lines. Each line is parsed on its own: parser errors
/// are listed (tab-indented, after a `parser errors:` header) and the line
/// is discarded; otherwise the line evaluates and its value's inspect form
/// is printed. Runtime errors print as `ERROR: <message>` and do not end
/// the session.
///
/// # Errors
/// Only I/O errors on `input` or `output` end the loop early.
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let env = Environment::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse();

        if !parser.errors().is_empty() {
            writeln!(output, "parser errors:")?;
            for error in parser.errors() {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}
