use std::io::{BufRead, Write};

use crate::{
    interpreter::{evaluator::core::Context, parser::core::Parser},
    lex,
};

/// The prompt printed before each line of input.
const PROMPT: &str = ">> ";

/// Runs the read-eval-print loop until end of input.
///
/// Each non-empty line is lexed and parsed on its own; the evaluation
/// context, and with it every binding, persists across lines. Parser
/// errors are printed and suppress evaluation for that line. Run-time
/// errors are printed as `ERROR: message`; successful values print their
/// inspection form.
///
/// # Errors
/// Returns an `std::io::Error` only for failures of the underlying reader
/// or writer; language-level problems never abort the loop.
///
/// # Example
/// ```
/// use vervet::repl;
///
/// let input = b"let x = 2;\nx * 21\n" as &[u8];
/// let mut output = Vec::new();
///
/// repl::start(input, &mut output).unwrap();
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("42"));
/// ```
pub fn start(mut input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
    writeln!(output, "Welcome to vervet! Type in an expression to evaluate it.")?;

    let mut context = Context::new();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let source = line.trim();
        if source.is_empty() {
            continue;
        }

        let tokens = match lex(source) {
            Ok(tokens) => tokens,
            Err(error) => {
                writeln!(output, "{error}")?;
                continue;
            },
        };

        let (program, errors) = Parser::new(&tokens).parse_program();
        if !errors.is_empty() {
            for error in &errors {
                writeln!(output, "{error}")?;
            }
            continue;
        }

        match context.eval_program(&program) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}
