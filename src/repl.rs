use std::io::{self, BufRead, Write};

use crate::{evaluate, tokenize};

/// The prompt shown before each line in interactive mode.
pub const DEFAULT_PROMPT: &str = ">>> ";

/// Settings for one run of the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Text written before each read, or `None` for no prompt.
    pub prompt:       Option<String>,
    /// Write the token stream of every line to the error writer.
    pub trace_tokens: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { prompt:       Some(DEFAULT_PROMPT.to_string()),
               trace_tokens: false, }
    }
}

/// Counts of what the loop did before reaching end of input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines that evaluated successfully.
    pub evaluated: usize,
    /// Lines that failed with an error.
    pub failed:    usize,
}

/// Runs the read-evaluate-print loop until `input` is exhausted.
///
/// Blank lines are skipped. Every other line is evaluated on its own and
/// printed as `<line> = <result>`. Errors go to `errors` and the loop moves
/// on to the next line.
///
/// # Errors
/// Only I/O errors from the reader or writers end the loop early.
///
/// # Example
/// ```
/// use foldcalc::repl::{Options, run};
///
/// let options = Options { prompt:       None,
///                         trace_tokens: false, };
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let summary = run("1+1\n\n3&2\n2+2\n".as_bytes(), &mut out, &mut err, &options).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "1+1 = 2\n2+2 = 4\n");
/// assert_eq!(summary.evaluated, 2);
/// assert_eq!(summary.failed, 1);
/// ```
pub fn run<R, W, E>(mut input: R,
                    mut output: W,
                    mut errors: E,
                    options: &Options)
                    -> io::Result<Summary>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut summary = Summary::default();
    let mut buffer = String::new();

    loop {
        if let Some(prompt) = &options.prompt {
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            return Ok(summary);
        }

        let line = buffer.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        if options.trace_tokens {
            trace(line, &mut errors)?;
        }

        match evaluate(line) {
            Ok(value) => {
                writeln!(output, "{line} = {value}")?;
                summary.evaluated += 1;
            },
            Err(e) => {
                writeln!(errors, "{e}")?;
                summary.failed += 1;
            },
        }
    }
}

/// Writes the token stream of `line`, stopping at the first lexical error.
fn trace<E: Write>(line: &str, errors: &mut E) -> io::Result<()> {
    match tokenize(line) {
        Ok(tokens) => {
            let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
            writeln!(errors, "{}", rendered.join(" "))
        },
        Err(e) => writeln!(errors, "{e}"),
    }
}
