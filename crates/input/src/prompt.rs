//! Line-based prompting over arbitrary reader/writer pairs.

use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `question` and read one line. `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask until `parse` accepts the answer, printing `retry` after each
    /// rejected line. `None` at end of input.
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        retry: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.ask(question)? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            writeln!(self.output, "{}", retry)?;
        }
    }
}
