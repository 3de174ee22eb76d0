//! Line-based prompting
//!
//! Reads answers one line at a time from any `BufRead` and writes prompts to
//! any `Write`, so the interactive menu can be driven by a script in tests.
//! End of input is reported as an [`EndOfInput`] error.

use std::io::{self, BufRead, Write};

use anyhow::Result;

/// Input ended while an answer was expected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfInput;

impl std::fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("end of input")
    }
}

impl std::error::Error for EndOfInput {}

/// Check whether an error was caused by running out of input
pub fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.is::<EndOfInput>()
}

/// Prompt reader over an input and output stream
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn written(&self) -> &W {
        &self.output
    }

    /// Write one line of output
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Show `prompt` and read one line, without the trailing newline
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Ask with a shown default; an empty answer keeps `default`
    pub fn ask_with_default(&mut self, label: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{} [{}]: ", label, default))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Ask for a 1-based number; returns `None` when it is not a number
    pub fn ask_number(&mut self, prompt: &str) -> Result<Option<usize>> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().parse().ok())
    }

    /// Ask a yes/no question; only "y" or "yes" count as yes
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// Prompt for confirmation on the terminal
///
/// Returns true if user confirms, false otherwise.
/// In non-interactive mode (no TTY), returns false.
pub fn confirm(prompt: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    match prompter.ask_yes_no(&format!("{} [y/N] ", prompt)) {
        Ok(answer) => Ok(answer),
        Err(e) if is_end_of_input(&e) => Ok(false),
        Err(e) => Err(e),
    }
}
