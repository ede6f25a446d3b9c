use crate::error::{CheckoutError, Result};
use std::io::{BufRead, Write};

/// Accepts only a non-empty run of ASCII digits that is not zero.
pub fn parse_positive_int(input: &str) -> Result<u32> {
    if input.is_empty() {
        return Err(CheckoutError::InvalidInput(
            "Input cannot be empty. Please try again.".to_string(),
        ));
    }
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(CheckoutError::InvalidInput(
            "Input must be a valid positive whole integer.".to_string(),
        ));
    }
    let value: u32 = input.parse().map_err(|_| {
        CheckoutError::InvalidInput("Input is too large. Please try again.".to_string())
    })?;
    if value == 0 {
        return Err(CheckoutError::InvalidInput(
            "Input cannot be zero. Please try again.".to_string(),
        ));
    }
    Ok(value)
}

pub fn parse_non_empty(input: &str) -> Result<String> {
    if input.is_empty() {
        Err(CheckoutError::InvalidInput(
            "Input cannot be empty. Please try again.".to_string(),
        ))
    } else {
        Ok(input.to_string())
    }
}

/// Accepts a single `y`/`n` in either case and returns it upper-cased.
pub fn parse_yes_no(input: &str) -> Result<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(CheckoutError::InvalidInput(
            "Input cannot be empty. Please try again.".to_string(),
        )),
        (Some(c), None) if matches!(c.to_ascii_uppercase(), 'Y' | 'N') => {
            Ok(c.to_ascii_uppercase())
        }
        _ => Err(CheckoutError::InvalidInput(
            "Please enter 'Y' or 'N'.".to_string(),
        )),
    }
}

/// Line-oriented prompts that keep asking until the answer validates.
///
/// Generic over its streams so sessions can be scripted in tests.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Mutable access to the output stream for non-prompt text.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<u32> {
        self.read_until_valid(prompt, parse_positive_int)
    }

    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String> {
        self.read_until_valid(prompt, parse_non_empty)
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> Result<char> {
        self.read_until_valid(prompt, parse_yes_no)
    }

    /// Convenience over [`Self::read_yes_no`] for the common "did they say yes" check.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.read_yes_no(prompt)? == 'Y')
    }

    fn read_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            match self.read_line(prompt).and_then(|line| parse(&line)) {
                Ok(value) => return Ok(value),
                Err(e @ CheckoutError::InvalidInput(_)) => writeln!(self.output, "{e}")?,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(CheckoutError::InputClosed);
        }
        let mut line = String::from_utf8(buf).map_err(|_| {
            CheckoutError::InvalidInput("Input must be valid text. Please try again.".to_string())
        })?;
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}
