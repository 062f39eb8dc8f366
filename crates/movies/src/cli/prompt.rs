//! Line-oriented prompts over any reader/writer pair.
//!
//! Every prompt re-asks until the answer parses. `Ok(None)` means the input
//! ended (EOF), which the menu treats as a request to quit.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub struct Prompter<R: BufRead, W: Write> {
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

    /// One raw line with the trailing newline removed.
    pub fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// A trimmed answer that must not be blank.
    pub fn required(&mut self, prompt: &str, complaint: &str) -> io::Result<Option<String>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(Some(answer.to_string()));
            }
            self.complain(complaint)?;
        }
    }

    /// A value of type `T`.
    pub fn parsed<T: FromStr>(&mut self, prompt: &str, complaint: &str) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.complain(complaint)?,
            }
        }
    }

    /// A finite rating. `nan` and `inf` parse as `f64` but are asked again.
    pub fn rating(&mut self, prompt: &str, complaint: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(Some(value)),
                _ => self.complain(complaint)?,
            }
        }
    }

    /// A value of type `T`, or nothing when the answer is blank.
    ///
    /// The outer `Option` is EOF, the inner one is "left blank".
    pub fn optional<T: FromStr>(
        &mut self,
        prompt: &str,
        complaint: &str,
    ) -> io::Result<Option<Option<T>>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(None));
            }
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(Some(value))),
                Err(_) => self.complain(complaint)?,
            }
        }
    }

    /// `y`/`n`, case-insensitive.
    pub fn yes_no(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => self.complain("Please enter 'Y' or 'N'")?,
            }
        }
    }

    fn complain(&mut self, complaint: &str) -> io::Result<()> {
        writeln!(self.output, "{}", complaint.red())
    }
}
