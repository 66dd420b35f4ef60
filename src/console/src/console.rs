use crate::ConsoleError;
use log::debug;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn line(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), ConsoleError> {
        write!(self.output, "{}", CLEAR_SCREEN)?;
        self.output.flush()?;
        Ok(())
    }

    /// Line without its trailing newline.
    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }

        let len = buffer.trim_end_matches(['\r', '\n']).len();
        buffer.truncate(len);

        Ok(buffer)
    }

    pub fn ask(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", label)?;
        self.read_line()
    }

    /// Asks again until the answer parses as `T`.
    pub fn ask_parsed<T: FromStr>(&mut self, label: &str) -> Result<T, ConsoleError> {
        loop {
            let answer = self.ask(label)?;

            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!("rejected input {:?} for {:?}", answer, label.trim());
                    self.line("Invalid number, try again.")?;
                }
            }
        }
    }

    /// Asks again until `map` accepts the parsed answer.
    pub fn ask_mapped<T: FromStr, U>(
        &mut self,
        label: &str,
        map: impl Fn(T) -> Option<U>,
    ) -> Result<U, ConsoleError> {
        loop {
            let value = self.ask_parsed::<T>(label)?;

            match map(value) {
                Some(mapped) => return Ok(mapped),
                None => self.line("Value out of range, try again.")?,
            }
        }
    }
}
