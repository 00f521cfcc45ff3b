//! Line-based console input with validation and re-prompting

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use shared::InputRange;

use crate::error::{AppError, AppResult};

/// Prompts on `output` and reads answers from `input`
///
/// Invalid answers are rejected and asked again until a valid one arrives
/// or the input is closed.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn print(&mut self, text: &str) -> AppResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Next trimmed line; `InputClosed` at end of input
    ///
    /// Bytes that are not UTF-8 become replacement characters, so such a
    /// line fails parsing and is asked again like any other bad answer.
    pub fn read_line(&mut self) -> AppResult<String> {
        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buffer).trim().to_string())
    }

    /// Ask for a decimal inside `range`, accepting `,` as decimal separator
    pub fn prompt_decimal(&mut self, prompt: &str, range: InputRange) -> AppResult<Decimal> {
        loop {
            self.print(&format!("{} [{} to {}]: ", prompt, range.min, range.max))?;
            let answer = self.read_line()?;
            match Decimal::from_str(&answer.replace(',', ".")) {
                Ok(value) if range.contains(value) => return Ok(value),
                Ok(_) => self.println(&format!(
                    "Value must be between {} and {}.",
                    range.min, range.max
                ))?,
                Err(_) => self.println("Please enter a number.")?,
            }
        }
    }

    /// Ask for a whole number in `min..=max`
    pub fn prompt_choice(&mut self, prompt: &str, min: usize, max: usize) -> AppResult<usize> {
        loop {
            self.print(&format!("{} [{}-{}]: ", prompt, min, max))?;
            let answer = self.read_line()?;
            match answer.parse::<usize>() {
                Ok(choice) if (min..=max).contains(&choice) => return Ok(choice),
                Ok(_) => self.println(&format!("Choose a number from {} to {}.", min, max))?,
                Err(_) => self.println("Please enter a whole number.")?,
            }
        }
    }
}
