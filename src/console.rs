use log::debug;
use std::io::{self, BufRead, Write};

/// Line that ends console input
pub const SENTINEL: &str = "done";
pub const RULE: &str = "----------------------------------------";

/// Reads an initial pattern from an interactive console
///
/// Lines are collected until [`SENTINEL`] (case-insensitive) or the end of
/// input, and joined with ` | ` so the codec sees one coordinate list.
pub struct ConsoleReader<R, W> {
    input: R,
    output: W,
}
impl<R: BufRead, W: Write> ConsoleReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "Conway's Game of Life")?;
        writeln!(self.output, "Enter the coordinates of the initial live cells.")?;
        writeln!(self.output, "Example: 1, 1 | 1, 2 | 2, 1 | 2, 2")?;
        writeln!(self.output, "Type '{SENTINEL}' when you are finished.")?;
        writeln!(self.output, "{RULE}")
    }

    pub fn read_pattern(&mut self) -> io::Result<String> {
        let mut lines = Vec::new();
        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("console input closed after {} lines", lines.len());
                break;
            }
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case(SENTINEL) {
                break;
            }
            lines.push(trimmed.to_owned());
        }
        Ok(lines.join(" | "))
    }
}
