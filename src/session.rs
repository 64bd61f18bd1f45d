// src/session.rs

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::debug;

use crate::directory::PersonDirectory;
use crate::lookup;

pub const PROMPT: &str = "Enter a User ID to lookup or <= 0 to exit: ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a valid User ID.";
pub const EXITING: &str = "Exiting the program...";

/// What to do with one line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Lookup(i64),
    /// A well-formed id too large to be in the directory.
    Missing,
    Exit,
    Invalid,
}

impl Command {
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(id) if id <= 0 => Command::Exit,
            Ok(id) => Command::Lookup(id),
            Err(e) => match e.kind() {
                IntErrorKind::NegOverflow => Command::Exit,
                IntErrorKind::PosOverflow => Command::Missing,
                _ => Command::Invalid,
            },
        }
    }
}

/// Prompt/lookup loop. Returns after the exit sentinel or when `input` is exhausted.
pub fn run<R, W>(directory: &PersonDirectory, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT).context("writing prompt")?;
        output.flush().context("flushing prompt")?;

        line.clear();
        let n = input.read_line(&mut line).context("reading operator input")?;
        if n == 0 {
            debug!("input closed");
            writeln!(output).context("writing output")?;
            return Ok(());
        }

        match Command::parse(&line) {
            Command::Invalid => writeln!(output, "{}", INVALID_INPUT).context("writing output")?,
            Command::Exit => {
                writeln!(output, "{}", EXITING).context("writing output")?;
                return Ok(());
            }
            Command::Missing => {
                writeln!(output, "{}", lookup::NOT_FOUND).context("writing output")?;
            }
            Command::Lookup(id) => {
                debug!(id, "lookup");
                lookup::display(id, directory, &mut output).context("writing output")?;
            }
        }
    }
}
