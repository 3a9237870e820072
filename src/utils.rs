use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use crate::config::SweepConfig;
use crate::error::{InvalidInput, Result};
use crate::schedulers::{schedule, Algorithm};
use crate::Track;

// Input is a stream of whitespace separated integers that may span any number of
// lines: the request count, that many track numbers, the initial head position and,
// unless preselected, the algorithm choice. Lines starting with '#' are comment lines
// and are ignored, so a session can be replayed from a file.
pub struct TokenReader<R> {
    reader: R,
    line: String,
    tokens: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            line: String::new(),
            tokens: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.tokens.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            if self.line.starts_with('#') {
                continue;
            }
            self.tokens
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(self.tokens.pop_front())
    }

    fn next_number<T: TryFrom<i128>>(&mut self, what: &'static str) -> Result<T> {
        let token = self
            .next_token()?
            .ok_or(InvalidInput::MissingValue { what })?;
        let value: i128 = match token.parse::<i128>() {
            Ok(value) => value,
            Err(err) => {
                return Err(match err.kind() {
                    IntErrorKind::PosOverflow => InvalidInput::TooLarge { what, token },
                    IntErrorKind::NegOverflow => InvalidInput::Negative { what, token },
                    _ => InvalidInput::NotANumber { what, token },
                }
                .into())
            }
        };
        match T::try_from(value) {
            Ok(value) => Ok(value),
            Err(_) if value < 0 => Err(InvalidInput::Negative { what, token }.into()),
            Err(_) => Err(InvalidInput::TooLarge { what, token }.into()),
        }
    }

    /// A track number: a non-negative integer that fits a `Track`.
    pub fn next_track(&mut self, what: &'static str) -> Result<Track> {
        self.next_number(what)
    }

    /// The number of requests that follow; must be positive.
    pub fn next_count(&mut self) -> Result<usize> {
        match self.next_number::<usize>("number of requests")? {
            0 => Err(InvalidInput::NoRequests.into()),
            count => Ok(count),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SessionConfig {
    /// Skips the menu when set.
    pub algorithm: Option<Algorithm>,
    pub sweep: SweepConfig,
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

/// Reads one batch from `input`, runs the chosen algorithm and prints the walk.
///
/// An unknown algorithm choice prints `Invalid Choice!` and ends the session
/// without an error.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &SessionConfig,
) -> Result<()> {
    let mut tokens = TokenReader::new(input);

    prompt(out, "Enter number of requests: ")?;
    let count = tokens.next_count()?;

    prompt(out, "Enter requests: ")?;
    let mut requests = Vec::new();
    for _ in 0..count {
        requests.push(tokens.next_track("request")?);
    }

    prompt(out, "Enter initial head position: ")?;
    let head = tokens.next_track("head position")?;

    let algorithm = match config.algorithm {
        Some(algorithm) => Some(algorithm),
        None => {
            prompt(
                out,
                "\nSelect Scheduling Algorithm:\n1. FCFS\n2. SSTF\n3. SCAN\n4. C-SCAN\n",
            )?;
            let choice = tokens.next_token()?.ok_or(InvalidInput::MissingValue {
                what: "algorithm choice",
            })?;
            Algorithm::from_choice(&choice)
        }
    };

    let algorithm = match algorithm {
        Some(algorithm) => algorithm,
        None => {
            writeln!(out, "Invalid Choice!")?;
            return Ok(());
        }
    };

    let walk = schedule(algorithm, head, &requests, &config.sweep)?;
    write!(
        out,
        "\n{} Order: {}\nTotal Seek Time: {}\n",
        algorithm,
        walk,
        walk.seek_time()
    )?;
    Ok(())
}
