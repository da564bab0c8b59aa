//! Runner
//!
//! Reads one toolpath file, writes each line next to its classification,
//! then a summary naming the input.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::Config;
use crate::classify::{DescriptionStyle, describe_line};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every line was printed, followed by the summary
    Completed { lines: usize },
    /// The input could not be read; only the error stream was written
    ReadFailed,
}

/// Run against the configured input, writing to the given streams.
///
/// Read failures are reported on `err` and returned as [`RunOutcome::ReadFailed`].
/// Only failures to write the streams themselves are returned as errors.
pub fn run<O: Write, E: Write>(
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> io::Result<RunOutcome> {
    let data = match fs::read(&config.input) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("failed to read {:?}: {}", config.input, e);
            write!(err, "GcodeDetails:\n  {}: {}\n\n", config.input.display(), e)?;
            err.flush()?;
            return Ok(RunOutcome::ReadFailed);
        }
    };
    log::debug!("read {} bytes from {:?}", data.len(), config.input);

    let text = String::from_utf8_lossy(&data);
    let lines = write_lines(&text, config.style, out)?;
    log::debug!("described {} lines", lines);

    write_summary(&config.input, out)?;
    out.flush()?;

    Ok(RunOutcome::Completed { lines })
}

/// Write one `Read: [line][description]` record per line, returning the count
pub fn write_lines<W: Write>(
    text: &str,
    style: DescriptionStyle,
    out: &mut W,
) -> io::Result<usize> {
    let mut count = 0;
    // No '\r' trimming: CRLF files keep the carriage return in the echoed text.
    for line in text.split('\n') {
        writeln!(out, "Read: [{}][{}]", line, describe_line(line, style))?;
        count += 1;
    }
    Ok(count)
}

fn write_summary<W: Write>(input: &Path, out: &mut W) -> io::Result<()> {
    write!(out, "\n\n\nInput:  {}\n", input.display())?;
    write!(out, "\nFinished.\n\n")
}
