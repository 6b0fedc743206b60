//! Recorded frame replay
//!
//! Input is JSON lines, one [`Frame`] per line:
//!
//! ```text
//! {"width":640,"height":480,"hands":[[{"x":0.31,"y":0.22}, ...]]}
//! ```
//!
//! Blank lines are skipped. A malformed line is reported with its line number.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use pinch_core::Frame;

use crate::ConfigError;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Iterator over the frames of a JSON-lines stream
pub struct FrameReader<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        FrameReader {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Line number of the last line read (1-based)
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = Result<Frame, ReplayError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(err) => return Some(Err(err.into())),
            };
            self.line += 1;

            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            return Some(serde_json::from_str(trimmed).map_err(|source| ReplayError::Json {
                line: self.line,
                source,
            }));
        }
    }
}

/// Command line of the replay driver
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(name = "pinch-replay")]
#[command(about = "Replay recorded landmark frames and print the gestures they produce")]
pub struct ReplayArgs {
    /// JSON-lines frame file; stdin when omitted
    pub input: Option<PathBuf>,

    /// Print `none` polls too
    #[arg(long)]
    pub all: bool,

    /// Gesture poll period (humantime syntax, e.g. `20ms`)
    #[arg(long, value_parser = parse_poll_interval, default_value = "20ms")]
    pub poll_interval: Duration,

    /// Pause between frames to mimic capture pacing; `0s` replays flat out
    #[arg(long, value_parser = humantime::parse_duration, default_value = "20ms")]
    pub frame_interval: Duration,

    /// Attach the tracing overlay
    #[arg(long)]
    pub overlay: bool,
}

impl Default for ReplayArgs {
    fn default() -> Self {
        ReplayArgs {
            input: None,
            all: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            overlay: false,
        }
    }
}

impl ReplayArgs {
    /// Buffered reader over the input file, or stdin when none was given
    pub fn open_input(&self) -> Result<Box<dyn BufRead + Send>, ReplayError> {
        match &self.input {
            Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            None => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

fn parse_poll_interval(value: &str) -> Result<Duration, String> {
    let interval = humantime::parse_duration(value).map_err(|err| err.to_string())?;
    if interval.is_zero() {
        return Err("poll interval must be positive".to_string());
    }
    Ok(interval)
}
