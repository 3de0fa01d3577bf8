//! Talk list file parsing.
//!
//! Input format: the first line is a talk-count header and is ignored;
//! every following non-blank line is `<title> <minutes>min` or
//! `<title> lightning` (a lightning talk is 5 minutes). Lines with an
//! identical title and duration collapse into one set entry.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use cts_core::{Talk, ValidationError};
use thiserror::Error;

/// Duration assigned to a `lightning` talk.
const LIGHTNING_MINUTES: i64 = 5;

/// Problems reading or interpreting a talk list file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input file could not be read.
    #[error("failed to read input file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not end in a recognizable duration token.
    #[error("line {line_no}: expected '<title> <minutes>min' or '<title> lightning', got '{line}'")]
    MissingDuration { line_no: usize, line: String },

    /// The minutes part of a duration token was not a number.
    #[error("line {line_no}: invalid minutes value '{token}'")]
    InvalidMinutes {
        line_no: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The line parsed but the talk itself was invalid.
    #[error("line {line_no}: {source}")]
    InvalidTalk {
        line_no: usize,
        #[source]
        source: ValidationError,
    },

    /// Nothing but the header was found.
    #[error("input file contains no talks")]
    NoTalks,
}

/// Reads and parses a talk list file.
pub fn parse_talks_file(path: &Path) -> Result<BTreeSet<Talk>, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_talks(&content)
}

/// Parses talk list content into a talk set.
pub fn parse_talks(input: &str) -> Result<BTreeSet<Talk>, ParseError> {
    let mut talks = BTreeSet::new();

    // Line numbers are 1-based and count the skipped header.
    for (line_no, line) in input.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let talk = parse_talk(line_no + 1, line)?;
        if let Some(previous) = talks.replace(talk) {
            tracing::warn!(
                title = previous.title(),
                minutes = previous.minutes(),
                "duplicate talk collapsed into one entry"
            );
        }
    }

    if talks.is_empty() {
        return Err(ParseError::NoTalks);
    }
    Ok(talks)
}

fn parse_talk(line_no: usize, line: &str) -> Result<Talk, ParseError> {
    let Some((title, token)) = line.rsplit_once(' ') else {
        return Err(ParseError::MissingDuration {
            line_no,
            line: line.to_owned(),
        });
    };

    let minutes = if token == "lightning" {
        LIGHTNING_MINUTES
    } else if let Some(digits) = token.strip_suffix("min") {
        digits
            .parse::<i64>()
            .map_err(|source| ParseError::InvalidMinutes {
                line_no,
                token: token.to_owned(),
                source,
            })?
    } else {
        return Err(ParseError::MissingDuration {
            line_no,
            line: line.to_owned(),
        });
    };

    // try_minutes: a huge value would make the TimeDelta constructor
    // panic before talk validation ever sees it.
    let duration = TimeDelta::try_minutes(minutes).ok_or(ParseError::InvalidTalk {
        line_no,
        source: ValidationError::DurationOutOfRange { minutes },
    })?;
    Talk::new(title, duration).map_err(|source| ParseError::InvalidTalk { line_no, source })
}
