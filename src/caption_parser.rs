use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cue::Cue;
use crate::errors::ParseError;
use crate::timestamp::parse_timestamp;

// @module: Caption text parsing

// @const: WebVTT file header marker (the only WebVTT construct treated specially)
static WEBVTT_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)WEBVTT FILE").unwrap()
});

// @const: Digits-only cue identifier line
static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+\s*$").unwrap()
});

// @const: A line that opens with a timestamp is the block's timing line
static TIMING_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2}[.,]\d+").unwrap()
});

/// Parse raw SRT or WebVTT text into an ordered cue sequence.
///
/// Be liberal in what you accept from others: both formats are handled
/// identically once `WEBVTT FILE` header blocks are stripped, and a
/// block whose timing cannot be decoded yields an inert NaN-timed cue
/// instead of aborting the batch. The only hard failure is empty input.
pub fn parse_captions(raw_text: &str) -> Result<Vec<Cue>, ParseError> {
    if raw_text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let normalized = raw_text.replace("\r\n", "\n").replace('\r', "\n");

    let mut cues = Vec::new();
    for block in normalized.split("\n\n") {
        if WEBVTT_HEADER_REGEX.is_match(block) {
            debug!("Dropping WebVTT header block");
            continue;
        }
        cues.push(parse_block(block));
    }

    debug!("Parsed {} cues", cues.len());
    Ok(cues)
}

/// Parse one blank-line-delimited block into a cue.
fn parse_block(block: &str) -> Cue {
    let mut lines: Vec<&str> = block.split('\n').collect();

    // A digits-only first line is the cue identifier
    let mut identifier = None;
    if let Some(first) = lines.first() {
        if IDENTIFIER_REGEX.is_match(first) {
            identifier = Some(first.trim().to_string());
            lines.remove(0);
        }
    }

    let mut start_time = f64::NAN;
    let mut end_time = f64::NAN;
    let mut settings_raw = String::new();

    if let Some(position) = lines.iter().position(|line| TIMING_LINE_REGEX.is_match(line)) {
        let timing_line = lines.remove(position);
        let tokens: Vec<&str> = timing_line.split_whitespace().collect();

        // tokens[0] and tokens[2] are the endpoints; the arrow between
        // them is not validated beyond whitespace splitting
        start_time = decode_endpoint(tokens.first().copied());
        end_time = decode_endpoint(tokens.get(2).copied());

        if tokens.len() > 3 {
            settings_raw = tokens[3..].join(" ");
        }
    } else if !block.trim().is_empty() {
        warn!("Caption block has no timing line, keeping it as an inert cue");
    }

    // The remaining lines, in original order, are the payload
    let payload = lines.join("\n");

    Cue::new(identifier, start_time, end_time, payload, settings_raw)
}

/// Decode one timing endpoint, degrading to NaN on failure.
fn decode_endpoint(token: Option<&str>) -> f64 {
    match token {
        Some(text) => match parse_timestamp(text) {
            Ok(seconds) => seconds,
            Err(error) => {
                warn!("Skipping unreadable cue timestamp: {}", error);
                f64::NAN
            }
        },
        None => {
            warn!("Cue timing line is missing an endpoint");
            f64::NAN
        }
    }
}
