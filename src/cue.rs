use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::timestamp::format_timestamp;

// @module: Cue records, settings directives and cue stores

// Creation order is global so cue ordering stays stable even when a
// consumer merges stores from several tracks.
static CREATION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Decoded inline positioning directives attached to a cue's timing line.
///
/// Only the five recognized single-letter codes are retained; unknown
/// codes and tokens without a `:` are dropped without failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueSettings {
    // @field: D - writing direction
    pub vertical_text: Option<String>,

    // @field: L - line position
    pub line_position: Option<String>,

    // @field: T - text position
    pub text_position: Option<String>,

    // @field: A - text alignment
    pub text_alignment: Option<String>,

    // @field: S - text size
    pub text_size: Option<String>,
}

impl CueSettings {
    /// Decode a directive string such as `D:vertical L:-1 A:start`.
    ///
    /// Splits on runs of whitespace; each token splits on its first `:`
    /// and the remainder is the value. Empty input yields an empty
    /// mapping, never an error.
    pub fn parse(directives: &str) -> Self {
        let mut settings = CueSettings::default();

        for token in directives.split_whitespace() {
            if let Some((code, value)) = token.split_once(':') {
                match code {
                    "D" => settings.vertical_text = Some(value.to_string()),
                    "L" => settings.line_position = Some(value.to_string()),
                    "T" => settings.text_position = Some(value.to_string()),
                    "A" => settings.text_alignment = Some(value.to_string()),
                    "S" => settings.text_size = Some(value.to_string()),
                    _ => {}
                }
            }
        }

        settings
    }

    /// Re-serialize the mapping into directive text.
    ///
    /// Round-trips through `parse` (token order is not significant).
    pub fn to_directive_string(&self) -> String {
        let mut tokens = Vec::new();
        if let Some(value) = &self.vertical_text {
            tokens.push(format!("D:{}", value));
        }
        if let Some(value) = &self.line_position {
            tokens.push(format!("L:{}", value));
        }
        if let Some(value) = &self.text_position {
            tokens.push(format!("T:{}", value));
        }
        if let Some(value) = &self.text_alignment {
            tokens.push(format!("A:{}", value));
        }
        if let Some(value) = &self.text_size {
            tokens.push(format!("S:{}", value));
        }
        tokens.join(" ")
    }

    /// True when no recognized directive is present.
    pub fn is_empty(&self) -> bool {
        self.vertical_text.is_none()
            && self.line_position.is_none()
            && self.text_position.is_none()
            && self.text_alignment.is_none()
            && self.text_size.is_none()
    }
}

/// A single timed caption entry.
///
/// Timing is deliberately not validated: a cue parsed from a block with
/// a missing or malformed timing line carries NaN start/end times and
/// is simply never active. `end_time >= start_time` is likewise not
/// enforced.
#[derive(Debug, Clone)]
pub struct Cue {
    // @field: Source-file cue ID, not required unique
    pub identifier: Option<String>,

    // @field: Start time in seconds (NaN when unparseable)
    pub start_time: f64,

    // @field: End time in seconds (NaN when unparseable)
    pub end_time: f64,

    // @field: Raw cue text/markup, opaque to this library
    pub payload: String,

    // @field: Unparsed trailing directive text from the timing line
    pub settings_raw: String,

    // @field: Decoded positioning directives
    pub settings: CueSettings,

    // Monotonically increasing, assigned at construction; final
    // tie-break in active-cue ordering.
    creation_order: u64,
}

impl Cue {
    /// Create a new cue, decoding `settings_raw` and stamping the
    /// creation order.
    pub fn new(
        identifier: Option<String>,
        start_time: f64,
        end_time: f64,
        payload: String,
        settings_raw: String,
    ) -> Self {
        let settings = CueSettings::parse(&settings_raw);
        Cue {
            identifier,
            start_time,
            end_time,
            payload,
            settings_raw,
            settings,
            creation_order: CREATION_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Creation rank of this cue relative to every other cue created by
    /// this process.
    pub fn creation_order(&self) -> u64 {
        self.creation_order
    }

    /// True when both endpoints decoded to finite seconds.
    pub fn is_timed(&self) -> bool {
        self.start_time.is_finite() && self.end_time.is_finite()
    }

    /// Inclusive interval containment. NaN endpoints never contain any
    /// time, so untimed cues report false for every instant.
    pub fn contains_time(&self, current_time: f64) -> bool {
        self.start_time <= current_time && current_time <= self.end_time
    }

    /// The raw cue text, as supplied by the caption source.
    pub fn source_text(&self) -> &str {
        &self.payload
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(identifier) = &self.identifier {
            writeln!(f, "{}", identifier)?;
        }
        if self.settings_raw.is_empty() {
            writeln!(
                f,
                "{} --> {}",
                format_timestamp(self.start_time),
                format_timestamp(self.end_time)
            )?;
        } else {
            writeln!(
                f,
                "{} --> {} {}",
                format_timestamp(self.start_time),
                format_timestamp(self.end_time),
                self.settings_raw
            )?;
        }
        writeln!(f, "{}", self.payload)
    }
}

/// Ordered container of the cues belonging to one track.
///
/// Insertion order is preserved; cues are not required to be sorted by
/// time. Identifier lookup returns the first match with a linear scan.
#[derive(Debug, Clone, Default)]
pub struct CueStore {
    cues: Vec<Cue>,
}

impl CueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        CueStore { cues: Vec::new() }
    }

    /// Append one cue, preserving insertion order.
    pub fn push(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    /// Append a batch of cues in order.
    pub fn extend(&mut self, cues: Vec<Cue>) {
        self.cues.extend(cues);
    }

    /// Number of cues in the store.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// True when the store holds no cues.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Indexed access in insertion order.
    pub fn get(&self, index: usize) -> Option<&Cue> {
        self.cues.get(index)
    }

    /// Iterate the cues in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }

    /// First cue whose identifier equals `identifier`.
    pub fn cue_by_id(&self, identifier: &str) -> Option<&Cue> {
        self.cues
            .iter()
            .find(|cue| cue.identifier.as_deref() == Some(identifier))
    }
}

impl<'a> IntoIterator for &'a CueStore {
    type Item = &'a Cue;
    type IntoIter = std::slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.iter()
    }
}
