use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cue::{Cue, CueStore};
use crate::errors::TrackError;
use crate::language_utils;

// @module: Track state machine and load hooks

/// Track kind/role of a timed text channel
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Subtitles,
    Captions,
    Descriptions,
    Chapters,
    Metadata,
    Karaoke,
    Lyrics,
    Tickertext,
    Audiodescription,
    Commentary,
    Alternateangle,
    Signlanguage,
}

impl TrackKind {
    // @returns: Lowercase kind identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subtitles => "subtitles",
            Self::Captions => "captions",
            Self::Descriptions => "descriptions",
            Self::Chapters => "chapters",
            Self::Metadata => "metadata",
            Self::Karaoke => "karaoke",
            Self::Lyrics => "lyrics",
            Self::Tickertext => "tickertext",
            Self::Audiodescription => "audiodescription",
            Self::Commentary => "commentary",
            Self::Alternateangle => "alternateangle",
            Self::Signlanguage => "signlanguage",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrackKind {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "subtitles" => Ok(Self::Subtitles),
            "captions" => Ok(Self::Captions),
            "descriptions" => Ok(Self::Descriptions),
            "chapters" => Ok(Self::Chapters),
            "metadata" => Ok(Self::Metadata),
            "karaoke" => Ok(Self::Karaoke),
            "lyrics" => Ok(Self::Lyrics),
            "tickertext" => Ok(Self::Tickertext),
            "audiodescription" => Ok(Self::Audiodescription),
            "commentary" => Ok(Self::Commentary),
            "alternateangle" => Ok(Self::Alternateangle),
            "signlanguage" => Ok(Self::Signlanguage),
            _ => Err(TrackError::UnknownKind(s.to_string())),
        }
    }
}

/// Visibility mode of a track. Ordered: `Off < Hidden < Showing`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrackMode {
    #[default]
    Off,
    Hidden,
    Showing,
}

impl TrackMode {
    // @returns: Numeric value used by hosts speaking integer constants
    pub fn as_value(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Hidden => 1,
            Self::Showing => 2,
        }
    }
}

impl fmt::Display for TrackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Hidden => write!(f, "hidden"),
            Self::Showing => write!(f, "showing"),
        }
    }
}

impl TryFrom<u8> for TrackMode {
    type Error = TrackError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::Hidden),
            2 => Ok(Self::Showing),
            _ => Err(TrackError::InvalidMode(value)),
        }
    }
}

/// Load state of a track's caption resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    /// Nothing loaded; the next activation triggers a load
    #[default]
    None,
    /// A load is in flight; at most one per track
    Loading,
    /// Cues are installed and queryable
    Loaded,
    /// The load failed; the external loader owns any retry policy
    Error,
}

/// Side effects a state transition asks the host to perform.
///
/// The library renders nothing and fetches nothing; it only reports
/// what a renderer or loader collaborator should now do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSignal {
    /// The external loader should fetch this track's source
    LoadRequested,
    /// Active cues may have changed; the renderer should rebuild
    RebuildNeeded,
    /// The renderer should drop this track's visual container
    ContainerRemoved,
}

/// One caption/subtitle/description channel attached to a media element.
#[derive(Debug, Clone)]
pub struct Track {
    /// Host-assigned track identifier
    pub id: String,

    /// Kind/role of the track
    pub kind: TrackKind,

    /// Human-readable label
    pub label: String,

    /// BCP-47 primary subtag (normalized at construction, empty allowed)
    pub language: String,

    source: String,
    declared_default: bool,
    is_default: bool,
    mode: TrackMode,
    ready_state: ReadyState,
    cues: CueStore,
}

impl Track {
    /// Create a track in mode `Off` with nothing loaded.
    ///
    /// `language` is reduced to its BCP-47 primary subtag, so
    /// `"en-US"` is stored as `"en"`. `declared_default` records that
    /// the source marked this track as its default candidate; whether
    /// it wins is decided by default track selection.
    pub fn new(
        id: impl Into<String>,
        kind: TrackKind,
        label: impl Into<String>,
        language: &str,
        source: impl Into<String>,
        declared_default: bool,
    ) -> Self {
        Track {
            id: id.into(),
            kind,
            label: label.into(),
            language: language_utils::primary_subtag(language).to_string(),
            source: source.into(),
            declared_default,
            is_default: false,
            mode: TrackMode::default(),
            ready_state: ReadyState::default(),
            cues: CueStore::new(),
        }
    }

    /// Current visibility mode.
    pub fn mode(&self) -> TrackMode {
        self.mode
    }

    /// Current load state.
    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Source location handed to the external loader, empty when the
    /// host supplies cues directly.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True when the source declared this track as its default candidate.
    pub fn declared_default(&self) -> bool {
        self.declared_default
    }

    /// True when this track won the default-selection contest.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// The track's cue store.
    pub fn cues(&self) -> &CueStore {
        &self.cues
    }

    pub(crate) fn mark_resolved_default(&mut self) {
        self.is_default = true;
    }

    /// Change the visibility mode, returning the side effects the host
    /// should perform.
    ///
    /// Setting the current mode again is a no-op and returns no
    /// signals. Activating an unloaded track with a configured source
    /// moves it to `Loading` and requests a load; the `Loading` state
    /// suppresses re-triggering until the load settles. Turning the
    /// track off resets the load state so the next activation reloads.
    pub fn set_mode(&mut self, new_mode: TrackMode) -> Vec<TrackSignal> {
        let mut signals = Vec::new();
        if new_mode == self.mode {
            return signals;
        }

        debug!("Track '{}' mode {} -> {}", self.id, self.mode, new_mode);
        self.mode = new_mode;

        if self.ready_state == ReadyState::None
            && !self.source.is_empty()
            && new_mode > TrackMode::Off
        {
            self.ready_state = ReadyState::Loading;
            signals.push(TrackSignal::LoadRequested);
        }

        if self.ready_state == ReadyState::Loaded {
            signals.push(TrackSignal::RebuildNeeded);
        }

        if new_mode == TrackMode::Off || new_mode == TrackMode::Hidden {
            signals.push(TrackSignal::ContainerRemoved);
        }

        if new_mode == TrackMode::Off {
            // force a reload on the next activation
            self.ready_state = ReadyState::None;
        }

        signals
    }

    /// Numeric-mode boundary for hosts speaking the integer constants
    /// 0 (off), 1 (hidden) and 2 (showing).
    pub fn set_mode_value(&mut self, value: u8) -> Result<Vec<TrackSignal>, TrackError> {
        let new_mode = TrackMode::try_from(value)?;
        Ok(self.set_mode(new_mode))
    }

    /// Install cues directly and mark the track loaded.
    ///
    /// For hosts that already hold cue data and bypass the load
    /// boundary entirely.
    pub fn load_cues(&mut self, cues: Vec<Cue>) {
        self.cues.extend(cues);
        self.ready_state = ReadyState::Loaded;
    }

    /// Completion hook invoked by the external loader.
    ///
    /// Ignored entirely unless a load is in flight: a completion that
    /// arrives after the track was turned off (which resets the load
    /// state) must not resurrect it.
    pub fn on_load_complete(&mut self, cues: Vec<Cue>) -> Vec<TrackSignal> {
        if self.ready_state != ReadyState::Loading {
            debug!(
                "Track '{}' ignoring stale load completion ({} cues)",
                self.id,
                cues.len()
            );
            return Vec::new();
        }

        self.cues.extend(cues);
        self.ready_state = ReadyState::Loaded;
        vec![TrackSignal::RebuildNeeded]
    }

    /// Error hook invoked by the external loader. Retry policy, if any,
    /// belongs to the loader.
    pub fn on_load_error(&mut self) {
        if self.ready_state == ReadyState::Loading {
            self.ready_state = ReadyState::Error;
        }
    }

    /// Active cues of this track at `current_time`, in the canonical
    /// order.
    pub fn active_cues(&self, current_time: f64) -> Vec<&Cue> {
        crate::active::active_cues(self, current_time)
    }
}
