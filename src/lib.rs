/*!
 * # cuetrack - caption track data and scheduling model
 *
 * A Rust library implementing the data model behind timed text tracks:
 * parsing SRT/WebVTT caption files into cues, tracking per-track
 * visibility and load state, and answering "which cues are visible at
 * time t" queries for a host video player.
 *
 * ## Features
 *
 * - Liberal SRT/WebVTT cue parser (malformed blocks degrade to inert
 *   cues, they never abort a parse)
 * - Inline cue positioning directives (D/L/T/A/S) decoded per cue
 * - Insertion-ordered cue stores with identifier lookup
 * - Active-cue computation in the canonical start/end/creation-order
 *   enumeration order
 * - Track mode state machine (off / hidden / showing) with load
 *   triggering and teardown signals for the host
 * - Default track selection over an element's declared tracks
 * - Async load boundary: the host supplies the transport, the library
 *   supplies the bookkeeping
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timestamp`: `HH:MM:SS.mmm` timestamp codec
 * - `cue`: cue records, settings directives and per-track cue stores
 * - `caption_parser`: raw caption text to cue sequences
 * - `track`: track state machine and load hooks
 * - `active`: active-cue queries over a track
 * - `track_list`: per-element track collections and host notifications
 * - `selector`: default track selection
 * - `config`: caller configuration
 * - `language_utils`: BCP-47 primary subtag helpers
 * - `loader`: asynchronous caption fetch boundary
 * - `errors`: custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod active;
pub mod caption_parser;
pub mod config;
pub mod cue;
pub mod errors;
pub mod language_utils;
pub mod loader;
pub mod selector;
pub mod timestamp;
pub mod track;
pub mod track_list;

// Re-export main types for easier usage
pub use caption_parser::parse_captions;
pub use config::CaptionConfig;
pub use cue::{Cue, CueSettings, CueStore};
pub use errors::{CaptionError, ParseError, TimestampError, TrackError};
pub use loader::{CaptionFetcher, load_track};
pub use selector::select_default_tracks;
pub use timestamp::{format_timestamp, parse_timestamp};
pub use track::{ReadyState, Track, TrackKind, TrackMode, TrackSignal};
pub use track_list::{CaptionHost, TrackList};
