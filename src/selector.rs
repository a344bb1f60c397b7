use log::warn;

use crate::config::CaptionConfig;
use crate::language_utils;
use crate::track::{Track, TrackKind, TrackMode, TrackSignal};

// @module: Default track selection

/// Decide which of an element's declared tracks start out showing.
///
/// Runs once per media element over the tracks in declaration order.
/// The contest is first-match-wins: a track that claims the showing
/// slot for its category blocks every later track of that category, and
/// later tracks never reopen a slot already filled.
///
/// - subtitles/captions: shown when the language equals the configured
///   default language, captions-by-default is enabled, and no earlier
///   subtitle/caption track is already showing.
/// - chapters: shown when the language matches and no earlier chapters
///   track is already showing.
/// - descriptions: shown when descriptions-by-default is enabled, the
///   language matches, and no earlier descriptions track is showing.
/// - A track the source declared as its default candidate is shown
///   (and resolved as the default) when no earlier declared candidate
///   already holds that claim; a kind-based winner first demotes any
///   other declared candidate that is currently showing.
///
/// Winners are switched to showing through the regular mode state
/// machine, so load-trigger side effects fire exactly as they would for
/// a caller-initiated mode change. Returns the signals emitted for each
/// affected track index, in emission order.
pub fn select_default_tracks(
    tracks: &mut [Track],
    config: &CaptionConfig,
) -> Vec<(usize, Vec<TrackSignal>)> {
    if !config.default_language.is_empty()
        && !language_utils::is_recognized_subtag(&config.default_language)
    {
        warn!(
            "Default language '{}' is not a recognized ISO 639-1 code; matching it verbatim",
            config.default_language
        );
    }

    let mut emitted = Vec::new();

    for index in 0..tracks.len() {
        let kind = tracks[index].kind;
        let language_matches = tracks[index].language == config.default_language;

        let mut enabled = match kind {
            TrackKind::Subtitles | TrackKind::Captions => {
                config.enable_captions_by_default
                    && language_matches
                    && !caption_slot_taken(&tracks[..index])
            }
            TrackKind::Chapters => {
                language_matches && !kind_slot_taken(&tracks[..index], TrackKind::Chapters)
            }
            TrackKind::Descriptions => {
                config.enable_descriptions_by_default
                    && language_matches
                    && !kind_slot_taken(&tracks[..index], TrackKind::Descriptions)
            }
            _ => false,
        };

        // A kind-based winner bumps every other declared-default track
        // that is already showing down to hidden.
        if enabled {
            for other_index in 0..tracks.len() {
                if other_index != index
                    && tracks[other_index].declared_default()
                    && tracks[other_index].mode() == TrackMode::Showing
                {
                    let signals = tracks[other_index].set_mode(TrackMode::Hidden);
                    emitted.push((other_index, signals));
                }
            }
        }

        // A declared-default track also becomes a showing candidate,
        // but only the first such track resolves as the default.
        if tracks[index].declared_default() {
            let claim_taken = tracks[..index]
                .iter()
                .any(|track| {
                    track.declared_default()
                        && (track.mode() == TrackMode::Showing || track.is_default())
                });
            if !claim_taken {
                tracks[index].mark_resolved_default();
                enabled = true;
            }
        }

        if enabled {
            let signals = tracks[index].set_mode(TrackMode::Showing);
            emitted.push((index, signals));
        }
    }

    emitted
}

/// The subtitles/captions categories share one showing slot.
fn caption_slot_taken(earlier: &[Track]) -> bool {
    earlier.iter().any(|track| {
        matches!(track.kind, TrackKind::Subtitles | TrackKind::Captions)
            && track.mode() == TrackMode::Showing
    })
}

fn kind_slot_taken(earlier: &[Track], kind: TrackKind) -> bool {
    earlier
        .iter()
        .any(|track| track.kind == kind && track.mode() == TrackMode::Showing)
}
