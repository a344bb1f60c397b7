use std::cmp::Ordering;

use crate::cue::Cue;
use crate::track::{ReadyState, Track, TrackMode};

// @module: Active cue computation

/// The cue `active` predicate.
///
/// A cue is active iff its track is showing with cues loaded and
/// `start_time <= t <= end_time`. NaN-timed cues (malformed blocks)
/// fail the interval test for every finite time.
pub fn is_active(track: &Track, cue: &Cue, current_time: f64) -> bool {
    track.mode() == TrackMode::Showing
        && track.ready_state() == ReadyState::Loaded
        && cue.contains_time(current_time)
}

/// Canonical cue enumeration order: start time ascending, then end time
/// ascending, then creation order ascending.
pub fn cue_order(a: &Cue, b: &Cue) -> Ordering {
    a.start_time
        .total_cmp(&b.start_time)
        .then(a.end_time.total_cmp(&b.end_time))
        .then(a.creation_order().cmp(&b.creation_order()))
}

/// Compute the full active set of one track at `current_time`.
///
/// Rebuilt from scratch on every call; nothing is cached between
/// queries. Cue counts are small enough that the linear scan is the
/// whole cost.
pub fn active_cues(track: &Track, current_time: f64) -> Vec<&Cue> {
    if track.mode() != TrackMode::Showing || track.ready_state() != ReadyState::Loaded {
        return Vec::new();
    }

    let mut active: Vec<&Cue> = track
        .cues()
        .iter()
        .filter(|cue| cue.contains_time(current_time))
        .collect();

    active.sort_by(|a, b| cue_order(a, b));
    active
}
