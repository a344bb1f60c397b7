/*!
 * Tests for the track state machine
 */

use std::str::FromStr;

use cuetrack::errors::TrackError;
use cuetrack::track::{ReadyState, Track, TrackKind, TrackMode, TrackSignal};

use crate::common;

fn sourced_track() -> Track {
    Track::new(
        "t1",
        TrackKind::Captions,
        "English captions",
        "en",
        "captions-en.vtt",
        false,
    )
}

/// Test initial state after construction
#[test]
fn test_track_new_withRegionTag_shouldNormalizeLanguage() {
    let track = Track::new("t1", TrackKind::Subtitles, "US English", "en-US", "", false);

    assert_eq!(track.language, "en");
    assert_eq!(track.mode(), TrackMode::Off);
    assert_eq!(track.ready_state(), ReadyState::None);
    assert!(!track.is_default());
    assert!(track.cues().is_empty());
}

/// Test that re-setting the current mode is a no-op
#[test]
fn test_set_mode_withSameMode_shouldEmitNothing() {
    let mut track = sourced_track();

    let first = track.set_mode(TrackMode::Showing);
    assert_eq!(first, vec![TrackSignal::LoadRequested]);

    // Idempotence: the second call produces none of the side effects
    let second = track.set_mode(TrackMode::Showing);
    assert!(second.is_empty());
    assert_eq!(track.ready_state(), ReadyState::Loading);
}

/// Test that activating an unloaded sourced track requests a load
#[test]
fn test_set_mode_withConfiguredSource_shouldRequestLoad() {
    let mut track = sourced_track();

    let signals = track.set_mode(TrackMode::Showing);

    assert_eq!(signals, vec![TrackSignal::LoadRequested]);
    assert_eq!(track.ready_state(), ReadyState::Loading);
}

/// Test that a sourceless track never requests a load
#[test]
fn test_set_mode_withoutSource_shouldNotRequestLoad() {
    let mut track = Track::new("t1", TrackKind::Captions, "", "en", "", false);

    let signals = track.set_mode(TrackMode::Showing);

    assert!(signals.is_empty());
    assert_eq!(track.ready_state(), ReadyState::None);
}

/// Test that hiding an unloaded sourced track also triggers the load
#[test]
fn test_set_mode_withHiddenActivation_shouldRequestLoadAndRemoveContainer() {
    let mut track = sourced_track();

    let signals = track.set_mode(TrackMode::Hidden);

    assert_eq!(
        signals,
        vec![TrackSignal::LoadRequested, TrackSignal::ContainerRemoved]
    );
    assert_eq!(track.ready_state(), ReadyState::Loading);
}

/// Test that an in-flight load suppresses re-triggering
#[test]
fn test_set_mode_withLoadInFlight_shouldNotRetrigger() {
    let mut track = sourced_track();
    track.set_mode(TrackMode::Hidden);
    assert_eq!(track.ready_state(), ReadyState::Loading);

    let signals = track.set_mode(TrackMode::Showing);
    assert!(signals.is_empty());
}

/// Test the rebuild signal on a loaded track
#[test]
fn test_set_mode_withLoadedTrack_shouldRequestRebuild() {
    let mut track = sourced_track();
    track.load_cues(vec![common::make_cue(0.0, 2.0, "hi")]);

    let signals = track.set_mode(TrackMode::Showing);
    assert_eq!(signals, vec![TrackSignal::RebuildNeeded]);
}

/// Test hiding a loaded showing track
#[test]
fn test_set_mode_withLoadedShowingToHidden_shouldRebuildAndRemove() {
    let mut track = sourced_track();
    track.load_cues(vec![common::make_cue(0.0, 2.0, "hi")]);
    track.set_mode(TrackMode::Showing);

    let signals = track.set_mode(TrackMode::Hidden);
    assert_eq!(
        signals,
        vec![TrackSignal::RebuildNeeded, TrackSignal::ContainerRemoved]
    );
    assert_eq!(track.ready_state(), ReadyState::Loaded);
}

/// Test that turning a track off resets its load state
#[test]
fn test_set_mode_withOff_shouldResetReadyState() {
    let mut track = sourced_track();
    track.load_cues(vec![common::make_cue(0.0, 2.0, "hi")]);
    track.set_mode(TrackMode::Showing);

    let signals = track.set_mode(TrackMode::Off);
    assert_eq!(
        signals,
        vec![TrackSignal::RebuildNeeded, TrackSignal::ContainerRemoved]
    );
    assert_eq!(track.ready_state(), ReadyState::None);

    // The next activation reloads from scratch
    let reactivation = track.set_mode(TrackMode::Showing);
    assert_eq!(reactivation, vec![TrackSignal::LoadRequested]);
}

/// Test the numeric mode boundary
#[test]
fn test_set_mode_value_withIllegalValue_shouldFail() {
    let mut track = sourced_track();

    let result = track.set_mode_value(7);
    assert!(matches!(result, Err(TrackError::InvalidMode(7))));
    assert_eq!(track.mode(), TrackMode::Off);

    let signals = track.set_mode_value(2).unwrap();
    assert_eq!(signals, vec![TrackSignal::LoadRequested]);
    assert_eq!(track.mode(), TrackMode::Showing);
}

/// Test mode ordering and numeric conversions
#[test]
fn test_track_mode_withNumericValues_shouldOrderAndConvert() {
    assert!(TrackMode::Off < TrackMode::Hidden);
    assert!(TrackMode::Hidden < TrackMode::Showing);

    assert_eq!(TrackMode::try_from(0).unwrap(), TrackMode::Off);
    assert_eq!(TrackMode::try_from(1).unwrap(), TrackMode::Hidden);
    assert_eq!(TrackMode::try_from(2).unwrap(), TrackMode::Showing);
    assert_eq!(TrackMode::Showing.as_value(), 2);
}

/// Test kind string conversions
#[test]
fn test_track_kind_withStringForms_shouldRoundTrip() {
    assert_eq!(TrackKind::from_str("captions").unwrap(), TrackKind::Captions);
    assert_eq!(TrackKind::from_str("Chapters").unwrap(), TrackKind::Chapters);
    assert_eq!(TrackKind::Signlanguage.as_str(), "signlanguage");
    assert_eq!(format!("{}", TrackKind::Audiodescription), "audiodescription");

    let result = TrackKind::from_str("toolbar");
    assert!(matches!(result, Err(TrackError::UnknownKind(_))));
}

/// Test a successful load completion
#[test]
fn test_on_load_complete_withLoadInFlight_shouldInstallCues() {
    let mut track = sourced_track();
    track.set_mode(TrackMode::Showing);
    assert_eq!(track.ready_state(), ReadyState::Loading);

    let signals = track.on_load_complete(vec![common::make_cue(0.0, 2.0, "hi")]);

    assert_eq!(signals, vec![TrackSignal::RebuildNeeded]);
    assert_eq!(track.ready_state(), ReadyState::Loaded);
    assert_eq!(track.cues().len(), 1);
}

/// Test that a completion with no load in flight is ignored
#[test]
fn test_on_load_complete_withoutLoadInFlight_shouldIgnoreCompletion() {
    let mut track = sourced_track();

    let signals = track.on_load_complete(vec![common::make_cue(0.0, 2.0, "hi")]);

    assert!(signals.is_empty());
    assert_eq!(track.ready_state(), ReadyState::None);
    assert!(track.cues().is_empty());
}

/// Test that turning a track off orphans the in-flight load
#[test]
fn test_on_load_complete_withTrackTurnedOff_shouldIgnoreStaleCompletion() {
    let mut track = sourced_track();
    track.set_mode(TrackMode::Showing);
    track.set_mode(TrackMode::Off);
    assert_eq!(track.ready_state(), ReadyState::None);

    let signals = track.on_load_complete(vec![common::make_cue(0.0, 2.0, "late")]);

    assert!(signals.is_empty());
    assert!(track.cues().is_empty());
    assert_eq!(track.ready_state(), ReadyState::None);
}

/// Test the load error hook
#[test]
fn test_on_load_error_withLoadInFlight_shouldParkInErrorState() {
    let mut track = sourced_track();
    track.set_mode(TrackMode::Showing);

    track.on_load_error();
    assert_eq!(track.ready_state(), ReadyState::Error);

    // An error report with no load in flight changes nothing
    let mut idle = sourced_track();
    idle.on_load_error();
    assert_eq!(idle.ready_state(), ReadyState::None);
}
