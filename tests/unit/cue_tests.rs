/*!
 * Tests for cue records and cue stores
 */

use std::fmt::Write;

use cuetrack::cue::{Cue, CueStore};

use crate::common;

/// Test cue construction and field decoding
#[test]
fn test_cue_new_withSettingsText_shouldDecodeDirectives() {
    let cue = Cue::new(
        Some("7".to_string()),
        1.0,
        4.0,
        "Hello".to_string(),
        "A:start X:junk".to_string(),
    );

    assert_eq!(cue.identifier.as_deref(), Some("7"));
    assert_eq!(cue.start_time, 1.0);
    assert_eq!(cue.end_time, 4.0);
    assert_eq!(cue.payload, "Hello");
    assert_eq!(cue.settings_raw, "A:start X:junk");
    assert_eq!(cue.settings.text_alignment.as_deref(), Some("start"));
    assert!(cue.settings.vertical_text.is_none());
}

/// Test that creation order increases monotonically
#[test]
fn test_cue_creation_order_withSequentialConstruction_shouldIncrease() {
    let first = common::make_cue(0.0, 1.0, "first");
    let second = common::make_cue(0.0, 1.0, "second");
    let third = common::make_cue(0.0, 1.0, "third");

    assert!(first.creation_order() < second.creation_order());
    assert!(second.creation_order() < third.creation_order());
}

/// Test inclusive interval containment
#[test]
fn test_contains_time_withBoundaryValues_shouldBeInclusive() {
    let cue = common::make_cue(1.0, 3.0, "text");

    assert!(cue.contains_time(1.0));
    assert!(cue.contains_time(2.0));
    assert!(cue.contains_time(3.0));
    assert!(!cue.contains_time(0.999));
    assert!(!cue.contains_time(3.001));
}

/// Test that NaN timing never contains any instant
#[test]
fn test_contains_time_withNanTiming_shouldAlwaysBeFalse() {
    let cue = common::make_cue(f64::NAN, f64::NAN, "inert");

    assert!(!cue.is_timed());
    for time in [0.0, 1.0, 1e9, -1.0] {
        assert!(!cue.contains_time(time));
    }
}

/// Test that inverted intervals are preserved, not rejected
#[test]
fn test_cue_new_withInvertedInterval_shouldPreserveTiming() {
    let cue = common::make_cue(5.0, 2.0, "inverted");

    assert!(cue.is_timed());
    assert_eq!(cue.start_time, 5.0);
    assert_eq!(cue.end_time, 2.0);
    // An inverted interval can never contain a time
    assert!(!cue.contains_time(3.0));
}

/// Test cue display formatting
#[test]
fn test_cue_display_withIdentifierAndSettings_shouldRenderBlock() {
    let cue = Cue::new(
        Some("1".to_string()),
        1.0,
        4.0,
        "Hello".to_string(),
        "A:start".to_string(),
    );

    let mut output = String::new();
    write!(output, "{}", cue).unwrap();

    assert!(output.contains("1\n"));
    assert!(output.contains("00:00:01.000 --> 00:00:04.000 A:start"));
    assert!(output.contains("Hello"));
}

/// Test that the store preserves insertion order
#[test]
fn test_cue_store_withAppends_shouldPreserveInsertionOrder() {
    let mut store = CueStore::new();
    store.push(common::make_cue(5.0, 6.0, "late"));
    store.push(common::make_cue(0.0, 1.0, "early"));

    assert_eq!(store.len(), 2);
    assert!(!store.is_empty());
    assert_eq!(store.get(0).unwrap().payload, "late");
    assert_eq!(store.get(1).unwrap().payload, "early");
}

/// Test identifier lookup returns the first match
#[test]
fn test_cue_by_id_withDuplicateIdentifiers_shouldReturnFirstMatch() {
    let mut store = CueStore::new();
    store.push(Cue::new(
        Some("x".to_string()),
        0.0,
        1.0,
        "first".to_string(),
        String::new(),
    ));
    store.push(Cue::new(
        Some("x".to_string()),
        2.0,
        3.0,
        "second".to_string(),
        String::new(),
    ));

    let found = store.cue_by_id("x").unwrap();
    assert_eq!(found.payload, "first");
    assert!(store.cue_by_id("missing").is_none());
}

/// Test batch extension and iteration
#[test]
fn test_cue_store_extend_withBatch_shouldAppendInOrder() {
    let mut store = CueStore::new();
    store.extend(vec![
        common::make_cue(0.0, 1.0, "a"),
        common::make_cue(1.0, 2.0, "b"),
    ]);

    let payloads: Vec<&str> = store.iter().map(|cue| cue.payload.as_str()).collect();
    assert_eq!(payloads, vec!["a", "b"]);
}
