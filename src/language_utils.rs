use isolang::Language;

/// Language tag utilities
///
/// Track languages are compared on their BCP-47 primary subtag only;
/// region and script subtags play no part in track selection.

/// Extract the primary subtag of a BCP-47 language tag
/// (`"en-US"` -> `"en"`). Empty input yields an empty subtag.
pub fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or_default()
}

/// Check whether a tag's primary subtag is a recognized ISO 639-1 code.
///
/// Used for diagnostics only; selection matches tags verbatim even when
/// the code is unknown.
pub fn is_recognized_subtag(tag: &str) -> bool {
    let primary = primary_subtag(tag).trim().to_lowercase();
    primary.len() == 2 && Language::from_639_1(&primary).is_some()
}
