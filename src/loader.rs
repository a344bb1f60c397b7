use anyhow::Result;
use async_trait::async_trait;
use log::warn;

use crate::caption_parser::parse_captions;
use crate::track::{Track, TrackSignal};

// @module: Asynchronous caption load boundary

/// Transport used to retrieve raw caption text.
///
/// Implementations own all I/O, timeouts and retry policy; the library
/// never fetches anything itself. The fetched text is handed straight
/// to the caption parser.
#[async_trait]
pub trait CaptionFetcher {
    /// Retrieve the raw caption text behind `source`.
    async fn fetch(&self, source: &str) -> Result<String>;
}

/// Drive one track load end to end: fetch, parse, then hand the result
/// to the track's load hooks.
///
/// The hooks enforce the load-state rules: a completion arriving after
/// the track was turned off is ignored, and a failed fetch or an empty
/// caption file parks the track in the error state. Returns the signals
/// the host should act on (a rebuild when cues were installed).
pub async fn load_track(track: &mut Track, fetcher: &dyn CaptionFetcher) -> Vec<TrackSignal> {
    let source = track.source().to_string();

    match fetcher.fetch(&source).await {
        Ok(text) => match parse_captions(&text) {
            Ok(cues) => track.on_load_complete(cues),
            Err(error) => {
                warn!("Caption source '{}' was unusable: {}", source, error);
                track.on_load_error();
                Vec::new()
            }
        },
        Err(error) => {
            warn!("Failed to fetch caption source '{}': {}", source, error);
            track.on_load_error();
            Vec::new()
        }
    }
}
