use log::debug;

use crate::config::CaptionConfig;
use crate::cue::Cue;
use crate::errors::TrackError;
use crate::selector;
use crate::track::{Track, TrackMode, TrackSignal};

// @module: Per-element track collection and host notifications

/// Host collaborator notified of visually relevant model changes.
///
/// The renderer owns all presentation and the loader owns all I/O; the
/// track list only tells them when to act. Every callback is
/// notification-only and must not call back into the model re-entrantly.
pub trait CaptionHost {
    /// Active cues of the element may have changed; rebuild its display.
    fn rebuild_needed(&self, element_id: &str);

    /// The visual container of one track should be torn down.
    fn container_removed(&self, element_id: &str, track_id: &str);

    /// One track wants its caption source fetched. The loader reports
    /// back through the track's `on_load_complete`/`on_load_error`
    /// hooks.
    fn load_requested(&self, element_id: &str, track_id: &str, source: &str);
}

/// The ordered list of tracks attached to one media element.
///
/// Declaration order is significant: default track selection evaluates
/// tracks in this order, and the merged active-cue enumeration groups
/// cues by track in this order.
pub struct TrackList {
    element_id: String,
    tracks: Vec<Track>,
    host: Option<Box<dyn CaptionHost>>,
}

impl TrackList {
    /// Create an empty track list for one media element.
    pub fn new(element_id: impl Into<String>) -> Self {
        TrackList {
            element_id: element_id.into(),
            tracks: Vec::new(),
            host: None,
        }
    }

    /// Identifier of the media element this list belongs to.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Subscribe the renderer/loader collaborator.
    pub fn subscribe(&mut self, host: Box<dyn CaptionHost>) {
        self.host = Some(host);
    }

    /// Attach a track, returning its index in declaration order.
    pub fn add_track(&mut self, track: Track) -> usize {
        debug!(
            "Element '{}' adding {} track '{}' ({})",
            self.element_id, track.kind, track.id, track.language
        );
        self.tracks.push(track);
        self.tracks.len() - 1
    }

    /// Number of attached tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// True when no track is attached.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `index`, in declaration order.
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Mutable track access for the host (loader hooks, cue injection).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Track> {
        self.tracks.get_mut(index)
    }

    /// Iterate tracks in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// All tracks in declaration order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Change one track's mode and dispatch the resulting signals to
    /// the subscribed host.
    pub fn set_track_mode(&mut self, index: usize, mode: TrackMode) -> Result<(), TrackError> {
        let track = self
            .tracks
            .get_mut(index)
            .ok_or(TrackError::UnknownTrack(index))?;
        let signals = track.set_mode(mode);
        self.dispatch(index, &signals);
        Ok(())
    }

    /// Deliver a load completion to one track, dispatching the rebuild
    /// signal when the completion is accepted.
    pub fn complete_load(&mut self, index: usize, cues: Vec<Cue>) -> Result<(), TrackError> {
        let track = self
            .tracks
            .get_mut(index)
            .ok_or(TrackError::UnknownTrack(index))?;
        let signals = track.on_load_complete(cues);
        self.dispatch(index, &signals);
        Ok(())
    }

    /// Deliver a load failure to one track.
    pub fn fail_load(&mut self, index: usize) -> Result<(), TrackError> {
        let track = self
            .tracks
            .get_mut(index)
            .ok_or(TrackError::UnknownTrack(index))?;
        track.on_load_error();
        Ok(())
    }

    /// Run default track selection over the attached tracks and
    /// dispatch every resulting signal.
    pub fn select_defaults(&mut self, config: &CaptionConfig) {
        let emitted = selector::select_default_tracks(&mut self.tracks, config);
        for (index, signals) in emitted {
            self.dispatch(index, &signals);
        }
    }

    /// The merged active-cue enumeration for the whole element.
    ///
    /// Cues are grouped by track in declaration order; within each
    /// group they follow the canonical start/end/creation order. Only
    /// showing, loaded tracks contribute.
    pub fn active_cues(&self, current_time: f64) -> Vec<&Cue> {
        let mut merged = Vec::new();
        for track in &self.tracks {
            merged.extend(track.active_cues(current_time));
        }
        merged
    }

    /// Per-tick refresh: recompute every track's active set and notify
    /// the host once for the element. Returns the merged active count.
    ///
    /// The merged enumeration is only consistent for a tick after all
    /// tracks of the element have been refreshed, which is why the
    /// rebuild notification fires once here rather than per track.
    pub fn refresh(&self, current_time: f64) -> usize {
        let active_count = self.active_cues(current_time).len();
        if let Some(host) = &self.host {
            host.rebuild_needed(&self.element_id);
        }
        active_count
    }

    fn dispatch(&self, track_index: usize, signals: &[TrackSignal]) {
        let host = match &self.host {
            Some(host) => host,
            None => return,
        };
        let track = &self.tracks[track_index];

        for signal in signals {
            match signal {
                TrackSignal::LoadRequested => {
                    host.load_requested(&self.element_id, &track.id, track.source());
                }
                TrackSignal::RebuildNeeded => {
                    host.rebuild_needed(&self.element_id);
                }
                TrackSignal::ContainerRemoved => {
                    host.container_removed(&self.element_id, &track.id);
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a TrackList {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
