use std::path::Path;

use crate::error::SubtitleError;
use crate::types::{AlignerOutput, TranscribeOptions};

/// Forced aligner: times a known reference text against audio.
pub trait Aligner: Send + Sync {
    fn align(
        &self,
        audio_path: &Path,
        reference_text: &str,
        language: &str,
    ) -> Result<AlignerOutput, SubtitleError>;
}

/// Speech recognizer producing timestamped segments from audio alone.
pub trait Transcriber: Send + Sync {
    fn transcribe(
        &self,
        audio_path: &Path,
        options: &TranscribeOptions,
    ) -> Result<AlignerOutput, SubtitleError>;
}

/// Post-processing applied to text right before it is written out.
pub trait CueTextShaper: Send + Sync {
    /// Turns one trimmed, non-empty segment text into the lines of a cue.
    fn shape_cue(&self, text: &str) -> Vec<String>;

    /// Adjusts the full transcript written to plain-text output.
    fn shape_transcript(&self, text: &str) -> String;
}

/// Receives per-segment progress while a subtitle is rendered.
///
/// Purely informational: output is identical whichever observer is used.
pub trait ProgressObserver: Send + Sync {
    fn start(&self, label: &str, total: u64);
    fn advance(&self, delta: u64);
    fn finish(&self);
}
