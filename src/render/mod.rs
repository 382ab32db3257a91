//! Duration-bounded rendering of segments into subtitle cues.
//!
//! Every format shares one pass over the chronological segment list:
//! a segment starting after the audio ends stops the pass, an end past the
//! audio is clamped, and segments left empty or zero-length are skipped.

use crate::error::SubtitleError;
use crate::pipeline::traits::{CueTextShaper, ProgressObserver};
use crate::text::timestamp::{format_timestamp, TimestampStyle};
use crate::types::Segment;

mod srt;
mod txt;
mod vtt;

pub use srt::render_srt;
pub use txt::render_txt;
pub use vtt::render_vtt;

/// A segment that survived filtering, ready to be written in any format.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub start: f64,
    pub end: f64,
    pub lines: Vec<String>,
}

/// Rejects segments whose timing cannot be rendered at all.
///
/// Runs before any output is produced so a malformed entry late in the list
/// never leaves a half-written subtitle behind.
pub fn validate_segments(segments: &[Segment]) -> Result<(), SubtitleError> {
    for (index, segment) in segments.iter().enumerate() {
        if !segment.start.is_finite() {
            return Err(SubtitleError::invalid_segment(
                index,
                format!("start is not a finite number of seconds ({})", segment.start),
            ));
        }
        if !segment.end.is_finite() {
            return Err(SubtitleError::invalid_segment(
                index,
                format!("end is not a finite number of seconds ({})", segment.end),
            ));
        }
    }
    Ok(())
}

/// Filters and shapes `segments` into cues bounded by `audio_duration`.
///
/// `style` only affects how the truncation point is reported.
pub fn collect_cues(
    segments: &[Segment],
    audio_duration: f64,
    shaper: &dyn CueTextShaper,
    progress: &dyn ProgressObserver,
    style: TimestampStyle,
) -> Result<Vec<Cue>, SubtitleError> {
    validate_segments(segments)?;

    let mut cues = Vec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        let start = segment.start;
        if start > audio_duration {
            tracing::warn!(
                segment = index,
                start = %format_timestamp(start, style),
                remaining = segments.len() - index,
                "audio ended before text; stopping"
            );
            break;
        }

        let end = segment.end.min(audio_duration);
        let text = segment.text.trim();
        if end <= start || text.is_empty() {
            tracing::debug!(segment = index, start, end, "skipping empty or zero-length segment");
            progress.advance(1);
            continue;
        }

        let lines = shaper.shape_cue(text);
        if lines.is_empty() {
            progress.advance(1);
            continue;
        }
        cues.push(Cue { start, end, lines });
        progress.advance(1);
    }
    Ok(cues)
}
