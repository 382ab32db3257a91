use super::collect_cues;
use crate::error::SubtitleError;
use crate::pipeline::traits::{CueTextShaper, ProgressObserver};
use crate::text::timestamp::{format_timestamp, TimestampStyle};
use crate::types::Segment;

/// Renders SubRip text. Cues are numbered from 1 in emission order, so
/// skipped segments leave no gaps in the numbering.
pub fn render_srt(
    segments: &[Segment],
    audio_duration: f64,
    shaper: &dyn CueTextShaper,
    progress: &dyn ProgressObserver,
) -> Result<String, SubtitleError> {
    progress.start("Writing SRT", segments.len() as u64);
    let cues = collect_cues(segments, audio_duration, shaper, progress, TimestampStyle::Srt);
    progress.finish();

    let mut out = String::new();
    for (index, cue) in (1usize..).zip(cues?) {
        out.push_str(&format!(
            "{index}\n{} --> {}\n{}\n\n",
            format_timestamp(cue.start, TimestampStyle::Srt),
            format_timestamp(cue.end, TimestampStyle::Srt),
            cue.lines.join("\n")
        ));
    }
    Ok(out)
}
