use super::collect_cues;
use crate::error::SubtitleError;
use crate::pipeline::traits::{CueTextShaper, ProgressObserver};
use crate::text::timestamp::{format_timestamp, TimestampStyle};
use crate::types::Segment;

const VTT_HEADER: &str = "WEBVTT\n\n";

pub fn render_vtt(
    segments: &[Segment],
    audio_duration: f64,
    shaper: &dyn CueTextShaper,
    progress: &dyn ProgressObserver,
) -> Result<String, SubtitleError> {
    progress.start("Writing VTT", segments.len() as u64);
    let cues = collect_cues(segments, audio_duration, shaper, progress, TimestampStyle::Vtt);
    progress.finish();

    let mut out = String::from(VTT_HEADER);
    for cue in cues? {
        out.push_str(&format!(
            "{} --> {}\n{}\n\n",
            format_timestamp(cue.start, TimestampStyle::Vtt),
            format_timestamp(cue.end, TimestampStyle::Vtt),
            cue.lines.join("\n")
        ));
    }
    Ok(out)
}
