use crate::pipeline::traits::CueTextShaper;
use crate::types::TranscriptResult;

/// Plain-text output: the full transcript, trimmed, with one trailing newline.
/// Segments and the audio duration play no part here.
pub fn render_txt(result: &TranscriptResult, shaper: &dyn CueTextShaper) -> String {
    let text = shaper.shape_transcript(result.text.trim());
    format!("{}\n", text.trim())
}
