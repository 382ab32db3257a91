use crate::text::script::separator_for;
use crate::types::{AlignerOutput, RawSegment, Segment, TranscriptResult};

/// Maps any aligner or transcriber output onto one [`TranscriptResult`].
///
/// Raw segment lists are rebuilt on a best-effort basis: each segment's
/// text comes from its word tokens when it has any, otherwise from its own
/// `text` field. A list that cannot be rebuilt (empty, or a segment without
/// timing) yields `None` so callers can treat it like any other empty result.
pub fn normalize_output(output: AlignerOutput, language: Option<&str>) -> Option<TranscriptResult> {
    match output {
        AlignerOutput::Full(result) => Some(result),
        AlignerOutput::Segments(raw) if raw.is_empty() => None,
        AlignerOutput::Segments(raw) => {
            tracing::warn!(
                segments = raw.len(),
                "aligner returned a bare segment list; reconstructing result"
            );
            match reconstruct_segments(&raw, language) {
                Ok(segments) => Some(TranscriptResult::from_segments(segments, language)),
                Err(message) => {
                    tracing::error!(reason = %message, "failed to reconstruct aligner result");
                    None
                }
            }
        }
    }
}

fn reconstruct_segments(raw: &[RawSegment], language: Option<&str>) -> Result<Vec<Segment>, String> {
    let separator = separator_for(language);
    raw.iter()
        .enumerate()
        .map(|(index, segment)| {
            let start = segment
                .start
                .ok_or_else(|| format!("segment #{index} has no start time"))?;
            let end = segment
                .end
                .ok_or_else(|| format!("segment #{index} has no end time"))?;
            let text = match segment.words.as_deref() {
                Some(words) if !words.is_empty() => words
                    .iter()
                    .map(|word| word.word.as_str())
                    .collect::<Vec<_>>()
                    .join(separator)
                    .trim()
                    .to_string(),
                _ => segment.text.as_deref().unwrap_or_default().trim().to_string(),
            };
            Ok(Segment::new(start, end, text))
        })
        .collect()
}
