use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::SubtitleError;
use crate::pipeline::normalize_output::normalize_output;
use crate::pipeline::traits::{Aligner, Transcriber};
use crate::text::normalize::AlignmentTextPair;
use crate::text::script::{is_logographic, remove_spaces};
use crate::types::{TranscribeOptions, TranscriptResult};

const PREVIEW_CHARS: usize = 400;

/// Times a known reference text against audio through an [`Aligner`].
pub struct ForcedAlignmentRunner {
    aligner: Box<dyn Aligner>,
}

impl ForcedAlignmentRunner {
    pub fn new(aligner: Box<dyn Aligner>) -> Self {
        Self { aligner }
    }

    /// Aligns the reference text stored at `text_path` to `audio_path`.
    ///
    /// The reference is terminated line by line before it reaches the
    /// aligner and the added terminators are removed from every returned
    /// segment, so the result carries the reference's own punctuation.
    pub fn run(
        &self,
        audio_path: &Path,
        text_path: &Path,
        language: Option<&str>,
    ) -> Result<TranscriptResult, SubtitleError> {
        if !text_path.is_file() {
            return Err(SubtitleError::not_found(text_path));
        }
        if !audio_path.exists() {
            return Err(SubtitleError::not_found(audio_path));
        }
        let language = language
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .ok_or_else(|| SubtitleError::invalid_input("forced alignment requires a language"))?;

        let reference =
            fs::read_to_string(text_path).map_err(|e| SubtitleError::io("read reference text", e))?;
        if reference.trim().is_empty() {
            return Err(SubtitleError::invalid_input(format!(
                "reference text '{}' is empty",
                text_path.display()
            )));
        }

        tracing::info!(
            audio = %audio_path.display(),
            reference = %text_path.display(),
            language,
            "starting forced alignment"
        );
        let started = Instant::now();

        let pair = AlignmentTextPair::new(reference);
        let output = self.aligner.align(audio_path, pair.augmented(), language)?;
        let mut result = normalize_output(output, Some(language))
            .ok_or_else(|| SubtitleError::empty_result("aligner"))?;

        let result_language = result.language.clone().unwrap_or_else(|| language.to_string());
        restore_reference_text(&mut result, &pair, &result_language);
        if result.language.is_none() {
            result.language = Some(result_language);
        }
        if result.is_empty() {
            return Err(SubtitleError::empty_result("aligner"));
        }

        log_preview(&result.text);
        tracing::info!(
            segments = result.segments.len(),
            elapsed_s = started.elapsed().as_secs_f64(),
            "forced alignment finished"
        );
        Ok(result)
    }
}

/// Strips alignment terminators from each segment and rebuilds the full text.
///
/// Every segment is restored against the whole reference, line by line,
/// which stays best-effort once the aligner has re-split the text.
pub fn restore_reference_text(result: &mut TranscriptResult, pair: &AlignmentTextPair, language: &str) {
    let logographic = is_logographic(Some(language));
    if result.segments.is_empty() {
        result.text = pair.restore(&result.text, logographic);
        return;
    }

    for segment in &mut result.segments {
        segment.text = pair.restore(&segment.text, logographic);
    }
    result.refresh_text(Some(language));
    if logographic {
        result.text = remove_spaces(&result.text);
    }
}

/// Recognizes speech through a [`Transcriber`].
pub struct TranscriptionRunner {
    transcriber: Box<dyn Transcriber>,
}

impl TranscriptionRunner {
    pub fn new(transcriber: Box<dyn Transcriber>) -> Self {
        Self { transcriber }
    }

    pub fn run(
        &self,
        audio_path: &Path,
        options: &TranscribeOptions,
    ) -> Result<TranscriptResult, SubtitleError> {
        if !audio_path.exists() {
            return Err(SubtitleError::not_found(audio_path));
        }

        tracing::info!(
            audio = %audio_path.display(),
            language = options.language.as_deref().unwrap_or("auto"),
            task = ?options.task,
            "starting transcription"
        );
        let started = Instant::now();

        let output = self.transcriber.transcribe(audio_path, options)?;
        let mut result = normalize_output(output, options.language.as_deref())
            .ok_or_else(|| SubtitleError::empty_result("transcriber"))?;
        if result.is_empty() {
            return Err(SubtitleError::empty_result("transcriber"));
        }
        if result.language.is_none() {
            result.language = options.language.clone();
        }

        log_preview(&result.text);
        tracing::info!(
            segments = result.segments.len(),
            elapsed_s = started.elapsed().as_secs_f64(),
            "transcription finished"
        );
        Ok(result)
    }
}

fn log_preview(text: &str) {
    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    tracing::debug!(chars = text.chars().count(), preview = %preview, "result text");
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::types::{AlignerOutput, RawSegment, RawWord, Segment, TranscribeTask};

    type Received = Arc<Mutex<Option<(String, String)>>>;

    struct ScriptedAligner {
        output: AlignerOutput,
        received: Received,
    }

    impl ScriptedAligner {
        fn new(output: AlignerOutput) -> Self {
            Self {
                output,
                received: Received::default(),
            }
        }
    }

    impl Aligner for ScriptedAligner {
        fn align(
            &self,
            _audio_path: &Path,
            reference_text: &str,
            language: &str,
        ) -> Result<AlignerOutput, SubtitleError> {
            *self.received.lock().unwrap() = Some((reference_text.to_string(), language.to_string()));
            Ok(self.output.clone())
        }
    }

    struct FailingAligner;

    impl Aligner for FailingAligner {
        fn align(&self, _: &Path, _: &str, _: &str) -> Result<AlignerOutput, SubtitleError> {
            Err(SubtitleError::aligner("align audio", "model crashed"))
        }
    }

    struct EchoTranscriber;

    impl Transcriber for EchoTranscriber {
        fn transcribe(
            &self,
            _audio_path: &Path,
            options: &TranscribeOptions,
        ) -> Result<AlignerOutput, SubtitleError> {
            let text = match options.task {
                TranscribeTask::Transcribe => "bonjour",
                TranscribeTask::Translate => "hello",
            };
            Ok(AlignerOutput::Full(TranscriptResult::from_segments(
                vec![Segment::new(0.0, 1.0, text)],
                None,
            )))
        }
    }

    struct Fixture {
        dir: PathBuf,
        audio: PathBuf,
        reference: PathBuf,
    }

    impl Fixture {
        fn new(name: &str, reference: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("subalign_rs_runtime_{name}_{}", std::process::id()));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            let audio = dir.join("clip.wav");
            let text = dir.join("clip.txt");
            fs::write(&audio, b"").unwrap();
            fs::write(&text, reference).unwrap();
            Self {
                dir,
                audio,
                reference: text,
            }
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn aligner_sees_augmented_text_and_result_keeps_reference_punctuation() {
        let fixture = Fixture::new("latin", "hello world\nIs it done?");
        let aligner = ScriptedAligner::new(AlignerOutput::Full(TranscriptResult::from_segments(
            vec![
                Segment::new(0.0, 1.0, "hello world."),
                Segment::new(1.0, 2.0, "Is it done?"),
            ],
            Some("en"),
        )));
        let runner = ForcedAlignmentRunner::new(Box::new(aligner));

        let result = runner
            .run(&fixture.audio, &fixture.reference, Some("en"))
            .expect("alignment succeeds");
        assert_eq!(result.segments[0].text, "hello world");
        assert_eq!(result.segments[1].text, "Is it done?");
        assert_eq!(result.text, "hello world Is it done?");
    }

    #[test]
    fn aligner_receives_augmented_reference_and_language() {
        let fixture = Fixture::new("received", "first line\nsecond line");
        let aligner = ScriptedAligner::new(AlignerOutput::Full(TranscriptResult::from_segments(
            vec![Segment::new(0.0, 1.0, "first line.")],
            None,
        )));
        let received = Arc::clone(&aligner.received);
        let runner = ForcedAlignmentRunner::new(Box::new(aligner));
        runner
            .run(&fixture.audio, &fixture.reference, Some("en"))
            .expect("alignment succeeds");

        let received = received.lock().unwrap().clone();
        assert_eq!(
            received,
            Some(("first line.\nsecond line.".to_string(), "en".to_string()))
        );
    }

    #[test]
    fn logographic_raw_segments_are_rebuilt_and_spaces_removed() {
        let fixture = Fixture::new("cjk", "你好\n世界");
        let word = |w: &str| RawWord {
            word: w.to_string(),
            start: None,
            end: None,
        };
        let aligner = ScriptedAligner::new(AlignerOutput::Segments(vec![
            RawSegment {
                start: Some(0.0),
                end: Some(1.0),
                text: None,
                words: Some(vec![word("你"), word("好"), word("。")]),
            },
            RawSegment {
                start: Some(1.0),
                end: Some(2.0),
                text: Some("世 界 。".to_string()),
                words: None,
            },
        ]));
        let runner = ForcedAlignmentRunner::new(Box::new(aligner));

        let result = runner
            .run(&fixture.audio, &fixture.reference, Some("zh"))
            .expect("alignment succeeds");
        assert_eq!(result.segments[0].text, "你好");
        assert_eq!(result.segments[1].text, "世界");
        assert_eq!(result.text, "你好世界");
        assert_eq!(result.language.as_deref(), Some("zh"));
    }

    #[test]
    fn missing_reference_is_reported_before_aligning() {
        let fixture = Fixture::new("missing", "unused");
        let runner = ForcedAlignmentRunner::new(Box::new(FailingAligner));
        let err = runner
            .run(&fixture.audio, &fixture.dir.join("absent.txt"), Some("en"))
            .unwrap_err();
        assert!(matches!(err, SubtitleError::NotFound { .. }));
    }

    #[test]
    fn alignment_requires_language() {
        let fixture = Fixture::new("nolang", "text");
        let runner = ForcedAlignmentRunner::new(Box::new(FailingAligner));
        let err = runner.run(&fixture.audio, &fixture.reference, None).unwrap_err();
        assert!(matches!(err, SubtitleError::InvalidInput { .. }));
        let err = runner.run(&fixture.audio, &fixture.reference, Some("  ")).unwrap_err();
        assert!(matches!(err, SubtitleError::InvalidInput { .. }));
    }

    #[test]
    fn blank_reference_is_rejected() {
        let fixture = Fixture::new("blank", " \n\n");
        let runner = ForcedAlignmentRunner::new(Box::new(FailingAligner));
        let err = runner.run(&fixture.audio, &fixture.reference, Some("en")).unwrap_err();
        assert!(matches!(err, SubtitleError::InvalidInput { .. }));
    }

    #[test]
    fn aligner_failure_propagates() {
        let fixture = Fixture::new("failing", "text");
        let runner = ForcedAlignmentRunner::new(Box::new(FailingAligner));
        let err = runner.run(&fixture.audio, &fixture.reference, Some("en")).unwrap_err();
        assert!(matches!(err, SubtitleError::Aligner { .. }));
    }

    #[test]
    fn empty_aligner_output_is_an_empty_result() {
        let fixture = Fixture::new("empty", "text");
        let runner =
            ForcedAlignmentRunner::new(Box::new(ScriptedAligner::new(AlignerOutput::Segments(Vec::new()))));
        let err = runner.run(&fixture.audio, &fixture.reference, Some("en")).unwrap_err();
        assert!(matches!(err, SubtitleError::EmptyResult { .. }));

        let runner = ForcedAlignmentRunner::new(Box::new(ScriptedAligner::new(AlignerOutput::Full(
            TranscriptResult::default(),
        ))));
        let err = runner.run(&fixture.audio, &fixture.reference, Some("en")).unwrap_err();
        assert!(matches!(err, SubtitleError::EmptyResult { .. }));
    }

    #[test]
    fn result_without_segments_restores_full_text() {
        let pair = AlignmentTextPair::new("one line");
        let mut result = TranscriptResult {
            text: "one line.".to_string(),
            ..TranscriptResult::default()
        };
        restore_reference_text(&mut result, &pair, "en");
        assert_eq!(result.text, "one line");
    }

    #[test]
    fn transcription_passes_options_and_fills_language() {
        let fixture = Fixture::new("transcribe", "unused");
        let runner = TranscriptionRunner::new(Box::new(EchoTranscriber));
        let options = TranscribeOptions {
            language: Some("fr".to_string()),
            task: TranscribeTask::Translate,
            initial_prompt: None,
        };
        let result = runner.run(&fixture.audio, &options).expect("transcription succeeds");
        assert_eq!(result.text, "hello");
        assert_eq!(result.language.as_deref(), Some("fr"));
    }

    #[test]
    fn transcription_of_missing_audio_is_not_found() {
        let runner = TranscriptionRunner::new(Box::new(EchoTranscriber));
        let err = runner
            .run(Path::new("/nonexistent/clip.wav"), &TranscribeOptions::default())
            .unwrap_err();
        assert!(matches!(err, SubtitleError::NotFound { .. }));
    }
}
