use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::SubtitleError;
use crate::text::script::separator_for;

/// One timestamped span of recognized or aligned text.
///
/// Fields other than `start`, `end` and `text` are kept in `extra` and
/// serialized back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds. Renderers clamp this to the audio duration.
    pub end: f64,
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Full transcript; kept consistent with `segments` via [`TranscriptResult::refresh_text`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TranscriptResult {
    /// Builds a result whose `text` is derived from the segments.
    pub fn from_segments(segments: Vec<Segment>, language: Option<&str>) -> Self {
        let mut result = Self {
            text: String::new(),
            segments,
            language: language.map(str::to_string),
            extra: Map::new(),
        };
        result.refresh_text(language);
        result
    }

    pub fn from_json(json: &str) -> Result<Self, SubtitleError> {
        serde_json::from_str(json).map_err(|e| SubtitleError::json("parse transcript result", e))
    }

    /// Segment texts joined with the separator of `language`'s script.
    pub fn derived_text(&self, language: Option<&str>) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(separator_for(language))
    }

    pub fn refresh_text(&mut self, language: Option<&str>) {
        self.text = self.derived_text(language);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A segment-like object as some aligners return it, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSegment {
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub words: Option<Vec<RawWord>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawWord {
    pub word: String,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

/// Every shape an external aligner or transcriber is known to return.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignerOutput {
    Full(TranscriptResult),
    Segments(Vec<RawSegment>),
}

impl AlignerOutput {
    pub fn from_json(value: Value) -> Result<Self, SubtitleError> {
        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map(Self::Full)
                .map_err(|e| SubtitleError::json("parse aligner result", e)),
            Value::Array(_) => serde_json::from_value(value)
                .map(Self::Segments)
                .map_err(|e| SubtitleError::json("parse aligner segments", e)),
            other => Err(SubtitleError::invalid_input(format!(
                "aligner output must be an object or an array, got {}",
                json_kind(&other)
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Srt,
    Vtt,
    Txt,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Txt => "txt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Srt => "SRT",
            Self::Vtt => "VTT",
            Self::Txt => "TXT",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscribeTask {
    #[default]
    Transcribe,
    /// Transcribe and translate into English.
    Translate,
}

/// Options handed through to a [`crate::Transcriber`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscribeOptions {
    pub language: Option<String>,
    pub task: TranscribeTask,
    pub initial_prompt: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn derived_text_uses_space_for_alphabetic_languages() {
        let result = TranscriptResult::from_segments(
            vec![Segment::new(0.0, 1.0, "Hello"), Segment::new(1.0, 2.0, "world")],
            Some("en"),
        );
        assert_eq!(result.text, "Hello world");
    }

    #[test]
    fn derived_text_has_no_separator_for_logographic_languages() {
        let result = TranscriptResult::from_segments(
            vec![Segment::new(0.0, 1.0, "Hello"), Segment::new(1.0, 2.0, "World")],
            Some("ja"),
        );
        assert_eq!(result.text, "HelloWorld");
    }

    #[test]
    fn segment_extra_fields_pass_through() {
        let json = r#"{"start": 0.5, "end": 1.25, "text": "hi", "id": 7, "avg_logprob": -0.2}"#;
        let segment: Segment = serde_json::from_str(json).expect("valid segment");
        assert_eq!(segment.extra.get("id"), Some(&json!(7)));

        let back = serde_json::to_value(&segment).expect("serialize");
        assert_eq!(back["avg_logprob"], json!(-0.2));
        assert_eq!(back["text"], json!("hi"));
    }

    #[test]
    fn segment_missing_end_is_rejected() {
        let err = TranscriptResult::from_json(r#"{"text": "a", "segments": [{"start": 0, "text": "a"}]}"#)
            .expect_err("missing end must fail");
        assert!(matches!(err, SubtitleError::Json { .. }));
    }

    #[test]
    fn null_text_and_segments_default_to_empty() {
        let result = TranscriptResult::from_json(r#"{"text": null, "segments": null, "duration": 3.0}"#)
            .expect("valid result");
        assert!(result.is_empty());
        assert!(result.segments.is_empty());
        assert_eq!(result.extra.get("duration"), Some(&json!(3.0)));
    }

    #[test]
    fn aligner_output_detects_shape() {
        let full = AlignerOutput::from_json(json!({"text": "a", "segments": []})).unwrap();
        assert!(matches!(full, AlignerOutput::Full(_)));

        let raw = AlignerOutput::from_json(json!([{"start": 0.0, "end": 1.0, "text": "a"}])).unwrap();
        match raw {
            AlignerOutput::Segments(segments) => assert_eq!(segments.len(), 1),
            other => panic!("unexpected shape: {other:?}"),
        }

        let err = AlignerOutput::from_json(json!("nope")).unwrap_err();
        assert!(matches!(err, SubtitleError::InvalidInput { .. }));
    }
}
