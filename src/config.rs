use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SubtitleError;
use crate::text::script::is_logographic;
use crate::types::OutputFormat;

/// Which post-processing segment text receives before it is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderVariant {
    /// Recognized text; long cues are wrapped onto several lines.
    #[default]
    Transcription,
    /// Forced-alignment output; never wrapped, spaces dropped for CJK text.
    Alignment,
}

/// Formats requested for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSelection {
    #[default]
    Srt,
    Vtt,
    Txt,
    All,
}

impl OutputSelection {
    /// Selected formats, always in srt, vtt, txt order.
    pub fn formats(self) -> Vec<OutputFormat> {
        match self {
            Self::Srt => vec![OutputFormat::Srt],
            Self::Vtt => vec![OutputFormat::Vtt],
            Self::Txt => vec![OutputFormat::Txt],
            Self::All => vec![OutputFormat::Srt, OutputFormat::Vtt, OutputFormat::Txt],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Txt => "txt",
            Self::All => "all",
        }
    }
}

impl FromStr for OutputSelection {
    type Err = SubtitleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" => Ok(Self::Vtt),
            "txt" => Ok(Self::Txt),
            "all" => Ok(Self::All),
            other => Err(SubtitleError::invalid_input(format!(
                "unknown output format '{other}' (expected srt, vtt, txt or all)"
            ))),
        }
    }
}

impl fmt::Display for OutputSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-run rendering parameters. Nothing here is global: every writer gets
/// its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Length of the source audio in seconds; cues never extend past it.
    pub audio_duration: f64,
    #[serde(default = "default_max_line_width")]
    pub max_line_width: usize,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub output: OutputSelection,
    #[serde(default)]
    pub variant: RenderVariant,
    #[serde(default)]
    pub show_progress: bool,
}

fn default_max_line_width() -> usize {
    RenderConfig::DEFAULT_MAX_LINE_WIDTH
}

impl RenderConfig {
    pub const DEFAULT_MAX_LINE_WIDTH: usize = 42;

    pub fn new(audio_duration: f64) -> Self {
        Self {
            audio_duration,
            max_line_width: Self::DEFAULT_MAX_LINE_WIDTH,
            language: None,
            output: OutputSelection::default(),
            variant: RenderVariant::default(),
            show_progress: false,
        }
    }

    pub fn load(path: &Path) -> Result<Self, SubtitleError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| SubtitleError::io("read render config", e))?;
        serde_json::from_str(&data).map_err(|e| SubtitleError::json("parse render config", e))
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn is_logographic(&self) -> bool {
        is_logographic(self.language())
    }

    pub(crate) fn validate(&self) -> Result<(), SubtitleError> {
        if !self.audio_duration.is_finite() || self.audio_duration < 0.0 {
            return Err(SubtitleError::invalid_input(format!(
                "audio duration must be a non-negative number of seconds, got {}",
                self.audio_duration
            )));
        }
        if self.max_line_width == 0 {
            return Err(SubtitleError::invalid_input("max line width must be positive"));
        }
        Ok(())
    }
}
