use crate::pipeline::traits::{CueTextShaper, ProgressObserver};
use crate::text::script::remove_spaces;
use crate::text::wrap::wrap_lines;

/// Transcription shaping: wraps cue text to the line budget.
pub struct WrappingShaper {
    max_width: usize,
    logographic: bool,
}

impl WrappingShaper {
    pub fn new(max_width: usize, logographic: bool) -> Self {
        Self {
            max_width,
            logographic,
        }
    }
}

impl CueTextShaper for WrappingShaper {
    fn shape_cue(&self, text: &str) -> Vec<String> {
        wrap_lines(text, self.max_width, self.logographic)
    }

    fn shape_transcript(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Alignment shaping: keeps the aligner's segmentation and drops the
/// spaces it inserts between CJK characters.
pub struct LogographicSpaceStripper {
    logographic: bool,
}

impl LogographicSpaceStripper {
    pub fn new(logographic: bool) -> Self {
        Self { logographic }
    }

    fn clean(&self, text: &str) -> String {
        if self.logographic {
            remove_spaces(text)
        } else {
            text.to_string()
        }
    }
}

impl CueTextShaper for LogographicSpaceStripper {
    fn shape_cue(&self, text: &str) -> Vec<String> {
        let cleaned = self.clean(text);
        if cleaned.trim().is_empty() {
            Vec::new()
        } else {
            vec![cleaned]
        }
    }

    fn shape_transcript(&self, text: &str) -> String {
        self.clean(text)
    }
}

pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn start(&self, _label: &str, _total: u64) {}

    fn advance(&self, _delta: u64) {}

    fn finish(&self) {}
}
