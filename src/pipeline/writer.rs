use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::error::SubtitleError;
use crate::pipeline::traits::{CueTextShaper, ProgressObserver};
use crate::render::{render_srt, render_txt, render_vtt};
use crate::types::{OutputFormat, TranscriptResult};

pub struct SubtitleWriter {
    config: RenderConfig,
    text_shaper: Box<dyn CueTextShaper>,
    progress: Box<dyn ProgressObserver>,
}

pub(crate) struct SubtitleWriterParts {
    pub config: RenderConfig,
    pub text_shaper: Box<dyn CueTextShaper>,
    pub progress: Box<dyn ProgressObserver>,
}

impl SubtitleWriter {
    pub(crate) fn from_parts(parts: SubtitleWriterParts) -> Self {
        Self {
            config: parts.config,
            text_shaper: parts.text_shaper,
            progress: parts.progress,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders `result` in one format without touching the filesystem.
    pub fn render(
        &self,
        result: &TranscriptResult,
        format: OutputFormat,
    ) -> Result<String, SubtitleError> {
        let shaper = self.text_shaper.as_ref();
        let progress = self.progress.as_ref();
        match format {
            OutputFormat::Srt => {
                render_srt(&result.segments, self.config.audio_duration, shaper, progress)
            }
            OutputFormat::Vtt => {
                render_vtt(&result.segments, self.config.audio_duration, shaper, progress)
            }
            OutputFormat::Txt => Ok(render_txt(result, shaper)),
        }
    }

    /// Renders `result` and replaces `path` with it.
    ///
    /// The whole document is rendered before the file is opened, so a
    /// malformed segment never leaves a truncated file behind.
    pub fn write(
        &self,
        result: &TranscriptResult,
        format: OutputFormat,
        path: &Path,
    ) -> Result<(), SubtitleError> {
        let rendered = self.render(result, format)?;
        fs::write(path, rendered).map_err(|e| SubtitleError::io("write subtitle file", e))?;
        tracing::info!(format = format.label(), path = %path.display(), "saved subtitle file");
        Ok(())
    }

    /// Writes every configured format as `out_dir/{base_name}.{ext}`,
    /// creating `out_dir` when needed. Returns the written paths in order.
    pub fn write_all(
        &self,
        result: &TranscriptResult,
        out_dir: &Path,
        base_name: &str,
    ) -> Result<Vec<PathBuf>, SubtitleError> {
        if base_name.trim().is_empty() {
            return Err(SubtitleError::invalid_input("output base name is empty"));
        }
        fs::create_dir_all(out_dir).map_err(|e| SubtitleError::io("create output directory", e))?;

        let mut written = Vec::new();
        for format in self.config.output.formats() {
            let path = output_path(out_dir, base_name, format);
            self.write(result, format, &path)?;
            written.push(path);
        }
        Ok(written)
    }
}

pub fn output_path(out_dir: &Path, base_name: &str, format: OutputFormat) -> PathBuf {
    out_dir.join(format!("{base_name}.{}", format.extension()))
}

/// File stem of the input media, used to name the subtitle files.
pub fn base_name_for(input_path: &Path) -> Result<String, SubtitleError> {
    input_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            SubtitleError::invalid_input(format!(
                "cannot derive an output name from '{}'",
                input_path.display()
            ))
        })
}
