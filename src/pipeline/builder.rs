use crate::config::{RenderConfig, RenderVariant};
use crate::error::SubtitleError;
use crate::pipeline::defaults::{LogographicSpaceStripper, NoProgress, WrappingShaper};
use crate::pipeline::progress::BarProgress;
use crate::pipeline::traits::{CueTextShaper, ProgressObserver};
use crate::pipeline::writer::{SubtitleWriter, SubtitleWriterParts};

pub struct SubtitleWriterBuilder {
    config: RenderConfig,
    text_shaper: Option<Box<dyn CueTextShaper>>,
    progress: Option<Box<dyn ProgressObserver>>,
}

impl SubtitleWriterBuilder {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            text_shaper: None,
            progress: None,
        }
    }

    pub fn with_variant(mut self, variant: RenderVariant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn with_text_shaper(mut self, text_shaper: Box<dyn CueTextShaper>) -> Self {
        self.text_shaper = Some(text_shaper);
        self
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressObserver>) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn build(self) -> Result<SubtitleWriter, SubtitleError> {
        self.config.validate()?;

        let logographic = self.config.is_logographic();
        let text_shaper: Box<dyn CueTextShaper> = match self.text_shaper {
            Some(text_shaper) => text_shaper,
            None => match self.config.variant {
                RenderVariant::Transcription => {
                    Box::new(WrappingShaper::new(self.config.max_line_width, logographic))
                }
                RenderVariant::Alignment => Box::new(LogographicSpaceStripper::new(logographic)),
            },
        };
        let progress: Box<dyn ProgressObserver> = match self.progress {
            Some(progress) => progress,
            None if self.config.show_progress => Box::new(BarProgress::new()),
            None => Box::new(NoProgress),
        };

        Ok(SubtitleWriter::from_parts(SubtitleWriterParts {
            config: self.config,
            text_shaper,
            progress,
        }))
    }
}
