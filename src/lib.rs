pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod text;
pub mod types;

pub use config::{OutputSelection, RenderConfig, RenderVariant};
pub use error::SubtitleError;
pub use pipeline::builder::SubtitleWriterBuilder;
pub use pipeline::defaults::{LogographicSpaceStripper, NoProgress, WrappingShaper};
pub use pipeline::normalize_output::normalize_output;
pub use pipeline::progress::BarProgress;
pub use pipeline::runtime::{restore_reference_text, ForcedAlignmentRunner, TranscriptionRunner};
pub use pipeline::traits::{Aligner, CueTextShaper, ProgressObserver, Transcriber};
pub use pipeline::writer::{base_name_for, output_path, SubtitleWriter};
pub use text::normalize::{augment, strip, AlignmentTextPair};
pub use text::script::{is_logographic, remove_spaces, separator_for, LogographicLanguage};
pub use text::timestamp::{format_timestamp, TimestampStyle};
pub use text::wrap::wrap_lines;
pub use types::{
    AlignerOutput, OutputFormat, RawSegment, RawWord, Segment, TranscribeOptions, TranscribeTask,
    TranscriptResult,
};
