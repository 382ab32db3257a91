const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    /// `HH:MM:SS,mmm`
    Srt,
    /// `HH:MM:SS.mmm`
    Vtt,
}

impl TimestampStyle {
    fn fraction_separator(self) -> char {
        match self {
            Self::Srt => ',',
            Self::Vtt => '.',
        }
    }
}

/// Formats `seconds` as a subtitle clock string.
///
/// Negative values clamp to zero. The value is rounded to the nearest
/// millisecond with halves rounded away from zero, and hours never wrap.
pub fn format_timestamp(seconds: f64, style: TimestampStyle) -> String {
    let total_ms = (seconds * 1000.0).round().max(0.0) as u64;
    let hours = total_ms / MS_PER_HOUR;
    let minutes = (total_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let secs = (total_ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = total_ms % MS_PER_SECOND;
    format!(
        "{hours:02}:{minutes:02}:{secs:02}{}{millis:03}",
        style.fraction_separator()
    )
}
