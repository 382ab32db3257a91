//! Reference-text punctuation round trip for forced alignment.
//!
//! Aligners segment reference text far better when every line ends like a
//! sentence. [`augment`] terminates each unterminated line before alignment
//! and [`strip`] removes those terminators from the aligned text afterwards.

use std::borrow::Cow;

use crate::text::script::remove_spaces;

/// Characters that already end a sentence; lines ending in one are left alone.
const SENTENCE_TERMINATORS: [char; 7] = ['.', '!', '?', '。', '！', '？', '…'];
/// Terminators [`augment`] may add.
const ADDED_TERMINATORS: [char; 2] = ['.', '。'];

fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Appends one sentence terminator to every non-empty line that lacks one.
///
/// Lines containing CJK ideographs get `。`, all others get `.`. The
/// terminator goes right after the last non-whitespace character, so any
/// trailing whitespace of the line is preserved after it. Empty and
/// whitespace-only lines are kept verbatim.
pub fn augment(text: &str) -> String {
    text.lines()
        .map(augment_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn augment_line(line: &str) -> Cow<'_, str> {
    let content = line.trim_end();
    let Some(last) = content.chars().last() else {
        return Cow::Borrowed(line);
    };
    if SENTENCE_TERMINATORS.contains(&last) {
        return Cow::Borrowed(line);
    }

    let terminator = if content.chars().any(is_cjk_ideograph) {
        '。'
    } else {
        '.'
    };
    let mut augmented = String::with_capacity(line.len() + terminator.len_utf8());
    augmented.push_str(content);
    augmented.push(terminator);
    augmented.push_str(&line[content.len()..]);
    Cow::Owned(augmented)
}

/// Reverses [`augment`] line by line against the pre-augmentation text.
///
/// A trailing `.`/`。` is dropped from an aligned line only when the
/// matching original line did not end in one itself; whitespace after the
/// dropped terminator is kept. Aligned lines past the end of the original
/// have no counterpart and pass through untouched, which is best-effort
/// when the aligner split a line. For logographic text every space is
/// removed from the result.
pub fn strip(augmented: &str, original: &str, logographic: bool) -> String {
    if augmented.is_empty() || original.is_empty() {
        return augmented.to_string();
    }

    let original_lines: Vec<&str> = original.lines().collect();
    augmented
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let restored = match original_lines.get(idx) {
                Some(original_line) => strip_line(line, original_line),
                None => Cow::Borrowed(line),
            };
            if logographic {
                remove_spaces(&restored)
            } else {
                restored.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_line<'a>(augmented_line: &'a str, original_line: &str) -> Cow<'a, str> {
    let original_content = original_line.trim_end();
    if original_content.is_empty() {
        return Cow::Borrowed(augmented_line);
    }

    let content = augmented_line.trim_end();
    match content.chars().last() {
        Some(last)
            if ADDED_TERMINATORS.contains(&last)
                && !original_content.ends_with(ADDED_TERMINATORS) =>
        {
            let kept = &content[..content.len() - last.len_utf8()];
            let mut restored = String::with_capacity(augmented_line.len());
            restored.push_str(kept);
            restored.push_str(&augmented_line[content.len()..]);
            Cow::Owned(restored)
        }
        _ => Cow::Borrowed(augmented_line),
    }
}

/// Reference text together with its augmented form.
///
/// Built before the aligner runs and consulted right after it returns, so
/// the line correspondence between both texts travels as one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTextPair {
    augmented: String,
    original: String,
}

impl AlignmentTextPair {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            augmented: augment(&original),
            original,
        }
    }

    /// Text to hand to the aligner.
    pub fn augmented(&self) -> &str {
        &self.augmented
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Removes added terminators from text the aligner produced.
    pub fn restore(&self, aligned: &str, logographic: bool) -> String {
        strip(aligned, &self.original, logographic)
    }
}
