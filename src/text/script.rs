//! Script family detection for language codes.
//!
//! Logographic languages carry no word-separating whitespace, so wrapping
//! works per character and any space left by an aligner is noise.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogographicLanguage {
    Chinese,
    ChineseMainland,
    ChineseTaiwan,
    ChineseHongKong,
    Japanese,
    Korean,
    /// Non-standard Korean code some front ends still pass through.
    KoreanLegacy,
}

impl LogographicLanguage {
    pub const ALL: [Self; 7] = [
        Self::Chinese,
        Self::ChineseMainland,
        Self::ChineseTaiwan,
        Self::ChineseHongKong,
        Self::Japanese,
        Self::Korean,
        Self::KoreanLegacy,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Chinese => "zh",
            Self::ChineseMainland => "zh-cn",
            Self::ChineseTaiwan => "zh-tw",
            Self::ChineseHongKong => "zh-hk",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::KoreanLegacy => "kr",
        }
    }
}

impl FromStr for LogographicLanguage {
    type Err = ();

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
            .ok_or(())
    }
}

/// True when `language` names a Chinese, Japanese or Korean variant.
/// A missing or empty code is never logographic.
pub fn is_logographic(language: Option<&str>) -> bool {
    language
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .is_some_and(|code| code.parse::<LogographicLanguage>().is_ok())
}

/// Joiner placed between segment texts when rebuilding a full transcript.
pub fn separator_for(language: Option<&str>) -> &'static str {
    if is_logographic(language) {
        ""
    } else {
        " "
    }
}

pub fn remove_spaces(text: &str) -> String {
    text.replace(' ', "")
}
