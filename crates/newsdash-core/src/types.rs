use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Feed search language.
///
/// Maps to the `hl`/`ceid` query parameters of the news feed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Korean,
    English,
}

impl Language {
    /// Two-letter language code used in the feed-search URL.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Korean => write!(f, "한국어"),
            Language::English => write!(f, "영어"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ko" | "한국어" => Ok(Language::Korean),
            "en" | "영어" => Ok(Language::English),
            other => Err(CoreError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Sentiment classification of an article body.
///
/// Labels are the Korean display strings used everywhere the value is
/// shown or exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "긍정")]
    Positive,
    #[serde(rename = "부정")]
    Negative,
    #[serde(rename = "중립")]
    Neutral,
}

impl Sentiment {
    /// All variants in display order, for stable count tables.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "긍정",
            Sentiment::Negative => "부정",
            Sentiment::Neutral => "중립",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Sentiment::Positive => "🟢",
            Sentiment::Negative => "🔴",
            Sentiment::Neutral => "🟡",
        }
    }

    /// Fragment interpolated into the generated one-line opinion.
    #[must_use]
    pub fn perspective_phrase(self) -> &'static str {
        match self {
            Sentiment::Positive => "🟢 긍정적인 관점",
            Sentiment::Negative => "🔴 비판적인 관점",
            Sentiment::Neutral => "🟡 중립적인 관점",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Content tone of an article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "분석적")]
    Analytical,
    #[serde(rename = "감정적")]
    Emotional,
    #[serde(rename = "정보성")]
    Informational,
}

impl Tone {
    /// All variants in display order, for stable count tables.
    pub const ALL: [Tone; 3] = [Tone::Analytical, Tone::Emotional, Tone::Informational];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tone::Analytical => "분석적",
            Tone::Emotional => "감정적",
            Tone::Informational => "정보성",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Tone::Analytical => "🧐",
            Tone::Emotional => "💬",
            Tone::Informational => "ℹ️",
        }
    }

    /// Fragment interpolated into the generated one-line opinion.
    #[must_use]
    pub fn delivery_phrase(self) -> &'static str {
        match self {
            Tone::Analytical => "🧐 분석적 접근",
            Tone::Emotional => "💬 감정 표현",
            Tone::Informational => "ℹ️ 정보 전달",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
