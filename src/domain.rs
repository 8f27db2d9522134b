//! Core domain types for the voice assistant service.

use serde::{Deserialize, Serialize};

/// Supported language tags for voice interactions.
///
/// This is a closed set: requests carrying any other tag are rejected at the
/// extractor boundary before handler logic runs. The tag is recorded with
/// each conversation turn but does not vary the assistant's response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// English (United States).
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// Hindi (India).
    #[serde(rename = "hi-IN")]
    HiIn,
    /// Tamil (India).
    #[serde(rename = "ta-IN")]
    TaIn,
    /// Telugu (India).
    #[serde(rename = "te-IN")]
    TeIn,
    /// Bengali (India).
    #[serde(rename = "bn-IN")]
    BnIn,
}

impl Language {
    /// The wire/storage form of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::HiIn => "hi-IN",
            Self::TaIn => "ta-IN",
            Self::TeIn => "te-IN",
            Self::BnIn => "bn-IN",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the conversation produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The human user.
    User,
    /// The assistant.
    Ai,
}

impl Speaker {
    /// The storage form of the speaker.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_serde() {
        for (tag, lang) in [
            ("en-US", Language::EnUs),
            ("hi-IN", Language::HiIn),
            ("ta-IN", Language::TaIn),
            ("te-IN", Language::TeIn),
            ("bn-IN", Language::BnIn),
        ] {
            let parsed: Language = serde_json::from_str(&format!("\"{tag}\"")).unwrap();
            assert_eq!(parsed, lang);
            assert_eq!(lang.as_str(), tag);
        }
    }

    #[test]
    fn unknown_language_tag_is_rejected() {
        assert!(serde_json::from_str::<Language>("\"fr-FR\"").is_err());
        assert!(serde_json::from_str::<Language>("\"en-us\"").is_err());
    }

    #[test]
    fn english_is_the_default() {
        assert_eq!(Language::default(), Language::EnUs);
    }

    #[test]
    fn speaker_storage_form() {
        assert_eq!(Speaker::User.as_str(), "user");
        assert_eq!(Speaker::Ai.as_str(), "ai");
    }
}
