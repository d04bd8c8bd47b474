use serde::{Deserialize, Serialize};

/// Requested post length. Few-shot examples are bucketed by line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostLength {
    Short,
    Medium,
    Long,
}

impl PostLength {
    pub fn as_str(self) -> &'static str {
        match self {
            PostLength::Short => "Short",
            PostLength::Medium => "Medium",
            PostLength::Long => "Long",
        }
    }

    /// Line budget handed to the model.
    pub fn line_range(self) -> &'static str {
        match self {
            PostLength::Short => "1 to 5 lines",
            PostLength::Medium => "6 to 10 lines",
            PostLength::Long => "11 to 15 lines",
        }
    }

    pub fn from_line_count(lines: u32) -> Self {
        match lines {
            0..=4 => PostLength::Short,
            5..=10 => PostLength::Medium,
            _ => PostLength::Long,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostLanguage {
    English,
    /// Hindi/English mix, always written in English script.
    Hinglish,
}

impl PostLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            PostLanguage::English => "English",
            PostLanguage::Hinglish => "Hinglish",
        }
    }
}
