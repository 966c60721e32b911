use serde::{Deserialize, Serialize};

/// Recipe difficulty as entered in the CMS.
///
/// The CMS field is free text, so values outside the three known levels are
/// kept verbatim instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    /// Stable code used in the CMS and in JSON payloads
    pub fn code(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Other(value) => value,
        }
    }

    /// Case-insensitive parse; unknown values become `Other`
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other(code.trim().to_string()),
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        Difficulty::from_code(&value)
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.code().to_string()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
