use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse property-condition bucket selecting within a rent matrix.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ConditionGrade {
    A,
    #[default]
    B,
    C,
}

impl ConditionGrade {
    pub const ALL: [ConditionGrade; 3] = [Self::A, Self::B, Self::C];

    /// Normalize a free-form grade.
    ///
    /// `+`/`-` modifiers are dropped, single letters below C clamp to C, and
    /// anything unrecognized is B.
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches(['+', '-']).trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match c.to_ascii_uppercase() {
                'A' => Self::A,
                'B' => Self::B,
                'C'..='Z' => Self::C,
                _ => Self::B,
            },
            _ => Self::B,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for ConditionGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ConditionGrade {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}
