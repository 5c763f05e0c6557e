use std::fmt;
use std::str::FromStr;

use marketfuse_core::errors::CacheError;
use marketfuse_core::models::BedroomClass;
use serde::{Deserialize, Serialize};

/// Unit-type key of a rent table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Studio,
    OneBedroom,
    TwoBedroom,
    ThreeBedroom,
    FourPlus,
}

impl UnitType {
    pub const ALL: [UnitType; 5] = [
        Self::Studio,
        Self::OneBedroom,
        Self::TwoBedroom,
        Self::ThreeBedroom,
        Self::FourPlus,
    ];

    /// 0 is a studio; four or more bedrooms share one row.
    pub fn from_bedrooms(bedrooms: u32) -> Self {
        match bedrooms {
            0 => Self::Studio,
            1 => Self::OneBedroom,
            2 => Self::TwoBedroom,
            3 => Self::ThreeBedroom,
            _ => Self::FourPlus,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Studio => "studio",
            Self::OneBedroom => "1BR",
            Self::TwoBedroom => "2BR",
            Self::ThreeBedroom => "3BR",
            Self::FourPlus => "4BR+",
        }
    }
}

impl From<BedroomClass> for UnitType {
    fn from(class: BedroomClass) -> Self {
        match class {
            BedroomClass::Studio => Self::Studio,
            BedroomClass::OneBedroom => Self::OneBedroom,
            BedroomClass::TwoBedroom => Self::TwoBedroom,
            BedroomClass::ThreeBedroom => Self::ThreeBedroom,
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnitType {
    type Err = CacheError;

    /// Accepts `"studio"`, `"2BR"`, `"2 bed"`, `"two_bedroom"`, `"4+"`, or a bare count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect();

        let unit = match norm.as_str() {
            "studio" | "efficiency" | "0br" | "0bed" | "0bedroom" | "0" => Self::Studio,
            "onebedroom" | "1br" | "1bed" | "1bedroom" | "1" => Self::OneBedroom,
            "twobedroom" | "2br" | "2bed" | "2bedroom" | "2" => Self::TwoBedroom,
            "threebedroom" | "3br" | "3bed" | "3bedroom" | "3" => Self::ThreeBedroom,
            "fourplus" | "4br+" | "4+" | "4plus" | "4br" | "4bed" | "4bedroom" => Self::FourPlus,
            other => match other.parse::<u32>() {
                Ok(n) => Self::from_bedrooms(n),
                Err(_) => {
                    return Err(CacheError::UnknownUnitType {
                        label: s.to_string(),
                    })
                }
            },
        };
        Ok(unit)
    }
}

/// A unit type as callers supply it: a bedroom count or a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitQuery<'a> {
    Bedrooms(u32),
    Label(&'a str),
}

impl UnitQuery<'_> {
    pub fn resolve(self) -> Result<UnitType, CacheError> {
        match self {
            Self::Bedrooms(n) => Ok(UnitType::from_bedrooms(n)),
            Self::Label(s) => s.parse(),
        }
    }
}

impl From<u32> for UnitQuery<'_> {
    fn from(n: u32) -> Self {
        Self::Bedrooms(n)
    }
}

impl<'a> From<&'a str> for UnitQuery<'a> {
    fn from(s: &'a str) -> Self {
        Self::Label(s)
    }
}

impl From<UnitType> for UnitQuery<'_> {
    fn from(unit: UnitType) -> Self {
        let bedrooms = match unit {
            UnitType::Studio => 0,
            UnitType::OneBedroom => 1,
            UnitType::TwoBedroom => 2,
            UnitType::ThreeBedroom => 3,
            UnitType::FourPlus => 4,
        };
        Self::Bedrooms(bedrooms)
    }
}
