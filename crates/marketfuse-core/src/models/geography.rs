use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic granularity, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoLevel {
    Zip,
    City,
    County,
    State,
}

impl GeoLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::City => "city",
            Self::County => "county",
            Self::State => "state",
        }
    }
}

impl fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One geography: a level plus an identifier at that level.
///
/// Identifiers are trimmed and lowercased so `"Austin, TX"` and
/// `" austin, tx"` address the same cache slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geography {
    pub level: GeoLevel,
    pub id: String,
}

impl Geography {
    pub fn new(level: GeoLevel, id: impl AsRef<str>) -> Self {
        Self {
            level,
            id: id.as_ref().trim().to_lowercase(),
        }
    }

    pub fn zip(id: impl AsRef<str>) -> Self {
        Self::new(GeoLevel::Zip, id)
    }

    pub fn city(id: impl AsRef<str>) -> Self {
        Self::new(GeoLevel::City, id)
    }

    pub fn county(id: impl AsRef<str>) -> Self {
        Self::new(GeoLevel::County, id)
    }

    pub fn state(id: impl AsRef<str>) -> Self {
        Self::new(GeoLevel::State, id)
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.level, self.id)
    }
}

/// The chain of geographies enclosing a location, used for fallback lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoPath {
    pub zip: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
}

impl GeoPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = Some(zip.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_county(mut self, county: impl Into<String>) -> Self {
        self.county = Some(county.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Present levels from most specific to broadest.
    pub fn cascade(&self) -> Vec<Geography> {
        [
            (GeoLevel::Zip, &self.zip),
            (GeoLevel::City, &self.city),
            (GeoLevel::County, &self.county),
            (GeoLevel::State, &self.state),
        ]
        .into_iter()
        .filter_map(|(level, id)| {
            id.as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(|s| Geography::new(level, s))
        })
        .collect()
    }

    /// The most specific geography on the path.
    pub fn most_specific(&self) -> Option<Geography> {
        self.cascade().into_iter().next()
    }
}

impl From<&Geography> for GeoPath {
    fn from(geo: &Geography) -> Self {
        let path = GeoPath::new();
        match geo.level {
            GeoLevel::Zip => path.with_zip(geo.id.clone()),
            GeoLevel::City => path.with_city(geo.id.clone()),
            GeoLevel::County => path.with_county(geo.id.clone()),
            GeoLevel::State => path.with_state(geo.id.clone()),
        }
    }
}
