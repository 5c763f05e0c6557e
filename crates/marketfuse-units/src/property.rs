use serde::{Deserialize, Serialize};

/// The slice of a listing record the unit detector reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    /// Structured property type/style, e.g. `"3 Family"` or `"Condo"`.
    pub style: Option<String>,
    pub description: Option<String>,
    pub bedrooms: Option<u32>,
    /// Half baths count as 0.5.
    pub bathrooms: Option<f64>,
}

impl PropertyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_bedrooms(mut self, bedrooms: u32) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    pub fn with_bathrooms(mut self, bathrooms: f64) -> Self {
        self.bathrooms = Some(bathrooms);
        self
    }

    pub(crate) fn style(&self) -> Option<&str> {
        non_blank(self.style.as_deref())
    }

    pub(crate) fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// Bathroom count if it is a usable positive number.
    pub(crate) fn bathrooms(&self) -> Option<f64> {
        self.bathrooms.filter(|b| b.is_finite() && *b > 0.0)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
