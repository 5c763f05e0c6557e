use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rent_curve::BedroomClass;
use crate::errors::RegistryError;

/// Stable identifier for one market statistic.
///
/// The set is closed: names that do not parse into a variant are rejected,
/// never mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalMetricKey {
    // Rents (point)
    StudioMedianRent,
    OneBedroomMedianRent,
    TwoBedroomMedianRent,
    ThreeBedroomMedianRent,
    // Rents (range)
    StudioRentRange,
    OneBedroomRentRange,
    TwoBedroomRentRange,
    ThreeBedroomRentRange,
    // Prices
    MedianHomePrice,
    PricePerSqft,
    RentPerSqft,
    // Financing
    ConventionalRate,
    FhaRate,
    FhaLoanLimit,
    ConformingLoanLimit,
    // Market / tax
    VacancyRate,
    PropertyTaxRate,
    // Derived
    PriceToRentRatio,
}

impl CanonicalMetricKey {
    pub const ALL: [CanonicalMetricKey; 18] = [
        Self::StudioMedianRent,
        Self::OneBedroomMedianRent,
        Self::TwoBedroomMedianRent,
        Self::ThreeBedroomMedianRent,
        Self::StudioRentRange,
        Self::OneBedroomRentRange,
        Self::TwoBedroomRentRange,
        Self::ThreeBedroomRentRange,
        Self::MedianHomePrice,
        Self::PricePerSqft,
        Self::RentPerSqft,
        Self::ConventionalRate,
        Self::FhaRate,
        Self::FhaLoanLimit,
        Self::ConformingLoanLimit,
        Self::VacancyRate,
        Self::PropertyTaxRate,
        Self::PriceToRentRatio,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::StudioMedianRent => "studio_median_rent",
            Self::OneBedroomMedianRent => "one_bedroom_median_rent",
            Self::TwoBedroomMedianRent => "two_bedroom_median_rent",
            Self::ThreeBedroomMedianRent => "three_bedroom_median_rent",
            Self::StudioRentRange => "studio_rent_range",
            Self::OneBedroomRentRange => "one_bedroom_rent_range",
            Self::TwoBedroomRentRange => "two_bedroom_rent_range",
            Self::ThreeBedroomRentRange => "three_bedroom_rent_range",
            Self::MedianHomePrice => "median_home_price",
            Self::PricePerSqft => "price_per_sqft",
            Self::RentPerSqft => "rent_per_sqft",
            Self::ConventionalRate => "conventional_rate",
            Self::FhaRate => "fha_rate",
            Self::FhaLoanLimit => "fha_loan_limit",
            Self::ConformingLoanLimit => "conforming_loan_limit",
            Self::VacancyRate => "vacancy_rate",
            Self::PropertyTaxRate => "property_tax_rate",
            Self::PriceToRentRatio => "price_to_rent_ratio",
        }
    }

    /// Bedroom class for per-bedroom rent metrics.
    pub fn bedroom_class(self) -> Option<BedroomClass> {
        match self {
            Self::StudioMedianRent | Self::StudioRentRange => Some(BedroomClass::Studio),
            Self::OneBedroomMedianRent | Self::OneBedroomRentRange => {
                Some(BedroomClass::OneBedroom)
            }
            Self::TwoBedroomMedianRent | Self::TwoBedroomRentRange => {
                Some(BedroomClass::TwoBedroom)
            }
            Self::ThreeBedroomMedianRent | Self::ThreeBedroomRentRange => {
                Some(BedroomClass::ThreeBedroom)
            }
            _ => None,
        }
    }

    /// The median-rent key for a bedroom class.
    pub fn median_rent(class: BedroomClass) -> Self {
        match class {
            BedroomClass::Studio => Self::StudioMedianRent,
            BedroomClass::OneBedroom => Self::OneBedroomMedianRent,
            BedroomClass::TwoBedroom => Self::TwoBedroomMedianRent,
            BedroomClass::ThreeBedroom => Self::ThreeBedroomMedianRent,
        }
    }

    pub fn is_rent(self) -> bool {
        self.bedroom_class().is_some() || self == Self::RentPerSqft
    }
}

impl fmt::Display for CanonicalMetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CanonicalMetricKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RegistryError::UnknownMetric {
                name: wanted.to_string(),
            })
    }
}
