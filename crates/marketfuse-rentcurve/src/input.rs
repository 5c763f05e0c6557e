use marketfuse_core::models::{BedroomClass, CanonicalMetricKey, ReconciledMetric};
use serde::{Deserialize, Serialize};

/// Raw median rents per class. `None` means no value was reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RentCurveInput {
    pub studio: Option<f64>,
    pub one_bedroom: Option<f64>,
    pub two_bedroom: Option<f64>,
    pub three_bedroom: Option<f64>,
}

impl RentCurveInput {
    pub fn new(
        studio: Option<f64>,
        one_bedroom: Option<f64>,
        two_bedroom: Option<f64>,
        three_bedroom: Option<f64>,
    ) -> Self {
        Self {
            studio,
            one_bedroom,
            two_bedroom,
            three_bedroom,
        }
    }

    /// Median-rent values from reconciled metrics; other metrics are ignored.
    pub fn from_reconciled(metrics: &[ReconciledMetric]) -> Self {
        let mut input = Self::default();
        for class in BedroomClass::ALL {
            let key = CanonicalMetricKey::median_rent(class);
            if let Some(m) = metrics.iter().find(|m| m.metric == key) {
                input.set(class, Some(m.value));
            }
        }
        input
    }

    pub fn get(&self, class: BedroomClass) -> Option<f64> {
        match class {
            BedroomClass::Studio => self.studio,
            BedroomClass::OneBedroom => self.one_bedroom,
            BedroomClass::TwoBedroom => self.two_bedroom,
            BedroomClass::ThreeBedroom => self.three_bedroom,
        }
    }

    pub fn set(&mut self, class: BedroomClass, value: Option<f64>) {
        match class {
            BedroomClass::Studio => self.studio = value,
            BedroomClass::OneBedroom => self.one_bedroom = value,
            BedroomClass::TwoBedroom => self.two_bedroom = value,
            BedroomClass::ThreeBedroom => self.three_bedroom = value,
        }
    }

    /// Values in class order.
    pub fn as_array(&self) -> [Option<f64>; 4] {
        [self.studio, self.one_bedroom, self.two_bedroom, self.three_bedroom]
    }
}
