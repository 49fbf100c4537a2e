//! Synthetic pollen estimate derived from temperature and humidity.
//!
//! The formula is a placeholder, not a pollen model. It is kept exactly as
//! the dashboard has always computed it so numbers stay comparable.

use std::fmt;

const BASE_POLLEN: f64 = 20.0;
const REFERENCE_TEMPERATURE: f64 = 15.0;

/// Estimates a pollen count in `[0, 100]`.
///
/// `20 + (temperature - 15) * 2 + humidity / 10`, clamped.
///
/// # Arguments
///
/// * `temperature` - Air temperature in °C.
/// * `humidity` - Relative humidity in percent.
///
/// ```rust
/// use weatherpro::estimate_pollen;
///
/// assert_eq!(estimate_pollen(20.0, 50.0), 35.0);
/// assert_eq!(estimate_pollen(60.0, 90.0), 100.0);
/// assert_eq!(estimate_pollen(-20.0, 0.0), 0.0);
/// ```
pub fn estimate_pollen(temperature: f64, humidity: f64) -> f64 {
    let temperature_factor = (temperature - REFERENCE_TEMPERATURE) * 2.0;
    let humidity_factor = humidity / 10.0;
    (BASE_POLLEN + temperature_factor + humidity_factor).clamp(0.0, 100.0)
}

/// Risk tier for a pollen count. Each boundary value belongs to the higher tier.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub enum PollenRisk {
    /// count < 30
    Low,
    /// 30 <= count < 50
    Moderate,
    /// 50 <= count < 80
    High,
    /// count >= 80
    VeryHigh,
}

impl PollenRisk {
    /// Buckets a count into its tier.
    ///
    /// ```rust
    /// use weatherpro::PollenRisk;
    ///
    /// assert_eq!(PollenRisk::from_count(29.999), PollenRisk::Low);
    /// assert_eq!(PollenRisk::from_count(30.0), PollenRisk::Moderate);
    /// assert_eq!(PollenRisk::from_count(80.0), PollenRisk::VeryHigh);
    /// ```
    pub fn from_count(count: f64) -> Self {
        if count < 30.0 {
            PollenRisk::Low
        } else if count < 50.0 {
            PollenRisk::Moderate
        } else if count < 80.0 {
            PollenRisk::High
        } else {
            PollenRisk::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PollenRisk::Low => "Low",
            PollenRisk::Moderate => "Moderate",
            PollenRisk::High => "High",
            PollenRisk::VeryHigh => "Very High",
        }
    }

    /// Label with a colored marker, as shown on the pollen card.
    pub fn badge(&self) -> &'static str {
        match self {
            PollenRisk::Low => "🟢 Low Risk",
            PollenRisk::Moderate => "🟡 Moderate Risk",
            PollenRisk::High => "🟠 High Risk",
            PollenRisk::VeryHigh => "🔴 Very High Risk",
        }
    }

    /// Whether allergy sufferers should be told to stay indoors.
    pub fn advises_staying_indoors(&self) -> bool {
        matches!(self, PollenRisk::High | PollenRisk::VeryHigh)
    }
}

impl fmt::Display for PollenRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A pollen count together with its risk tier.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PollenEstimate {
    pub count: f64,
    pub risk: PollenRisk,
}

impl PollenEstimate {
    pub fn from_conditions(temperature: f64, humidity: f64) -> Self {
        let count = estimate_pollen(temperature, humidity);
        Self {
            count,
            risk: PollenRisk::from_count(count),
        }
    }
}
