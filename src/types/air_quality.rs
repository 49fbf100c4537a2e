use std::fmt;

/// Air quality reported by the WAQI feed for the queried coordinates.
#[derive(Debug, PartialEq, Clone)]
pub struct AirQualityReading {
    /// The reported index. Values 1-5 have a named [`AqiLevel`].
    pub index: i64,
    /// Dominant pollutant code (e.g. `"pm25"`), when the feed names one.
    pub dominant_pollutant: Option<String>,
}

impl AirQualityReading {
    pub fn level(&self) -> Option<AqiLevel> {
        AqiLevel::from_index(self.index)
    }

    /// Level label, or `"Unknown"` for indices outside 1-5.
    pub fn level_label(&self) -> &'static str {
        self.level().map_or("Unknown", |level| level.label())
    }
}

/// Named air quality levels on the 1-5 scale.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AqiLevel {
    Good = 1,
    Moderate = 2,
    UnhealthyForSensitiveGroups = 3,
    Unhealthy = 4,
    VeryUnhealthy = 5,
}

impl AqiLevel {
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(AqiLevel::Good),
            2 => Some(AqiLevel::Moderate),
            3 => Some(AqiLevel::UnhealthyForSensitiveGroups),
            4 => Some(AqiLevel::Unhealthy),
            5 => Some(AqiLevel::VeryUnhealthy),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Good 🟢",
            AqiLevel::Moderate => "Moderate 🟡",
            AqiLevel::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups 🟠",
            AqiLevel::Unhealthy => "Unhealthy 🔴",
            AqiLevel::VeryUnhealthy => "Very Unhealthy 🟣",
        }
    }
}

impl fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
