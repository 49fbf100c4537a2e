//! Defines the `WeatherCondition` enum, mapping OpenWeatherMap's primary condition
//! categories (the `weather[0].main` field) to descriptive variants.

use std::fmt;

/// The primary condition category reported by OpenWeatherMap.
///
/// Only the categories the dashboard styles explicitly are represented. The
/// provider also reports atmosphere groups such as `Mist`, `Haze` or `Fog`;
/// those have no variant and fall through to the default style bundle.
///
/// Convert a raw category string with [`WeatherCondition::from_category`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherCondition {
    /// Group 2xx: thunderstorm.
    Thunderstorm,
    /// Group 3xx: drizzle.
    Drizzle,
    /// Group 5xx: rain.
    Rain,
    /// Group 6xx: snow.
    Snow,
    /// Code 800: clear sky.
    Clear,
    /// Group 80x: clouds.
    Clouds,
}

impl WeatherCondition {
    /// All styled conditions, in provider group order.
    pub const ALL: [WeatherCondition; 6] = [
        WeatherCondition::Thunderstorm,
        WeatherCondition::Drizzle,
        WeatherCondition::Rain,
        WeatherCondition::Snow,
        WeatherCondition::Clear,
        WeatherCondition::Clouds,
    ];

    /// Attempts to convert a provider category into a `WeatherCondition` variant.
    ///
    /// Matching is exact and case-sensitive, the way the provider spells the
    /// categories.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherCondition)` for one of the six styled categories.
    /// * `None` for anything else, including the empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weatherpro::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_category("Rain"), Some(WeatherCondition::Rain));
    /// assert_eq!(WeatherCondition::from_category("Mist"), None);
    /// assert_eq!(WeatherCondition::from_category("rain"), None);
    /// ```
    pub fn from_category(value: &str) -> Option<Self> {
        match value {
            "Thunderstorm" => Some(WeatherCondition::Thunderstorm),
            "Drizzle" => Some(WeatherCondition::Drizzle),
            "Rain" => Some(WeatherCondition::Rain),
            "Snow" => Some(WeatherCondition::Snow),
            "Clear" => Some(WeatherCondition::Clear),
            "Clouds" => Some(WeatherCondition::Clouds),
            _ => None,
        }
    }

    /// The category string as the provider sends it.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Clouds",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
