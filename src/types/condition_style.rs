//! Display styles for the condition card, keyed by [`WeatherCondition`].

use crate::types::weather_condition::WeatherCondition;

/// The visual bundle used to render the condition card.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ConditionStyle {
    /// CSS `background` value.
    pub background: &'static str,
    /// CSS `color` value for text on top of `background`.
    pub text_color: &'static str,
    /// Short human warning label shown under the heading.
    pub warning_label: &'static str,
    pub icon: &'static str,
}

const THUNDERSTORM: ConditionStyle = ConditionStyle {
    background: "linear-gradient(135deg, #373B44, #4286f4)",
    text_color: "white",
    warning_label: "High Alert ⚡",
    icon: "⛈️",
};

const DRIZZLE: ConditionStyle = ConditionStyle {
    background: "linear-gradient(135deg, #83a4d4, #b6fbff)",
    text_color: "navy",
    warning_label: "Mild Rain ☔",
    icon: "🌧️",
};

const RAIN: ConditionStyle = ConditionStyle {
    background: "linear-gradient(135deg, #2c3e50, #3498db)",
    text_color: "white",
    warning_label: "Heavy Rain 🌊",
    icon: "🌧️",
};

const SNOW: ConditionStyle = ConditionStyle {
    background: "linear-gradient(135deg, #a1c4fd, white)",
    text_color: "navy",
    warning_label: "Snowfall ❄️",
    icon: "❄️",
};

const CLEAR: ConditionStyle = ConditionStyle {
    background: "linear-gradient(135deg, #56ccf2, #2f80ed)",
    text_color: "white",
    warning_label: "Sunny Day ☀️",
    icon: "☀️",
};

const CLOUDS: ConditionStyle = ConditionStyle {
    background: "linear-gradient(135deg, #bdc3c7, #2c3e50)",
    text_color: "white",
    warning_label: "Cloudy Day ☁️",
    icon: "☁️",
};

impl ConditionStyle {
    /// The bundle used for any category without a dedicated style.
    pub const DEFAULT: ConditionStyle = ConditionStyle {
        background: "linear-gradient(135deg, #f5f7fa, #c3cfe2)",
        text_color: "black",
        warning_label: "Normal Conditions 🌈",
        icon: "🌈",
    };

    /// Style for a parsed condition, or [`ConditionStyle::DEFAULT`] for `None`.
    pub fn for_condition(condition: Option<WeatherCondition>) -> &'static ConditionStyle {
        match condition {
            Some(WeatherCondition::Thunderstorm) => &THUNDERSTORM,
            Some(WeatherCondition::Drizzle) => &DRIZZLE,
            Some(WeatherCondition::Rain) => &RAIN,
            Some(WeatherCondition::Snow) => &SNOW,
            Some(WeatherCondition::Clear) => &CLEAR,
            Some(WeatherCondition::Clouds) => &CLOUDS,
            None => &Self::DEFAULT,
        }
    }
}

/// Maps a raw provider category to its style bundle.
///
/// Total: unknown, misspelled or empty categories resolve to
/// [`ConditionStyle::DEFAULT`].
///
/// ```rust
/// use weatherpro::{classify, ConditionStyle};
///
/// assert_eq!(classify("Clear").icon, "☀️");
/// assert_eq!(classify("Volcanic ash"), &ConditionStyle::DEFAULT);
/// ```
pub fn classify(category: &str) -> &'static ConditionStyle {
    ConditionStyle::for_condition(WeatherCondition::from_category(category))
}
