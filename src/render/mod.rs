//! HTML rendering of a [`WeatherBundle`].

pub mod cards;
pub mod charts;
pub mod error;
pub mod map;
pub mod page;

use crate::frames::forecast_frame::ForecastFrame;
use crate::render::error::RenderError;
use crate::types::weather_data::bundle::WeatherBundle;
use crate::utils::escape_html;
use crate::weather_client::error::FetchError;
use log::warn;

pub use page::page;

/// The dashboard body for `city`: cards, map and the forecast tabs.
///
/// A failure while building the forecast section only replaces that section
/// with an inline message; the cards and map are still rendered.
pub fn dashboard(city: &str, bundle: &WeatherBundle) -> String {
    let mut sections = vec![
        cards::condition_card(&bundle.current),
        cards::current_card(city, &bundle.current),
    ];
    if let Some(air_quality) = &bundle.air_quality {
        sections.push(cards::air_quality_card(air_quality));
    }
    sections.push(cards::pollen_card(&bundle.pollen));
    sections.push(map::location_map(city, bundle.current.coordinates));
    sections.push(forecast_section(bundle).unwrap_or_else(|e| {
        warn!("Forecast section for '{}' not rendered: {}", city, e);
        forecast_error(&e)
    }));
    sections.join("\n")
}

fn forecast_section(bundle: &WeatherBundle) -> Result<String, RenderError> {
    let forecast = ForecastFrame::from_entries(&bundle.forecast)?;
    charts::forecast_tabs(&forecast)
}

/// Inline message replacing the forecast section.
pub fn forecast_error(error: &RenderError) -> String {
    format!(
        "<div class=\"error\">Error processing forecast data: {}</div>",
        escape_html(&error.to_string())
    )
}

/// Inline message shown instead of the dashboard when fetching failed.
pub fn fetch_error(error: &FetchError) -> String {
    format!(
        "<div class=\"error\">Unable to fetch weather data. Please check the city name. ({})</div>",
        escape_html(&error.to_string())
    )
}

/// Shown when rendering the dashboard itself was aborted.
pub fn render_failed() -> String {
    "<div class=\"error\">Unable to render the weather dashboard. Please try again.</div>"
        .to_string()
}

/// Shown when the search box was submitted empty.
pub fn empty_query_hint() -> String {
    "<p class=\"hint\">Enter a city name to explore its weather.</p>".to_string()
}
