//! Forecast charts and the daily insights table, laid out as tabs.

use crate::frames::forecast_frame::ForecastFrame;
use crate::render::error::RenderError;
use crate::utils::{dom_id, escape_html};
use plotlars::{Line, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;

const LABEL_FORMAT: &str = "%d %b %H:%M";

struct Series {
    column: &'static str,
    color: Rgb,
    line: Line,
}

struct Chart {
    name: &'static str,
    title: &'static str,
    y_title: &'static str,
    series: Vec<Series>,
}

fn temperature_chart() -> Chart {
    Chart {
        name: "temperature",
        title: "Temperature Trend",
        y_title: "Temperature (°C)",
        series: vec![
            Series { column: "temp", color: Rgb(255, 107, 107), line: Line::Solid },
            Series { column: "feels_like", color: Rgb(255, 177, 66), line: Line::Dot },
            Series { column: "daily_temp_avg", color: Rgb(69, 170, 242), line: Line::Dash },
        ],
    }
}

fn humidity_chart() -> Chart {
    Chart {
        name: "humidity",
        title: "Humidity Forecast",
        y_title: "Humidity (%)",
        series: vec![
            Series { column: "humidity", color: Rgb(78, 205, 196), line: Line::Solid },
            Series { column: "daily_humidity_avg", color: Rgb(44, 62, 80), line: Line::Dash },
        ],
    }
}

fn wind_chart() -> Chart {
    Chart {
        name: "wind",
        title: "Wind Speed Forecast",
        y_title: "Wind Speed (m/s)",
        series: vec![
            Series { column: "wind_speed", color: Rgb(118, 75, 162), line: Line::Solid },
            Series { column: "daily_wind_avg", color: Rgb(102, 126, 234), line: Line::Dash },
        ],
    }
}

impl Chart {
    fn render(self, frame: &DataFrame) -> Result<String, RenderError> {
        if let Some(missing) = self.series.iter().find(|s| frame.column(s.column).is_err()) {
            return Err(RenderError::Chart(format!(
                "column '{}' missing for {} chart",
                missing.column, self.name
            )));
        }

        let (first, rest) = self
            .series
            .split_first()
            .ok_or_else(|| RenderError::Chart(format!("{} chart has no series", self.name)))?;
        let y = first.column;
        let additional: Vec<&str> = rest.iter().map(|s| s.column).collect();
        let (colors, lines): (Vec<Rgb>, Vec<Line>) =
            self.series.into_iter().map(|s| (s.color, s.line)).unzip();
        let div_id = dom_id("chart", self.name);

        let html = TimeSeriesPlot::builder()
            .data(frame)
            .x("label")
            .y(y)
            .additional_series(additional)
            .size(8)
            .colors(colors)
            .lines(lines)
            .with_shape(true)
            .plot_title(Text::from(self.title).size(18))
            .x_title("Date")
            .y_title(self.y_title)
            .build()
            .to_inline_html(Some(div_id.as_str()));
        Ok(html)
    }
}

/// Adds the string `label` column the charts use for their x axis.
fn with_labels(forecast: &ForecastFrame) -> PolarsResult<DataFrame> {
    forecast
        .frame
        .clone()
        .lazy()
        .with_column(col("datetime").dt().to_string(LABEL_FORMAT).alias("label"))
        .collect()
}

/// One row per day from [`ForecastFrame::daily_summary`], as an HTML table.
pub fn insights_table(forecast: &ForecastFrame) -> Result<String, RenderError> {
    let summary = forecast.daily_summary()?;

    let dates = summary.column("date")?.cast(&DataType::String)?;
    let dates = dates.str()?;
    let entries = summary.column("entries")?.cast(&DataType::Int64)?;
    let entries = entries.i64()?;
    let temp_min = summary.column("temp_min")?.f64()?;
    let temp_max = summary.column("temp_max")?.f64()?;
    let temp_avg = summary.column("temp_avg")?.f64()?;
    let humidity_avg = summary.column("humidity_avg")?.f64()?;
    let wind_avg = summary.column("wind_avg")?.f64()?;
    let main_weather = summary.column("main_weather")?.str()?;

    let number = |value: Option<f64>| value.map(|v| format!("{:.1}", v)).unwrap_or_default();

    let mut rows = String::new();
    for i in 0..summary.height() {
        rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            dates.get(i).unwrap_or_default(),
            entries.get(i).unwrap_or_default(),
            number(temp_min.get(i)),
            number(temp_max.get(i)),
            number(temp_avg.get(i)),
            number(humidity_avg.get(i)),
            number(wind_avg.get(i)),
            escape_html(main_weather.get(i).unwrap_or_default()),
        ));
    }

    Ok(format!(
        r#"<table class="insights">
  <thead>
    <tr><th>Date</th><th>Entries</th><th>Min °C</th><th>Max °C</th><th>Avg °C</th><th>Avg Humidity %</th><th>Avg Wind m/s</th><th>Main Weather</th></tr>
  </thead>
  <tbody>
{}  </tbody>
</table>"#,
        rows
    ))
}

/// The tabbed forecast section: three charts and the insights table.
///
/// # Errors
///
/// [`RenderError::Chart`] for an empty forecast, [`RenderError::Frame`] when
/// Polars fails on the frame.
pub fn forecast_tabs(forecast: &ForecastFrame) -> Result<String, RenderError> {
    if forecast.is_empty() {
        return Err(RenderError::Chart("the forecast has no entries".to_string()));
    }
    let labelled = with_labels(forecast)?;

    let tabs = [
        ("🌡️ Temperature", temperature_chart().render(&labelled)?),
        ("💧 Humidity", humidity_chart().render(&labelled)?),
        ("💨 Wind Forecast", wind_chart().render(&labelled)?),
        ("📊 Detailed Insights", insights_table(forecast)?),
    ];

    let mut html = String::from("<div class=\"tabs\">\n");
    for (i, (title, _)) in tabs.iter().enumerate() {
        html.push_str(&format!(
            "  <input type=\"radio\" name=\"forecast-tab\" id=\"tab-{i}\"{checked}>\n  <label for=\"tab-{i}\">{title}</label>\n",
            i = i,
            checked = if i == 0 { " checked" } else { "" },
            title = title,
        ));
    }
    for (i, (_, content)) in tabs.iter().enumerate() {
        html.push_str(&format!(
            "  <div class=\"tab-panel\" id=\"panel-{}\">\n{}\n  </div>\n",
            i, content
        ));
    }
    html.push_str("</div>");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::weather_data::forecast::ForecastEntry;
    use chrono::NaiveDate;

    fn entry(day: u32, hour: u32, temperature: f64, category: &str) -> ForecastEntry {
        ForecastEntry {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            temperature,
            feels_like: temperature - 2.0,
            humidity: 70.0,
            wind_speed: 5.0,
            category: category.to_string(),
            description: "whatever".to_string(),
        }
    }

    fn sample() -> ForecastFrame {
        ForecastFrame::from_entries(&[
            entry(9, 9, 6.0, "Rain"),
            entry(9, 12, 10.0, "Clouds"),
            entry(10, 9, 3.0, "<Snow>"),
        ])
        .unwrap()
    }

    #[test]
    fn test_labels_follow_datetime() {
        let labelled = with_labels(&sample()).unwrap();
        let labels: Vec<&str> = labelled
            .column("label")
            .unwrap()
            .str()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(labels, vec!["09 Mar 09:00", "09 Mar 12:00", "10 Mar 09:00"]);
    }

    #[test]
    fn test_insights_table_rows() {
        let html = insights_table(&sample()).unwrap();
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("<td>2024-03-09</td><td>2</td><td>6.0</td><td>10.0</td><td>8.0</td>"));
        assert!(html.contains("<td>Rain</td>"));
        assert!(html.contains("&lt;Snow&gt;"));
    }

    #[test]
    fn test_missing_column_is_chart_error() {
        let frame = df!("label" => ["a"], "temp" => [1.0]).unwrap();
        let result = temperature_chart().render(&frame);
        assert!(matches!(result, Err(RenderError::Chart(msg)) if msg.contains("feels_like")));
    }

    #[test]
    fn test_empty_forecast_is_chart_error() {
        let empty = ForecastFrame::from_entries(&[]).unwrap();
        assert!(matches!(forecast_tabs(&empty), Err(RenderError::Chart(_))));
    }

    #[test]
    fn test_forecast_tabs_contains_every_panel() {
        let html = forecast_tabs(&sample()).unwrap();
        for title in ["Temperature", "Humidity", "Wind Forecast", "Detailed Insights"] {
            assert!(html.contains(title), "missing tab {}", title);
        }
        assert!(html.contains("chart-temperature"));
        assert!(html.contains("chart-wind"));
        assert_eq!(html.matches("class=\"tab-panel\"").count(), 4);
    }
}
