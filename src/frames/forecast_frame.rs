//! Contains the `ForecastFrame` structure: the forecast as a time-indexed table
//! with per-day statistics.

use crate::types::weather_data::forecast::ForecastEntry;
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

/// Column names of a [`ForecastFrame`], in order.
pub const FORECAST_COLUMNS: [&str; 12] = [
    "datetime",
    "temp",
    "feels_like",
    "humidity",
    "wind_speed",
    "main_weather",
    "description",
    "hour",
    "date",
    "daily_temp_avg",
    "daily_humidity_avg",
    "daily_wind_avg",
];

/// A wrapper around a Polars `DataFrame` holding one row per forecast entry.
///
/// Besides the raw measurements every row carries its hour of day, its calendar
/// date and the mean temperature, humidity and wind speed of that date. The
/// daily means are broadcast onto each row rather than collapsing the rows, so
/// the frame has exactly as many rows as there were entries, in the same order.
///
/// Use [`ForecastFrame::daily_summary`] for the collapsed one-row-per-day view.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use weatherpro::{ForecastEntry, ForecastFrame};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let at = |h| NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// let entry = |h, temp| ForecastEntry {
///     timestamp: at(h),
///     temperature: temp,
///     feels_like: temp,
///     humidity: 60.0,
///     wind_speed: 3.0,
///     category: "Clouds".to_string(),
///     description: "broken clouds".to_string(),
/// };
///
/// let forecast = ForecastFrame::from_entries(&[entry(9, 12.0), entry(12, 16.0)])?;
/// assert_eq!(forecast.height(), 2);
///
/// let daily_avg = forecast.frame.column("daily_temp_avg")?.f64()?.get(0);
/// assert_eq!(daily_avg, Some(14.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ForecastFrame {
    /// The underlying frame, with the columns listed in [`FORECAST_COLUMNS`].
    pub frame: DataFrame,
}

impl ForecastFrame {
    /// Builds the frame from forecast entries.
    ///
    /// An empty slice gives an empty frame with the full set of columns.
    ///
    /// # Errors
    ///
    /// Returns a [`PolarsError`] if Polars fails to build or evaluate the frame.
    pub fn from_entries(entries: &[ForecastEntry]) -> PolarsResult<Self> {
        let datetimes: Vec<NaiveDateTime> = entries.iter().map(|e| e.timestamp).collect();
        let temperatures: Vec<f64> = entries.iter().map(|e| e.temperature).collect();
        let feels_like: Vec<f64> = entries.iter().map(|e| e.feels_like).collect();
        let humidity: Vec<f64> = entries.iter().map(|e| e.humidity).collect();
        let wind_speed: Vec<f64> = entries.iter().map(|e| e.wind_speed).collect();
        let categories: Vec<String> = entries.iter().map(|e| e.category.clone()).collect();
        let descriptions: Vec<String> = entries.iter().map(|e| e.description.clone()).collect();

        let raw = df!(
            "datetime" => datetimes,
            "temp" => temperatures,
            "feels_like" => feels_like,
            "humidity" => humidity,
            "wind_speed" => wind_speed,
            "main_weather" => categories,
            "description" => descriptions
        )?;

        let frame = raw
            .lazy()
            .with_columns([
                col("datetime").dt().hour().alias("hour"),
                col("datetime").dt().date().alias("date"),
            ])
            // Window over the date: every row gets its day's mean, row count is unchanged.
            .with_columns([
                col("temp").mean().over([col("date")]).alias("daily_temp_avg"),
                col("humidity")
                    .mean()
                    .over([col("date")])
                    .alias("daily_humidity_avg"),
                col("wind_speed")
                    .mean()
                    .over([col("date")])
                    .alias("daily_wind_avg"),
            ])
            .collect()?;

        Ok(Self { frame })
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Rows whose calendar date equals `date`, order preserved.
    pub fn for_date(&self, date: NaiveDate) -> PolarsResult<ForecastFrame> {
        let frame = self
            .frame
            .clone()
            .lazy()
            .filter(col("date").eq(lit(date)))
            .collect()?;
        Ok(Self { frame })
    }

    /// One row per calendar date, in order of first appearance.
    ///
    /// Columns: `date, entries, temp_min, temp_max, temp_avg, humidity_avg,
    /// wind_avg, main_weather` where `main_weather` is the first category
    /// reported on that date.
    pub fn daily_summary(&self) -> PolarsResult<DataFrame> {
        self.frame
            .clone()
            .lazy()
            .group_by_stable([col("date")])
            .agg([
                col("temp").count().alias("entries"),
                col("temp").min().alias("temp_min"),
                col("temp").max().alias("temp_max"),
                col("temp").mean().alias("temp_avg"),
                col("humidity").mean().alias("humidity_avg"),
                col("wind_speed").mean().alias("wind_avg"),
                col("main_weather").first().alias("main_weather"),
            ])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn entry(day: u32, hour: u32, temperature: f64, humidity: f64, wind: f64) -> ForecastEntry {
        ForecastEntry {
            timestamp: at(day, hour),
            temperature,
            feels_like: temperature - 1.0,
            humidity,
            wind_speed: wind,
            category: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
        }
    }

    fn f64_column(forecast: &ForecastFrame, name: &str) -> Vec<f64> {
        forecast
            .frame
            .column(name)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect()
    }

    #[test]
    fn test_empty_input_gives_empty_frame() -> Result<(), Box<dyn std::error::Error>> {
        let forecast = ForecastFrame::from_entries(&[])?;
        assert_eq!(forecast.height(), 0);
        assert!(forecast.is_empty());
        assert_eq!(forecast.frame.get_column_names(), FORECAST_COLUMNS);
        assert_eq!(forecast.daily_summary()?.height(), 0);
        Ok(())
    }

    #[test]
    fn test_single_entry_is_its_own_average() -> Result<(), Box<dyn std::error::Error>> {
        let forecast = ForecastFrame::from_entries(&[entry(1, 15, 21.5, 40.0, 2.5)])?;
        assert_eq!(forecast.height(), 1);
        assert_eq!(f64_column(&forecast, "daily_temp_avg"), vec![21.5]);
        assert_eq!(f64_column(&forecast, "daily_humidity_avg"), vec![40.0]);
        assert_eq!(f64_column(&forecast, "daily_wind_avg"), vec![2.5]);
        Ok(())
    }

    #[test]
    fn test_daily_means_do_not_mix_dates() -> Result<(), Box<dyn std::error::Error>> {
        let entries = vec![
            entry(1, 12, 10.0, 50.0, 1.0),
            entry(1, 15, 14.0, 70.0, 3.0),
            entry(1, 18, 12.0, 60.0, 2.0),
            entry(2, 0, 30.0, 20.0, 8.0),
            entry(2, 3, 20.0, 40.0, 4.0),
        ];
        let forecast = ForecastFrame::from_entries(&entries)?;

        assert_eq!(forecast.height(), entries.len());
        assert_eq!(
            f64_column(&forecast, "daily_temp_avg"),
            vec![12.0, 12.0, 12.0, 25.0, 25.0]
        );
        assert_eq!(
            f64_column(&forecast, "daily_humidity_avg"),
            vec![60.0, 60.0, 60.0, 30.0, 30.0]
        );
        assert_eq!(
            f64_column(&forecast, "daily_wind_avg"),
            vec![2.0, 2.0, 2.0, 6.0, 6.0]
        );
        Ok(())
    }

    #[test]
    fn test_rows_keep_input_order() -> Result<(), Box<dyn std::error::Error>> {
        // Dates interleave on purpose: the frame must not be re-sorted.
        let entries = vec![
            entry(2, 9, 5.0, 10.0, 1.0),
            entry(1, 9, 7.0, 10.0, 1.0),
            entry(2, 12, 9.0, 10.0, 1.0),
        ];
        let forecast = ForecastFrame::from_entries(&entries)?;

        assert_eq!(f64_column(&forecast, "temp"), vec![5.0, 7.0, 9.0]);
        assert_eq!(f64_column(&forecast, "daily_temp_avg"), vec![7.0, 7.0, 7.0]);
        let hours: Vec<i8> = forecast
            .frame
            .column("hour")?
            .i8()?
            .into_no_null_iter()
            .collect();
        assert_eq!(hours, vec![9, 9, 12]);
        Ok(())
    }

    #[test]
    fn test_building_twice_is_identical() -> Result<(), Box<dyn std::error::Error>> {
        let entries: Vec<ForecastEntry> = (0..40)
            .map(|i| {
                entry(
                    1 + i / 8,
                    (i % 8) * 3,
                    f64::from(i) * 0.7 - 3.0,
                    f64::from(40 + i % 13),
                    f64::from(i % 5) + 0.25,
                )
            })
            .collect();
        let first = ForecastFrame::from_entries(&entries)?;
        let second = ForecastFrame::from_entries(&entries)?;
        assert!(first.frame.equals_missing(&second.frame));
        assert_eq!(first.height(), 40);
        Ok(())
    }

    #[test]
    fn test_daily_summary_collapses_per_date() -> Result<(), Box<dyn std::error::Error>> {
        let entries = vec![
            entry(3, 6, 8.0, 80.0, 1.0),
            entry(3, 9, 12.0, 70.0, 2.0),
            entry(4, 6, 4.0, 90.0, 5.0),
        ];
        let summary = ForecastFrame::from_entries(&entries)?.daily_summary()?;

        assert_eq!(summary.height(), 2);
        let avg: Vec<f64> = summary
            .column("temp_avg")?
            .f64()?
            .into_no_null_iter()
            .collect();
        assert_eq!(avg, vec![10.0, 4.0]);
        let max: Vec<f64> = summary
            .column("temp_max")?
            .f64()?
            .into_no_null_iter()
            .collect();
        assert_eq!(max, vec![12.0, 4.0]);
        Ok(())
    }

    #[test]
    fn test_for_date_filters_one_day() -> Result<(), Box<dyn std::error::Error>> {
        let entries = vec![
            entry(5, 0, 1.0, 50.0, 1.0),
            entry(6, 0, 2.0, 50.0, 1.0),
            entry(6, 3, 3.0, 50.0, 1.0),
        ];
        let forecast = ForecastFrame::from_entries(&entries)?;
        let day = forecast.for_date(NaiveDate::from_ymd_opt(2024, 6, 6).unwrap())?;
        assert_eq!(day.height(), 2);
        assert_eq!(f64_column(&day, "temp"), vec![2.0, 3.0]);
        Ok(())
    }
}
