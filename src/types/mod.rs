pub mod air_quality;
pub mod condition_style;
pub mod lat_lon;
pub mod pollen;
pub mod weather_condition;
pub mod weather_data;
