pub mod forecast_frame;
