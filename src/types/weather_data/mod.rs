pub mod bundle;
pub mod current;
pub mod forecast;
