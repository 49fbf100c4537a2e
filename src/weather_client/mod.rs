pub(crate) mod air_quality;
pub mod client;
pub mod error;
pub(crate) mod responses;
#[cfg(test)]
pub(crate) mod test_server;
