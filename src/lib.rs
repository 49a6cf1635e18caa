pub mod api;
pub mod config;
pub mod error;
pub mod exchange_rate;
pub mod period;
pub mod store;
pub mod sync;
pub mod time_series;
pub mod upstream;
