pub mod config;
pub mod logging;
pub mod matrix;
pub mod store;
pub mod version;
