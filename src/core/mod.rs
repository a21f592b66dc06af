pub mod center;
pub mod config;
pub mod constants;
pub mod dimensions;
pub mod geo;
pub mod location;
