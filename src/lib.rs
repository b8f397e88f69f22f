pub mod claims;
pub mod config;
pub mod error;
pub use claims::Claims;
pub use error::TokenError;

pub mod generator;
pub mod report;
pub mod telemetry;
pub mod token;
