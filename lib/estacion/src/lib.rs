mod client;
mod compass;
mod error;
mod payload;
mod reading;

pub use client::{AlwaysOnline, Client, Connectivity};
pub use compass::CompassPoint;
pub use error::Error;
pub use payload::{DataPayload, StationInfo};
pub use reading::{dew_point_approx, SensorReading};

pub type Result<T> = std::result::Result<T, Error>;
