//! pt-weather: hourly forcing records and the surface energy balance.
//!
//! The flux correlations here are stateless algebra consumed by the driver:
//! incident longwave, convective exchange, absorbed solar and the two albedo
//! behaviors (fixed and thermochromic).

pub mod error;
pub mod flux;
pub mod reader;
pub mod record;
pub mod surface;

pub use error::{WeatherError, WeatherResult};
pub use flux::{convection, longwave, solar};
pub use reader::{parse_weather_csv, read_weather_file};
pub use record::{Timestamp, WeatherRecord};
pub use surface::{AlbedoModel, Surface};
