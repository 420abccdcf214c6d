//! Error types for weather input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Weather parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Weather file contains no records")]
    Empty,
}

pub type WeatherResult<T> = Result<T, WeatherError>;
