//! Hourly weather records.

use chrono::NaiveDate;

/// Calendar hour of one weather record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Hour of day, 0-23.
    pub hour: u32,
}

impl Timestamp {
    /// True when the fields name a real calendar hour.
    pub fn is_valid(&self) -> bool {
        self.hour < 24 && NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_some()
    }

    /// Integer encoding used by the pavement report: `yyyymmddhh`.
    pub fn encode(&self) -> i64 {
        self.year as i64 * 1_000_000
            + self.month as i64 * 10_000
            + self.day as i64 * 100
            + self.hour as i64
    }
}

/// One hour of forcing at the slab surface. Read-only once parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRecord {
    pub timestamp: Timestamp,
    /// Air temperature (degrees C).
    pub air_temp_c: f64,
    /// Wind speed (m/s).
    pub wind_mps: f64,
    /// Relative humidity (%).
    pub rel_humidity_pct: f64,
    /// Cloud cover fraction, 0-1.
    pub cloud_cover: f64,
    /// Global horizontal solar irradiance (W/m^2).
    pub solar_w_per_m2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_validity() {
        let ok = Timestamp {
            year: 2023,
            month: 1,
            day: 15,
            hour: 0,
        };
        assert!(ok.is_valid());
        assert!(!Timestamp { month: 2, day: 30, ..ok }.is_valid());
        assert!(!Timestamp { hour: 24, ..ok }.is_valid());
    }

    #[test]
    fn timestamp_encoding() {
        let ts = Timestamp {
            year: 2023,
            month: 1,
            day: 15,
            hour: 7,
        };
        assert_eq!(ts.encode(), 2_023_011_507);
    }
}
