//! Weather CSV reader.
//!
//! Expected columns, one record per hour, consumed strictly in file order:
//! `year,month,day,hour,air_temp_c,wind_mps,rel_humidity_pct,cloud_cover,solar_w_per_m2`
//!
//! A single header line is tolerated and skipped.

use std::path::Path;

use crate::error::{WeatherError, WeatherResult};
use crate::record::{Timestamp, WeatherRecord};

const COLUMNS: usize = 9;

pub fn read_weather_file(path: &Path) -> WeatherResult<Vec<WeatherRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_weather_csv(&content)
}

pub fn parse_weather_csv(content: &str) -> WeatherResult<Vec<WeatherRecord>> {
    let mut records = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        // Header detection: first field not numeric.
        if records.is_empty() && line.split(',').next().is_some_and(|f| f.trim().parse::<i32>().is_err()) {
            continue;
        }
        records.push(parse_line(line, line_no)?);
    }
    if records.is_empty() {
        return Err(WeatherError::Empty);
    }
    Ok(records)
}

fn parse_line(line: &str, line_no: usize) -> WeatherResult<WeatherRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != COLUMNS {
        return Err(WeatherError::Parse {
            line: line_no,
            message: format!("expected {COLUMNS} fields, found {}", fields.len()),
        });
    }

    let timestamp = Timestamp {
        year: parse_field(fields[0], "year", line_no)?,
        month: parse_field(fields[1], "month", line_no)?,
        day: parse_field(fields[2], "day", line_no)?,
        hour: parse_field(fields[3], "hour", line_no)?,
    };
    if !timestamp.is_valid() {
        return Err(WeatherError::Parse {
            line: line_no,
            message: format!(
                "invalid calendar hour {}-{:02}-{:02} {:02}:00",
                timestamp.year, timestamp.month, timestamp.day, timestamp.hour
            ),
        });
    }

    let record = WeatherRecord {
        timestamp,
        air_temp_c: parse_field(fields[4], "air_temp_c", line_no)?,
        wind_mps: parse_field(fields[5], "wind_mps", line_no)?,
        rel_humidity_pct: parse_field(fields[6], "rel_humidity_pct", line_no)?,
        cloud_cover: parse_field(fields[7], "cloud_cover", line_no)?,
        solar_w_per_m2: parse_field(fields[8], "solar_w_per_m2", line_no)?,
    };

    check_range(record.wind_mps >= 0.0, "wind_mps must be non-negative", line_no)?;
    check_range(
        (0.0..=100.0).contains(&record.rel_humidity_pct),
        "rel_humidity_pct must be in [0, 100]",
        line_no,
    )?;
    check_range(
        (0.0..=1.0).contains(&record.cloud_cover),
        "cloud_cover must be in [0, 1]",
        line_no,
    )?;
    check_range(
        record.solar_w_per_m2 >= 0.0,
        "solar_w_per_m2 must be non-negative",
        line_no,
    )?;
    Ok(record)
}

fn parse_field<T: std::str::FromStr>(
    field: &str,
    name: &str,
    line_no: usize,
) -> WeatherResult<T> {
    field.parse().map_err(|_| WeatherError::Parse {
        line: line_no,
        message: format!("cannot parse {name} from '{field}'"),
    })
}

fn check_range(ok: bool, message: &str, line_no: usize) -> WeatherResult<()> {
    if ok {
        Ok(())
    } else {
        Err(WeatherError::Parse {
            line: line_no,
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
year,month,day,hour,air_temp_c,wind_mps,rel_humidity_pct,cloud_cover,solar_w_per_m2
2023,1,15,0,-4.2,3.1,78.0,0.25,0.0
2023,1,15,1,-4.8,2.9,80.0,0.25,0.0
";

    #[test]
    fn parses_with_header() {
        let records = parse_weather_csv(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp.hour, 0);
        assert_eq!(records[1].air_temp_c, -4.8);
    }

    #[test]
    fn parses_without_header() {
        let records = parse_weather_csv("2023,1,15,0,-4.2,3.1,78.0,0.25,0.0\n").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(parse_weather_csv(""), Err(WeatherError::Empty)));
        assert!(matches!(
            parse_weather_csv("year,month,day,hour,t,w,rh,cc,sol\n"),
            Err(WeatherError::Empty)
        ));
    }

    #[test]
    fn reports_line_numbers() {
        let bad = "2023,1,15,0,-4.2,3.1,78.0,0.25,0.0\n2023,2,30,1,0.0,1.0,50.0,0.0,0.0\n";
        match parse_weather_csv(bad) {
            Err(WeatherError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("calendar"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let bad = "2023,1,15,0,-4.2,3.1,78.0,1.5,0.0\n";
        assert!(matches!(
            parse_weather_csv(bad),
            Err(WeatherError::Parse { line: 1, .. })
        ));
        let short = "2023,1,15,0,-4.2\n";
        assert!(matches!(
            parse_weather_csv(short),
            Err(WeatherError::Parse { line: 1, .. })
        ));
    }
}
