//! Hourly temperature-profile CSV.
//!
//! Header: `Year,Month,Day,Hour` followed by element positions in
//! millimeters; one data row per hour with the converged temperature at
//! every element.

use std::io::Write;

use pt_weather::Timestamp;

use crate::{ResultsError, ResultsResult};

pub struct ProfileWriter<W: Write> {
    out: W,
    columns: usize,
}

impl<W: Write> ProfileWriter<W> {
    /// Write the header row and remember the column count.
    pub fn new(mut out: W, positions_m: &[f64]) -> ResultsResult<Self> {
        let mut header = String::from("Year,Month,Day,Hour");
        for x in positions_m {
            header.push_str(&format!(",{}", x * 1000.0));
        }
        writeln!(out, "{header}")?;
        Ok(Self {
            out,
            columns: positions_m.len(),
        })
    }

    pub fn write_hour(&mut self, timestamp: Timestamp, temps_c: &[f64]) -> ResultsResult<()> {
        if temps_c.len() != self.columns {
            return Err(ResultsError::Shape {
                what: format!(
                    "{} temperatures for {} header columns",
                    temps_c.len(),
                    self.columns
                ),
            });
        }
        let mut row = format!(
            "{},{},{},{}",
            timestamp.year, timestamp.month, timestamp.day, timestamp.hour
        );
        for t in temps_c {
            row.push_str(&format!(",{t}"));
        }
        writeln!(self.out, "{row}")?;
        Ok(())
    }

    /// Flush and hand the destination back.
    pub fn finish(mut self) -> ResultsResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
