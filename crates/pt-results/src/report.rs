//! Fixed-format pavement report for MEPDG-style thermal input.
//!
//! Restricted to the outermost layer. One row per hour:
//!
//! `<timestamp> 11 2 <thickness_mm> <n> <depth_mm> <temp_c> ...`
//!
//! all real values at one decimal. `11` and `2` are the fixed classification
//! codes the report consumer expects; the timestamp is the integer encoding
//! `year*1e6 + month*1e4 + day*1e2 + hour`.

use std::io::Write;

use pt_weather::Timestamp;

use crate::{ResultsError, ResultsResult};

const CLASSIFICATION_CODES: (u32, u32) = (11, 2);

pub struct PavementReportWriter<W: Write> {
    out: W,
    thickness_mm: f64,
}

impl<W: Write> PavementReportWriter<W> {
    pub fn new(out: W, layer_thickness_m: f64) -> Self {
        Self {
            out,
            thickness_mm: layer_thickness_m * 1000.0,
        }
    }

    pub fn write_hour(
        &mut self,
        timestamp: Timestamp,
        depths_m: &[f64],
        temps_c: &[f64],
    ) -> ResultsResult<()> {
        if depths_m.len() != temps_c.len() {
            return Err(ResultsError::Shape {
                what: format!("{} depths for {} temperatures", depths_m.len(), temps_c.len()),
            });
        }
        let mut row = format!(
            "{} {} {} {:.1} {}",
            timestamp.encode(),
            CLASSIFICATION_CODES.0,
            CLASSIFICATION_CODES.1,
            self.thickness_mm,
            depths_m.len()
        );
        for (x, t) in depths_m.iter().zip(temps_c.iter()) {
            row.push_str(&format!(" {:.1} {:.1}", x * 1000.0, t));
        }
        writeln!(self.out, "{row}")?;
        Ok(())
    }

    pub fn finish(mut self) -> ResultsResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
