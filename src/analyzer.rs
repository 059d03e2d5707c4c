use crate::error::MetricError;
use crate::models::{IntakeRecord, Query};

/// Computes intake metrics for a single (quarter, week) lookup.
pub struct IntakeAnalyzer<'a> {
    query: &'a Query,
}

impl<'a> IntakeAnalyzer<'a> {
    pub fn new(query: &'a Query) -> Self {
        Self { query }
    }

    /// Intakes recorded for the queried quarter and week, divided by the
    /// number of doctors on duty.
    ///
    /// Exactly one record may match the query; zero or several matches are
    /// reported as errors rather than silently picking a row.
    pub fn intakes_per_doctor(&self, records: &[IntakeRecord]) -> Result<f64, MetricError> {
        let matches: Vec<&IntakeRecord> = records
            .iter()
            .filter(|record| record.matches(&self.query.quarter, self.query.week))
            .collect();

        let record = match matches.as_slice() {
            [record] => *record,
            [] => {
                return Err(MetricError::NoMatch {
                    quarter: self.query.quarter.clone(),
                    week: self.query.week,
                })
            }
            _ => {
                return Err(MetricError::Ambiguous {
                    quarter: self.query.quarter.clone(),
                    week: self.query.week,
                    count: matches.len(),
                })
            }
        };

        if self.query.num_doctors == 0 {
            return Err(MetricError::ZeroDoctors);
        }

        Ok(record.intakes as f64 / self.query.num_doctors as f64)
    }
}
