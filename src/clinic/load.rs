use std::io::BufRead;

use regex::Regex;

use crate::clinic::registry::Clinic;
use crate::utils::error::{DomainError, Result};

// Patient rows: P; first; last; ssn
// Doctor rows:  M; id; first; last; ssn; specialization
// Whitespace around the separators is ignored.
const PATIENT_ROW: &str = r"^\s*P\s*;\s*(\w+)\s*;\s*(\w+)\s*;\s*(\w+)\s*$";
const DOCTOR_ROW: &str = r"^\s*M\s*;\s*(\d+)\s*;\s*(\w+)\s*;\s*(\w+)\s*;\s*(\w+)\s*;\s*(\w+)\s*$";

impl Clinic {
    /// Load patients and doctors from line-oriented text.
    ///
    /// Malformed rows never abort the load: each one is passed,
    /// unmodified, to `on_offending` and skipped. Returns the number of
    /// successfully parsed rows.
    pub fn load_data<R, F>(&mut self, reader: R, mut on_offending: F) -> Result<usize>
    where
        R: BufRead,
        F: FnMut(&str),
    {
        let patient_row = Regex::new(PATIENT_ROW)
            .map_err(|e| DomainError::invalid("row pattern", e.to_string()))?;
        let doctor_row = Regex::new(DOCTOR_ROW)
            .map_err(|e| DomainError::invalid("row pattern", e.to_string()))?;

        let mut loaded = 0usize;
        for line in reader.lines() {
            let line = line?;
            if let Some(captures) = patient_row.captures(&line) {
                self.add_patient(&captures[1], &captures[2], &captures[3]);
                loaded += 1;
            } else if let Some(captures) = doctor_row.captures(&line) {
                match captures[1].parse::<u32>() {
                    Ok(id) => {
                        self.add_doctor(
                            id,
                            &captures[2],
                            &captures[3],
                            &captures[4],
                            &captures[5],
                        );
                        loaded += 1;
                    }
                    Err(_) => {
                        tracing::debug!(%line, "skipping row with out-of-range doctor id");
                        on_offending(&line);
                    }
                }
            } else {
                tracing::debug!(%line, "skipping malformed row");
                on_offending(&line);
            }
        }
        tracing::debug!(loaded, "clinic data loaded");
        Ok(loaded)
    }
}
