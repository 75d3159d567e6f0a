use serde::Serialize;

use crate::utils::error::{DomainError, Result};

/// Inclusive `[min, max]` altitude bucket with its configured label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltitudeRange {
    label: String,
    min: u32,
    max: u32,
}

impl AltitudeRange {
    /// Parse a `"min-max"` textual range.
    pub fn parse(text: &str) -> Result<AltitudeRange> {
        let (min, max) = text
            .split_once('-')
            .ok_or_else(|| DomainError::invalid("altitude range", text))?;
        let min = min
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid("altitude range", text))?;
        let max = max
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid("altitude range", text))?;
        if min > max {
            return Err(DomainError::invalid("altitude range", text));
        }
        Ok(AltitudeRange {
            label: text.to_string(),
            min,
            max,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn contains(&self, altitude: u32) -> bool {
        (self.min..=self.max).contains(&altitude)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Municipality {
    pub name: String,
    pub province: String,
    pub altitude: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountainHut {
    pub name: String,
    /// Own altitude; when absent the municipality altitude applies.
    pub altitude: Option<u32>,
    pub category: String,
    pub beds_number: u32,
    /// Name of the municipality the hut belongs to.
    pub municipality: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inclusive_bounds() {
        let range = AltitudeRange::parse("0-1000").unwrap();
        assert_eq!(range.label(), "0-1000");
        assert!(range.contains(0));
        assert!(range.contains(1000));
        assert!(!range.contains(1001));
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!(AltitudeRange::parse("1000").is_err());
        assert!(AltitudeRange::parse("a-b").is_err());
        assert!(AltitudeRange::parse("2000-1000").is_err());
    }
}
