use std::collections::BTreeMap;

use crate::region::model::{AltitudeRange, MountainHut, Municipality};
use crate::utils::error::{DomainError, EntityKind, Result};

/// Label used when no configured range contains an altitude.
pub const DEFAULT_RANGE: &str = "0-INF";

/// Facade for the mountain-hut system of one region: municipalities,
/// huts, and the derived statistics over them.
///
/// All aggregations are recomputed from the current registries on every
/// call; nothing is cached.
#[derive(Debug)]
pub struct Region {
    name: String,
    altitude_ranges: Vec<AltitudeRange>,
    municipalities: BTreeMap<String, Municipality>,
    mountain_huts: BTreeMap<String, MountainHut>,
}

impl Region {
    pub fn new(name: &str) -> Region {
        Region {
            name: name.to_string(),
            altitude_ranges: Vec::new(),
            municipalities: BTreeMap::new(),
            mountain_huts: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configure the altitude ranges from `"min-max"` strings. The
    /// caller order is preserved and determines first-match priority
    /// when ranges overlap.
    pub fn set_altitude_ranges(&mut self, ranges: &[&str]) -> Result<()> {
        for text in ranges {
            self.altitude_ranges.push(AltitudeRange::parse(text)?);
        }
        Ok(())
    }

    /// The label of the first configured range containing `altitude`,
    /// or [`DEFAULT_RANGE`] when none does.
    pub fn altitude_range(&self, altitude: u32) -> &str {
        self.altitude_ranges
            .iter()
            .find(|range| range.contains(altitude))
            .map(AltitudeRange::label)
            .unwrap_or(DEFAULT_RANGE)
    }

    /// Create a municipality or return the existing one with the same
    /// name; an existing record is left untouched.
    pub fn create_or_get_municipality(
        &mut self,
        name: &str,
        province: &str,
        altitude: u32,
    ) -> &Municipality {
        self.municipalities
            .entry(name.to_string())
            .or_insert_with(|| Municipality {
                name: name.to_string(),
                province: province.to_string(),
                altitude,
            })
    }

    /// Create a mountain hut or return the existing one with the same
    /// name. The municipality must already be registered.
    pub fn create_or_get_mountain_hut(
        &mut self,
        name: &str,
        altitude: Option<u32>,
        category: &str,
        beds_number: u32,
        municipality: &str,
    ) -> Result<&MountainHut> {
        if !self.municipalities.contains_key(municipality) {
            return Err(DomainError::not_found(
                EntityKind::Municipality,
                municipality,
            ));
        }
        Ok(self
            .mountain_huts
            .entry(name.to_string())
            .or_insert_with(|| MountainHut {
                name: name.to_string(),
                altitude,
                category: category.to_string(),
                beds_number,
                municipality: municipality.to_string(),
            }))
    }

    /// Municipalities in alphabetical order.
    pub fn municipalities(&self) -> impl Iterator<Item = &Municipality> {
        self.municipalities.values()
    }

    /// Mountain huts in alphabetical order.
    pub fn mountain_huts(&self) -> impl Iterator<Item = &MountainHut> {
        self.mountain_huts.values()
    }

    /// A hut's own altitude when set, else its municipality's.
    fn effective_altitude(&self, hut: &MountainHut) -> u32 {
        hut.altitude.unwrap_or_else(|| {
            self.municipalities
                .get(&hut.municipality)
                .map(|m| m.altitude)
                .unwrap_or(0)
        })
    }

    fn effective_range(&self, hut: &MountainHut) -> &str {
        self.altitude_range(self.effective_altitude(hut))
    }

    /// Number of municipalities per province.
    pub fn count_municipalities_per_province(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for municipality in self.municipalities.values() {
            *counts.entry(municipality.province.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of mountain huts per municipality, grouped by province.
    pub fn count_mountain_huts_per_municipality_per_province(
        &self,
    ) -> BTreeMap<String, BTreeMap<String, usize>> {
        let mut counts: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
        for hut in self.mountain_huts.values() {
            let Some(municipality) = self.municipalities.get(&hut.municipality) else {
                continue;
            };
            *counts
                .entry(municipality.province.clone())
                .or_default()
                .entry(municipality.name.clone())
                .or_insert(0) += 1;
        }
        counts
    }

    /// Number of mountain huts per effective altitude range. Every
    /// configured range is present, zero-seeded.
    pub fn count_mountain_huts_per_altitude_range(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = self
            .altitude_ranges
            .iter()
            .map(|range| (range.label().to_string(), 0))
            .collect();
        for hut in self.mountain_huts.values() {
            *counts
                .entry(self.effective_range(hut).to_string())
                .or_insert(0) += 1;
        }
        counts
    }

    /// Total beds across the mountain huts of each province.
    pub fn total_beds_number_per_province(&self) -> BTreeMap<String, u32> {
        let mut totals = BTreeMap::new();
        for hut in self.mountain_huts.values() {
            let Some(municipality) = self.municipalities.get(&hut.municipality) else {
                continue;
            };
            *totals.entry(municipality.province.clone()).or_insert(0) += hut.beds_number;
        }
        totals
    }

    /// Maximum beds in a single hut per effective altitude range.
    /// Configured ranges without huts map to 0.
    pub fn maximum_beds_number_per_altitude_range(&self) -> BTreeMap<String, u32> {
        let mut maxima: BTreeMap<String, u32> = self
            .altitude_ranges
            .iter()
            .map(|range| (range.label().to_string(), 0))
            .collect();
        for hut in self.mountain_huts.values() {
            let entry = maxima
                .entry(self.effective_range(hut).to_string())
                .or_insert(0);
            *entry = (*entry).max(hut.beds_number);
        }
        maxima
    }

    /// Inversion of the hut count per municipality: for each count, the
    /// alphabetically sorted names of the municipalities with exactly
    /// that many huts. Municipalities without huts do not appear.
    pub fn municipality_names_per_count_of_mountain_huts(
        &self,
    ) -> BTreeMap<usize, Vec<String>> {
        let mut per_municipality: BTreeMap<String, usize> = BTreeMap::new();
        for hut in self.mountain_huts.values() {
            *per_municipality.entry(hut.municipality.clone()).or_insert(0) += 1;
        }
        // Alphabetical municipality iteration keeps each bucket sorted.
        let mut inverted: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for (name, count) in per_municipality {
            inverted.entry(count).or_default().push(name);
        }
        inverted
    }
}
