use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::region::registry::Region;
use crate::utils::error::Result;

/// One row of the semicolon-separated hut export. An empty `Altitude`
/// field means the municipality altitude applies.
#[derive(Debug, Deserialize)]
struct HutRow {
    #[serde(rename = "Province")]
    province: String,
    #[serde(rename = "Municipality")]
    municipality: String,
    #[serde(rename = "MunicipalityAltitude")]
    municipality_altitude: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Altitude")]
    altitude: Option<u32>,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "BedsNumber")]
    beds_number: u32,
}

impl Region {
    /// Build a region from CSV data with a header row and `;` as the
    /// field separator.
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Region> {
        let mut region = Region::new(name);
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = 0usize;
        for row in csv_reader.deserialize() {
            let row: HutRow = row?;
            region.create_or_get_municipality(
                &row.municipality,
                &row.province,
                row.municipality_altitude,
            );
            region.create_or_get_mountain_hut(
                &row.name,
                row.altitude,
                &row.category,
                row.beds_number,
                &row.municipality,
            )?;
            rows += 1;
        }
        tracing::debug!(region = name, rows, "loaded mountain hut data");
        Ok(region)
    }

    pub fn from_file<P: AsRef<Path>>(name: &str, path: P) -> Result<Region> {
        let file = File::open(path)?;
        Region::from_reader(name, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "\
Province;Municipality;MunicipalityAltitude;Name;Altitude;Category;BedsNumber
TORINO;Bussoleno;441;CA' D'ASTI;2854;Rifugio;24
TORINO;Bussoleno;441;TOESCA;;Rifugio;60
CUNEO;Acceglio;1220;CAMPO BASE;1650;Rifugio;60
";

    #[test]
    fn empty_altitude_field_becomes_none() {
        let region = Region::from_reader("Piemonte", DATA.as_bytes()).unwrap();
        let toesca = region
            .mountain_huts()
            .find(|hut| hut.name == "TOESCA")
            .unwrap();
        assert_eq!(toesca.altitude, None);
        let ca_d_asti = region
            .mountain_huts()
            .find(|hut| hut.name == "CA' D'ASTI")
            .unwrap();
        assert_eq!(ca_d_asti.altitude, Some(2854));
    }

    #[test]
    fn municipalities_are_deduplicated() {
        let region = Region::from_reader("Piemonte", DATA.as_bytes()).unwrap();
        assert_eq!(region.municipalities().count(), 2);
        assert_eq!(region.mountain_huts().count(), 3);
    }
}
