use std::fmt;

use serde::Deserialize;

use crate::error::DataError;

// ---------------------------------------------------------------------------
// Measurement – the numeric columns a chart can be driven by
// ---------------------------------------------------------------------------

/// One of the four numeric penguin measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Measurement {
    #[serde(rename = "bill_length_mm")]
    BillLength,
    #[serde(rename = "bill_depth_mm")]
    BillDepth,
    #[serde(rename = "flipper_length_mm")]
    FlipperLength,
    #[serde(rename = "body_mass_g")]
    BodyMass,
}

impl Measurement {
    pub const ALL: [Measurement; 4] = [
        Measurement::BillLength,
        Measurement::BillDepth,
        Measurement::FlipperLength,
        Measurement::BodyMass,
    ];

    /// Column name as it appears in the source files.
    pub fn column(self) -> &'static str {
        match self {
            Measurement::BillLength => "bill_length_mm",
            Measurement::BillDepth => "bill_depth_mm",
            Measurement::FlipperLength => "flipper_length_mm",
            Measurement::BodyMass => "body_mass_g",
        }
    }

    /// Axis label with unit.
    pub fn label(self) -> &'static str {
        match self {
            Measurement::BillLength => "Bill Length (mm)",
            Measurement::BillDepth => "Bill Depth (mm)",
            Measurement::FlipperLength => "Flipper Length (mm)",
            Measurement::BodyMass => "Body Mass (g)",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single observed penguin. Missing measurements (`NA` in the source) are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub species: String,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<String>,
    pub year: Option<i64>,
}

impl Penguin {
    pub fn measurement(&self, m: Measurement) -> Option<f64> {
        match m {
            Measurement::BillLength => self.bill_length_mm,
            Measurement::BillDepth => self.bill_depth_mm,
            Measurement::FlipperLength => self.flipper_length_mm,
            Measurement::BodyMass => self.body_mass_g,
        }
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table. Built once and never mutated afterwards; the fields are
/// private so the only way to "change" it is to replace it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct PenguinDataset {
    rows: Vec<Penguin>,
    /// Distinct species in order of first appearance.
    species: Vec<String>,
}

impl PenguinDataset {
    pub fn from_rows(rows: Vec<Penguin>) -> Result<Self, DataError> {
        if rows.is_empty() {
            return Err(DataError::EmptyDataset);
        }
        let mut species: Vec<String> = Vec::new();
        for row in &rows {
            if !species.contains(&row.species) {
                species.push(row.species.clone());
            }
        }
        Ok(PenguinDataset { rows, species })
    }

    pub fn rows(&self) -> &[Penguin] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&Penguin> {
        self.rows.get(idx)
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn penguin(species: &str, bill: Option<f64>, mass: Option<f64>) -> Penguin {
        Penguin {
            species: species.to_string(),
            island: "Biscoe".to_string(),
            bill_length_mm: bill,
            bill_depth_mm: Some(17.0),
            flipper_length_mm: Some(200.0),
            body_mass_g: mass,
            sex: None,
            year: Some(2007),
        }
    }

    #[test]
    fn species_are_listed_in_order_of_first_appearance() {
        let ds = PenguinDataset::from_rows(vec![
            penguin("Adelie", None, None),
            penguin("Gentoo", None, None),
            penguin("Adelie", None, None),
            penguin("Chinstrap", None, None),
        ])
        .unwrap();
        assert_eq!(ds.species(), ["Adelie", "Gentoo", "Chinstrap"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert_eq!(PenguinDataset::from_rows(Vec::new()), Err(DataError::EmptyDataset));
    }

    #[test]
    fn measurement_displays_as_column_name() {
        let names: Vec<String> = Measurement::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["bill_length_mm", "bill_depth_mm", "flipper_length_mm", "body_mass_g"]);
    }

    #[test]
    fn measurement_reads_matching_field() {
        let p = penguin("Gentoo", Some(46.1), Some(4500.0));
        assert_eq!(p.measurement(Measurement::BillLength), Some(46.1));
        assert_eq!(p.measurement(Measurement::BodyMass), Some(4500.0));
        assert_eq!(p.measurement(Measurement::FlipperLength), Some(200.0));
    }
}
