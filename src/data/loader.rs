use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, Float64Array, Int64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{Penguin, PenguinDataset};
use crate::error::DataError;

/// The Palmer Penguins table shipped inside the binary.
pub const EMBEDDED_CSV: &str = include_str!("../../data/penguins.csv");

/// Text used for missing values in the source files.
const NA: &str = "NA";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the dataset compiled into the binary.
pub fn load_embedded() -> Result<PenguinDataset> {
    parse_csv(EMBEDDED_CSV.as_bytes()).context("parsing embedded penguins.csv")
}

/// Load a penguin dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, `NA` or empty for missing values
/// * `.json`    – `[{ "species": "Adelie", "bill_length_mm": 39.1, ... }, ...]`
/// * `.parquet` – flat columns; numeric columns of any int/float type
pub fn load_file(path: &Path) -> Result<PenguinDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            parse_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)
        }
        "parquet" | "pq" => load_parquet(path),
        other => bail!(DataError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Raw CSV record. Everything but `species` may be absent from the header.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    species: String,
    #[serde(default)]
    island: Option<String>,
    #[serde(default)]
    bill_length_mm: Option<String>,
    #[serde(default)]
    bill_depth_mm: Option<String>,
    #[serde(default)]
    flipper_length_mm: Option<String>,
    #[serde(default)]
    body_mass_g: Option<String>,
    #[serde(default)]
    sex: Option<String>,
    #[serde(default)]
    year: Option<String>,
}

pub fn parse_csv<R: Read>(reader: R) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers().context("reading CSV headers")?;
    if !headers.iter().any(|h| h == "species") {
        bail!(DataError::MissingColumn("species".to_string()));
    }

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<CsvRecord>().enumerate() {
        let row = i + 1;
        let rec = result.with_context(|| format!("CSV row {row}"))?;
        rows.push(Penguin {
            species: rec.species,
            island: rec.island.unwrap_or_default(),
            bill_length_mm: parse_measurement(rec.bill_length_mm, row, "bill_length_mm")?,
            bill_depth_mm: parse_measurement(rec.bill_depth_mm, row, "bill_depth_mm")?,
            flipper_length_mm: parse_measurement(rec.flipper_length_mm, row, "flipper_length_mm")?,
            body_mass_g: parse_measurement(rec.body_mass_g, row, "body_mass_g")?,
            sex: text_or_missing(rec.sex),
            year: parse_optional(rec.year, row, "year")?,
        });
    }

    Ok(PenguinDataset::from_rows(rows)?)
}

fn text_or_missing(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty() && v != NA)
}

fn parse_optional<T: std::str::FromStr>(
    raw: Option<String>,
    row: usize,
    column: &str,
) -> Result<Option<T>, DataError> {
    let Some(text) = text_or_missing(raw) else {
        return Ok(None);
    };
    text.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| DataError::InvalidValue {
            row,
            column: column.to_string(),
            value: text.clone(),
        })
}

/// Like [`parse_optional`], but `NaN` and infinities count as missing.
fn parse_measurement(raw: Option<String>, row: usize, column: &str) -> Result<Option<f64>, DataError> {
    Ok(parse_optional::<f64>(raw, row, column)?.filter(|v| v.is_finite()))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "species": "Adelie", "island": "Torgersen", "bill_length_mm": 39.1,
///     "bill_depth_mm": 18.7, "flipper_length_mm": 181, "body_mass_g": 3750,
///     "sex": "male", "year": 2007 },
///   ...
/// ]
/// ```
pub fn parse_json(text: &str) -> Result<PenguinDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let row = i + 1;
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {row} is not a JSON object"))?;

        let species = match obj.get("species") {
            Some(JsonValue::String(s)) => s.clone(),
            Some(other) => bail!(DataError::InvalidValue {
                row,
                column: "species".to_string(),
                value: other.to_string(),
            }),
            None => bail!(DataError::MissingColumn("species".to_string())),
        };

        rows.push(Penguin {
            species,
            island: json_text(obj.get("island")).unwrap_or_default(),
            bill_length_mm: json_f64(obj.get("bill_length_mm"), row, "bill_length_mm")?,
            bill_depth_mm: json_f64(obj.get("bill_depth_mm"), row, "bill_depth_mm")?,
            flipper_length_mm: json_f64(obj.get("flipper_length_mm"), row, "flipper_length_mm")?,
            body_mass_g: json_f64(obj.get("body_mass_g"), row, "body_mass_g")?,
            sex: json_text(obj.get("sex")),
            year: json_i64(obj.get("year"), row, "year")?,
        });
    }

    Ok(PenguinDataset::from_rows(rows)?)
}

fn json_text(val: Option<&JsonValue>) -> Option<String> {
    match val? {
        JsonValue::String(s) => text_or_missing(Some(s.clone())),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

fn json_f64(val: Option<&JsonValue>, row: usize, column: &str) -> Result<Option<f64>, DataError> {
    match val {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => Ok(n.as_f64()),
        Some(JsonValue::String(s)) => parse_measurement(Some(s.clone()), row, column),
        Some(other) => Err(DataError::InvalidValue {
            row,
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}

fn json_i64(val: Option<&JsonValue>, row: usize, column: &str) -> Result<Option<i64>, DataError> {
    let invalid = |v: &JsonValue| DataError::InvalidValue {
        row,
        column: column.to_string(),
        value: v.to_string(),
    };
    match val {
        None | Some(JsonValue::Null) => Ok(None),
        Some(v @ JsonValue::Number(n)) => n.as_i64().map(Some).ok_or_else(|| invalid(v)),
        Some(JsonValue::String(s)) => parse_optional(Some(s.clone()), row, column),
        Some(other) => Err(invalid(other)),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per field.
///
/// Numeric columns are cast to Float64 (Int64 for `year`), so files written
/// by Pandas with integer flipper lengths load the same as float ones.
pub fn load_parquet(path: &Path) -> Result<PenguinDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let offset = rows.len();

        let species = string_column(&batch, "species")?
            .ok_or_else(|| DataError::MissingColumn("species".to_string()))?;
        let island = string_column(&batch, "island")?;
        let bill_length = float_column(&batch, "bill_length_mm")?;
        let bill_depth = float_column(&batch, "bill_depth_mm")?;
        let flipper_length = float_column(&batch, "flipper_length_mm")?;
        let body_mass = float_column(&batch, "body_mass_g")?;
        let sex = string_column(&batch, "sex")?;
        let year = int_column(&batch, "year")?;

        for row in 0..batch.num_rows() {
            if species.is_null(row) {
                bail!(DataError::InvalidValue {
                    row: offset + row + 1,
                    column: "species".to_string(),
                    value: "null".to_string(),
                });
            }
            rows.push(Penguin {
                species: species.value(row).to_string(),
                island: string_at(island.as_ref(), row).unwrap_or_default(),
                bill_length_mm: float_at(bill_length.as_ref(), row),
                bill_depth_mm: float_at(bill_depth.as_ref(), row),
                flipper_length_mm: float_at(flipper_length.as_ref(), row),
                body_mass_g: float_at(body_mass.as_ref(), row),
                sex: string_at(sex.as_ref(), row).filter(|s| s != NA),
                year: year
                    .as_ref()
                    .and_then(|arr| arr.is_valid(row).then(|| arr.value(row))),
            });
        }
    }

    Ok(PenguinDataset::from_rows(rows)?)
}

// -- Parquet / Arrow helpers --

fn string_column(batch: &RecordBatch, name: &str) -> Result<Option<StringArray>> {
    let Ok(idx) = batch.schema().index_of(name) else {
        return Ok(None);
    };
    let array = cast(batch.column(idx), &DataType::Utf8)
        .with_context(|| format!("column '{name}' is not text"))?;
    Ok(Some(array.as_string::<i32>().clone()))
}

fn float_column(batch: &RecordBatch, name: &str) -> Result<Option<Float64Array>> {
    let Ok(idx) = batch.schema().index_of(name) else {
        return Ok(None);
    };
    let array = cast(batch.column(idx), &DataType::Float64)
        .with_context(|| format!("column '{name}' is not numeric"))?;
    Ok(Some(array.as_primitive::<Float64Type>().clone()))
}

fn int_column(batch: &RecordBatch, name: &str) -> Result<Option<Int64Array>> {
    let Ok(idx) = batch.schema().index_of(name) else {
        return Ok(None);
    };
    let array = cast(batch.column(idx), &DataType::Int64)
        .with_context(|| format!("column '{name}' is not an integer"))?;
    Ok(Some(array.as_primitive::<Int64Type>().clone()))
}

fn string_at(col: Option<&StringArray>, row: usize) -> Option<String> {
    col.filter(|arr| arr.is_valid(row))
        .map(|arr| arr.value(row).to_string())
}

fn float_at(col: Option<&Float64Array>, row: usize) -> Option<f64> {
    col.filter(|arr| arr.is_valid(row))
        .map(|arr| arr.value(row))
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_dataset_has_three_species() {
        let ds = load_embedded().unwrap();
        assert_eq!(ds.species(), ["Adelie", "Gentoo", "Chinstrap"]);
        assert!(!ds.is_empty());
    }

    #[test]
    fn csv_na_becomes_missing() {
        let text = "species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year\n\
                    Adelie,Torgersen,NA,NA,NA,NA,NA,2007\n\
                    Adelie,Torgersen,39.1,18.7,181,3750,male,2007\n";
        let ds = parse_csv(text.as_bytes()).unwrap();
        let first = &ds.rows()[0];
        assert_eq!(first.bill_length_mm, None);
        assert_eq!(first.sex, None);
        assert_eq!(first.year, Some(2007));
        assert_eq!(ds.rows()[1].flipper_length_mm, Some(181.0));
    }

    #[test]
    fn csv_without_species_is_rejected() {
        let err = parse_csv("island,year\nDream,2008\n".as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::MissingColumn("species".to_string()))
        );
    }

    #[test]
    fn csv_optional_columns_may_be_absent() {
        let ds = parse_csv("species,body_mass_g\nGentoo,5700\n".as_bytes()).unwrap();
        assert_eq!(ds.rows()[0].body_mass_g, Some(5700.0));
        assert_eq!(ds.rows()[0].island, "");
    }

    #[test]
    fn csv_bad_number_reports_row_and_column() {
        let err = parse_csv("species,body_mass_g\nGentoo,heavy\n".as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::InvalidValue {
                row: 1,
                column: "body_mass_g".to_string(),
                value: "heavy".to_string(),
            })
        );
    }

    #[test]
    fn json_records_are_parsed() {
        let text = r#"[
            {"species": "Chinstrap", "island": "Dream", "bill_length_mm": 46.5,
             "body_mass_g": 3500, "sex": null, "year": 2007},
            {"species": "Gentoo", "bill_length_mm": "NA"}
        ]"#;
        let ds = parse_json(text).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[0].body_mass_g, Some(3500.0));
        assert_eq!(ds.rows()[0].sex, None);
        assert_eq!(ds.rows()[1].bill_length_mm, None);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("penguins.xlsx")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::UnsupportedExtension("xlsx".to_string()))
        );
    }

    #[test]
    fn csv_file_loads_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(EMBEDDED_CSV.as_bytes()).unwrap();
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds, load_embedded().unwrap());
    }

    #[test]
    fn non_finite_measurements_count_as_missing() {
        let text = "species,body_mass_g,bill_length_mm\nGentoo,NaN,inf\nGentoo,4000,46.1\nGentoo,5000,-inf\n";
        let ds = parse_csv(text.as_bytes()).unwrap();
        assert_eq!(ds.rows()[0].body_mass_g, None);
        assert_eq!(ds.rows()[0].bill_length_mm, None);
        assert_eq!(ds.rows()[2].bill_length_mm, None);

        let hist = crate::data::histogram::species_histogram(
            ds.rows(),
            ds.species(),
            crate::data::model::Measurement::BodyMass,
            2,
        );
        assert_eq!(hist.series[0].counts, vec![1, 1]);
        assert_eq!(hist.total(), 2);

        let json = parse_json(r#"[{"species": "Adelie", "body_mass_g": "NaN"}]"#).unwrap();
        assert_eq!(json.rows()[0].body_mass_g, None);
    }

    #[test]
    fn fractional_year_is_rejected_in_csv_and_json() {
        let err = parse_csv("species,year\nGentoo,2007.5\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::InvalidValue { column, .. }) if column == "year"
        ));

        let err = parse_json(r#"[{"species": "Gentoo", "year": 2007.5}]"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::InvalidValue {
                row: 1,
                column: "year".to_string(),
                value: "2007.5".to_string(),
            })
        );

        let ds = parse_json(r#"[{"species": "Gentoo", "year": "2008"}]"#).unwrap();
        assert_eq!(ds.rows()[0].year, Some(2008));
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let err = parse_csv("species,body_mass_g\nGentoo,4000\nGentoo,??\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::InvalidValue { row: 2, .. })
        ));
    }

    #[test]
    fn embedded_dataset_species_counts() {
        let ds = load_embedded().unwrap();
        let count = |name: &str| ds.rows().iter().filter(|p| p.species == name).count();
        assert_eq!(ds.len(), 26);
        assert_eq!((count("Adelie"), count("Gentoo"), count("Chinstrap")), (10, 8, 8));
        assert!(ds.rows().iter().any(|p| p.body_mass_g.is_none()));
    }
}
