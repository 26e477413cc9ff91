use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::model::{Measurement, PenguinDataset};

/// Convert the dataset into a single Arrow record batch, one column per field.
pub fn to_record_batch(dataset: &PenguinDataset) -> Result<RecordBatch> {
    let rows = dataset.rows();

    let species = StringArray::from(rows.iter().map(|p| p.species.as_str()).collect::<Vec<_>>());
    let island = StringArray::from(rows.iter().map(|p| p.island.as_str()).collect::<Vec<_>>());
    let sex = StringArray::from(rows.iter().map(|p| p.sex.as_deref()).collect::<Vec<_>>());
    let year = Int64Array::from(rows.iter().map(|p| p.year).collect::<Vec<_>>());

    let mut fields = vec![
        Field::new("species", DataType::Utf8, false),
        Field::new("island", DataType::Utf8, false),
    ];
    let mut columns: Vec<ArrayRef> = vec![Arc::new(species), Arc::new(island)];

    for m in Measurement::ALL {
        fields.push(Field::new(m.column(), DataType::Float64, true));
        let values = Float64Array::from(rows.iter().map(|p| p.measurement(m)).collect::<Vec<_>>());
        columns.push(Arc::new(values));
    }

    fields.push(Field::new("sex", DataType::Utf8, true));
    fields.push(Field::new("year", DataType::Int64, true));
    columns.push(Arc::new(sex));
    columns.push(Arc::new(year));

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).context("building record batch")
}

/// Write the dataset to `path` as Parquet.
pub fn write_parquet(dataset: &PenguinDataset, path: &Path) -> Result<()> {
    let batch = to_record_batch(dataset)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load_embedded, load_file};

    #[test]
    fn parquet_file_loads_back_identically() {
        let ds = load_embedded().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("penguins.parquet");

        write_parquet(&ds, &path).unwrap();
        assert_eq!(load_file(&path).unwrap(), ds);
    }

    #[test]
    fn batch_has_one_column_per_field() {
        let ds = load_embedded().unwrap();
        let batch = to_record_batch(&ds).unwrap();
        assert_eq!(batch.num_columns(), 8);
        assert_eq!(batch.num_rows(), ds.len());
    }
}
